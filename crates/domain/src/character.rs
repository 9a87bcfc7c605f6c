/// A `Character` is a playable avatar created under an account. Only the
/// bare progression fields exist so far; character operations themselves
/// are not implemented yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub name: Option<String>,
    pub level: u32,
    pub exp: u32,
    pub health: u32,
    pub health_max: u32,
}

impl Character {
    pub fn new() -> Self {
        Self {
            name: None,
            level: 1,
            exp: 0,
            health: 1,
            health_max: 1,
        }
    }

    pub fn with_stats(
        name: Option<String>,
        level: u32,
        exp: u32,
        health: u32,
        health_max: u32,
    ) -> Self {
        Self {
            name,
            level,
            exp,
            health,
            health_max,
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}
