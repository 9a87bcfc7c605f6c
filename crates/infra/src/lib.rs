mod config;
mod repos;

pub use config::Config;
pub use repos::{AccountStore, IAccountRepo, InMemoryAccountRepo, Repos};

/// Shared handles to everything the api needs to serve a request.
/// Cloning is cheap and every clone points at the same repositories.
#[derive(Clone)]
pub struct WarTornContext {
    pub repos: Repos,
    pub config: Config,
}

impl WarTornContext {
    fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment. All
/// storage is process memory, so there is nothing to connect to and the
/// state is gone when the process exits.
pub fn setup_context() -> WarTornContext {
    WarTornContext::create_inmemory()
}
