mod account;
mod character;
mod fight;
mod status;

pub mod dtos {
    pub use crate::account::dtos::*;
}

pub use crate::account::api::*;
pub use crate::character::api::*;
pub use crate::fight::api::*;
pub use crate::status::api::*;
