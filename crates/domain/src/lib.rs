mod account;
mod character;
mod shared;

pub use account::{Account, PasswordHash};
pub use character::Character;
pub use shared::entity::{Entity, ID};
