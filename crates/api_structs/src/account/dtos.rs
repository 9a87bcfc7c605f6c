use serde::{Deserialize, Serialize};
use war_torn_faith_domain::{Account, Entity, ID};

/// The public view of an `Account`. The stored password hash is
/// deliberately not part of it.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDTO {
    pub id: ID,
    pub email: String,
    pub username: String,
}

impl AccountDTO {
    pub fn new(account: &Account) -> Self {
        Self {
            id: account.id(),
            email: account.email.clone(),
            username: account.username.clone(),
        }
    }
}
