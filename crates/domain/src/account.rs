use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use war_torn_faith_utils::{salt_and_hash, salt_and_hash_with_salt, SALT_LEN};

/// An `Account` is created by a player of War Torn Faith and is the
/// identity that characters and fights hang off of.
///
/// Accounts are retrievable by three uniquely identifying fields: id,
/// email and username. Uniqueness is enforced by how the repository
/// indexes accounts, not by the entity itself, so duplicate or empty
/// field values are accepted here.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: ID,
    pub email: String,
    pub username: String,
    password: PasswordHash,
}

/// A salted password hash. The plaintext is never kept: the stored
/// representation is always `salt + sha256(salt + plaintext)` where the
/// salt is the first 64 hex characters.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Salt and hash a plaintext password with a fresh random salt
    pub fn new(plaintext: &str) -> Self {
        Self(salt_and_hash(plaintext))
    }

    /// Wrap a value that is already salted and hashed, e.g. one loaded
    /// back from storage. The value is kept verbatim.
    pub fn from_hashed(hashed: String) -> Self {
        Self(hashed)
    }

    /// Check a plaintext password by re-deriving the hash with the
    /// stored salt. An empty or truncated stored value never matches.
    pub fn verify(&self, plaintext: &str) -> bool {
        match self.0.get(..SALT_LEN) {
            Some(salt) => salt_and_hash_with_salt(plaintext, salt) == self.0,
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PasswordHash {
    fn default() -> Self {
        Self(String::new())
    }
}

impl Account {
    pub fn new() -> Self {
        Self {
            id: Default::default(),
            email: String::new(),
            username: String::new(),
            password: Default::default(),
        }
    }

    /// Rehydrate an account from previously stored field values. The
    /// password is expected to be salted and hashed already.
    pub fn restore(id: ID, email: String, password: PasswordHash, username: String) -> Self {
        Self {
            id,
            email,
            username,
            password,
        }
    }

    pub fn set_password(&mut self, plaintext: &str) {
        self.password = PasswordHash::new(plaintext);
    }

    pub fn password(&self) -> &PasswordHash {
        &self.password
    }
}

impl Entity<ID> for Account {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}
