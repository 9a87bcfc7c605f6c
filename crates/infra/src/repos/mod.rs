mod account;

pub use account::{AccountStore, IAccountRepo, InMemoryAccountRepo};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub accounts: Arc<dyn IAccountRepo>,
}

impl Repos {
    /// Repositories backed by process memory only. The underlying stores
    /// are created here and injected, so every clone of the returned
    /// value reads and writes the same data.
    pub fn create_inmemory() -> Self {
        let account_store = Arc::new(AccountStore::new());
        Self {
            accounts: Arc::new(InMemoryAccountRepo::new(account_store)),
        }
    }
}
