use super::IAccountRepo;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use war_torn_faith_domain::{Account, Entity, ID};

#[derive(Default)]
struct AccountIndexes {
    by_id: HashMap<ID, Account>,
    by_email: HashMap<String, ID>,
    by_username: HashMap<String, ID>,
}

/// Process wide account storage. All three indexes live behind a single
/// lock so a save is applied to them as one unit and a lookup can never
/// observe it halfway done.
pub struct AccountStore {
    indexes: Mutex<AccountIndexes>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            indexes: Mutex::new(Default::default()),
        }
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Account repository backed by an `AccountStore`. The store handle is
/// injected, so repositories given the same handle share their accounts
/// and repositories given fresh handles are isolated from each other.
pub struct InMemoryAccountRepo {
    store: Arc<AccountStore>,
}

impl InMemoryAccountRepo {
    pub fn new(store: Arc<AccountStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IAccountRepo for InMemoryAccountRepo {
    async fn save(&self, account: &Account) -> anyhow::Result<()> {
        let id = account.id();
        let mut indexes = self.store.indexes.lock().unwrap();

        // Drop the keys a previous version of this account was indexed
        // under, so a changed email or username does not leave a stale
        // mapping behind. A key that a later save of another account has
        // taken over belongs to that account now and is left alone.
        if let Some(prev) = indexes.by_id.get(&id) {
            let prev_email = prev.email.clone();
            let prev_username = prev.username.clone();
            if prev_email != account.email && indexes.by_email.get(&prev_email) == Some(&id) {
                indexes.by_email.remove(&prev_email);
            }
            if prev_username != account.username
                && indexes.by_username.get(&prev_username) == Some(&id)
            {
                indexes.by_username.remove(&prev_username);
            }
        }

        indexes.by_email.insert(account.email.clone(), id.clone());
        indexes.by_username.insert(account.username.clone(), id.clone());
        indexes.by_id.insert(id, account.clone());
        Ok(())
    }

    async fn find(&self, account_id: &ID) -> Option<Account> {
        let indexes = self.store.indexes.lock().unwrap();
        indexes.by_id.get(account_id).cloned()
    }

    async fn find_by_email(&self, email: &str) -> Option<Account> {
        let indexes = self.store.indexes.lock().unwrap();
        indexes
            .by_email
            .get(email)
            .and_then(|id| indexes.by_id.get(id))
            .cloned()
    }

    async fn find_by_username(&self, username: &str) -> Option<Account> {
        let indexes = self.store.indexes.lock().unwrap();
        indexes
            .by_username
            .get(username)
            .and_then(|id| indexes.by_id.get(id))
            .cloned()
    }

    async fn find_by_credentials(&self, email: &str, password: &str) -> Option<Account> {
        self.find_by_email(email)
            .await
            .filter(|account| account.password().verify(password))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn it_shares_accounts_between_repos_with_the_same_store() {
        let store = Arc::new(AccountStore::new());
        let writer = InMemoryAccountRepo::new(store.clone());
        let reader = InMemoryAccountRepo::new(store);

        let mut account = Account::new();
        account.username = "foobar".into();
        writer.save(&account).await.expect("To save account");

        assert_eq!(reader.find_by_username("foobar").await, Some(account));
    }

    #[tokio::test]
    async fn it_isolates_repos_with_different_stores() {
        let first = InMemoryAccountRepo::new(Arc::new(AccountStore::new()));
        let second = InMemoryAccountRepo::new(Arc::new(AccountStore::new()));

        let mut account = Account::new();
        account.username = "foobar".into();
        first.save(&account).await.expect("To save account");

        assert_eq!(second.find_by_username("foobar").await, None);
    }
}
