mod inmemory;

pub use inmemory::{AccountStore, InMemoryAccountRepo};
use war_torn_faith_domain::{Account, ID};

#[async_trait::async_trait]
pub trait IAccountRepo: Send + Sync {
    /// Insert or update an account under every key it is indexed by:
    /// id, email and username. Saving an account whose email or username
    /// collides with another saved account silently takes over that key.
    async fn save(&self, account: &Account) -> anyhow::Result<()>;
    async fn find(&self, account_id: &ID) -> Option<Account>;
    async fn find_by_email(&self, email: &str) -> Option<Account>;
    async fn find_by_username(&self, username: &str) -> Option<Account>;
    /// Look up an account by email and check the supplied plaintext
    /// password against the stored salted hash. Unknown email and wrong
    /// password both come back as `None` so callers cannot tell the two
    /// apart.
    async fn find_by_credentials(&self, email: &str, password: &str) -> Option<Account>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use war_torn_faith_domain::{Account, Entity};

    fn foobar_account() -> Account {
        let mut account = Account::new();
        account.email = "foobar@gmail.com".into();
        account.username = "foobar".into();
        account.set_password("foobar123");
        account
    }

    #[tokio::test]
    async fn it_finds_saved_account_by_every_key() {
        let ctx = setup_context();

        let account = foobar_account();
        ctx.repos
            .accounts
            .save(&account)
            .await
            .expect("To save account");

        assert_eq!(ctx.repos.accounts.find(&account.id()).await, Some(account.clone()));
        assert_eq!(
            ctx.repos.accounts.find_by_email("foobar@gmail.com").await,
            Some(account.clone())
        );
        assert_eq!(
            ctx.repos.accounts.find_by_username("foobar").await,
            Some(account)
        );
    }

    #[tokio::test]
    async fn it_returns_none_for_unknown_keys() {
        let ctx = setup_context();

        assert_eq!(ctx.repos.accounts.find(&Default::default()).await, None);
        assert_eq!(ctx.repos.accounts.find_by_email("nobody@gmail.com").await, None);
        assert_eq!(ctx.repos.accounts.find_by_username("nobody").await, None);
    }

    #[tokio::test]
    async fn it_authenticates_by_email_and_password() {
        let ctx = setup_context();

        let account = foobar_account();
        ctx.repos
            .accounts
            .save(&account)
            .await
            .expect("To save account");

        assert_eq!(
            ctx.repos
                .accounts
                .find_by_credentials("foobar@gmail.com", "foobar123")
                .await,
            Some(account)
        );
        // Wrong password and unknown email are indistinguishable
        assert_eq!(
            ctx.repos
                .accounts
                .find_by_credentials("foobar@gmail.com", "wrong")
                .await,
            None
        );
        assert_eq!(
            ctx.repos
                .accounts
                .find_by_credentials("nobody@gmail.com", "foobar123")
                .await,
            None
        );
    }

    #[tokio::test]
    async fn it_updates_every_index_on_resave() {
        let ctx = setup_context();

        let mut account = foobar_account();
        ctx.repos
            .accounts
            .save(&account)
            .await
            .expect("To save account");

        account.email = "new@gmail.com".into();
        account.username = "newname".into();
        ctx.repos
            .accounts
            .save(&account)
            .await
            .expect("To save account");

        assert_eq!(
            ctx.repos.accounts.find_by_email("new@gmail.com").await,
            Some(account.clone())
        );
        assert_eq!(
            ctx.repos.accounts.find_by_username("newname").await,
            Some(account.clone())
        );
        // The old keys no longer resolve
        assert_eq!(ctx.repos.accounts.find_by_email("foobar@gmail.com").await, None);
        assert_eq!(ctx.repos.accounts.find_by_username("foobar").await, None);
        assert_eq!(ctx.repos.accounts.find(&account.id()).await, Some(account));
    }

    #[tokio::test]
    async fn it_keeps_a_taken_over_key_when_the_old_owner_moves() {
        let ctx = setup_context();

        let mut first = Account::new();
        first.email = "shared@gmail.com".into();
        first.username = "first".into();
        ctx.repos.accounts.save(&first).await.expect("To save account");

        let mut second = Account::new();
        second.email = "shared@gmail.com".into();
        second.username = "second".into();
        ctx.repos.accounts.save(&second).await.expect("To save account");

        // The first account moves to a new email. The shared key belongs
        // to the second account now and must survive the re-save.
        first.email = "moved@gmail.com".into();
        ctx.repos.accounts.save(&first).await.expect("To save account");

        assert_eq!(
            ctx.repos.accounts.find_by_email("shared@gmail.com").await,
            Some(second)
        );
        assert_eq!(
            ctx.repos.accounts.find_by_email("moved@gmail.com").await,
            Some(first)
        );
    }

    #[tokio::test]
    async fn it_lets_last_save_win_on_key_collision() {
        let ctx = setup_context();

        let first = foobar_account();
        ctx.repos.accounts.save(&first).await.expect("To save account");

        let mut second = Account::new();
        second.email = "foobar@gmail.com".into();
        second.username = "other".into();
        ctx.repos.accounts.save(&second).await.expect("To save account");

        // The colliding email now resolves to the newer account, while
        // the older account is still reachable by its other keys
        assert_eq!(
            ctx.repos.accounts.find_by_email("foobar@gmail.com").await,
            Some(second)
        );
        assert_eq!(
            ctx.repos.accounts.find_by_username("foobar").await,
            Some(first.clone())
        );
        assert_eq!(ctx.repos.accounts.find(&first.id()).await, Some(first));
    }
}
