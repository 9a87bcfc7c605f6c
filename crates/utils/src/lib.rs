use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Number of hex characters in a sha256 digest. A salted hash always
/// starts with a salt of exactly this length, which is how the salt is
/// recovered from a stored value during verification.
pub const SALT_LEN: usize = 64;

/// Salt and hash a value with a freshly generated random salt.
///
/// The salt is itself the sha256 hex digest of random uuid bytes, so the
/// returned string is always a 64 char salt followed by the 64 char
/// digest of salt + value. Two calls with the same value produce
/// different results.
pub fn salt_and_hash(value: &str) -> String {
    let salt = hex::encode(Sha256::digest(Uuid::new_v4().as_bytes()));
    salt_and_hash_with_salt(value, &salt)
}

/// Salt and hash a value with a known salt. Deterministic, used to check
/// a plaintext against a previously stored salted hash.
pub fn salt_and_hash_with_salt(value: &str, salt: &str) -> String {
    let digest = Sha256::digest(format!("{}{}", salt, value).as_bytes());
    format!("{}{}", salt, hex::encode(digest))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_salts_with_fresh_randomness() {
        let first = salt_and_hash("foobar123");
        let second = salt_and_hash("foobar123");
        assert_ne!(first, second);
        assert_eq!(first.len(), 2 * SALT_LEN);
        assert_eq!(second.len(), 2 * SALT_LEN);
    }

    #[test]
    fn it_reproduces_a_hash_from_its_own_salt() {
        let hashed = salt_and_hash("foobar123");
        let salt = &hashed[..SALT_LEN];
        assert_eq!(salt_and_hash_with_salt("foobar123", salt), hashed);
        assert_ne!(salt_and_hash_with_salt("wrong", salt), hashed);
    }

    #[test]
    fn it_is_deterministic_for_a_given_salt() {
        let salt = "a".repeat(SALT_LEN);
        assert_eq!(
            salt_and_hash_with_salt("foobar123", &salt),
            salt_and_hash_with_salt("foobar123", &salt)
        );
    }
}
