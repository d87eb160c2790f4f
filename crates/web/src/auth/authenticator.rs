use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use uuid::Uuid;

use super::SessionStore;

/// Checks the single administrator credential and hands out bearer tokens.
pub struct Authenticator {
    username: String,
    /// PHC string of the admin secret, computed once at startup
    password_hash: String,
    sessions: SessionStore,
}

impl Authenticator {
    pub fn new(username: impl Into<String>, password: &str) -> Result<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow!("failed to hash admin password: {e}"))?
            .to_string();

        Ok(Self {
            username: username.into(),
            password_hash,
            sessions: SessionStore::new(),
        })
    }

    /// Returns a fresh token when both username and password match.
    ///
    /// The password hash is verified even for an unknown username so the two
    /// failure modes cost the same.
    pub fn login(&self, username: &str, password: &str) -> Option<String> {
        let username_ok = self.username == username;
        let password_ok = self.verify_password(password);

        if !(username_ok && password_ok) {
            return None;
        }

        let token = Uuid::new_v4().to_string();
        self.sessions.insert(token.clone());
        Some(token)
    }

    pub fn authorize(&self, token: &str) -> bool {
        self.sessions.contains(token)
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    fn verify_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::error!("Stored admin hash is unreadable: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new("admin", "s3cret-pass").unwrap()
    }

    #[test]
    fn test_hash_is_salted() {
        let a = authenticator();
        let b = authenticator();
        assert_ne!(a.password_hash, b.password_hash);
        assert!(!a.password_hash.contains("s3cret-pass"));
    }

    #[test]
    fn test_login_issues_distinct_tokens() {
        let auth = authenticator();

        let first = auth.login("admin", "s3cret-pass").unwrap();
        let second = auth.login("admin", "s3cret-pass").unwrap();

        assert!(!first.is_empty());
        assert_ne!(first, second);
        assert!(auth.authorize(&first));
        assert!(auth.authorize(&second));
        assert_eq!(auth.sessions().len(), 2);
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let auth = authenticator();

        assert_eq!(auth.login("admin", "wrong"), None);
        assert_eq!(auth.login("Admin", "s3cret-pass"), None);
        assert_eq!(auth.login("someone", "s3cret-pass"), None);
        assert!(auth.sessions().is_empty());
    }

    #[test]
    fn test_unknown_token_is_not_authorized() {
        let auth = authenticator();
        assert!(!auth.authorize("not-a-token"));
    }
}
