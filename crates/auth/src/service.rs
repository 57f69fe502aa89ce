use catalog_store::{PgPool, User, UserRepository};

use crate::error::{AuthError, Result};
use crate::jwt::{issue_token, verify_token};
use crate::password::Hasher;

/// Registration and login over the user store.
pub struct AuthService {
    pool: PgPool,
    hasher: Hasher,
    jwt_secret: String,
    token_ttl_seconds: i64,
    /// Verified against when the username does not exist, so the missing-user
    /// path costs the same as a wrong password.
    dummy_hash: String,
}

impl AuthService {
    pub fn new(
        pool: PgPool,
        hasher: Hasher,
        jwt_secret: String,
        token_ttl_seconds: i64,
    ) -> Result<Self> {
        let dummy_hash = hasher.hash("dummy-password-for-timing")?;

        Ok(Self {
            pool,
            hasher,
            jwt_secret,
            token_ttl_seconds,
            dummy_hash,
        })
    }

    /// Register a new user. The lookup and insert run in one transaction;
    /// the unique index on `username` decides races, so two concurrent
    /// registrations yield one success and one `DuplicateUsername`.
    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(catalog_store::StoreError::from)?;

        if UserRepository::find_by_username(&mut tx, username)
            .await?
            .is_some()
        {
            tracing::warn!(username, "registration failed: username already exists");
            return Err(AuthError::DuplicateUsername);
        }

        let password_hash = self.hasher.hash(password)?;
        let user = UserRepository::insert(&mut tx, username, &password_hash).await?;

        tx.commit()
            .await
            .map_err(catalog_store::StoreError::from)?;

        tracing::debug!(username, id = user.id, "user registered");
        Ok(user)
    }

    /// Check credentials and issue a token for the username.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User)> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(catalog_store::StoreError::from)?;

        let Some(user) = UserRepository::find_by_username(&mut conn, username).await? else {
            let _ = self.hasher.verify(password, &self.dummy_hash);
            return Err(AuthError::BadCredentials);
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AuthError::BadCredentials);
        }

        let token = issue_token(&user.username, self.jwt_secret.as_bytes(), self.token_ttl_seconds)?;

        tracing::debug!(username, "login succeeded");
        Ok((token, user))
    }

    /// Verify a bearer token and return the subject it authenticates.
    pub fn authenticate(&self, token: &str) -> Result<String> {
        let claims = verify_token(token, self.jwt_secret.as_bytes())?;
        Ok(claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_service() -> AuthService {
        let url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must point at a scratch Postgres database");
        let pool = PgPool::connect(&url).await.unwrap();

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                username VARCHAR(50) NOT NULL,
                password_hash TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_users_username ON users (username)")
            .execute(&pool)
            .await
            .unwrap();

        AuthService::new(
            pool,
            Hasher::new(1).unwrap(),
            "test-secret-test-secret-test-sec".to_string(),
            3600,
        )
        .unwrap()
    }

    #[tokio::test]
    #[ignore] // Needs a database; set TEST_DATABASE_URL and run with --ignored
    async fn test_register_and_login() {
        let service = test_service().await;
        let username = format!("alice_{}", std::process::id());

        let user = service.register(&username, "pw12345").await.unwrap();
        assert_eq!(user.username, username);
        assert!(user.id > 0);

        // Duplicate registration fails without partial mutation.
        let dup = service.register(&username, "pw12345").await;
        assert!(matches!(dup, Err(AuthError::DuplicateUsername)));

        let (token, logged_in) = service.login(&username, "pw12345").await.unwrap();
        assert!(!token.is_empty());
        assert_eq!(logged_in.username, username);

        assert_eq!(service.authenticate(&token).unwrap(), username);

        let wrong = service.login(&username, "wrong").await;
        assert!(matches!(wrong, Err(AuthError::BadCredentials)));

        let missing = service.login("nobody-here", "pw12345").await;
        assert!(matches!(missing, Err(AuthError::BadCredentials)));
    }
}
