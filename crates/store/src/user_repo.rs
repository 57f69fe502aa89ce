use sqlx::PgConnection;

use crate::error::Result;
use crate::model::User;

/// Narrow repository over the `users` table. Methods take a connection
/// handle so callers decide the transaction boundary.
pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_id(conn: &mut PgConnection, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(user)
    }

    pub async fn find_by_username(conn: &mut PgConnection, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(conn)
        .await?;

        Ok(user)
    }

    /// Insert a new user and return it with the store-assigned id. A
    /// duplicate username surfaces as `StoreError::UniqueViolation`.
    pub async fn insert(
        conn: &mut PgConnection,
        username: &str,
        password_hash: &str,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash) VALUES ($1, $2) \
             RETURNING id, username, password_hash",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(conn)
        .await?;

        Ok(user)
    }
}
