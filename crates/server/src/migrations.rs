use sqlx::PgPool;

/// Idempotent schema setup, run once at startup. Ids are store-assigned;
/// the unique index on `username` is what makes concurrent registrations
/// resolve to exactly one success.
const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id            BIGSERIAL PRIMARY KEY,
        username      VARCHAR(50) NOT NULL,
        password_hash TEXT NOT NULL
    )",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_username ON users (username)",
    "CREATE TABLE IF NOT EXISTS products (
        id          BIGSERIAL PRIMARY KEY,
        name        VARCHAR(100) NOT NULL,
        description VARCHAR(500),
        price       NUMERIC(12, 2) NOT NULL
    )",
];

pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::debug!("schema is up to date");
    Ok(())
}
