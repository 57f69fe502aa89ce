use catalog_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username already exists")]
    DuplicateUsername,

    /// Single variant for both unknown-user and wrong-password so responses
    /// never reveal which one happened.
    #[error("Invalid username or password")]
    BadCredentials,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token creation failed: {0}")]
    TokenCreation(String),

    #[error("Malformed token")]
    TokenMalformed,

    #[error("Invalid token signature")]
    TokenSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation => Self::DuplicateUsername,
            other => Self::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
