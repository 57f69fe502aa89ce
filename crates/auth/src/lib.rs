mod error;
mod jwt;
mod password;

pub mod service;

pub use error::{AuthError, Result};
pub use jwt::{issue_token, verify_token, Claims};
pub use password::Hasher;
pub use service::AuthService;
