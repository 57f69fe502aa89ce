pub mod auth_handlers;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod product_handlers;
pub mod router;
pub mod state;
pub mod validate;

pub use error::ApiError;
pub use state::AppState;
