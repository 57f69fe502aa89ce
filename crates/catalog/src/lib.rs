mod error;

pub mod service;

pub use error::{ProductError, Result};
pub use service::ProductService;
