mod db;
mod error;
mod model;
mod product_repo;
mod user_repo;

pub use db::{connect, ConnectOptions};
pub use error::{Result, StoreError};
pub use model::{NewProduct, Product, User};
pub use product_repo::ProductRepository;
pub use user_repo::UserRepository;

pub use sqlx::PgPool;
