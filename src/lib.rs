//! Product API: REST CRUD over a PostgreSQL products table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod product;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use product::{NewProduct, Product, ProductId, ProductInput};
pub use routes::{app, product_routes};
pub use service::{MemoryProductStore, PgProductStore, ProductStore};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_schema};
