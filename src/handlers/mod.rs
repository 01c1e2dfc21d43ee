//! HTTP handlers for the product resource and operational endpoints.

pub mod health;
pub mod product;
pub use product::*;
