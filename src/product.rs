//! Product entity and its creation/update payload.

use crate::error::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Primary key of a product row (`SERIAL`).
pub type ProductId = i32;

/// Exclusive upper bound for `|price|`, from `NUMERIC(10,2)`.
const PRICE_LIMIT: i64 = 100_000_000;

/// Decimal places kept by the `price` column.
pub const PRICE_SCALE: u32 = 2;

/// One persisted row of the products table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Request body for `POST /product` and `PUT /product/:id`.
///
/// Any `id` sent by the client is ignored; unknown fields are skipped by serde.
/// An omitted `price` is `None`; an explicit `null` is rejected like any other non-number.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default, deserialize_with = "present_number")]
    pub price: Option<serde_json::Number>,
}

fn present_number<'de, D>(deserializer: D) -> Result<Option<serde_json::Number>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Number::deserialize(deserializer).map(Some)
}

/// A payload that passed validation; what the store writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub price: Decimal,
}

impl NewProduct {
    /// Check name and price and convert the price to its two-decimal form.
    pub fn validate(self) -> Result<ProductInput, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("name", "must not be empty"));
        }
        let price = match self.price {
            Some(n) => parse_price(&n)?,
            None => Decimal::new(0, PRICE_SCALE),
        };
        Ok(ProductInput {
            name: self.name,
            price,
        })
    }
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        ProductInput {
            name: name.into(),
            price,
        }
    }

    /// Attach a store-assigned id.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

fn parse_price(n: &serde_json::Number) -> Result<Decimal, AppError> {
    let text = n.to_string();
    let price = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| AppError::validation("price", format!("{} is not a representable decimal", text)))?
        .normalize();
    if price.scale() > PRICE_SCALE {
        return Err(AppError::validation("price", "must have at most two decimal places"));
    }
    if price.abs() >= Decimal::from(PRICE_LIMIT) {
        return Err(AppError::validation("price", "must be below 100000000"));
    }
    let mut price = price;
    price.rescale(PRICE_SCALE);
    Ok(price)
}
