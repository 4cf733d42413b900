//! Products domain module.
//!
//! This crate contains the rules for product records as the inventory client
//! sees them, implemented purely as deterministic logic (no IO, no HTTP, no DOM).

pub mod display;
pub mod form;
pub mod id;
pub mod product;

pub use display::{format_discount, format_price, CURRENCY_SYMBOL};
pub use form::{ProductForm, ValidationError};
pub use id::{ProductId, ProductIdError};
pub use product::{calculate_discount, Product, ProductDraft};
