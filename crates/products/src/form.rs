//! Product form contents and submission validation.

use thiserror::Error;

use crate::product::{Product, ProductDraft};

/// Raw contents of the product form's inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub product_name: String,
    pub mrp: String,
    pub selling_price: String,
    pub quantity: String,
}

/// First rule a form submission violated.
///
/// Variants are declared in the order the rules are checked. The display text
/// is the message shown to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Product name is required.")]
    NameRequired,

    #[error("MRP must be greater than 0.")]
    MrpNotPositive,

    #[error("Selling price must be greater than 0.")]
    SellingPriceNotPositive,

    #[error("Selling price cannot be greater than MRP.")]
    SellingPriceAboveMrp,

    #[error("Quantity must be a whole number.")]
    QuantityNotANumber,

    #[error("Quantity cannot be negative.")]
    NegativeQuantity,
}

impl ProductForm {
    /// Seed the form from an existing record (edit entry point).
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            mrp: product.mrp.to_string(),
            selling_price: product.selling_price.to_string(),
            quantity: product.quantity.to_string(),
        }
    }

    /// Validate the form and build the request body.
    ///
    /// Rules run in a fixed order and the first failure wins:
    /// name, mrp > 0, selling price > 0, selling price <= mrp, quantity >= 0.
    /// A price that does not parse fails its own rule. Quantity keeps its
    /// leading integer (`"1.5"` is 1) and reports a missing number separately
    /// from a negative one.
    pub fn validate(&self) -> Result<ProductDraft, ValidationError> {
        let product_name = self.product_name.trim();
        if product_name.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        let mrp = parse_decimal(&self.mrp)
            .filter(|v| *v > 0.0)
            .ok_or(ValidationError::MrpNotPositive)?;

        let selling_price = parse_decimal(&self.selling_price)
            .filter(|v| *v > 0.0)
            .ok_or(ValidationError::SellingPriceNotPositive)?;

        if selling_price > mrp {
            return Err(ValidationError::SellingPriceAboveMrp);
        }

        let quantity = parse_leading_integer(&self.quantity).ok_or(ValidationError::QuantityNotANumber)?;
        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity);
        }

        Ok(ProductDraft {
            product_name: product_name.to_string(),
            mrp,
            selling_price,
            quantity,
        })
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Optional sign followed by at least one digit; anything after the digits is
/// ignored.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['-', '+']));
    let digits = raw[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    raw[..sign_len + digits].parse().ok()
}
