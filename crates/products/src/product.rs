use serde::{Deserialize, Serialize};

use crate::id::ProductId;

/// A product record as served by the backend.
///
/// The backend owns persistence; the client only reads these records to render
/// them and to seed the edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub product_name: String,
    pub mrp: f64,
    pub selling_price: f64,
    pub quantity: i64,
}

impl Product {
    /// Discount from MRP to selling price, in percent.
    pub fn discount_percent(&self) -> f64 {
        calculate_discount(self.mrp, self.selling_price)
    }
}

/// Request body for create (`POST`) and full replace (`PUT`).
///
/// Only produced by [`crate::ProductForm::validate`], so every draft satisfies
/// `0 < selling_price <= mrp`, `quantity >= 0` and a non-blank name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_name: String,
    pub mrp: f64,
    pub selling_price: f64,
    pub quantity: i64,
}

impl ProductDraft {
    pub fn into_product(self, id: Option<ProductId>) -> Product {
        Product {
            id,
            product_name: self.product_name,
            mrp: self.mrp,
            selling_price: self.selling_price,
            quantity: self.quantity,
        }
    }
}

/// Percentage reduction from `mrp` to `selling_price`.
///
/// Returns 0 when `mrp` is not positive. Display only, never persisted.
pub fn calculate_discount(mrp: f64, selling_price: f64) -> f64 {
    if mrp <= 0.0 {
        return 0.0;
    }
    (mrp - selling_price) / mrp * 100.0
}
