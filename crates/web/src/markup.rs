//! Product table contents.
//!
//! The table renders from [`ProductRow`]s: the formatted cell text plus the
//! typed record the row's Edit and Delete buttons act on.

use stockroom_products::{Product, ProductId, format_discount, format_price};

/// Shown instead of the table when the collection is empty.
pub const EMPTY_MESSAGE: &str = "No products found. Add your first product above.";

/// One table row: display cells and the record they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub product: Product,
    pub mrp: String,
    pub selling_price: String,
    pub discount: String,
}

impl ProductRow {
    pub fn from_product(product: &Product) -> Self {
        Self {
            mrp: format_price(product.mrp),
            selling_price: format_price(product.selling_price),
            discount: format_discount(product.discount_percent()),
            product: product.clone(),
        }
    }

    /// Id the row's actions address; `None` means the row gets no actions.
    pub fn id(&self) -> Option<&ProductId> {
        self.product.id.as_ref()
    }
}

/// What the product table area currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TableContent {
    /// Nothing loaded yet; neither table nor placeholder is visible.
    #[default]
    Loading,
    /// The collection was empty: placeholder visible, table hidden.
    Placeholder,
    /// One row per product, in backend order.
    Rows(Vec<ProductRow>),
}

impl TableContent {
    pub fn from_products(products: &[Product]) -> Self {
        if products.is_empty() {
            return TableContent::Placeholder;
        }
        TableContent::Rows(products.iter().map(ProductRow::from_product).collect())
    }

    pub fn shows_table(&self) -> bool {
        matches!(self, TableContent::Rows(_))
    }

    pub fn shows_placeholder(&self) -> bool {
        matches!(self, TableContent::Placeholder)
    }

    /// Rows to draw; empty unless the table is shown.
    pub fn rows(&self) -> &[ProductRow] {
        match self {
            TableContent::Rows(rows) => rows,
            _ => &[],
        }
    }
}
