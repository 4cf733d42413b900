use stockroom_products::ProductId;

/// Visual and behavioral state of the product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting creates a new product.
    #[default]
    Create,
    /// Submitting replaces the product with this id.
    Editing { id: ProductId },
}

impl FormMode {
    pub fn editing_id(&self) -> Option<&ProductId> {
        match self {
            FormMode::Create => None,
            FormMode::Editing { id } => Some(id),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Product",
            FormMode::Editing { .. } => "Update Product",
        }
    }

    /// CSS classes for the submit button.
    pub fn submit_class(&self) -> &'static str {
        match self {
            FormMode::Create => "btn btn-primary",
            FormMode::Editing { .. } => "btn btn-primary btn-update",
        }
    }

    pub fn shows_cancel(&self) -> bool {
        matches!(self, FormMode::Editing { .. })
    }
}
