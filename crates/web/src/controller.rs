//! Inventory view-model.
//!
//! `InventoryController` owns the mutable UI state (form mode and the table
//! request sequence) and turns user actions into API calls and view updates. It lives on the browser's single
//! thread: state sits in `RefCell`s that are never borrowed across an `.await`.

use std::cell::RefCell;

use stockroom_client::{ApiError, ProductApi};
use stockroom_products::{Product, ProductForm, ProductId, ValidationError};

use crate::form_mode::FormMode;
use crate::markup::TableContent;
use crate::notify::NoticeKind;
use crate::sequence::{RequestSequence, Ticket};
use crate::view::{FOCUS_DELAY, InventoryView, ScrollTarget};

pub const LOAD_FAILED: &str = "Error loading products. Please refresh the page.";
pub const SEARCH_FAILED: &str = "Error searching products. Please try again.";
pub const SUBMIT_FAILED: &str = "An error occurred. Please try again.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";
pub const DELETED: &str = "Product deleted successfully!";
pub const DELETE_REJECTED: &str = "Error deleting product.";
pub const DELETE_FAILED: &str = "An error occurred while deleting. Please try again.";

/// Which write a submit performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update(ProductId),
}

impl Operation {
    fn success_message(&self) -> &'static str {
        match self {
            Operation::Create => "Product added successfully!",
            Operation::Update(_) => "Product updated successfully!",
        }
    }

    fn rejected_message(&self) -> &'static str {
        match self {
            Operation::Create => "Error adding product.",
            Operation::Update(_) => "Error updating product.",
        }
    }
}

/// Result of a list load or search.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The table now shows this many products.
    Rendered(usize),
    /// A newer table load started first; this response was dropped.
    Stale,
    /// The table was left as it was.
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was sent.
    Invalid(ValidationError),
    Saved(Operation),
    /// The server answered with a non-2xx status.
    Rejected(Operation, u16),
    /// No answer from the server; the form is untouched.
    Failed(Operation, ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The user said no at the confirmation prompt.
    Declined,
    Deleted,
    Rejected(u16),
    Failed(ApiError),
}

pub struct InventoryController<A, V> {
    api: A,
    view: V,
    mode: RefCell<FormMode>,
    table_loads: RequestSequence,
}

impl<A, V> InventoryController<A, V>
where
    A: ProductApi,
    V: InventoryView,
{
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            mode: RefCell::new(FormMode::Create),
            table_loads: RequestSequence::default(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn mode(&self) -> FormMode {
        self.mode.borrow().clone()
    }

    /// Fetch the full collection and re-render the table.
    pub async fn refresh(&self) -> LoadOutcome {
        let ticket = self.table_loads.begin();
        let result = self.api.list_products().await;
        self.apply_table_load(ticket, result, LOAD_FAILED)
    }

    /// Show products matching `query`; a blank query shows everything.
    pub async fn search(&self, query: &str) -> LoadOutcome {
        let keyword = query.trim();
        if keyword.is_empty() {
            return self.refresh().await;
        }

        tracing::info!(keyword, "searching products");
        let ticket = self.table_loads.begin();
        let result = self.api.search_products(keyword).await;
        self.apply_table_load(ticket, result, SEARCH_FAILED)
    }

    /// Empty the search box and show everything.
    pub async fn clear_search(&self) -> LoadOutcome {
        self.view.clear_search();
        self.refresh().await
    }

    fn apply_table_load(
        &self,
        ticket: Ticket,
        result: Result<Vec<Product>, ApiError>,
        failure_message: &str,
    ) -> LoadOutcome {
        if !self.table_loads.is_current(ticket) {
            tracing::debug!(?ticket, "dropping superseded table response");
            return LoadOutcome::Stale;
        }

        match result {
            Ok(products) => {
                self.view.render_table(TableContent::from_products(&products));
                LoadOutcome::Rendered(products.len())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load products");
                self.view.notify(NoticeKind::Error, failure_message);
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Validate the form and create or update a product.
    ///
    /// Any answer from the server ends the attempt: the form goes back to
    /// Create mode and the table is refreshed. Without an answer the form is
    /// left as it was so the user can retry.
    pub async fn submit(&self) -> SubmitOutcome {
        let draft = match self.view.read_form().validate() {
            Ok(draft) => draft,
            Err(rule) => {
                self.view.notify(NoticeKind::Error, &rule.to_string());
                return SubmitOutcome::Invalid(rule);
            }
        };

        let operation = match self.mode.borrow().editing_id() {
            Some(id) => Operation::Update(id.clone()),
            None => Operation::Create,
        };

        let result = match &operation {
            Operation::Create => {
                tracing::info!(name = %draft.product_name, "creating product");
                self.api.create_product(&draft).await
            }
            Operation::Update(id) => {
                tracing::info!(%id, "updating product");
                self.api.update_product(id, &draft).await
            }
        };

        let outcome = match result {
            Ok(()) => {
                self.view.notify(NoticeKind::Success, operation.success_message());
                SubmitOutcome::Saved(operation)
            }
            Err(ApiError::Status(status)) => {
                self.view.notify(NoticeKind::Error, operation.rejected_message());
                SubmitOutcome::Rejected(operation, status)
            }
            Err(e) => {
                tracing::warn!(error = %e, "product submit failed");
                self.view.notify(NoticeKind::Error, SUBMIT_FAILED);
                return SubmitOutcome::Failed(operation, e);
            }
        };

        self.cancel();
        self.refresh().await;
        outcome
    }

    /// Load `product` into the form and switch to Edit mode.
    ///
    /// Returns `false` for products without an id.
    pub fn begin_edit(&self, product: &Product) -> bool {
        let Some(id) = product.id.clone() else {
            tracing::warn!(name = %product.product_name, "cannot edit a product without id");
            return false;
        };

        self.view.write_form(ProductForm::from_product(product));
        self.enter_mode(FormMode::Editing { id });
        self.view
            .scroll_to(ScrollTarget::for_viewport(self.view.viewport_width()));
        self.view.focus_name_after(FOCUS_DELAY);
        true
    }

    /// Clear the form and return to Create mode.
    pub fn cancel(&self) {
        self.view.write_form(ProductForm::default());
        self.enter_mode(FormMode::Create);
    }

    fn enter_mode(&self, mode: FormMode) {
        self.view.show_mode(&mode);
        *self.mode.borrow_mut() = mode;
    }

    /// Delete the product with `id` after the user confirms.
    pub async fn delete(&self, id: &ProductId) -> DeleteOutcome {
        if !self.view.confirm(CONFIRM_DELETE) {
            return DeleteOutcome::Declined;
        }

        tracing::info!(%id, "deleting product");
        let outcome = match self.api.delete_product(id).await {
            Ok(()) => {
                self.view.notify(NoticeKind::Success, DELETED);
                DeleteOutcome::Deleted
            }
            Err(ApiError::Status(status)) => {
                self.view.notify(NoticeKind::Error, DELETE_REJECTED);
                DeleteOutcome::Rejected(status)
            }
            Err(e) => {
                tracing::warn!(error = %e, %id, "product delete failed");
                self.view.notify(NoticeKind::Error, DELETE_FAILED);
                return DeleteOutcome::Failed(e);
            }
        };

        self.refresh().await;
        outcome
    }
}
