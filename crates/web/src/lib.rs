//! `stockroom-web`
//!
//! **Responsibility:** the browser inventory client.
//!
//! Everything that decides *what* the page shows (form modes, validation flow,
//! table rows, notifications, stale-response handling) is platform independent
//! and tested natively. The `frontend` module is the `wasm32`-only Leptos glue
//! that binds it to the DOM.

pub mod controller;
pub mod form_mode;
pub mod markup;
pub mod notify;
pub mod sequence;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use controller::{DeleteOutcome, InventoryController, LoadOutcome, Operation, SubmitOutcome};
pub use form_mode::FormMode;
pub use markup::{ProductRow, TableContent};
pub use notify::{Notice, NoticeKind, NoticeStack};
pub use view::{InventoryView, ScrollTarget};
