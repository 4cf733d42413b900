//! The seam between the controller and whatever draws the page.

use std::time::Duration;

use stockroom_products::ProductForm;

use crate::form_mode::FormMode;
use crate::markup::TableContent;
use crate::notify::NoticeKind;

/// Viewports at most this wide (logical pixels) scroll the whole page.
pub const NARROW_VIEWPORT_MAX_WIDTH: f64 = 768.0;

/// Delay before focusing the name field, so the smooth scroll gets going.
pub const FOCUS_DELAY: Duration = Duration::from_millis(300);

/// Where the edit entry point scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    PageTop,
    FormSection,
}

impl ScrollTarget {
    pub fn for_viewport(width: f64) -> Self {
        if width <= NARROW_VIEWPORT_MAX_WIDTH {
            ScrollTarget::PageTop
        } else {
            ScrollTarget::FormSection
        }
    }
}

/// Rendering and browser capabilities the controller drives.
///
/// Implementations only draw; every decision is made by the controller.
pub trait InventoryView {
    fn render_table(&self, content: TableContent);

    /// Show a notification that dismisses itself after
    /// [`crate::notify::NOTICE_LIFETIME`].
    fn notify(&self, kind: NoticeKind, message: &str);

    fn read_form(&self) -> ProductForm;
    fn write_form(&self, form: ProductForm);

    /// Apply the submit label, styling and Cancel visibility for `mode`.
    fn show_mode(&self, mode: &FormMode);

    fn viewport_width(&self) -> f64;
    fn scroll_to(&self, target: ScrollTarget);
    fn focus_name_after(&self, delay: Duration);

    /// Blocking yes/no prompt.
    fn confirm(&self, prompt: &str) -> bool;

    fn clear_search(&self);
}
