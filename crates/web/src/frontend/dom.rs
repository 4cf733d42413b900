//! DOM-backed [`InventoryView`].
//!
//! Every piece of visible state is a signal the `App` component renders from;
//! the browser-only capabilities (scrolling, focus, `confirm`) go straight to
//! `web_sys`.

use std::time::Duration;

use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use stockroom_products::ProductForm;

use crate::form_mode::FormMode;
use crate::markup::TableContent;
use crate::notify::{NOTICE_LIFETIME, NoticeKind, NoticeStack};
use crate::view::{InventoryView, ScrollTarget};

#[derive(Clone, Copy)]
pub struct SignalView {
    pub form: RwSignal<ProductForm>,
    pub mode: RwSignal<FormMode>,
    pub table: RwSignal<TableContent>,
    pub notices: RwSignal<NoticeStack>,
    pub search: RwSignal<String>,
    pub name_input: NodeRef<html::Input>,
    pub form_section: NodeRef<html::Section>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            form: create_rw_signal(ProductForm::default()),
            mode: create_rw_signal(FormMode::Create),
            table: create_rw_signal(TableContent::default()),
            notices: create_rw_signal(NoticeStack::default()),
            search: create_rw_signal(String::new()),
            name_input: create_node_ref::<html::Input>(),
            form_section: create_node_ref::<html::Section>(),
        }
    }
}

impl InventoryView for SignalView {
    fn render_table(&self, content: TableContent) {
        self.table.set(content);
    }

    fn notify(&self, kind: NoticeKind, message: &str) {
        let message = message.to_string();
        let Some(id) = self.notices.try_update(|stack| stack.push(kind, message)) else {
            return;
        };

        let notices = self.notices;
        set_timeout(
            move || {
                notices.update(|stack| {
                    stack.dismiss(id);
                });
            },
            NOTICE_LIFETIME,
        );
    }

    fn read_form(&self) -> ProductForm {
        self.form.get_untracked()
    }

    fn write_form(&self, form: ProductForm) {
        self.form.set(form);
    }

    fn show_mode(&self, mode: &FormMode) {
        self.mode.set(mode.clone());
    }

    fn viewport_width(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::INFINITY)
    }

    fn scroll_to(&self, target: ScrollTarget) {
        match target {
            ScrollTarget::PageTop => {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            ScrollTarget::FormSection => {
                let Some(section) = self.form_section.get_untracked() else {
                    return;
                };
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }

    fn focus_name_after(&self, delay: Duration) {
        let input = self.name_input;
        set_timeout(
            move || {
                if let Some(input) = input.get_untracked() {
                    let _ = input.focus();
                }
            },
            delay,
        );
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn clear_search(&self) {
        self.search.set(String::new());
    }
}
