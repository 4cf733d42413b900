//! Leptos application: product form, search bar, product table, notices.

use std::rc::Rc;

use leptos::*;

use stockroom_client::{ClientConfig, HttpProductApi};

use crate::controller::InventoryController;
use crate::frontend::dom::SignalView;
use crate::markup::{EMPTY_MESSAGE, ProductRow};
use crate::notify::Notice;

type Controller = InventoryController<HttpProductApi, SignalView>;

/// Main application component.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let api = match HttpProductApi::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "cannot build products API client");
            return view! {
                <div class="container">
                    <p class="message error show">{format!("Cannot start: {e}")}</p>
                </div>
            }
            .into_view();
        }
    };

    let ui = SignalView::new();
    let controller: Rc<Controller> = Rc::new(InventoryController::new(api, ui));

    {
        let c = controller.clone();
        spawn_local(async move {
            c.refresh().await;
        });
    }

    let on_submit = {
        let c = controller.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let c = c.clone();
            spawn_local(async move {
                c.submit().await;
            });
        }
    };

    let on_cancel = {
        let c = controller.clone();
        move |_: ev::MouseEvent| c.cancel()
    };

    let on_search = {
        let c = controller.clone();
        move |ev: ev::Event| {
            let query = event_target_value(&ev);
            ui.search.set(query.clone());
            let c = c.clone();
            spawn_local(async move {
                c.search(&query).await;
            });
        }
    };

    let on_clear_search = {
        let c = controller.clone();
        move |_: ev::MouseEvent| {
            let c = c.clone();
            spawn_local(async move {
                c.clear_search().await;
            });
        }
    };

    let rows = {
        let c = controller.clone();
        move || {
            ui.table.with(|table| {
                table
                    .rows()
                    .iter()
                    .cloned()
                    .map(|row| product_row(row, c.clone()))
                    .collect_view()
            })
        }
    };

    let form_field = move |read: fn(&stockroom_products::ProductForm) -> String| {
        move || ui.form.with(read)
    };

    view! {
        <div id="messageDiv" class="notice-stack">
            <For
                each=move || ui.notices.with(|stack| stack.notices().to_vec())
                key=|notice: &Notice| notice.id
                children=move |notice: Notice| {
                    view! {
                        <div class=format!("message {} show", notice.kind.css_class())>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>

        <div class="container">
            <header>
                <h1>"Product Inventory"</h1>
            </header>

            <section class="form-section" node_ref=ui.form_section>
                <h2>"Product Details"</h2>
                <form id="productForm" on:submit=on_submit>
                    <div class="form-group">
                        <label for="productName">"Product Name"</label>
                        <input
                            type="text"
                            id="productName"
                            node_ref=ui.name_input
                            prop:value=form_field(|f| f.product_name.clone())
                            on:input=move |ev| {
                                ui.form.update(|f| f.product_name = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="mrp">"MRP (₹)"</label>
                        <input
                            type="number"
                            id="mrp"
                            step="0.01"
                            prop:value=form_field(|f| f.mrp.clone())
                            on:input=move |ev| {
                                ui.form.update(|f| f.mrp = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="sellingPrice">"Selling Price (₹)"</label>
                        <input
                            type="number"
                            id="sellingPrice"
                            step="0.01"
                            prop:value=form_field(|f| f.selling_price.clone())
                            on:input=move |ev| {
                                ui.form.update(|f| f.selling_price = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="quantity">"Quantity"</label>
                        <input
                            type="number"
                            id="quantity"
                            step="1"
                            prop:value=form_field(|f| f.quantity.clone())
                            on:input=move |ev| {
                                ui.form.update(|f| f.quantity = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form-actions">
                        <button
                            type="submit"
                            id="submitBtn"
                            class=move || ui.mode.with(|m| m.submit_class())
                        >
                            {move || ui.mode.with(|m| m.submit_label())}
                        </button>
                        <button
                            type="button"
                            id="cancelBtn"
                            class="btn btn-secondary"
                            style:display=move || if ui.mode.with(|m| m.shows_cancel()) { "block" } else { "none" }
                            on:click=on_cancel
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </section>

            <section class="table-section">
                <div class="search-bar">
                    <input
                        type="text"
                        id="searchInput"
                        placeholder="Search products by name..."
                        prop:value=move || ui.search.get()
                        on:input=on_search
                    />
                    <button type="button" id="clearSearchBtn" class="btn btn-secondary" on:click=on_clear_search>
                        "Clear"
                    </button>
                </div>

                <p
                    id="emptyMessage"
                    class="empty-message"
                    class:show=move || ui.table.with(|t| t.shows_placeholder())
                >
                    {EMPTY_MESSAGE}
                </p>

                <table
                    id="productsTable"
                    style:display=move || if ui.table.with(|t| t.shows_table()) { "table" } else { "none" }
                >
                    <thead>
                        <tr>
                            <th>"Product Name"</th>
                            <th>"MRP"</th>
                            <th>"Selling Price"</th>
                            <th>"Discount"</th>
                            <th>"Quantity"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody id="tableBody">{rows}</tbody>
                </table>
            </section>
        </div>
    }
    .into_view()
}

/// One product row; its buttons act on the row's own record.
fn product_row(row: ProductRow, controller: Rc<Controller>) -> impl IntoView {
    let actions = row.id().cloned().map(|id| {
        let product = row.product.clone();
        let edit = controller.clone();
        let delete = controller.clone();
        view! {
            <div class="action-buttons">
                <button
                    type="button"
                    class="btn btn-edit"
                    on:click=move |_| {
                        edit.begin_edit(&product);
                    }
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class="btn btn-delete"
                    on:click=move |_| {
                        let c = delete.clone();
                        let id = id.clone();
                        spawn_local(async move {
                            c.delete(&id).await;
                        });
                    }
                >
                    "Delete"
                </button>
            </div>
        }
    });

    view! {
        <tr>
            <td>{row.product.product_name}</td>
            <td>{row.mrp}</td>
            <td>{row.selling_price}</td>
            <td>{row.discount}</td>
            <td>{row.product.quantity}</td>
            <td>{actions}</td>
        </tr>
    }
}
