//! Orders table rendered from the table host's current markup.

use leptos::prelude::*;

use crate::state::ui::{ORDERS_TABLE_ID, UiState};

/// The orders grid. Rebuilds are handled by `TableHost`; this only mirrors
/// its header and body rows.
#[component]
pub fn OrdersTable() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let header_rows = move || ui.with(|u| u.table.markup().header_rows.clone());
    let body_rows = move || ui.with(|u| u.table.markup().body_rows.clone());

    view! {
        <div class="orders-table">
            <table id=ORDERS_TABLE_ID class="display responsive nowrap">
                <thead>
                    {move || {
                        header_rows()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        {row
                                            .into_iter()
                                            .map(|title| view! { <th>{title}</th> })
                                            .collect::<Vec<_>>()}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </thead>
                <tbody>
                    {move || {
                        body_rows()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        {row
                                            .into_iter()
                                            .map(|cell| view! { <td>{cell}</td> })
                                            .collect::<Vec<_>>()}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
