//! Sidebar navigation links plus the logout action.

use leptos::prelude::*;

use crate::i18n;
use crate::state::ui::UiState;

fn nav_link_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}

/// Navigation sidebar. Once interactions are wired, clicks are intercepted and
/// reported as the link `href`; before that they behave natively.
#[component]
pub fn NavMenu(on_navigate: Callback<String>, on_logout: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="sidebar">
            <ul class="sidebar__links">
                {move || {
                    ui.get()
                        .nav_links
                        .into_iter()
                        .map(|link| {
                            let href = link.href.clone();
                            view! {
                                <li>
                                    <a
                                        class=nav_link_class(link.active)
                                        href=link.href
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            if ui.with_untracked(UiState::intercepts_clicks) {
                                                ev.prevent_default();
                                                on_navigate.run(href.clone());
                                            }
                                        }
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <a
                class="nav-link sidebar__logout"
                href="#"
                data-action="logout"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    if ui.with_untracked(UiState::intercepts_clicks) {
                        ev.prevent_default();
                        on_logout.run(());
                    }
                }
            >
                {i18n::LOGOUT}
            </a>
        </nav>
    }
}
