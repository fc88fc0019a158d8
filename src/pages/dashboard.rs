//! Dashboard page: loader overlay, navigation, summary and orders sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page renders purely from `RwSignal<UiState>`. In the browser it builds
//! a `DashboardController` over the real gateway, `localStorage` and window,
//! starts the initial load once mounted, and routes clicks to it. Handlers
//! stay inert until the controller has wired interactions.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::nav_menu::NavMenu;
use crate::components::orders_table::OrdersTable;
use crate::components::summary_cards::SummaryCards;
use crate::i18n;
use crate::state::ui::{DASHBOARD_SECTION, ORDERS_SECTION, UiState};

#[cfg(feature = "hydrate")]
type BrowserController = super::dashboard_controller::DashboardController<
    crate::net::api::HttpGateway,
    crate::util::storage::BrowserStorage,
    crate::util::shell::BrowserShell,
    RwSignal<UiState>,
>;

/// Copyable handle event handlers use to reach the controller.
#[derive(Clone, Copy)]
struct ControllerHandle {
    ui: RwSignal<UiState>,
    #[cfg(feature = "hydrate")]
    controller: StoredValue<std::rc::Rc<BrowserController>, LocalStorage>,
}

impl ControllerHandle {
    fn install(ui: RwSignal<UiState>) -> Self {
        #[cfg(feature = "hydrate")]
        {
            let controller = BrowserController::new(
                crate::config::DashboardConfig::from_environment(),
                crate::net::api::HttpGateway::new(),
                crate::util::storage::BrowserStorage,
                crate::util::shell::BrowserShell,
                ui,
            );
            Self {
                ui,
                controller: StoredValue::new_local(std::rc::Rc::new(controller)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self { ui }
        }
    }

    fn interactive(self) -> bool {
        self.ui.with_untracked(UiState::intercepts_clicks)
    }

    fn start(self) {
        #[cfg(feature = "hydrate")]
        {
            let controller = self.controller.get_value();
            leptos::task::spawn_local(async move {
                controller.start().await;
            });
        }
    }

    fn refresh(self) {
        if !self.interactive() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let controller = self.controller.get_value();
            leptos::task::spawn_local(async move {
                controller.refresh().await;
            });
        }
    }

    fn logout(self) {
        if !self.interactive() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let controller = self.controller.get_value();
            leptos::task::spawn_local(async move {
                controller.logout().await;
            });
        }
    }

    fn navigate(self, href: &str) {
        if !self.interactive() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            self.controller.with_value(|controller| controller.navigate(href));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = href;
        }
    }
}

/// `display` value for the loader overlay.
fn loader_display(busy: bool) -> &'static str {
    if busy { "flex" } else { "none" }
}

/// Class list for a content section.
fn section_class(active: bool) -> &'static str {
    if active { "content-section active" } else { "content-section" }
}

/// Dashboard page: summary counters plus the orders table.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let handle = ControllerHandle::install(ui);

    Effect::new(move || handle.start());

    let on_navigate = Callback::new(move |href: String| handle.navigate(&href));
    let on_logout = Callback::new(move |()| handle.logout());
    let on_refresh = Callback::new(move |()| handle.refresh());

    let busy = move || ui.with(|u| u.busy);
    let dashboard_active = move || ui.with(|u| u.is_section_active(DASHBOARD_SECTION));
    let orders_active = move || ui.with(|u| u.is_section_active(ORDERS_SECTION));

    view! {
        <div class="dashboard-page" dir="rtl">
            <div id="loader" class="loader" style:display=move || loader_display(busy())>
                <span class="loader__label">{i18n::LOADING}</span>
            </div>

            <NavMenu on_navigate=on_navigate on_logout=on_logout/>

            <main class="dashboard-page__content">
                <section id=DASHBOARD_SECTION class=move || section_class(dashboard_active())>
                    <header class="content-section__header">
                        <h2>{i18n::NAV_DASHBOARD}</h2>
                        <button class="btn" data-action="refresh-data" on:click=move |_| on_refresh.run(())>
                            {i18n::REFRESH}
                        </button>
                    </header>
                    <SummaryCards/>
                </section>

                <section id=ORDERS_SECTION class=move || section_class(orders_active())>
                    <header class="content-section__header">
                        <h2>{i18n::NAV_ORDERS}</h2>
                        <button class="btn" data-action="refresh-data" on:click=move |_| on_refresh.run(())>
                            {i18n::REFRESH}
                        </button>
                    </header>
                    <OrdersTable/>
                </section>
            </main>
        </div>
    }
}
