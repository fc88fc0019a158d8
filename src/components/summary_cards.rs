//! Summary counter cards for the dashboard section.

use leptos::prelude::*;

use crate::i18n;
use crate::net::types::Counter;
use crate::state::ui::UiState;

fn counter_label(counter: Counter) -> &'static str {
    match counter {
        Counter::TotalOrders => i18n::TOTAL_ORDERS,
        Counter::TodayOrders => i18n::TODAY_ORDERS,
        Counter::PendingOrders => i18n::PENDING_ORDERS,
        Counter::ConfirmedOrders => i18n::CONFIRMED_ORDERS,
    }
}

/// Four stat cards; each value slot carries the counter key as its id.
#[component]
pub fn SummaryCards() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="summary-cards">
            {Counter::ALL
                .into_iter()
                .map(|counter| {
                    view! {
                        <div class="summary-card">
                            <span class="summary-card__label">{counter_label(counter)}</span>
                            <span class="summary-card__value" id=counter.key()>
                                {move || ui.with(|u| u.counter_text(counter).to_owned())}
                            </span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
