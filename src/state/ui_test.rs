use super::*;
use serde_json::json;

use crate::net::types::{decode_columns, decode_stats};

fn scenario_columns() -> Vec<Column> {
    decode_columns(json!([
        { "englishName": "ID" },
        { "englishName": "Date", "arabicName": "التاريخ" }
    ]))
    .unwrap()
}

fn scenario_orders() -> Vec<OrderRow> {
    let rows = json!([
        { "ID": 7, "التاريخ": "2024-05-01", "Date": "ignored" },
        { "ID": "A-8" }
    ]);
    serde_json::from_value(rows).unwrap()
}

fn active_links(ui: &UiState) -> Vec<&str> {
    ui.nav_links.iter().filter(|l| l.active).map(|l| l.href.as_str()).collect()
}

fn active_sections(ui: &UiState) -> Vec<&str> {
    ui.sections.iter().filter(|s| s.active).map(|s| s.id.as_str()).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_default_shows_nothing() {
    let ui = UiState::default();
    assert_eq!(ui.active_section(), None);
    assert!(!ui.busy);
    assert!(!ui.interactive);
    assert!(!ui.table.is_table());
}

#[test]
fn ui_state_default_counters_are_placeholders() {
    let ui = UiState::default();
    for counter in Counter::ALL {
        assert_eq!(ui.counter_text(counter), PLACEHOLDER);
    }
}

// =============================================================
// show_section
// =============================================================

#[test]
fn show_section_is_exclusive() {
    let mut ui = UiState::default();
    ui.show_section("dashboard");
    ui.show_section("orders");
    assert_eq!(active_sections(&ui), ["orders"]);
    assert_eq!(active_links(&ui), ["#orders"]);
}

#[test]
fn show_section_is_idempotent() {
    let mut ui = UiState::default();
    ui.show_section("orders");
    let once = ui.clone();
    ui.show_section("orders");
    ui.show_section("orders");
    assert_eq!(ui, once);
}

#[test]
fn show_unknown_section_hides_everything() {
    let mut ui = UiState::default();
    ui.show_section("dashboard");
    ui.show_section("reports");
    assert!(active_sections(&ui).is_empty());
    assert!(active_links(&ui).is_empty());
}

#[test]
fn show_section_without_nav_link_still_activates_section() {
    let mut ui = UiState::with_layout(&["dashboard", "settings"], &[("#dashboard", "Home")]);
    ui.show_section("settings");
    assert_eq!(active_sections(&ui), ["settings"]);
    assert!(active_links(&ui).is_empty());
}

#[test]
fn section_from_href_strips_fragment_marker() {
    assert_eq!(section_from_href("#orders"), "orders");
    assert_eq!(section_from_href("orders"), "orders");
}

// =============================================================
// render_summary
// =============================================================

#[test]
fn render_summary_writes_exact_values() {
    let mut ui = UiState::default();
    let stats = decode_stats(json!({
        "totalOrders": 120,
        "todayOrders": 0,
        "pendingOrders": "14",
        "confirmedOrders": 99.5
    }))
    .unwrap();
    ui.render_summary(&stats);
    assert_eq!(ui.counter_text(Counter::TotalOrders), "120");
    assert_eq!(ui.counter_text(Counter::TodayOrders), "0");
    assert_eq!(ui.counter_text(Counter::PendingOrders), "14");
    assert_eq!(ui.counter_text(Counter::ConfirmedOrders), "99.5");
}

#[test]
fn render_summary_missing_keys_show_placeholder() {
    let mut ui = UiState::default();
    let stats = decode_stats(json!({ "totalOrders": 5, "pendingOrders": null })).unwrap();
    ui.render_summary(&stats);
    assert_eq!(ui.counter_text(Counter::TotalOrders), "5");
    assert_eq!(ui.counter_text(Counter::TodayOrders), "-");
    assert_eq!(ui.counter_text(Counter::PendingOrders), "-");
    assert_eq!(ui.counter_text(Counter::ConfirmedOrders), "-");
}

#[test]
fn render_summary_overwrites_previous_values() {
    let mut ui = UiState::default();
    ui.render_summary(&decode_stats(json!({ "todayOrders": 3 })).unwrap());
    ui.render_summary(&decode_stats(json!({})).unwrap());
    assert_eq!(ui.counter_text(Counter::TodayOrders), "-");
}

// =============================================================
// render_table
// =============================================================

#[test]
fn render_table_titles_prefer_localized_name() {
    let mut ui = UiState::default();
    ui.render_table(&scenario_columns(), &scenario_orders());
    let instance = ui.table.instance().unwrap();
    let titles: Vec<_> = instance.columns.iter().map(|c| c.title.as_str()).collect();
    let keys: Vec<_> = instance.columns.iter().map(|c| c.data.as_str()).collect();
    assert_eq!(titles, ["ID", "التاريخ"]);
    assert_eq!(keys, ["ID", "التاريخ"]);
    assert_eq!(ui.table.markup().header_rows, vec![vec!["ID".to_owned(), "التاريخ".to_owned()]]);
}

#[test]
fn render_table_looks_up_cells_by_label_in_row_order() {
    let mut ui = UiState::default();
    ui.render_table(&scenario_columns(), &scenario_orders());
    assert_eq!(
        ui.table.markup().body_rows,
        vec![
            vec!["7".to_owned(), "2024-05-01".to_owned()],
            vec!["A-8".to_owned(), String::new()],
        ]
    );
}

#[test]
fn rerender_leaves_single_instance_and_header_row() {
    let mut ui = UiState::default();
    ui.render_table(&scenario_columns(), &scenario_orders());
    let first_id = ui.table.instance().unwrap().id;
    ui.render_table(&scenario_columns(), &scenario_orders()[..1]);
    ui.render_table(&scenario_columns(), &scenario_orders()[..1]);

    let instance = ui.table.instance().unwrap();
    assert_ne!(instance.id, first_id);
    assert_eq!(ui.table.markup().header_rows.len(), 1);
    assert_eq!(ui.table.markup().body_rows.len(), 1);
}

#[test]
fn initializing_without_teardown_duplicates_headers() {
    let mut host = TableHost::new(ORDERS_TABLE_ID);
    host.initialize(&scenario_columns(), &scenario_orders());
    host.initialize(&scenario_columns(), &scenario_orders());
    assert_eq!(host.markup().header_rows.len(), 2);

    host.rebuild(&scenario_columns(), &scenario_orders());
    assert_eq!(host.markup().header_rows.len(), 1);
    assert_eq!(host.markup().body_rows.len(), 2);
}

#[test]
fn table_instance_carries_widget_options() {
    let mut ui = UiState::default();
    ui.render_table(&[], &[]);
    let instance = ui.table.instance().unwrap();
    assert!(instance.responsive);
    assert_eq!(instance.language_url, crate::i18n::TABLE_LANGUAGE_URL);
    assert_eq!(ui.table.target, "ordersTable");
}

// =============================================================
// busy / interactions through the Presenter seam
// =============================================================

#[test]
fn set_busy_is_idempotent() {
    let ui = RefCell::new(UiState::default());
    ui.set_busy(true);
    ui.set_busy(true);
    assert!(ui.borrow().busy);
    ui.set_busy(false);
    ui.set_busy(false);
    assert!(!ui.borrow().busy);
}

#[test]
fn link_clicks_stay_native_until_interactions_are_wired() {
    let mut ui = UiState::default();
    assert!(!ui.intercepts_clicks());
    ui.show_section("orders");
    ui.set_busy(true);
    assert!(!ui.intercepts_clicks());
    ui.enable_interactions();
    assert!(ui.intercepts_clicks());
}

#[test]
fn presenter_on_refcell_delegates() {
    let ui = RefCell::new(UiState::default());
    Presenter::show_section(&ui, "orders");
    Presenter::enable_interactions(&ui);
    assert_eq!(ui.borrow().active_section(), Some("orders"));
    assert!(ui.borrow().interactive);
}
