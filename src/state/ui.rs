//! Presentation state: visible section, summary counters, the orders table,
//! and the busy indicator.
//!
//! DESIGN
//! ======
//! `UiState` is the view model the page renders from; it owns the rules
//! (exclusive sections, placeholder counters, table teardown before rebuild).
//! The controller talks to it through `Presenter`, implemented for a Leptos
//! signal in the browser and a `RefCell` in tests.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use crate::i18n;
use crate::net::types::{Column, Counter, OrderRow, Stats, display_value};

/// Shown in a counter slot whose key is absent.
pub const PLACEHOLDER: &str = "-";

/// Element id the orders table binds to.
pub const ORDERS_TABLE_ID: &str = "ordersTable";

pub const DASHBOARD_SECTION: &str = "dashboard";
pub const ORDERS_SECTION: &str = "orders";

/// Operations the controller drives on the visible page.
pub trait Presenter {
    /// Make `id` the only visible section and highlight its nav link.
    fn show_section(&self, id: &str);
    fn render_summary(&self, stats: &Stats);
    /// Tear down any existing table and build a fresh one.
    fn render_table(&self, columns: &[Column], orders: &[OrderRow]);
    fn set_busy(&self, busy: bool);
    /// Start honoring navigation, refresh and logout interactions.
    fn enable_interactions(&self);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

/// One column of a table instance: header title and row key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub title: String,
    pub data: String,
}

/// A live table widget bound to the host element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableInstance {
    pub id: u64,
    pub columns: Vec<TableColumn>,
    pub responsive: bool,
    pub language_url: &'static str,
}

/// Header and body rows currently inside the host element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableMarkup {
    pub header_rows: Vec<Vec<String>>,
    pub body_rows: Vec<Vec<String>>,
}

/// The element a table widget is mounted on.
///
/// Initializing a widget appends its header and rows to whatever markup is
/// already there, so a rebuild has to destroy the old instance and empty the
/// element first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableHost {
    pub target: String,
    instance: Option<TableInstance>,
    markup: TableMarkup,
    next_id: u64,
}

impl TableHost {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            instance: None,
            markup: TableMarkup::default(),
            next_id: 0,
        }
    }

    pub fn is_table(&self) -> bool {
        self.instance.is_some()
    }

    pub fn instance(&self) -> Option<&TableInstance> {
        self.instance.as_ref()
    }

    pub fn markup(&self) -> &TableMarkup {
        &self.markup
    }

    /// Detach the widget. Its markup stays behind.
    pub fn destroy(&mut self) {
        self.instance = None;
    }

    /// Clear headers and body.
    pub fn empty(&mut self) {
        self.markup = TableMarkup::default();
    }

    fn initialize(&mut self, columns: &[Column], orders: &[OrderRow]) {
        let columns: Vec<TableColumn> = columns
            .iter()
            .map(|column| TableColumn {
                title: column.label().to_owned(),
                data: column.label().to_owned(),
            })
            .collect();

        self.markup
            .header_rows
            .push(columns.iter().map(|c| c.title.clone()).collect());
        self.markup.body_rows.extend(orders.iter().map(|row| {
            columns
                .iter()
                .map(|c| row.get(&c.data).map(display_value).unwrap_or_default())
                .collect()
        }));

        self.next_id += 1;
        self.instance = Some(TableInstance {
            id: self.next_id,
            columns,
            responsive: true,
            language_url: i18n::TABLE_LANGUAGE_URL,
        });
    }

    /// Replace whatever is mounted with a table over `orders`.
    pub fn rebuild(&mut self, columns: &[Column], orders: &[OrderRow]) {
        if self.is_table() {
            self.destroy();
        }
        self.empty();
        self.initialize(columns, orders);
    }
}

/// Everything currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sections: Vec<Section>,
    pub nav_links: Vec<NavLink>,
    /// Counter text in `Counter::ALL` order.
    pub summary: [String; 4],
    pub table: TableHost,
    pub busy: bool,
    pub interactive: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::with_layout(
            &[DASHBOARD_SECTION, ORDERS_SECTION],
            &[
                ("#dashboard", i18n::NAV_DASHBOARD),
                ("#orders", i18n::NAV_ORDERS),
            ],
        )
    }
}

impl UiState {
    /// Build a page with the given section ids and `(href, label)` nav links.
    /// Nothing is visible until `show_section` is called.
    pub fn with_layout(section_ids: &[&str], links: &[(&str, &str)]) -> Self {
        Self {
            sections: section_ids
                .iter()
                .map(|id| Section {
                    id: (*id).to_owned(),
                    active: false,
                })
                .collect(),
            nav_links: links
                .iter()
                .map(|(href, label)| NavLink {
                    href: (*href).to_owned(),
                    label: (*label).to_owned(),
                    active: false,
                })
                .collect(),
            summary: std::array::from_fn(|_| PLACEHOLDER.to_owned()),
            table: TableHost::new(ORDERS_TABLE_ID),
            busy: false,
            interactive: false,
        }
    }

    pub fn active_section(&self) -> Option<&str> {
        self.sections.iter().find(|s| s.active).map(|s| s.id.as_str())
    }

    pub fn is_section_active(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.active && s.id == id)
    }

    pub fn counter_text(&self, counter: Counter) -> &str {
        &self.summary[counter.index()]
    }

    pub fn show_section(&mut self, id: &str) {
        for section in &mut self.sections {
            section.active = section.id == id;
        }
        let target = format!("#{id}");
        for link in &mut self.nav_links {
            link.active = link.href == target;
        }
    }

    pub fn render_summary(&mut self, stats: &Stats) {
        for counter in Counter::ALL {
            self.summary[counter.index()] = stats
                .counter(counter)
                .map_or_else(|| PLACEHOLDER.to_owned(), display_value);
        }
    }

    pub fn render_table(&mut self, columns: &[Column], orders: &[OrderRow]) {
        self.table.rebuild(columns, orders);
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn enable_interactions(&mut self) {
        self.interactive = true;
    }

    /// Whether link clicks are taken over by the page. Until interactions are
    /// wired a click follows its `href` natively.
    pub fn intercepts_clicks(&self) -> bool {
        self.interactive
    }
}

/// Section id named by a navigation link's `href` fragment.
pub fn section_from_href(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

impl Presenter for RefCell<UiState> {
    fn show_section(&self, id: &str) {
        self.borrow_mut().show_section(id);
    }

    fn render_summary(&self, stats: &Stats) {
        self.borrow_mut().render_summary(stats);
    }

    fn render_table(&self, columns: &[Column], orders: &[OrderRow]) {
        self.borrow_mut().render_table(columns, orders);
    }

    fn set_busy(&self, busy: bool) {
        self.borrow_mut().set_busy(busy);
    }

    fn enable_interactions(&self) {
        self.borrow_mut().enable_interactions();
    }
}

impl Presenter for RwSignal<UiState> {
    fn show_section(&self, id: &str) {
        self.update(|ui| ui.show_section(id));
    }

    fn render_summary(&self, stats: &Stats) {
        self.update(|ui| ui.render_summary(stats));
    }

    fn render_table(&self, columns: &[Column], orders: &[OrderRow]) {
        self.update(|ui| ui.render_table(columns, orders));
    }

    fn set_busy(&self, busy: bool) {
        self.update(|ui| ui.set_busy(busy));
    }

    fn enable_interactions(&self) {
        self.update(UiState::enable_interactions);
    }
}
