//! Application state: the session record plus the fetched dashboard data.
//!
//! DESIGN
//! ======
//! Columns and orders are only ever installed together (`apply_initial`) or
//! with columns left untouched (`apply_refresh`), so the table never binds
//! fresh rows to a stale column set.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{Column, InitialData, OrderRow, RefreshData, Stats, UserRecord};
use crate::util::storage::{JsonSlot, Storage, load_json};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    user: Option<UserRecord>,
    columns: Vec<Column>,
    orders: Vec<OrderRow>,
    stats: Stats,
}

impl DashboardState {
    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn orders(&self) -> &[OrderRow] {
        &self.orders
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Load the persisted user record from `key`. A missing or unreadable
    /// record leaves the session empty.
    pub fn restore(&mut self, storage: &impl Storage, key: &str) {
        self.user = match load_json::<UserRecord>(storage, key) {
            JsonSlot::Present(user) => Some(user),
            JsonSlot::Missing => None,
            JsonSlot::Corrupt(reason) => {
                log::warn!("ignoring unreadable user record in `{key}`: {reason}");
                None
            }
        };
    }

    pub fn apply_initial(&mut self, data: InitialData) {
        self.stats = data.stats;
        self.columns = data.columns;
        self.orders = data.orders;
    }

    pub fn apply_refresh(&mut self, data: RefreshData) {
        self.stats = data.stats;
        self.orders = data.orders;
    }

    /// Forget the user in memory and in `storage`.
    pub fn clear_session(&mut self, storage: &impl Storage, key: &str) {
        self.user = None;
        storage.remove_item(key);
    }
}
