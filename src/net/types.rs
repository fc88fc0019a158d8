//! Payload schema for the orders backend.
//!
//! DESIGN
//! ======
//! Rows and the user record stay opaque JSON because their shape belongs to
//! the backend. Decoding only checks what rendering depends on: `stats` is an
//! object, `orders` carries an `orders` array of objects, and `columns` is an
//! array of descriptors.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DashboardError;

/// One order as returned by the backend, keyed by column label.
pub type OrderRow = Map<String, Value>;

/// Opaque user record written by the login page.
pub type UserRecord = Value;

/// Describes one table field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub english_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arabic_name: Option<String>,
}

impl Column {
    pub fn new(english_name: impl Into<String>) -> Self {
        Self {
            english_name: english_name.into(),
            arabic_name: None,
        }
    }

    #[must_use]
    pub fn localized(mut self, arabic_name: impl Into<String>) -> Self {
        self.arabic_name = Some(arabic_name.into());
        self
    }

    /// Header title and row key: the Arabic name when non-empty, else the
    /// English one.
    pub fn label(&self) -> &str {
        match self.arabic_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.english_name,
        }
    }
}

/// The four summary counters, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Counter {
    TotalOrders,
    TodayOrders,
    PendingOrders,
    ConfirmedOrders,
}

impl Counter {
    pub const ALL: [Self; 4] = [
        Self::TotalOrders,
        Self::TodayOrders,
        Self::PendingOrders,
        Self::ConfirmedOrders,
    ];

    /// Key in the `stats` payload; also the id of the display slot.
    pub fn key(self) -> &'static str {
        match self {
            Self::TotalOrders => "totalOrders",
            Self::TodayOrders => "todayOrders",
            Self::PendingOrders => "pendingOrders",
            Self::ConfirmedOrders => "confirmedOrders",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::TotalOrders => 0,
            Self::TodayOrders => 1,
            Self::PendingOrders => 2,
            Self::ConfirmedOrders => 3,
        }
    }
}

/// Aggregate statistics keyed by counter name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats(pub Map<String, Value>);

impl Stats {
    /// Value for `counter`, treating `null` as absent.
    pub fn counter(&self, counter: Counter) -> Option<&Value> {
        self.0.get(counter.key()).filter(|value| !value.is_null())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything the first load installs in one step.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialData {
    pub stats: Stats,
    pub columns: Vec<Column>,
    pub orders: Vec<OrderRow>,
}

/// What a refresh replaces; columns are assumed stable.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshData {
    pub stats: Stats,
    pub orders: Vec<OrderRow>,
}

#[derive(Deserialize)]
struct OrdersEnvelope {
    orders: Vec<OrderRow>,
}

fn parse_error(request: &str, err: impl std::fmt::Display) -> DashboardError {
    DashboardError::Parse {
        request: request.to_owned(),
        message: err.to_string(),
    }
}

/// Decode a `stats` response body.
///
/// # Errors
///
/// Returns [`DashboardError::Parse`] if the body is not a JSON object.
pub fn decode_stats(body: Value) -> Result<Stats, DashboardError> {
    match body {
        Value::Object(map) => Ok(Stats(map)),
        other => Err(parse_error("GET stats", format!("expected object, got {other}"))),
    }
}

/// Decode an `orders` response body, unwrapping its `orders` member.
///
/// # Errors
///
/// Returns [`DashboardError::Parse`] if `orders` is missing or is not an
/// array of objects.
pub fn decode_orders(body: Value) -> Result<Vec<OrderRow>, DashboardError> {
    serde_json::from_value::<OrdersEnvelope>(body)
        .map(|envelope| envelope.orders)
        .map_err(|e| parse_error("GET orders", e))
}

/// Decode a `columns` response body.
///
/// # Errors
///
/// Returns [`DashboardError::Parse`] if the body is not an array of column
/// descriptors.
pub fn decode_columns(body: Value) -> Result<Vec<Column>, DashboardError> {
    serde_json::from_value(body).map_err(|e| parse_error("GET columns", e))
}

/// Render a cell or counter value as display text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
