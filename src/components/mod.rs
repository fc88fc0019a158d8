//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome from the shared `UiState` signal and
//! report user intent back to the page through callbacks.

pub mod nav_menu;
pub mod orders_table;
pub mod summary_cards;
