//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `dashboard` holds the fetched domain data and the session record, `ui`
//! holds what is currently on screen. Keeping them apart lets the controller
//! decide when data becomes visible.

pub mod dashboard;
pub mod ui;
