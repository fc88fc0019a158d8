//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (`localStorage`, alerts, cookies,
//! location) from page and controller logic to keep the latter testable.

pub mod shell;
pub mod storage;
