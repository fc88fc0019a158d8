//! Networking modules for the orders backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the gateway seam and its HTTP implementation, and `types`
//! defines the payload schema plus the decoders that turn raw JSON into it.

pub mod api;
pub mod types;
