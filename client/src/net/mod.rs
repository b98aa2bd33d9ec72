//! Networking for the diagnosis chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the prediction request and `types` defines its JSON
//! schema. No other endpoint is called from the browser.

pub mod api;
pub mod types;
