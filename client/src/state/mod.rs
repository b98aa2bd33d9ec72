//! Per-widget client-side state.
//!
//! DESIGN
//! ======
//! Each widget owns one plain state object (`assistant`, `diagnosis`,
//! `directory`) wrapped in a local `RwSignal` by its component. `centers` is
//! read-only data ranked once per page render. Nothing here touches the DOM,
//! so every transition is testable without a browser.

pub mod assistant;
pub mod centers;
pub mod diagnosis;
pub mod directory;
pub mod transcript;
