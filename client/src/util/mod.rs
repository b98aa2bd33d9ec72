//! Utility helpers shared across widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, timers,
//! scrolling) and text rendering from component logic so the pure parts stay
//! testable without a DOM.

pub mod cookie;
pub mod markup;
pub mod reply_timer;
pub mod scroll;
