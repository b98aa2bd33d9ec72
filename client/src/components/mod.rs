//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each widget component owns its state object in a local `RwSignal`;
//! nothing is shared through context because the widgets never talk to each
//! other.

pub mod assistant_widget;
pub mod center_card;
pub mod chat_transcript;
pub mod diagnosis_chat;
pub mod doctor_card;
