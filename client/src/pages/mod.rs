//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped layout and delegates the interactive parts
//! to `components`.

pub mod diagnosis;
pub mod doctors;
pub mod home;
pub mod navigation;
