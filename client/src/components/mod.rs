//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and overlays while reading/writing shared
//! state from Leptos context providers.

pub mod demo_banner;
pub mod navbar;
pub mod notification_center;
pub mod route_guard;
pub mod tutorial_overlay;
