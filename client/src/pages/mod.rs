//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin;
pub mod blog;
pub(crate) mod content;
pub mod dashboard;
pub mod demo;
pub mod features;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pricing;
