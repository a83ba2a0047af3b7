//! Reactive state containers shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each container is a plain struct wrapped in an `RwSignal` by `App`.
//! Persistence goes through `util::storage`, never straight to the browser.

pub mod auth;
pub mod demo;
pub mod demo_data;
pub mod notifications;
pub mod remote;
pub mod tutorial;
pub mod tutorial_steps;
pub mod ui;
