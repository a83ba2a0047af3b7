//! Dark mode initialization and toggle.
//!
//! Reads the stored preference and applies a `data-theme` attribute to the
//! `<html>` element. Toggle writes back through the injected store and updates
//! that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::STORAGE_DARK_MODE;
use crate::util::storage::{KeyValueStore, load_flag, save_flag};

/// Stored preference, else the system color scheme, else light.
pub fn read_preference(store: &dyn KeyValueStore) -> bool {
    if let Some(stored) = load_flag(store, STORAGE_DARK_MODE) {
        return stored;
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool, store: &dyn KeyValueStore) -> bool {
    let next = !current;
    apply(next);
    save_flag(store, STORAGE_DARK_MODE, next);
    next
}
