//! Component lifetime token for async callbacks.
//!
//! A fetch spawned from a component may resolve after the component is gone.
//! Every callback that writes a signal checks [`Liveness::is_alive`] first.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Whether a response for `requested` may still be written, given the
    /// key the component is showing now.
    pub fn accepts<K: PartialEq + ?Sized>(&self, current: &K, requested: &K) -> bool {
        self.is_alive() && current == requested
    }
}

/// A token that dies when the current reactive owner is cleaned up.
pub fn use_liveness() -> Liveness {
    let token = Liveness::default();
    let on_drop = token.clone();
    leptos::prelude::on_cleanup(move || on_drop.kill());
    token
}
