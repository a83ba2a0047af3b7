//! Demo mode: a client-only sandbox that swaps backend data for fixtures.
//!
//! Every mutation is mirrored to storage so a reload lands in the same
//! persona. Lookups are synchronous and never touch the network.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use std::fmt;
use std::str::FromStr;

use crate::config::{STORAGE_DEMO_ACCOUNT_TYPE, STORAGE_DEMO_MODE};
use crate::state::demo_data;
use crate::util::storage::{KeyValueStore, load_flag, save_flag};

/// Sample account shown while demo mode is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Persona {
    #[default]
    Individual,
    Family,
    Business,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Individual, Persona::Family, Persona::Business];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Family => "family",
            Self::Business => "business",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Family => "Family",
            Self::Business => "Business",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "individual" => Ok(Self::Individual),
            "family" => Ok(Self::Family),
            "business" => Ok(Self::Business),
            other => Err(format!("unknown demo persona: {other}")),
        }
    }
}

/// Demo flag plus selected persona.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoState {
    pub active: bool,
    pub persona: Persona,
}

impl DemoState {
    /// Restore from storage. An unreadable persona falls back to individual.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let active = load_flag(store, STORAGE_DEMO_MODE).unwrap_or(false);
        let persona = store
            .get(STORAGE_DEMO_ACCOUNT_TYPE)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Self { active, persona }
    }

    pub fn enable(&mut self, persona: Persona, store: &dyn KeyValueStore) {
        self.active = true;
        self.persona = persona;
        self.persist(store);
    }

    pub fn disable(&mut self, store: &dyn KeyValueStore) {
        self.active = false;
        self.persist(store);
    }

    pub fn toggle(&mut self, store: &dyn KeyValueStore) {
        self.active = !self.active;
        self.persist(store);
    }

    pub fn set_persona(&mut self, persona: Persona, store: &dyn KeyValueStore) {
        self.persona = persona;
        self.persist(store);
    }

    /// Full fixture record for the current persona, or one named section.
    pub fn get_data(&self, section: Option<&str>) -> Option<serde_json::Value> {
        demo_data::lookup(self.persona.as_str(), section)
    }

    fn persist(&self, store: &dyn KeyValueStore) {
        save_flag(store, STORAGE_DEMO_MODE, self.active);
        store.set(STORAGE_DEMO_ACCOUNT_TYPE, self.persona.as_str());
    }
}
