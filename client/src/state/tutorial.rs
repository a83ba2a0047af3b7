//! Guided-tour state machine.
//!
//! idle -> active(step 0..N) -> idle. Finishing a tour by any route records
//! `{user_type}_{tutorial_id}` in the persisted completed set, and a completed
//! tour refuses to start again until `reset`.
//!
//! `skip` and `complete` are intentionally the same transition: a skipped
//! tour is not offered again either.

#[cfg(test)]
#[path = "tutorial_test.rs"]
mod tutorial_test;

use std::collections::BTreeSet;

use crate::config::STORAGE_COMPLETED_TUTORIALS;
use crate::state::tutorial_steps::{TutorialStep, steps_for};
use crate::util::storage::{KeyValueStore, load_json, save_json};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TutorialError {
    #[error("tutorial already completed: {0}")]
    AlreadyCompleted(String),
    #[error("unknown tutorial: {0}")]
    UnknownTutorial(String),
}

/// Composite key identifying one completable tour instance.
pub fn tutorial_key(user_type: &str, tutorial_id: &str) -> String {
    format!("{user_type}_{tutorial_id}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveTutorial {
    pub tutorial_id: String,
    pub user_type: String,
    pub step: usize,
    steps: &'static [TutorialStep],
}

impl ActiveTutorial {
    pub fn key(&self) -> String {
        tutorial_key(&self.user_type, &self.tutorial_id)
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    fn is_last(&self) -> bool {
        self.step + 1 >= self.steps.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TutorialState {
    pub active: Option<ActiveTutorial>,
    pub completed: BTreeSet<String>,
}

impl TutorialState {
    /// Idle state with the persisted completed set.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let completed = load_json::<Vec<String>>(store, STORAGE_COMPLETED_TUTORIALS)
            .unwrap_or_default()
            .into_iter()
            .collect();
        Self { active: None, completed }
    }

    pub fn is_completed(&self, tutorial_id: &str, user_type: &str) -> bool {
        self.completed.contains(&tutorial_key(user_type, tutorial_id))
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a tour at step 0.
    ///
    /// # Errors
    ///
    /// Fails without changing state if the tour was already completed for this
    /// user type or has no step table.
    pub fn start(&mut self, tutorial_id: &str, user_type: &str) -> Result<(), TutorialError> {
        let key = tutorial_key(user_type, tutorial_id);
        if self.completed.contains(&key) {
            return Err(TutorialError::AlreadyCompleted(key));
        }
        let steps = steps_for(tutorial_id)
            .filter(|steps| !steps.is_empty())
            .ok_or_else(|| TutorialError::UnknownTutorial(tutorial_id.to_owned()))?;
        self.active = Some(ActiveTutorial {
            tutorial_id: tutorial_id.to_owned(),
            user_type: user_type.to_owned(),
            step: 0,
            steps,
        });
        Ok(())
    }

    /// Advance one step; past the last step this completes the tour.
    pub fn next(&mut self, store: &dyn KeyValueStore) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.is_last() {
            self.complete(store);
        } else {
            active.step += 1;
        }
    }

    pub fn prev(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.step = active.step.saturating_sub(1);
        }
    }

    pub fn skip(&mut self, store: &dyn KeyValueStore) {
        self.complete(store);
    }

    pub fn complete(&mut self, store: &dyn KeyValueStore) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.completed.insert(active.key());
        self.persist(store);
    }

    /// Forget completion so the tour can be offered again.
    pub fn reset(&mut self, tutorial_id: &str, user_type: &str, store: &dyn KeyValueStore) {
        if self.completed.remove(&tutorial_key(user_type, tutorial_id)) {
            self.persist(store);
        }
    }

    pub fn current_step(&self) -> Option<&'static TutorialStep> {
        let active = self.active.as_ref()?;
        active.steps.get(active.step)
    }

    /// `(1-based step, total)` of the active tour.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.active.as_ref().map(|a| (a.step + 1, a.total()))
    }

    fn persist(&self, store: &dyn KeyValueStore) {
        let keys: Vec<&String> = self.completed.iter().collect();
        save_json(store, STORAGE_COMPLETED_TUTORIALS, &keys);
    }
}
