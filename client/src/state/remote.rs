//! Load state for data fetched from the backend.
//!
//! A page starts `Pending`, then lands on `Ready` or `Failed`. "Loaded but the
//! section is absent" and "failed to load" are different states that happen to
//! render the same hardcoded defaults.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use crate::net::types::{ContentBlock, FrontendContent};

#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Pending,
    Ready(T),
    Failed,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> Remote<T> {
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        result.map_or(Self::Failed, Self::Ready)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending | Self::Failed => None,
        }
    }
}

impl Remote<FrontendContent> {
    /// Server block for `section`, if content loaded and carries it.
    pub fn section(&self, section: &str) -> Option<&ContentBlock> {
        self.ready()?.get(section)
    }

    /// Resolve one text field of a page section.
    ///
    /// `None` while pending so the page renders nothing instead of flashing
    /// defaults. Once loaded, a present section wins even if the field is
    /// empty; a missing section or a failed load falls back to `default`.
    pub fn resolve_text(&self, section: &str, field: &str, default: &str) -> Option<String> {
        match self {
            Self::Pending => None,
            Self::Ready(content) => Some(match content.get(section) {
                Some(block) => block.text(field).unwrap_or_default().to_owned(),
                None => default.to_owned(),
            }),
            Self::Failed => Some(default.to_owned()),
        }
    }

    /// List-valued counterpart of [`Remote::resolve_text`].
    pub fn resolve_list(&self, section: &str, field: &str, default: &[&str]) -> Option<Vec<String>> {
        let fallback = || default.iter().map(|s| (*s).to_owned()).collect();
        match self {
            Self::Pending => None,
            Self::Ready(content) => Some(match content.get(section) {
                Some(block) => block.list(field).unwrap_or_default(),
                None => fallback(),
            }),
            Self::Failed => Some(fallback()),
        }
    }
}
