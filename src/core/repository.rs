//! Repository records surfaced to the user interface.
//!
//! A [`Repository`] is the in-memory view of one `[section]` of `pacman.conf`:
//! its name and whether the header is currently active. Records are created by
//! the extractor, flipped by the UI and handed back to the toggle engine as a
//! desired-state map when saving.

use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub name: String,
    pub enabled: bool,
}

impl Repository {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }

    /// Flip the enabled flag in place
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

/// Build the name -> enabled map consumed by the toggle engine.
///
/// When a name appears more than once the first record wins, mirroring the
/// order in which the extractor reports headers.
pub fn desired_states(repositories: &[Repository]) -> HashMap<String, bool> {
    let mut states = HashMap::with_capacity(repositories.len());
    for repository in repositories {
        states
            .entry(repository.name.clone())
            .or_insert(repository.enabled);
    }
    states
}
