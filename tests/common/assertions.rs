//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating pacrepo command output and error
//! messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Checks for an enabled repository line
pub fn has_enabled(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[✓] {name}"))
}

/// Checks for a disabled repository line
pub fn has_disabled(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[✗] {name}"))
}

/// Checks that a repository name is not listed at all
pub fn lacks_repository(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!(" {name}\n")).not()
}

/// Checks for the missing configuration message
pub fn config_not_found() -> impl Predicate<str> {
    predicates::str::contains("pacman config not found")
}

/// Checks for the root privilege guidance
pub fn needs_root() -> impl Predicate<str> {
    predicates::str::contains("must be run as root")
}
