//! Shared test utilities for pacrepo integration tests
//!
//! Provides temporary pacman.conf files, canned configuration fixtures and
//! output predicates for driving the `pacrepo` binary.

pub mod assertions;
pub mod config_file;
pub mod fixtures;
