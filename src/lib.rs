//! pacrepo - toggle pacman repositories from the terminal.
//!
//! This library provides the pieces behind the `pacrepo` binary: reading the
//! repository sections of `pacman.conf`, commenting or uncommenting whole
//! sections while leaving every other byte alone, writing the result back and
//! refreshing the package databases.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Repository extraction and section header parsing
//! - The section toggle engine and the line store it mutates
//! - The configuration writer and database refresh command
//! - Error handling and result types

pub mod commands;
pub mod core;
pub mod tui;

// Re-export the core public API for external users
pub use core::{
    // Toggle engine
    apply_states,
    // Extraction
    extract_repositories,
    load_repositories,
    parse_header,
    // Saving
    save_repositories,
    toggle_section,
    write_config,

    PacmanConf,
    // Error handling
    PacrepoError,
    Repository,
    Result,

    Settings,
    SyncCommand,
};
