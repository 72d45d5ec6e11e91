//! Core functionality for the pacrepo tool.
//!
//! This module provides the building blocks shared by the CLI commands and
//! the terminal UI: reading and rewriting `pacman.conf`, the database
//! refresh, settings and error handling.

pub mod dirs;
pub mod error;
pub mod output;
pub mod pacman_conf;
pub mod parser;
pub mod privileges;
pub mod repository;
pub mod settings;
pub mod sync;
pub mod toggle;
pub mod writer;

// === Error handling ===
pub use error::{PacrepoError, Result};

// === Repository records ===
pub use repository::{desired_states, Repository};

// === Reading pacman.conf ===
// Header recognition and extraction of (name, enabled) records
pub use parser::{
    extract_repositories, is_excluded, load_repositories, parse_header, SectionHeader,
    DEFAULT_BLACKLIST, OPTIONS_SECTION,
};

// === Rewriting pacman.conf ===
pub use pacman_conf::{save_repositories, PacmanConf, DEFAULT_PACMAN_CONF};
pub use toggle::{apply_states, toggle_section, RECOGNIZED_KEYWORDS};
pub use writer::write_config;

// === Process environment ===
pub use privileges::{ensure_root, is_root};
pub use settings::Settings;
pub use sync::{run_sync, SyncCommand};

// === Output formatting ===
pub use output::{
    format_repository_line, print_error, print_info, print_section_header, print_success,
    print_warning,
};
