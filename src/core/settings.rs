//! User settings.
//!
//! Settings live in `<config dir>/pacrepo/config.json` and are entirely
//! optional: a missing file means defaults. The file is never created by
//! pacrepo itself. Every field may be omitted.
//!
//! ```json
//! {
//!   "pacman_conf": "/etc/pacman.conf",
//!   "sync_command": ["pacman", "-Sy"],
//!   "extra_blacklist": ["chaotic-aur"]
//! }
//! ```

use crate::core::{
    dirs::get_config_directory,
    error::{PacrepoError, Result},
    pacman_conf::DEFAULT_PACMAN_CONF,
    parser::DEFAULT_BLACKLIST,
    sync::SyncCommand,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub pacman_conf: PathBuf,
    pub sync_command: Vec<String>,
    pub extra_blacklist: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pacman_conf: PathBuf::from(DEFAULT_PACMAN_CONF),
            sync_command: vec!["pacman".to_string(), "-Sy".to_string()],
            extra_blacklist: Vec::new(),
        }
    }
}

impl Settings {
    pub fn settings_path() -> PathBuf {
        get_config_directory().join("config.json")
    }

    pub fn load_or_default() -> Result<Self> {
        Self::load_from(&Self::settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| PacrepoError::settings_read_failed(path, e))?;
        let settings = serde_json::from_str(&content)
            .map_err(|e| PacrepoError::settings_parse_failed(path, e))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Builtin placeholder names plus any configured extras
    pub fn blacklist(&self) -> Vec<String> {
        DEFAULT_BLACKLIST
            .iter()
            .map(|name| name.to_string())
            .chain(self.extra_blacklist.iter().cloned())
            .collect()
    }

    /// The refresh command, falling back to `pacman -Sy` when left empty
    pub fn sync_command(&self) -> SyncCommand {
        SyncCommand::from_argv(&self.sync_command).unwrap_or_default()
    }
}
