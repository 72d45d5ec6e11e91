//! Temporary pacman.conf management
//!
//! Each test gets its own directory containing a `pacman.conf` and an empty
//! XDG config home, so no user settings leak into the run.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A pacman.conf inside a temporary directory. The TempDir must be kept
/// alive for the duration of the test to prevent cleanup.
pub struct TestConfig {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestConfig {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current file content
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("pacman.conf should be readable")
    }

    /// Current file content, undecoded
    pub fn read_bytes(&self) -> Vec<u8> {
        fs::read(&self.path).expect("pacman.conf should be readable")
    }

    /// A `pacrepo` invocation pointed at this file with isolated settings
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("pacrepo")?;
        cmd.arg("--config")
            .arg(&self.path)
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env("XDG_CACHE_HOME", self.temp_dir.path().join("cache"))
            .env("NO_COLOR", "1");
        Ok(cmd)
    }
}

/// Write `content` to a fresh temporary pacman.conf
pub fn setup_config(content: impl AsRef<[u8]>) -> anyhow::Result<TestConfig> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("pacman.conf");
    fs::write(&path, content)?;
    Ok(TestConfig { temp_dir, path })
}

/// A temporary directory whose pacman.conf does not exist
pub fn setup_missing_config() -> anyhow::Result<TestConfig> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("pacman.conf");
    Ok(TestConfig { temp_dir, path })
}

/// True when the tests run with an effective uid of 0
pub fn running_as_root() -> bool {
    pacrepo::core::is_root()
}
