//! Package database refresh after a save.
//!
//! Runs the configured refresh command (`pacman -Sy` by default) and captures
//! its standard output and error so a failure can be shown verbatim. There is
//! no timeout: a hung subprocess blocks the caller until it exits.

use crate::core::error::{PacrepoError, Result};
use std::fmt;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for SyncCommand {
    fn default() -> Self {
        Self {
            program: "pacman".to_string(),
            args: vec!["-Sy".to_string()],
        }
    }
}

impl SyncCommand {
    /// Build from an argv-style list; `None` when the list is empty
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl fmt::Display for SyncCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

pub fn run_sync(command: &SyncCommand) -> Result<()> {
    log::info!("Running `{command}`");

    let output = Command::new(&command.program)
        .args(&command.args)
        .output()
        .map_err(|e| PacrepoError::sync_spawn_failed(command.to_string(), e))?;

    if !output.status.success() {
        let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
        captured.push_str(&String::from_utf8_lossy(&output.stderr));
        log::error!("`{command}` exited with {}", output.status);
        return Err(PacrepoError::sync_failed(
            command.to_string(),
            output.status,
            captured,
        ));
    }

    log::debug!("`{command}` finished successfully");
    Ok(())
}
