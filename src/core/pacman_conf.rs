//! In-memory line store for `pacman.conf`.
//!
//! [`PacmanConf`] holds the file as an ordered list of raw byte lines. Lines
//! are split on `\n` only, so a trailing newline becomes a trailing empty line
//! and `\r` stays attached to its line; joining with `\n` reproduces the
//! original bytes exactly when nothing was toggled. Content is never decoded,
//! so comments in any encoding survive a save.

use crate::core::{
    error::{PacrepoError, Result},
    parser::extract_repositories,
    repository::{desired_states, Repository},
    toggle::apply_states,
    writer::write_config,
};
use std::path::{Path, PathBuf};

/// Default location of the pacman configuration file
pub const DEFAULT_PACMAN_CONF: &str = "/etc/pacman.conf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacmanConf {
    path: PathBuf,
    lines: Vec<Vec<u8>>,
}

impl PacmanConf {
    /// Read the configuration file at `path`
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read(&path).map_err(|e| PacrepoError::from_read_error(&path, e))?;
        Ok(Self::from_content(path, content))
    }

    /// Build a line store from content already in memory
    pub fn from_content(path: impl Into<PathBuf>, content: impl AsRef<[u8]>) -> Self {
        Self {
            path: path.into(),
            lines: content
                .as_ref()
                .split(|&byte| byte == b'\n')
                .map(<[u8]>::to_vec)
                .collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    pub fn repositories<S: AsRef<str>>(&self, blacklist: &[S]) -> Vec<Repository> {
        extract_repositories(&self.render(), blacklist)
    }

    /// Toggle every section named in `repositories` to its requested state.
    ///
    /// Returns the number of lines rewritten.
    pub fn apply<S: AsRef<str>>(&mut self, repositories: &[Repository], blacklist: &[S]) -> usize {
        let desired = desired_states(repositories);
        apply_states(&mut self.lines, &desired, blacklist)
    }

    pub fn render(&self) -> Vec<u8> {
        self.lines.join(&b'\n')
    }

    pub fn save(&self) -> Result<()> {
        write_config(&self.path, &self.render())
    }
}

/// Re-read `path`, apply the requested states and write the result back.
pub fn save_repositories<S: AsRef<str>>(
    path: &Path,
    repositories: &[Repository],
    blacklist: &[S],
) -> Result<()> {
    let mut conf = PacmanConf::load(path)?;
    let changed = conf.apply(repositories, blacklist);
    log::info!(
        "Saving {} repositories to {} ({} line(s) changed)",
        repositories.len(),
        path.display(),
        changed
    );
    conf.save()
}
