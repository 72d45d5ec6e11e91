//! Section header scanning and repository extraction.
//!
//! This module reads `pacman.conf` the way the toggle engine later rewrites it:
//! a line is a section header when, after trimming and removing at most one
//! leading `#`, it is wrapped in `[` and `]`. Commented headers describe
//! disabled repositories, plain headers enabled ones.
//!
//! # Public API
//! - [`SectionHeader`]: A parsed header line
//! - [`parse_header`]: Recognize a header line, commented or not
//! - [`is_excluded`]: `[options]` and blacklisted placeholder sections
//! - [`extract_repositories`]: Every managed repository, in file order
//! - [`load_repositories`]: Read a file from disk and extract from it
//!
//! # Exclusions
//! - **`options`**: pacman's global section, never a repository
//! - **Blacklist**: placeholder sections from the stock example config
//!   (`custom`, `repo-name`), matched case-insensitively

use crate::core::{
    error::{PacrepoError, Result},
    repository::Repository,
};
use std::collections::HashSet;
use std::path::Path;

/// Name of pacman's global options section
pub const OPTIONS_SECTION: &str = "options";

/// Example/placeholder repositories from the stock pacman.conf
pub const DEFAULT_BLACKLIST: &[&str] = &["custom", "repo-name"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader<'a> {
    pub name: &'a str,
    pub commented: bool,
}

/// Parse a section header such as `[core]` or `#[multilib]`.
///
/// Only a single leading `#` is stripped, so `##[core]` is not a header.
/// Surrounding brackets are trimmed greedily, which means `[[core]]` names
/// `core`. Lines that reduce to an empty name, or to a name that is not
/// valid UTF-8, are rejected.
pub fn parse_header(line: &[u8]) -> Option<SectionHeader<'_>> {
    let trimmed = line.trim_ascii();
    let (candidate, commented) = match trimmed.strip_prefix(b"#") {
        Some(rest) => (rest.trim_ascii(), true),
        None => (trimmed, false),
    };

    if !(candidate.starts_with(b"[") && candidate.ends_with(b"]")) {
        return None;
    }

    let mut name = candidate;
    while let [b'[' | b']', rest @ ..] = name {
        name = rest;
    }
    while let [rest @ .., b'[' | b']'] = name {
        name = rest;
    }
    if name.is_empty() {
        return None;
    }

    let name = std::str::from_utf8(name).ok()?;
    Some(SectionHeader { name, commented })
}

/// True for `[options]` and for names on the blacklist (case-insensitive)
pub fn is_excluded<S: AsRef<str>>(name: &str, blacklist: &[S]) -> bool {
    name == OPTIONS_SECTION
        || blacklist
            .iter()
            .any(|blocked| blocked.as_ref().eq_ignore_ascii_case(name))
}

/// Extract every managed repository from the configuration bytes.
///
/// Repositories are returned in the order their headers appear. A name seen
/// twice is reported once, with the state of its first header. Bytes outside
/// header names need not be UTF-8.
pub fn extract_repositories<C, S>(content: C, blacklist: &[S]) -> Vec<Repository>
where
    C: AsRef<[u8]>,
    S: AsRef<str>,
{
    let mut repositories = Vec::new();
    let mut seen = HashSet::new();

    for (index, line) in content.as_ref().split(|&byte| byte == b'\n').enumerate() {
        let trimmed = line.trim_ascii();
        if trimmed.is_empty() || !trimmed.contains(&b'[') {
            continue;
        }

        let Some(header) = parse_header(trimmed) else {
            continue;
        };

        if is_excluded(header.name, blacklist) {
            log::debug!("Skipping excluded section [{}] on line {}", header.name, index + 1);
            continue;
        }

        if !seen.insert(header.name) {
            log::debug!(
                "Duplicate section [{}] on line {}, keeping first occurrence",
                header.name,
                index + 1
            );
            continue;
        }

        repositories.push(Repository::new(header.name, !header.commented));
    }

    repositories
}

/// Read `path` and extract its repositories
pub fn load_repositories<S: AsRef<str>>(path: &Path, blacklist: &[S]) -> Result<Vec<Repository>> {
    log::debug!("Reading repositories from {}", path.display());
    let content = std::fs::read(path).map_err(|e| PacrepoError::from_read_error(path, e))?;

    let repositories = extract_repositories(&content, blacklist);
    log::debug!(
        "Found {} repositories in {}",
        repositories.len(),
        path.display()
    );
    Ok(repositories)
}
