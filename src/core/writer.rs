//! Persisting the rewritten configuration.
//!
//! The new content is first staged in a temporary file under the system temp
//! directory, so a failure to produce the bytes at all never reaches the real
//! file. The destination is then overwritten in place rather than renamed
//! over, which keeps its ownership and mode but means an interrupted final
//! write can still truncate it.

use crate::core::error::{PacrepoError, Result};
use std::io::Write;
use std::path::Path;

const TEMP_PREFIX: &str = "pacman.conf-";

/// Stage `content` in a temp file, then overwrite `path` with it.
///
/// The temp file is always removed afterwards; failing to remove it is
/// logged and otherwise ignored.
pub fn write_config(path: &Path, content: &[u8]) -> Result<()> {
    let mut staged = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(std::env::temp_dir())
        .map_err(PacrepoError::temp_file_failed)?;

    log::debug!("Staging {} bytes in {}", content.len(), staged.path().display());

    let result = staged
        .write_all(content)
        .and_then(|()| staged.flush())
        .map_err(PacrepoError::temp_file_failed)
        .and_then(|()| {
            std::fs::write(path, content).map_err(|e| PacrepoError::write_failed(path, e))
        });

    let staged_path = staged.path().to_path_buf();
    if let Err(e) = staged.close() {
        log::warn!(
            "Failed to remove temporary file {}: {e}",
            staged_path.display()
        );
    }

    if result.is_ok() {
        log::info!("Wrote {}", path.display());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_overwrites_destination() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pacman.conf");
        std::fs::write(&path, "[core]\nInclude = /etc/pacman.d/mirrorlist\n").unwrap();

        write_config(&path, b"# [core]\n# Include = /etc/pacman.d/mirrorlist\n")?;

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "# [core]\n# Include = /etc/pacman.d/mirrorlist\n");
        Ok(())
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("pacman.conf");

        let result = write_config(&path, b"[core]\n");
        match result {
            Err(PacrepoError::WriteFailed { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected WriteFailed, got {other:?}"),
        }
    }
}
