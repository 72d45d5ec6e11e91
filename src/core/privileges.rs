use crate::core::error::{PacrepoError, Result};

/// Check if running as root
pub fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

/// Refuse to continue unless the effective user is root
pub fn ensure_root() -> Result<()> {
    if is_root() {
        Ok(())
    } else {
        log::debug!("Effective uid is not 0, refusing to modify the configuration");
        Err(PacrepoError::NotRoot)
    }
}
