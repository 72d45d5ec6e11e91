use crate::core::{ensure_root, error::Result, Settings};
use crate::tui::{self, app::Outcome};

/// Launch the terminal UI and report how the session ended
pub fn execute_interactive(settings: &Settings) -> Result<Outcome> {
    ensure_root()?;
    log::info!("Starting interactive session for {}", settings.pacman_conf.display());
    let outcome = tui::run(settings)?;
    log::info!("Interactive session finished: {outcome:?}");
    Ok(outcome)
}
