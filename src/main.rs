use clap::{Parser, Subcommand};
use env_logger::Target;
use log::LevelFilter;
use pacrepo::commands::*;
use pacrepo::core::{
    dirs::get_cache_directory,
    error::{PacrepoError, Result},
    print_error, print_info, print_success, print_warning, Settings,
};
use pacrepo::tui::{app::Outcome, view::outcome_message};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

const LOG_FILE: &str = "pacrepo.log";

#[derive(Parser)]
#[command(name = "pacrepo")]
#[command(about = "A TUI to toggle pacman repositories")]
#[command(
    long_about = "pacrepo provides a simple terminal user interface to toggle your pacman repositories on or off."
)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to pacman.conf (overrides the settings file)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive repository list (default)
    Tui,
    /// Print repositories and whether they are enabled
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Enable repositories by name
    Enable {
        /// Repository names (e.g., "multilib core-testing")
        names: Vec<String>,
        /// Run the database refresh after saving
        #[arg(long)]
        sync: bool,
    },
    /// Disable repositories by name
    Disable {
        /// Repository names (e.g., "multilib core-testing")
        names: Vec<String>,
        /// Run the database refresh after saving
        #[arg(long)]
        sync: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);
    init_logging(cli.debug, matches!(command, Commands::Tui));

    match run(command, cli.config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }
}

/// Returns whether the command finished cleanly
fn run(command: Commands, config: Option<PathBuf>) -> Result<bool> {
    let mut settings = Settings::load_or_default()?;
    if let Some(path) = config {
        settings.pacman_conf = path;
    }

    match command {
        Commands::Tui => execute_interactive(&settings).map(|outcome| report_outcome(&outcome)),
        Commands::List { json } => execute_list(&settings, json).map(|()| true),
        Commands::Enable { names, sync } => execute_enable(&settings, names, sync).map(|()| true),
        Commands::Disable { names, sync } => {
            execute_disable(&settings, names, sync).map(|()| true)
        }
    }
}

fn report_outcome(outcome: &Outcome) -> bool {
    let message = outcome_message(outcome);
    match outcome {
        Outcome::Cancelled => {
            print_info(&message);
            true
        }
        Outcome::Saved | Outcome::Synced => {
            print_success(&message);
            true
        }
        Outcome::SyncFailed(_) => {
            print_warning(&message);
            false
        }
        Outcome::Failed(_) => {
            print_error(&message);
            false
        }
    }
}

fn report_error(error: &PacrepoError) {
    print_error(&error.to_string());
    if let PacrepoError::NotRoot = error {
        println!("Please try: sudo pacrepo");
    }
}

fn init_logging(debug: bool, interactive: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(if debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env();

    // The alternate screen owns the terminal while the TUI runs
    if interactive {
        builder.target(log_target(open_log_file(&get_cache_directory())));
    }

    builder.init();
}

fn open_log_file(log_dir: &Path) -> Option<File> {
    std::fs::create_dir_all(log_dir)
        .and_then(|()| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_dir.join(LOG_FILE))
        })
        .ok()
}

/// Log into `file`, or discard everything when no file could be opened
fn log_target(file: Option<File>) -> Target {
    match file {
        Some(file) => Target::Pipe(Box::new(file)),
        None => Target::Pipe(Box::new(io::sink())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("cache").join("pacrepo");

        assert!(open_log_file(&log_dir).is_some());
        assert!(log_dir.join(LOG_FILE).exists());
    }

    #[test]
    fn test_unwritable_log_dir_never_targets_terminal() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-directory");
        std::fs::write(&blocker, "").unwrap();

        let file = open_log_file(&blocker.join("pacrepo"));

        assert!(file.is_none());
        assert!(matches!(log_target(file), Target::Pipe(_)));
    }
}
