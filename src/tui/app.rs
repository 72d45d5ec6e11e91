//! Interactive application state and its update function.
//!
//! The terminal UI follows a message-driven design: every input (a key press,
//! a spinner tick, the completion of a background task) arrives as a
//! [`Message`], and [`App::update`] is the only place state changes. Work that
//! touches the file system or spawns processes is never done inside `update`;
//! it returns a [`Task`] that the event loop runs on a worker thread, whose
//! result comes back as another message.
//!
//! # Lifecycle
//! 1. **Loading**: repositories are read from `pacman.conf`
//! 2. **Browsing**: the user moves the cursor and toggles entries
//! 3. **Saving**: the file is rewritten; toggling and saving are disabled
//! 4. **Syncing**: optional `pacman -Sy` after a successful save
//! 5. **Done**: an [`Outcome`] is recorded and the loop exits

use crate::core::{error::PacrepoError, Repository};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

const SPINNER_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Everything the control loop can deliver to [`App::update`]
#[derive(Debug)]
pub enum Message {
    Key(KeyEvent),
    Tick,
    Loaded(crate::core::Result<Vec<Repository>>),
    Saved(crate::core::Result<()>),
    Synced(crate::core::Result<()>),
}

/// One-shot background work requested by [`App::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Load,
    Save(Vec<Repository>),
    Sync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSave {
    Quit,
    Sync,
}

/// How the session ended
#[derive(Debug)]
pub enum Outcome {
    Cancelled,
    Saved,
    Synced,
    SyncFailed(PacrepoError),
    Failed(PacrepoError),
}

#[derive(Debug)]
pub enum Phase {
    Loading,
    Browsing,
    Saving(AfterSave),
    Syncing,
    Done(Outcome),
}

#[derive(Debug)]
pub struct App {
    config_path: PathBuf,
    repositories: Vec<Repository>,
    cursor: usize,
    status: String,
    phase: Phase,
    spinner_frame: usize,
}

impl App {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            config_path,
            repositories: Vec::new(),
            cursor: 0,
            status: String::new(),
            phase: Phase::Loading,
            spinner_frame: 0,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done(_))
    }

    /// Consume the app once the loop is over
    pub fn into_outcome(self) -> Outcome {
        match self.phase {
            Phase::Done(outcome) => outcome,
            _ => Outcome::Cancelled,
        }
    }

    pub fn update(&mut self, message: Message) -> Option<Task> {
        if self.is_done() {
            return None;
        }

        match message {
            Message::Tick => {
                self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
                None
            }
            Message::Key(key) => self.handle_key(key),
            Message::Loaded(result) => {
                self.handle_loaded(result);
                None
            }
            Message::Saved(result) => self.handle_saved(result),
            Message::Synced(result) => {
                self.phase = Phase::Done(match result {
                    Ok(()) => Outcome::Synced,
                    Err(e) => Outcome::SyncFailed(e),
                });
                None
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Task> {
        let is_quit = matches!(key.code, KeyCode::Char('q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));

        match self.phase {
            Phase::Loading | Phase::Browsing if is_quit => {
                self.phase = Phase::Done(Outcome::Cancelled);
                None
            }
            Phase::Browsing => self.handle_browsing_key(key),
            // No cancellation while a save or sync is running
            _ => None,
        }
    }

    fn handle_browsing_key(&mut self, key: KeyEvent) -> Option<Task> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.repositories.len() {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(repository) = self.repositories.get_mut(self.cursor) {
                    repository.toggle();
                    self.status = format!("Toggled {}. Press 's' to save.", repository.name);
                }
                None
            }
            KeyCode::Char('s') => Some(self.start_save(AfterSave::Quit)),
            KeyCode::Char('w') => Some(self.start_save(AfterSave::Sync)),
            _ => None,
        }
    }

    fn start_save(&mut self, then: AfterSave) -> Task {
        self.phase = Phase::Saving(then);
        self.status = format!("Saving changes to {}...", self.config_path.display());
        Task::Save(self.repositories.clone())
    }

    fn handle_loaded(&mut self, result: crate::core::Result<Vec<Repository>>) {
        match result {
            Ok(repositories) => {
                self.status = if repositories.is_empty() {
                    format!("No repositories found in {}.", self.config_path.display())
                } else {
                    "Loaded repositories.".to_string()
                };
                self.repositories = repositories;
                self.cursor = 0;
                self.phase = Phase::Browsing;
            }
            Err(e) => self.phase = Phase::Done(Outcome::Failed(e)),
        }
    }

    fn handle_saved(&mut self, result: crate::core::Result<()>) -> Option<Task> {
        let then = match self.phase {
            Phase::Saving(then) => then,
            _ => {
                log::warn!("Ignoring save completion outside of a save");
                return None;
            }
        };

        match (result, then) {
            (Err(e), _) => {
                self.phase = Phase::Done(Outcome::Failed(e));
                None
            }
            (Ok(()), AfterSave::Quit) => {
                self.status = "Save successful! Quitting.".to_string();
                self.phase = Phase::Done(Outcome::Saved);
                None
            }
            (Ok(()), AfterSave::Sync) => {
                self.status = "Save successful! Synchronizing...".to_string();
                self.phase = Phase::Syncing;
                Some(Task::Sync)
            }
        }
    }
}
