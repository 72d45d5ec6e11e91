//! Interactive terminal front-end.
//!
//! [`run`] owns the terminal and the single control loop. Key presses, ticks
//! and task completions are all turned into [`app::Message`] values and fed
//! to [`app::App::update`] one at a time. Background tasks run on short-lived
//! worker threads and report back through an `mpsc` channel; they share no
//! state with the loop other than the message they send.

pub mod app;
pub mod theme;
pub mod view;

use crate::core::{
    error::{PacrepoError, Result},
    load_repositories, run_sync, save_repositories, Settings, SyncCommand,
};
use app::{App, Message, Outcome, Task};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use theme::Theme;

const TICK_RATE: Duration = Duration::from_millis(100);
const FINAL_FRAME_DELAY: Duration = Duration::from_millis(750);

/// What a worker thread needs to run any [`Task`]
#[derive(Debug, Clone)]
struct TaskContext {
    pacman_conf: PathBuf,
    blacklist: Vec<String>,
    sync_command: SyncCommand,
}

impl TaskContext {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            pacman_conf: settings.pacman_conf.clone(),
            blacklist: settings.blacklist(),
            sync_command: settings.sync_command(),
        }
    }

    fn run(&self, task: Task) -> Message {
        match task {
            Task::Load => Message::Loaded(load_repositories(&self.pacman_conf, &self.blacklist)),
            Task::Save(repositories) => Message::Saved(save_repositories(
                &self.pacman_conf,
                &repositories,
                &self.blacklist,
            )),
            Task::Sync => Message::Synced(run_sync(&self.sync_command)),
        }
    }
}

fn spawn_task(task: Task, context: &TaskContext, sender: &Sender<Message>) {
    log::debug!("Starting task {task:?}");
    let context = context.clone();
    let sender = sender.clone();
    thread::spawn(move || {
        let message = context.run(task);
        if sender.send(message).is_err() {
            log::warn!("Control loop exited before a task completed");
        }
    });
}

/// Run the interactive session until the user quits or an operation ends it
pub fn run(settings: &Settings) -> Result<Outcome> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, settings);
    restore_terminal(&mut terminal)?;
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, settings: &Settings) -> Result<Outcome> {
    let theme = Theme::default();
    let context = TaskContext::from_settings(settings);
    let (sender, receiver) = mpsc::channel();
    let mut app = App::new(settings.pacman_conf.clone());

    spawn_task(Task::Load, &context, &sender);
    let mut last_tick = Instant::now();

    while !app.is_done() {
        draw(terminal, &app, &theme)?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout).map_err(PacrepoError::Terminal)? {
            if let Event::Key(key) = event::read().map_err(PacrepoError::Terminal)? {
                if key.kind == KeyEventKind::Press {
                    dispatch(&mut app, Message::Key(key), &context, &sender);
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
            dispatch(&mut app, Message::Tick, &context, &sender);
        }

        drain(&mut app, &receiver, &context, &sender);
    }

    draw(terminal, &app, &theme)?;
    let outcome = app.into_outcome();
    if let Some(delay) = final_frame_delay(&outcome) {
        thread::sleep(delay);
    }
    Ok(outcome)
}

/// How long the last screen stays up. Save results and errors are held so
/// they can be read; a plain quit exits immediately.
fn final_frame_delay(outcome: &Outcome) -> Option<Duration> {
    match outcome {
        Outcome::Cancelled => None,
        Outcome::Saved | Outcome::Synced | Outcome::SyncFailed(_) | Outcome::Failed(_) => {
            Some(FINAL_FRAME_DELAY)
        }
    }
}

fn dispatch(app: &mut App, message: Message, context: &TaskContext, sender: &Sender<Message>) {
    if let Some(task) = app.update(message) {
        spawn_task(task, context, sender);
    }
}

fn drain(app: &mut App, receiver: &Receiver<Message>, context: &TaskContext, sender: &Sender<Message>) {
    while let Ok(message) = receiver.try_recv() {
        dispatch(app, message, context, sender);
    }
}

fn draw(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &App, theme: &Theme) -> Result<()> {
    terminal
        .draw(|frame| view::draw(frame, app, theme))
        .map_err(PacrepoError::Terminal)?;
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().map_err(PacrepoError::Terminal)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(PacrepoError::Terminal)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(PacrepoError::Terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().map_err(PacrepoError::Terminal)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(PacrepoError::Terminal)?;
    terminal.show_cursor().map_err(PacrepoError::Terminal)?;
    Ok(())
}
