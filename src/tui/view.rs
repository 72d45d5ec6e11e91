use crate::tui::app::{App, Outcome, Phase};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const HELP: [&str; 2] = [
    "↑/↓: navigate • space/enter: toggle • q: quit",
    "s: save & quit • w: save, sync & quit",
];

pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();
    match app.phase() {
        Phase::Done(outcome) => draw_outcome(frame, area, outcome, theme),
        Phase::Loading => draw_busy(
            frame,
            area,
            app,
            &format!("Loading {}...", app.config_path().display()),
            theme,
        ),
        Phase::Saving(_) | Phase::Syncing => draw_busy(frame, area, app, app.status(), theme),
        Phase::Browsing => draw_browser(frame, area, app, theme),
    }
}

/// Final message for a finished session
pub fn outcome_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Cancelled => "Quit without saving.".to_string(),
        Outcome::Saved => "Save successful! Quitting.".to_string(),
        Outcome::Synced => "Saved and synchronized successfully! Quitting.".to_string(),
        Outcome::SyncFailed(e) => format!("Saved, but failed to sync: {e}"),
        Outcome::Failed(e) => format!("An error occurred: {e}"),
    }
}

fn draw_outcome(frame: &mut Frame, area: Rect, outcome: &Outcome, theme: &Theme) {
    let style = match outcome {
        Outcome::SyncFailed(_) | Outcome::Failed(_) => theme.error,
        _ => theme.item,
    };
    let text: Vec<Line> = outcome_message(outcome)
        .lines()
        .map(|line| Line::styled(line.to_string(), style))
        .collect();
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: false }),
        inset(area),
    );
}

fn draw_busy(frame: &mut Frame, area: Rect, app: &App, message: &str, theme: &Theme) {
    let line = Line::from(vec![
        Span::raw("   "),
        Span::styled(app.spinner(), theme.spinner),
        Span::raw(" "),
        Span::styled(message.to_string(), theme.item),
    ]);
    frame.render_widget(Paragraph::new(line), inset(area));
}

fn draw_browser(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let [title_area, list_area, help_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(3),
        Constraint::Length(2),
    ])
    .areas(inset(area));

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" pacrepo ", theme.title))),
        title_area,
    );

    let rows: Vec<Line> = app
        .repositories()
        .iter()
        .enumerate()
        .map(|(index, repository)| {
            let selected = index == app.cursor();
            let (cursor, row_style) = if selected {
                ("  ❯ ", theme.selected)
            } else {
                ("    ", theme.item)
            };
            let status = if repository.enabled {
                Span::styled("[✓] Enabled", theme.enabled)
            } else {
                Span::styled("[✗] Disabled", theme.disabled)
            };
            Line::from(vec![
                Span::styled(format!("{cursor}[{}] ", repository.name), row_style),
                status,
            ])
        })
        .collect();

    let visible = usize::from(list_area.height.max(1));
    let offset = (app.cursor() + 1).saturating_sub(visible);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(rows).scroll((offset, 0)), list_area);

    let help: Vec<Line> = std::iter::once(Line::raw(""))
        .chain(HELP.iter().map(|line| Line::styled(*line, theme.help)))
        .collect();
    frame.render_widget(Paragraph::new(help), help_area);

    if !app.status().is_empty() {
        frame.render_widget(
            Paragraph::new(Line::raw(app.status().to_string())).wrap(Wrap { trim: true }),
            status_area,
        );
    }
}

fn inset(area: Rect) -> Rect {
    let [inner] = Layout::vertical([Constraint::Min(0)])
        .horizontal_margin(2)
        .vertical_margin(1)
        .areas(area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{error::PacrepoError, Repository};
    use crate::tui::app::Message;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 16)).unwrap();
        terminal
            .draw(|frame| draw(frame, app, &Theme::default()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_loading_screen() {
        let app = App::new(PathBuf::from("/etc/pacman.conf"));
        assert!(render(&app).contains("Loading /etc/pacman.conf..."));
    }

    #[test]
    fn test_browser_lists_repositories() {
        let mut app = App::new(PathBuf::from("/etc/pacman.conf"));
        app.update(Message::Loaded(Ok(vec![
            Repository::new("core", true),
            Repository::new("multilib", false),
        ])));

        let screen = render(&app);
        assert!(screen.contains("pacrepo"));
        assert!(screen.contains("❯ [core] [✓] Enabled"));
        assert!(screen.contains("[multilib] [✗] Disabled"));
        assert!(screen.contains("s: save & quit"));
        assert!(screen.contains("Loaded repositories."));
    }

    #[test]
    fn test_error_screen() {
        let mut app = App::new(PathBuf::from("/etc/pacman.conf"));
        app.update(Message::Loaded(Err(PacrepoError::ConfigNotFound {
            path: PathBuf::from("/etc/pacman.conf"),
        })));
        assert!(render(&app).contains("An error occurred: pacman config not found"));
    }
}
