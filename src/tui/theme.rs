//! Styles used by the terminal UI.
//!
//! A [`Theme`] is built once at startup and handed to the renderer; nothing
//! here is global or mutable.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub title: Style,
    pub item: Style,
    pub selected: Style,
    pub enabled: Style,
    pub disabled: Style,
    pub help: Style,
    pub spinner: Style,
    pub error: Style,
}

fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(hex((0xff, 0xfd, 0xf5)))
                .bg(hex((0x00, 0x7b, 0xff)))
                .add_modifier(Modifier::BOLD),
            item: Style::default(),
            selected: Style::default().fg(hex((0x00, 0xbf, 0xff))),
            enabled: Style::default().fg(hex((0x4c, 0xaf, 0x50))),
            disabled: Style::default().fg(hex((0xf4, 0x43, 0x36))),
            help: Style::default().fg(Color::Indexed(241)),
            spinner: Style::default().fg(Color::Indexed(205)),
            error: Style::default()
                .fg(hex((0xf4, 0x43, 0x36)))
                .add_modifier(Modifier::BOLD),
        }
    }
}
