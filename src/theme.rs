//! Centralized theme colors and styles. Kept as small helpers so every
//! widget pulls from the same palette.

use ratatui::style::{Color, Modifier, Style};

pub fn window_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn window_header(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}

pub fn header_button() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn pill() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn status_bar() -> Style {
    Style::default().bg(Color::Black).fg(Color::Gray)
}

pub fn panel_title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn table_header() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn row_selected() -> Style {
    Style::default().bg(Color::DarkGray)
}

/// Green/red by sign, gray at zero; the usual quote-change convention.
pub fn change_color(change: f64) -> Color {
    if change > 0.0 {
        Color::Green
    } else if change < 0.0 {
        Color::Red
    } else {
        Color::Gray
    }
}

pub fn sparkline() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn help_overlay() -> Style {
    Style::default().bg(Color::Black).fg(Color::White)
}
