//! Style definitions for the chat shell.

use ratatui::style::{Color, Modifier, Style};

/// Style for the sender label of peer messages.
pub fn received_label_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the sender label of our own echoed messages.
pub fn sent_label_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for message body text.
pub fn body_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for label-only announcement lines (e.g. joins).
pub fn announcement_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Style for the arrival-time column.
pub fn timestamp_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the read-by marker on acknowledged messages.
pub fn read_marker_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Style for the peer-typing presence line.
pub fn presence_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::ITALIC)
}

/// Style for the compose prompt symbol.
pub fn compose_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Style for the status bar.
pub fn status_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
