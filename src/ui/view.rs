//! Shell rendering: message log, presence line, compose input, status bar.
//!
//! Inbound text is rendered exclusively as literal spans; nothing that
//! arrives over the wire is ever parsed as markup or styling.

use chrono::{Local, TimeZone};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::{
    message::{EntryKind, RenderedEntry},
    shell_state::ShellState,
};

use super::styles;

const PROMPT_SYMBOL: &str = "> ";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [log_area, presence_area, compose_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_log(frame, log_area, state);
    render_presence(frame, presence_area, state);
    render_compose(frame, compose_area, state);

    let status = Paragraph::new(status_line(state)).style(styles::status_style());
    frame.render_widget(status, status_area);
}

fn render_log(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let items: Vec<ListItem<'_>> = state
        .log()
        .entries()
        .iter()
        .map(|entry| ListItem::new(entry_line(entry)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(state.identity().mode.title())
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    list_state.select(state.log().selected_index());
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Builds one log line from literal text fragments.
fn entry_line(entry: &RenderedEntry) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format_time(entry.received_at_unix_ms),
            styles::timestamp_style(),
        ),
        Span::raw(" "),
    ];

    if entry.body.is_empty() {
        // Label-only announcement, e.g. "alice joined lobby".
        spans.push(Span::styled(
            entry.label.clone(),
            styles::announcement_style(),
        ));
    } else {
        let label_style = match entry.kind {
            EntryKind::Sent => styles::sent_label_style(),
            EntryKind::Received => styles::received_label_style(),
        };
        spans.push(Span::styled(format!("{}:", entry.label), label_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(entry.body.clone(), styles::body_style()));
    }

    if !entry.read_by.is_empty() {
        spans.push(Span::styled(
            format!("  ✓ {}", entry.read_by.join(", ")),
            styles::read_marker_style(),
        ));
    }

    Line::from(spans)
}

fn render_presence(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let indicator = state.presence().indicator().unwrap_or_default();
    let presence = Paragraph::new(indicator).style(styles::presence_style());
    frame.render_widget(presence, area);
}

fn render_compose(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let line = Line::from(vec![
        Span::styled(PROMPT_SYMBOL, styles::compose_prompt_style()),
        Span::raw(state.compose().text().to_owned()),
    ]);
    let compose = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(compose, area);

    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(PROMPT_SYMBOL.len() as u16)
        .saturating_add(state.compose().cursor().min(u16::MAX as usize) as u16);
    frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
}

fn status_line(state: &ShellState) -> String {
    format!(
        "{} @ {} | Up/Down select, Enter send, Ctrl-R mark read, Esc quit",
        state.identity().local_username,
        state.identity().mode.title()
    )
}

fn format_time(unix_ms: i64) -> String {
    Local
        .timestamp_millis_opt(unix_ms)
        .single()
        .map(|at| at.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_owned())
}
