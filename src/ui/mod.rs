//! UI layer: ratatui shell, event sources and rendering.

pub mod event_source;
pub mod shell;
mod styles;
mod terminal;
mod view;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
