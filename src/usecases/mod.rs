//! Use case layer: session workflows and orchestration.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod read_receipt;
pub mod render_message;
pub mod resolve_session;
pub mod send_message;
pub mod shell;
pub mod typing;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
