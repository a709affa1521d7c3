//! Domain layer: core entities and session state machines.

pub mod chat;
pub mod compose_state;
pub mod events;
pub mod message;
pub mod message_log;
pub mod presence;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
