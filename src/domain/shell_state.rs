//! Aggregate per-session state the shell renders from.

use super::{
    chat::SessionIdentity, compose_state::ComposeState, message_log::MessageLog,
    presence::PresenceState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    identity: SessionIdentity,
    log: MessageLog,
    presence: PresenceState,
    compose: ComposeState,
}

impl ShellState {
    pub fn new(identity: SessionIdentity) -> Self {
        Self {
            running: true,
            identity,
            log: MessageLog::default(),
            presence: PresenceState::default(),
            compose: ComposeState::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    pub fn presence(&self) -> &PresenceState {
        &self.presence
    }

    pub fn presence_mut(&mut self) -> &mut PresenceState {
        &mut self.presence
    }

    pub fn compose(&self) -> &ComposeState {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut ComposeState {
        &mut self.compose
    }
}
