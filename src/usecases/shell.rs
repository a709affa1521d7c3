//! Shell orchestration: one dispatch point for key input, the poll tick, and
//! inbound server events.
//!
//! Every emission downstream of a user gesture is fire-and-forget; transport
//! failures are logged and the session keeps running.

use std::time::Instant;

use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, KeyInput, ServerEvent},
        shell_state::ShellState,
    },
    transport::Transport,
    usecases::{
        contracts::ShellOrchestrator,
        read_receipt, render_message,
        send_message::{self, SendOutcome},
        typing::TypingCoordinator,
    },
};

pub struct DefaultShellOrchestrator<T: Transport> {
    state: ShellState,
    typing: TypingCoordinator,
    transport: T,
}

impl<T: Transport> DefaultShellOrchestrator<T> {
    pub fn new(state: ShellState, typing: TypingCoordinator, transport: T) -> Self {
        Self {
            state,
            typing,
            transport,
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn handle_key(&mut self, key: KeyInput) {
        match key {
            KeyInput::Char(ch) => {
                if self.state.compose_mut().push_char(ch) {
                    self.notify_composing();
                }
            }
            KeyInput::Backspace => {
                self.state.compose_mut().backspace();
                self.notify_composing();
            }
            KeyInput::Enter => self.send_composed(),
            KeyInput::Left => self.state.compose_mut().cursor_left(),
            KeyInput::Right => self.state.compose_mut().cursor_right(),
            KeyInput::Up => self.state.log_mut().select_previous(),
            KeyInput::Down => self.state.log_mut().select_next(),
            KeyInput::Ctrl('r') => self.acknowledge_selected(),
            KeyInput::Ctrl(_) => {}
        }
    }

    fn handle_server_event(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::Message { msg, message_id } => {
                let username = self.state.identity().local_username.clone();
                render_message::on_inbound_message(
                    self.state.log_mut(),
                    &username,
                    &msg,
                    message_id,
                );
            }
            ServerEvent::Typing { username } => self.state.presence_mut().set_typing(username),
            ServerEvent::StopTyping => self.state.presence_mut().clear(),
            ServerEvent::MessageReadReceipt { message_id, reader } => {
                if !self.state.log_mut().mark_read_by(&message_id, &reader) {
                    tracing::debug!(message_id, "read receipt for unknown message");
                }
            }
        }
    }

    fn notify_composing(&mut self) {
        if let Err(error) = self
            .typing
            .notify_composing(&mut self.transport, Instant::now())
        {
            tracing::warn!(error = ?error, "typing emission failed");
        }
    }

    fn send_composed(&mut self) {
        let text = self.state.compose().text().to_owned();
        match send_message::send_message(&mut self.transport, self.state.identity(), &text) {
            Ok(SendOutcome::Sent) => self.state.compose_mut().clear(),
            Ok(SendOutcome::RejectedEmpty) => {}
            Err(error) => tracing::warn!(error = ?error, "message emission failed"),
        }
    }

    fn acknowledge_selected(&mut self) {
        if let Some(entry) = self.state.log().selected_entry() {
            match read_receipt::acknowledge(&mut self.transport, entry) {
                Ok(emitted) => {
                    if emitted {
                        tracing::debug!("read receipt emitted");
                    }
                }
                Err(error) => tracing::warn!(error = ?error, "read receipt emission failed"),
            }
        }
    }
}

impl<T: Transport> ShellOrchestrator for DefaultShellOrchestrator<T> {
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        // The quiet-period deadline is checked on every loop turn, whatever
        // the event.
        if let Err(error) = self.typing.poll(&mut self.transport, Instant::now()) {
            tracing::warn!(error = ?error, "stop_typing emission failed");
        }

        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::Server(server) => self.handle_server_event(server),
        }

        Ok(())
    }
}
