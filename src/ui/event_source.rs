use std::{sync::mpsc, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    transport::wire::{self, WireFrame},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Merges inbound server frames with terminal input. Pending frames drain
/// first, one decoded event per loop turn, so the log mutates strictly in
/// delivery order; an idle terminal poll produces the tick that drives the
/// typing quiet-period check.
pub struct SessionEventSource {
    inbound: mpsc::Receiver<WireFrame>,
}

impl SessionEventSource {
    pub fn new(inbound: mpsc::Receiver<WireFrame>) -> Self {
        Self { inbound }
    }

    /// Decodes pending frames until one yields an event. Unknown event names
    /// are ignored; malformed payloads for known names are dropped with a
    /// warning, never fatal.
    fn next_server_event(&mut self) -> Option<AppEvent> {
        while let Ok(frame) = self.inbound.try_recv() {
            match wire::decode(&frame.event, &frame.payload) {
                Ok(Some(server)) => return Some(AppEvent::Server(server)),
                Ok(None) => {
                    tracing::debug!(event = frame.event.as_str(), "ignoring unknown server event")
                }
                Err(error) => tracing::warn!(
                    event = frame.event.as_str(),
                    error = %error,
                    "dropping malformed server event"
                ),
            }
        }
        None
    }
}

impl AppEventSource for SessionEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Some(server) = self.next_server_event() {
            return Ok(Some(server));
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            let mapped = match key.code {
                KeyCode::Esc => Some(AppEvent::QuitRequested),
                KeyCode::Char('c') if ctrl => Some(AppEvent::QuitRequested),
                KeyCode::Char(ch) if ctrl => Some(AppEvent::InputKey(KeyInput::Ctrl(ch))),
                KeyCode::Char(ch) => Some(AppEvent::InputKey(KeyInput::Char(ch))),
                KeyCode::Enter => Some(AppEvent::InputKey(KeyInput::Enter)),
                KeyCode::Backspace => Some(AppEvent::InputKey(KeyInput::Backspace)),
                KeyCode::Left => Some(AppEvent::InputKey(KeyInput::Left)),
                KeyCode::Right => Some(AppEvent::InputKey(KeyInput::Right)),
                KeyCode::Up => Some(AppEvent::InputKey(KeyInput::Up)),
                KeyCode::Down => Some(AppEvent::InputKey(KeyInput::Down)),
                _ => None,
            };
            return Ok(mapped);
        }

        Ok(None)
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::events::ServerEvent;

    fn frame(event: &str, payload: serde_json::Value) -> WireFrame {
        WireFrame {
            event: event.to_owned(),
            payload,
        }
    }

    #[test]
    fn pending_frames_decode_in_delivery_order() {
        let (tx, rx) = mpsc::channel();
        let mut source = SessionEventSource::new(rx);

        tx.send(frame("typing", json!({ "username": "alice" })))
            .expect("send must succeed");
        tx.send(frame("stop_typing", json!({})))
            .expect("send must succeed");

        assert_eq!(
            source.next_server_event(),
            Some(AppEvent::Server(ServerEvent::Typing {
                username: "alice".to_owned(),
            }))
        );
        assert_eq!(
            source.next_server_event(),
            Some(AppEvent::Server(ServerEvent::StopTyping))
        );
    }

    #[test]
    fn unknown_and_malformed_frames_are_skipped() {
        let (tx, rx) = mpsc::channel();
        let mut source = SessionEventSource::new(rx);

        tx.send(frame("user_banned", json!({ "username": "bob" })))
            .expect("send must succeed");
        tx.send(frame("message", json!({ "text": "no msg field" })))
            .expect("send must succeed");
        tx.send(frame("message", json!({ "msg": "alice:hi" })))
            .expect("send must succeed");

        assert_eq!(
            source.next_server_event(),
            Some(AppEvent::Server(ServerEvent::Message {
                msg: "alice:hi".to_owned(),
                message_id: None,
            }))
        );
    }

    #[test]
    fn empty_inbound_channel_yields_no_server_event() {
        let (_tx, rx) = mpsc::channel::<WireFrame>();
        let mut source = SessionEventSource::new(rx);

        assert_eq!(source.next_server_event(), None);
    }
}
