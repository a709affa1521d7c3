//! Debounced typing-presence propagation.
//!
//! Every compose keystroke emits `typing` and (re)arms a single quiet-period
//! deadline; when the deadline passes with no further keystroke, exactly one
//! `stop_typing` goes out. The deadline is owned by this per-session
//! coordinator instance so concurrent sessions cannot interfere: arming a new
//! deadline always supersedes the pending one, never stacks.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::{
    domain::chat::SessionIdentity,
    transport::{wire::OutboundEvent, Transport},
};

#[derive(Debug)]
pub struct TypingCoordinator {
    username: String,
    target: String,
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl TypingCoordinator {
    pub fn new(identity: &SessionIdentity, quiet_period: Duration) -> Self {
        Self {
            username: identity.local_username.clone(),
            target: identity.mode.target_id().to_owned(),
            quiet_period,
            deadline: None,
        }
    }

    /// The local user pressed a compose key: emit `typing` and restart the
    /// quiet-period deadline.
    pub fn notify_composing(&mut self, transport: &mut dyn Transport, now: Instant) -> Result<()> {
        self.deadline = Some(now + self.quiet_period);
        transport.emit(OutboundEvent::Typing {
            username: self.username.clone(),
            room: self.target.clone(),
        })
    }

    /// Checks the deadline; on expiry emits exactly one `stop_typing` and
    /// disarms.
    pub fn poll(&mut self, transport: &mut dyn Transport, now: Instant) -> Result<()> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                transport.emit(OutboundEvent::StopTyping {
                    username: self.username.clone(),
                    room: self.target.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::chat::ChatMode, infra::stubs::RecordingTransport};

    const QUIET: Duration = Duration::from_millis(1_200);

    fn coordinator() -> TypingCoordinator {
        TypingCoordinator::new(
            &SessionIdentity {
                local_username: "bob".to_owned(),
                mode: ChatMode::Room {
                    room_id: "lobby".to_owned(),
                },
            },
            QUIET,
        )
    }

    fn stop_count(transport: &RecordingTransport) -> usize {
        transport
            .events
            .iter()
            .filter(|event| matches!(event, OutboundEvent::StopTyping { .. }))
            .count()
    }

    #[test]
    fn single_keystroke_yields_one_stop_after_quiet_period() {
        let mut typing = coordinator();
        let mut transport = RecordingTransport::default();
        let start = Instant::now();

        typing
            .notify_composing(&mut transport, start)
            .expect("emit must succeed");
        typing
            .poll(&mut transport, start + QUIET)
            .expect("poll must succeed");

        assert_eq!(transport.event_names(), vec!["typing", "stop_typing"]);
    }

    #[test]
    fn no_stop_before_the_quiet_period_elapses() {
        let mut typing = coordinator();
        let mut transport = RecordingTransport::default();
        let start = Instant::now();

        typing
            .notify_composing(&mut transport, start)
            .expect("emit must succeed");
        typing
            .poll(&mut transport, start + QUIET - Duration::from_millis(1))
            .expect("poll must succeed");

        assert_eq!(stop_count(&transport), 0);
        assert!(typing.is_armed());
    }

    #[test]
    fn rapid_keystrokes_defer_the_stop_until_quiet_after_the_last() {
        let mut typing = coordinator();
        let mut transport = RecordingTransport::default();
        let start = Instant::now();
        let step = Duration::from_millis(400);

        for i in 0..5u32 {
            typing
                .notify_composing(&mut transport, start + step * i)
                .expect("emit must succeed");
            typing
                .poll(&mut transport, start + step * (i + 1) - Duration::from_millis(1))
                .expect("poll must succeed");
        }
        assert_eq!(stop_count(&transport), 0);

        let last = start + step * 4;
        typing
            .poll(&mut transport, last + QUIET)
            .expect("poll must succeed");

        assert_eq!(stop_count(&transport), 1);
    }

    #[test]
    fn expired_deadline_fires_only_once() {
        let mut typing = coordinator();
        let mut transport = RecordingTransport::default();
        let start = Instant::now();

        typing
            .notify_composing(&mut transport, start)
            .expect("emit must succeed");
        typing
            .poll(&mut transport, start + QUIET)
            .expect("poll must succeed");
        typing
            .poll(&mut transport, start + QUIET * 2)
            .expect("poll must succeed");

        assert_eq!(stop_count(&transport), 1);
        assert!(!typing.is_armed());
    }

    #[test]
    fn poll_without_composing_emits_nothing() {
        let mut typing = coordinator();
        let mut transport = RecordingTransport::default();

        typing
            .poll(&mut transport, Instant::now())
            .expect("poll must succeed");

        assert!(transport.events.is_empty());
    }

    #[test]
    fn typing_events_carry_username_and_target() {
        let mut typing = coordinator();
        let mut transport = RecordingTransport::default();

        typing
            .notify_composing(&mut transport, Instant::now())
            .expect("emit must succeed");

        assert_eq!(
            transport.events[0],
            OutboundEvent::Typing {
                username: "bob".to_owned(),
                room: "lobby".to_owned(),
            }
        );
    }
}
