//! Test doubles for the transport seam.

use anyhow::{bail, Result};

use crate::transport::{wire::OutboundEvent, Transport};

/// Records every emitted event for assertions.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub events: Vec<OutboundEvent>,
}

impl RecordingTransport {
    pub fn event_names(&self) -> Vec<&'static str> {
        self.events.iter().map(OutboundEvent::name).collect()
    }
}

impl Transport for RecordingTransport {
    fn emit(&mut self, event: OutboundEvent) -> Result<()> {
        self.events.push(event);
        Ok(())
    }
}

/// Fails every emission; emissions are fire-and-forget, so callers must treat
/// this as a logged non-event.
#[derive(Debug, Default)]
pub struct FailingTransport {
    pub attempts: usize,
}

impl Transport for FailingTransport {
    fn emit(&mut self, _event: OutboundEvent) -> Result<()> {
        self.attempts += 1;
        bail!("transport unavailable")
    }
}
