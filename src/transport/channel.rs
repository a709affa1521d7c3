//! In-process channel endpoint of the event channel.
//!
//! The session core emits frames into an mpsc channel; the hosting connection
//! layer owns the far end and is responsible for the actual socket, including
//! reconnection. Inbound frames travel the other way and are decoded by
//! `ui::event_source`.

use std::sync::mpsc;

use anyhow::{Context, Result};

use super::{
    wire::{OutboundEvent, WireFrame},
    Transport,
};

#[derive(Debug)]
pub struct ChannelTransport {
    frames: mpsc::Sender<WireFrame>,
    // Kept only by detached endpoints so emits have a live receiver; drained
    // on every emit to stay bounded.
    local_rx: Option<mpsc::Receiver<WireFrame>>,
}

impl ChannelTransport {
    /// Pairs a client endpoint with the frame receiver a connection layer
    /// reads from.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn connected() -> (Self, mpsc::Receiver<WireFrame>) {
        let (frames, rx) = mpsc::channel();
        (
            Self {
                frames,
                local_rx: None,
            },
            rx,
        )
    }

    /// Endpoint with no connection layer attached: frames are logged and
    /// discarded. Used when running without a server link.
    pub fn detached() -> Self {
        let (frames, local_rx) = mpsc::channel();
        Self {
            frames,
            local_rx: Some(local_rx),
        }
    }
}

impl Transport for ChannelTransport {
    fn emit(&mut self, event: OutboundEvent) -> Result<()> {
        let frame = event.into_frame();
        tracing::debug!(event = frame.event.as_str(), "emitting frame");

        self.frames
            .send(frame)
            .context("connection layer dropped the outbound channel")?;

        if let Some(rx) = &self.local_rx {
            let _ = rx.try_recv();
        }

        Ok(())
    }
}
