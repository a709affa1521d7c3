//! Transport layer: the bidirectional event-channel seam.
//!
//! The session core only ever talks to the `Transport` trait; connection
//! lifecycle, reconnection and backoff belong to whatever implements it.

pub mod channel;
pub mod wire;

use anyhow::Result;

use wire::OutboundEvent;

/// Client side of the bidirectional event channel. Emissions are
/// fire-and-forget: no acknowledgment, retry or timeout.
pub trait Transport {
    fn emit(&mut self, event: OutboundEvent) -> Result<()>;
}

/// Returns the transport module name for smoke checks.
pub fn module_name() -> &'static str {
    "transport"
}
