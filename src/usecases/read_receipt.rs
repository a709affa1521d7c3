//! Read-receipt acknowledgment.

use anyhow::Result;

use crate::{
    domain::message::RenderedEntry,
    transport::{wire::OutboundEvent, Transport},
};

/// Emits `message_read` for an acknowledgeable entry; entries without a
/// message id are not acknowledgeable and the gesture is a no-op. There is no
/// client-side deduplication — repeated gestures re-emit and the server is
/// responsible for idempotent handling. Returns whether an emission happened.
pub fn acknowledge(transport: &mut dyn Transport, entry: &RenderedEntry) -> Result<bool> {
    let Some(message_id) = &entry.message_id else {
        return Ok(false);
    };

    transport.emit(OutboundEvent::MessageRead {
        message_id: message_id.clone(),
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::stubs::RecordingTransport;

    fn entry(message_id: Option<&str>) -> RenderedEntry {
        RenderedEntry::from_raw("alice:hi", "bob", message_id.map(str::to_owned), 0)
    }

    #[test]
    fn acknowledging_a_tagged_entry_emits_its_message_id() {
        let mut transport = RecordingTransport::default();

        let emitted =
            acknowledge(&mut transport, &entry(Some("m42"))).expect("emit must succeed");

        assert!(emitted);
        assert_eq!(
            transport.events,
            vec![OutboundEvent::MessageRead {
                message_id: "m42".to_owned(),
            }]
        );
    }

    #[test]
    fn repeated_gestures_re_emit_without_deduplication() {
        let mut transport = RecordingTransport::default();
        let entry = entry(Some("m42"));

        acknowledge(&mut transport, &entry).expect("emit must succeed");
        acknowledge(&mut transport, &entry).expect("emit must succeed");

        assert_eq!(transport.events.len(), 2);
    }

    #[test]
    fn untagged_entry_emits_nothing() {
        let mut transport = RecordingTransport::default();

        let emitted = acknowledge(&mut transport, &entry(None)).expect("no-op must succeed");

        assert!(!emitted);
        assert!(transport.events.is_empty());
    }
}
