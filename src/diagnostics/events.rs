// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle events recorded for diagnostics.
//!
//! The scheduler never reports rejected or dropped requests to the caller;
//! these events are where that information surfaces instead.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Why a displayed toast stopped being visible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The display countdown ran out.
    Expired,
    /// `hide` was called while the toast was visible.
    Hidden,
}

/// The type and associated data for a toast event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToastEventKind {
    /// A request was appended to the queue.
    Enqueued {
        id: u64,
        queue_len: usize,
    },

    /// A request was ignored because its message was blank.
    Rejected,

    /// Older pending requests were discarded to respect the queue bound.
    Dropped {
        count: usize,
    },

    /// A request became the visible toast.
    Shown {
        id: u64,
        duration_ms: u64,
    },

    /// The visible toast was taken down.
    Finished {
        id: u64,
        reason: FinishReason,
    },

    /// The provider was torn down with work still pending. Completion
    /// callbacks of these requests never run.
    Abandoned {
        count: usize,
    },
}

/// A toast event with the instant it happened at.
#[derive(Debug, Clone)]
pub struct ToastEvent {
    /// When the event occurred, as seen by the scheduler's clock.
    pub timestamp: Instant,
    pub kind: ToastEventKind,
}

impl ToastEvent {
    #[must_use]
    pub fn new(kind: ToastEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// Serializable form of a [`ToastEvent`] with a timestamp relative to the
/// start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: ToastEventKind,
}

impl SerializableEvent {
    #[allow(clippy::cast_possible_truncation)] // Offsets in ms fit comfortably in u64
    #[must_use]
    pub fn from_event(event: &ToastEvent, origin: Instant) -> Self {
        Self {
            offset_ms: event.timestamp.saturating_duration_since(origin).as_millis() as u64,
            kind: event.kind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn event_kind_serializes_with_type_tag() {
        let json = serde_json::to_string(&ToastEventKind::Dropped { count: 2 })
            .expect("serialization should succeed");
        assert_eq!(json, r#"{"type":"dropped","count":2}"#);
    }

    #[test]
    fn finish_reason_serializes_snake_case() {
        let json = serde_json::to_string(&ToastEventKind::Finished {
            id: 7,
            reason: FinishReason::Expired,
        })
        .expect("serialization should succeed");
        assert!(json.contains(r#""reason":"expired""#));
    }

    #[test]
    fn serializable_event_uses_relative_offset() {
        let origin = Instant::now();
        let event = ToastEvent::new(ToastEventKind::Rejected, origin + Duration::from_millis(1500));

        let serializable = SerializableEvent::from_event(&event, origin);
        assert_eq!(serializable.offset_ms, 1500);
    }

    #[test]
    fn events_before_origin_clamp_to_zero() {
        let origin = Instant::now() + Duration::from_secs(1);
        let event = ToastEvent::new(ToastEventKind::Rejected, Instant::now());

        assert_eq!(SerializableEvent::from_event(&event, origin).offset_ms, 0);
    }
}
