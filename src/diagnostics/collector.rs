// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing toast events.
//!
//! The scheduler reports through a [`DiagnosticsHandle`]; the collector
//! drains the channel into a circular buffer and exports JSON reports.

use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::Serialize;

use super::{BufferCapacity, CircularBuffer, SerializableEvent, ToastEvent, ToastEventKind};

/// Handle for sending toast events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsHandle {
    /// Records an event.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log(&self, kind: ToastEventKind, timestamp: Instant) {
        let _ = self.try_log(kind, timestamp);
    }

    /// Attempts to send an event, returning an error if the channel is full
    /// or the collector is gone.
    pub fn try_log(
        &self,
        kind: ToastEventKind,
        timestamp: Instant,
    ) -> Result<(), TrySendError<ToastEvent>> {
        self.event_tx.try_send(ToastEvent::new(kind, timestamp))
    }
}

/// Exported summary of collected events.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub event_count: usize,
    pub rejected_total: usize,
    pub dropped_total: usize,
    pub events: Vec<SerializableEvent>,
}

/// Central collector for toast events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<ToastEvent>,
    event_rx: Receiver<ToastEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<ToastEvent>,
    /// Origin for relative timestamps in exported reports.
    origin: Instant,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_origin(capacity, Instant::now())
    }

    /// Creates a collector whose exported offsets are measured from `origin`.
    ///
    /// Use this when events are stamped by a clock other than the system
    /// clock.
    #[must_use]
    pub fn with_origin(capacity: BufferCapacity, origin: Instant) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            origin,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &ToastEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report from the current buffer contents.
    #[must_use]
    pub fn report(&self) -> DiagnosticReport {
        let mut rejected_total = 0;
        let mut dropped_total = 0;
        for event in self.buffer.iter() {
            match event.kind {
                ToastEventKind::Rejected => rejected_total += 1,
                ToastEventKind::Dropped { count } => dropped_total += count,
                _ => {}
            }
        }

        DiagnosticReport {
            event_count: self.buffer.len(),
            rejected_total,
            dropped_total,
            events: self
                .buffer
                .iter()
                .map(|event| SerializableEvent::from_event(event, self.origin))
                .collect(),
        }
    }

    /// Exports all collected events as a JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.report())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
