// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the toast lifecycle.
//!
//! Rejected and dropped requests are silent for callers. This module records
//! them, along with every show and finish, in a memory-bounded circular
//! buffer that can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`ToastEvent`]: A timestamped lifecycle event
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: channel-fed storage

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle};
pub use events::{FinishReason, SerializableEvent, ToastEvent, ToastEventKind};
