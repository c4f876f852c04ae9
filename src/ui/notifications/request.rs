// SPDX-License-Identifier: MPL-2.0
//! Core toast request data structures.
//!
//! A [`ToastRequest`] is what callers hand to the provider. An
//! [`ActiveToast`] is the request currently on screen, merged with the
//! configured defaults.

use crate::config::Position;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Unique identifier for a toast request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// A shareable callback attached to a request.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Button shown on an actionable toast.
#[derive(Debug, Clone)]
pub struct ToastAction {
    label: String,
    on_press: Callback,
}

impl ToastAction {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn press(&self) {
        self.on_press.call();
    }
}

/// A request to show a toast.
#[derive(Debug, Clone)]
pub struct ToastRequest {
    id: ToastId,
    message: String,
    /// Overrides the configured display duration.
    duration: Option<Duration>,
    is_success: bool,
    action: Option<ToastAction>,
    /// Overrides the configured anchor.
    position: Option<Position>,
    on_finish: Option<Callback>,
}

impl ToastRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
            duration: None,
            is_success: false,
            action: None,
            position: None,
            on_finish: None,
        }
    }

    /// Creates a request flagged as a success message.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_success(true)
    }

    #[must_use]
    pub fn with_success(mut self, is_success: bool) -> Self {
        self.is_success = is_success;
        self
    }

    /// Sets a custom display duration. A zero duration falls back to the
    /// configured default.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Makes the toast actionable with a button labelled `label`.
    #[must_use]
    pub fn with_action(
        mut self,
        label: impl Into<String>,
        on_press: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.action = Some(ToastAction {
            label: label.into(),
            on_press: Callback::new(on_press),
        });
        self
    }

    /// Sets the callback run once the toast stops being displayed, whether
    /// it expired or was hidden.
    #[must_use]
    pub fn on_finish(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_finish = Some(Callback::new(f));
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether the message has visible content.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.message.trim().is_empty()
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.is_success
    }

    #[must_use]
    pub fn is_actionable(&self) -> bool {
        self.action.is_some()
    }

    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub(crate) fn finish_callback(&self) -> Option<&Callback> {
        self.on_finish.as_ref()
    }
}

/// The request occupying the display slot, with defaults resolved.
#[derive(Debug, Clone)]
pub struct ActiveToast {
    request: ToastRequest,
    duration: Duration,
    position: Position,
}

impl ActiveToast {
    pub(crate) fn resolve(
        request: ToastRequest,
        default_duration: Duration,
        default_position: Position,
    ) -> Self {
        let duration = request
            .duration
            .filter(|d| !d.is_zero())
            .unwrap_or(default_duration);
        let position = request.position.unwrap_or(default_position);
        Self {
            request,
            duration,
            position,
        }
    }

    #[must_use]
    pub fn request(&self) -> &ToastRequest {
        &self.request
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.request.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.request.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }
}
