// SPDX-License-Identifier: MPL-2.0
//! Cloneable handle for raising toasts from anywhere.
//!
//! The handle never touches the scheduler directly. It sends commands over a
//! channel that the owning [`Scheduler`](super::Scheduler) drains on its next
//! update, so callbacks that raise toasts can't re-enter it.

use super::request::ToastRequest;
use crossbeam_channel::Sender;

#[derive(Debug)]
pub(crate) enum Command {
    Show(ToastRequest),
    Hide,
}

/// Handle to a mounted provider.
///
/// This handle is cheap to clone and can be shared across threads.
#[derive(Clone, Debug)]
pub struct ToastHandle {
    command_tx: Sender<Command>,
}

impl ToastHandle {
    pub(crate) fn new(command_tx: Sender<Command>) -> Self {
        Self { command_tx }
    }

    /// Asks the provider to queue `request`.
    ///
    /// If the provider has been dropped the request is discarded.
    pub fn show_toast(&self, request: ToastRequest) {
        if self.command_tx.send(Command::Show(request)).is_err() {
            tracing::debug!("toast provider is gone, request discarded");
        }
    }

    /// Asks the provider to hide the visible toast.
    pub fn hide_toast(&self) {
        if self.command_tx.send(Command::Hide).is_err() {
            tracing::debug!("toast provider is gone, hide discarded");
        }
    }
}
