// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! One toast is visible at a time. Further requests wait in a bounded FIFO
//! queue and are shown one after another, separated by an animation gap.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest` and the resolved `ActiveToast`
//! - [`scheduler`] - `Scheduler`, the queue and display state machine
//! - [`handle`] - `ToastHandle` for raising toasts outside the widget tree
//! - [`toast`] - Toast widget rendering the displayed request
//! - [`provider`] - `Provider`, the composition root wired into Iced
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::config::ToastConfig;
//! use iced_toast::ui::notifications::{Provider, ToastRequest};
//!
//! let mut toasts = Provider::new(ToastConfig::default());
//! toasts.mount();
//!
//! toasts.show_toast(ToastRequest::success("Image saved"));
//!
//! // In your view function, stack the overlay above the content
//! let overlay = toasts.view().map(Message::Toast);
//! ```

mod handle;
mod provider;
mod request;
mod scheduler;
mod toast;

pub use handle::ToastHandle;
pub use provider::{Message, Provider};
pub use request::{ActiveToast, Callback, ToastAction, ToastId, ToastRequest};
pub use scheduler::{EnqueueOutcome, Phase, Scheduler};
pub use toast::Toast;
