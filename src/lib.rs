// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows queued toast notifications in Iced applications.
//!
//! A [`Provider`](ui::notifications::Provider) displays one toast at a time
//! from a bounded FIFO queue, and registers itself with the [`service`]
//! functions so code outside the widget tree can raise toasts too.

pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod service;
pub mod ui;
