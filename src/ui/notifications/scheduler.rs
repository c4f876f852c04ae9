// SPDX-License-Identifier: MPL-2.0
//! Toast queue and display scheduling.
//!
//! The `Scheduler` owns the bounded queue of pending requests and the single
//! display slot. It never reads the time itself: every operation takes the
//! current `Instant`, and the two timers (display countdown and the
//! animation gap before the next toast) are deadlines that fire from
//! [`Scheduler::poll`]. Driving it with a fake clock reproduces the exact
//! real-time behaviour.
//!
//! Per display slot the cycle is `Idle -> Showing -> Draining -> Idle`.
//!
//! Requests sent through a [`ToastHandle`] land in an inbox drained by
//! [`Scheduler::process_pending`]. The inbox is also drained right after a
//! finish callback runs, while the slot still counts as processing, so a
//! callback that raises a new toast gets it queued behind the animation gap.

use super::handle::{Command, ToastHandle};
use super::request::{ActiveToast, ToastRequest};
use crate::config::{Position, ToastConfig, MIN_MAX_QUEUE_SIZE};
use crate::diagnostics::{DiagnosticsHandle, FinishReason, ToastEventKind};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Where the display slot currently is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing shown and no continuation pending.
    Idle,
    /// A toast is visible and its countdown is running.
    Showing,
    /// Waiting out the animation gap before draining the queue again.
    Draining,
}

/// Result of [`Scheduler::enqueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
    /// The message was blank; nothing was queued.
    Rejected,
    /// The request is waiting for its turn. `dropped` older requests were
    /// discarded to make room.
    Queued { dropped: usize },
    /// The request went straight to the display slot.
    Shown { dropped: usize },
}

#[derive(Debug)]
pub struct Scheduler {
    default_duration: Duration,
    animation_gap: Duration,
    max_queue_size: usize,
    default_position: Position,
    /// Pending requests, oldest first.
    queue: VecDeque<ToastRequest>,
    /// Last request that occupied the display slot. Kept after it is hidden
    /// until the next one replaces it.
    current: Option<ActiveToast>,
    visible: bool,
    /// Set while a request occupies the display slot; blocks re-entrant
    /// dequeues.
    processing: bool,
    /// When the visible toast expires.
    countdown: Option<Instant>,
    /// Pending drain continuations, sorted ascending.
    drains: Vec<Instant>,
    command_tx: Sender<Command>,
    command_rx: Receiver<Command>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Scheduler {
    #[must_use]
    pub fn new(config: &ToastConfig) -> Self {
        let (command_tx, command_rx) = unbounded();
        Self {
            default_duration: config.duration(),
            animation_gap: config.animation_gap(),
            max_queue_size: config.max_queue_size.max(MIN_MAX_QUEUE_SIZE),
            default_position: config.position,
            queue: VecDeque::new(),
            current: None,
            visible: false,
            processing: false,
            countdown: None,
            drains: Vec::new(),
            command_tx,
            command_rx,
            diagnostics: None,
        }
    }

    /// Creates a handle that feeds this scheduler's inbox.
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        ToastHandle::new(self.command_tx.clone())
    }

    /// Applies every command waiting in the inbox, in the order sent.
    pub fn process_pending(&mut self, now: Instant) {
        while let Ok(command) = self.command_rx.try_recv() {
            match command {
                Command::Show(request) => {
                    self.enqueue(request, now);
                }
                Command::Hide => self.hide(now),
            }
        }
    }

    /// Sets the diagnostics handle lifecycle events are reported to.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Queues a request, showing it right away if the display slot is free.
    ///
    /// Blank messages are ignored. When the queue is full the oldest pending
    /// requests are dropped so that it holds exactly `max_queue_size`
    /// entries after insertion.
    pub fn enqueue(&mut self, request: ToastRequest, now: Instant) -> EnqueueOutcome {
        if !request.has_content() {
            tracing::debug!("ignoring toast with blank message");
            self.report(ToastEventKind::Rejected, now);
            return EnqueueOutcome::Rejected;
        }

        let mut dropped = 0;
        if self.queue.len() >= self.max_queue_size {
            dropped = self.queue.len() + 1 - self.max_queue_size;
            self.queue.drain(..dropped);
            tracing::debug!(dropped, "toast queue full, dropped oldest requests");
            self.report(ToastEventKind::Dropped { count: dropped }, now);
        }

        let id = request.id();
        self.queue.push_back(request);
        self.report(
            ToastEventKind::Enqueued {
                id: id.value(),
                queue_len: self.queue.len(),
            },
            now,
        );

        if !self.processing {
            self.dequeue_and_show(now);
        }

        match &self.current {
            Some(active) if self.visible && active.id() == id => EnqueueOutcome::Shown { dropped },
            _ => EnqueueOutcome::Queued { dropped },
        }
    }

    /// Moves the head of the queue into the display slot and starts its
    /// countdown.
    ///
    /// Does nothing while another toast is being processed or when the queue
    /// is empty. Returns whether a toast was shown.
    pub fn dequeue_and_show(&mut self, now: Instant) -> bool {
        if self.processing {
            return false;
        }
        let Some(request) = self.queue.pop_front() else {
            return false;
        };

        self.processing = true;
        let active = ActiveToast::resolve(request, self.default_duration, self.default_position);
        // Durations too long to represent keep the toast up until hidden.
        self.countdown = now.checked_add(active.duration());
        tracing::debug!(
            id = active.id().value(),
            duration_ms = active.duration().as_millis() as u64,
            "showing toast"
        );
        self.report(
            ToastEventKind::Shown {
                id: active.id().value(),
                duration_ms: active.duration().as_millis() as u64,
            },
            now,
        );
        self.current = Some(active);
        self.visible = true;
        true
    }

    /// Takes down the visible toast, if any, and resumes draining after the
    /// animation gap.
    ///
    /// The visible toast's finish callback runs before it is hidden. Calling
    /// this with nothing on screen is harmless: it only schedules another
    /// drain.
    pub fn hide(&mut self, now: Instant) {
        if self.visible {
            if let Some(active) = &self.current {
                if let Some(callback) = active.request().finish_callback() {
                    callback.call();
                }
                let id = active.id().value();
                tracing::debug!(id, "toast hidden");
                self.report(
                    ToastEventKind::Finished {
                        id,
                        reason: FinishReason::Hidden,
                    },
                    now,
                );
            }
        }

        self.visible = false;
        self.countdown = None;
        self.process_pending(now);
        // A command applied above may already have refilled the slot.
        if !self.visible {
            self.processing = false;
        }
        self.schedule_drain(now);
    }

    /// Fires every timer due at or before `now`, in chronological order.
    ///
    /// Timers started by a firing transition are based on that transition's
    /// own deadline rather than `now`, so a late poll catches up exactly.
    pub fn poll(&mut self, now: Instant) {
        loop {
            let next_drain = self.drains.first().copied();
            match (self.countdown, next_drain) {
                (Some(deadline), drain)
                    if deadline <= now && drain.is_none_or(|d| deadline <= d) =>
                {
                    self.expire(deadline);
                }
                (_, Some(drain)) if drain <= now => {
                    self.drains.remove(0);
                    self.dequeue_and_show(drain);
                }
                _ => break,
            }
        }
    }

    /// Cancels all timers and forgets pending work without running any
    /// finish callbacks. Returns how many requests were abandoned.
    ///
    /// Handles created before teardown are disconnected; whatever they send
    /// afterwards is discarded. Call [`Scheduler::handle`] again for a live
    /// one.
    pub fn teardown(&mut self, now: Instant) -> usize {
        let abandoned = self.queue.len() + usize::from(self.visible);
        if abandoned > 0 {
            tracing::debug!(abandoned, "toast scheduler torn down with pending work");
            self.report(ToastEventKind::Abandoned { count: abandoned }, now);
        }

        let (command_tx, command_rx) = unbounded();
        self.command_tx = command_tx;
        self.command_rx = command_rx;
        self.queue.clear();
        self.countdown = None;
        self.drains.clear();
        self.processing = false;
        self.visible = false;
        abandoned
    }

    /// Returns the toast currently on screen.
    #[must_use]
    pub fn displayed(&self) -> Option<&ActiveToast> {
        self.current.as_ref().filter(|_| self.visible)
    }

    /// Returns the last toast that occupied the display slot, even once it
    /// is no longer visible.
    #[must_use]
    pub fn current(&self) -> Option<&ActiveToast> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Returns the pending requests, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = &ToastRequest> {
        self.queue.iter()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.processing {
            Phase::Showing
        } else if !self.drains.is_empty() {
            Phase::Draining
        } else {
            Phase::Idle
        }
    }

    /// Returns the earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.countdown, self.drains.first().copied()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Returns whether anything is showing, queued, waiting on a timer or
    /// waiting in the inbox.
    #[must_use]
    pub fn has_work(&self) -> bool {
        self.processing
            || !self.queue.is_empty()
            || !self.drains.is_empty()
            || self.has_pending_commands()
    }

    /// Returns whether handles sent commands not applied yet.
    #[must_use]
    pub fn has_pending_commands(&self) -> bool {
        !self.command_rx.is_empty()
    }

    fn expire(&mut self, deadline: Instant) {
        self.countdown = None;
        if let Some(active) = &self.current {
            if let Some(callback) = active.request().finish_callback() {
                callback.call();
            }
            let id = active.id().value();
            tracing::debug!(id, "toast expired");
            self.report(
                ToastEventKind::Finished {
                    id,
                    reason: FinishReason::Expired,
                },
                deadline,
            );
        }

        self.visible = false;
        self.process_pending(deadline);
        if !self.visible {
            self.processing = false;
        }
        self.schedule_drain(deadline);
    }

    /// Schedules a drain one animation gap after `from`.
    fn schedule_drain(&mut self, from: Instant) {
        let Some(at) = from.checked_add(self.animation_gap) else {
            tracing::warn!("animation gap out of range, queue stays paused");
            return;
        };
        let index = self.drains.partition_point(|d| *d <= at);
        self.drains.insert(index, at);
    }

    fn report(&self, kind: ToastEventKind, at: Instant) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind, at);
        }
    }
}
