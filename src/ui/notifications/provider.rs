// SPDX-License-Identifier: MPL-2.0
//! Composition root of the toast system.
//!
//! The `Provider` owns the configuration, the [`Scheduler`] and the clock
//! that feeds it. Widgets in the host application call
//! [`Provider::show_toast`] directly; everything else goes through a
//! [`ToastHandle`] or the global [`service`](crate::service) functions,
//! which the provider registers when it mounts.

use super::handle::ToastHandle;
use super::request::{ActiveToast, ToastId, ToastRequest};
use super::scheduler::{EnqueueOutcome, Phase, Scheduler};
use super::toast::Toast;
use crate::clock::{Clock, SystemClock};
use crate::config::{ToastConfig, IDLE_POLL_INTERVAL_MS, TICK_INTERVAL_MS};
use crate::diagnostics::DiagnosticsHandle;
use crate::service;
use iced::{time, Element, Subscription};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick advancing the scheduler's timers.
    Tick(Instant),
    /// The action button of the given toast was pressed.
    ActionPressed(ToastId),
}

pub struct Provider {
    config: ToastConfig,
    scheduler: Scheduler,
    clock: Arc<dyn Clock>,
    mounted: bool,
}

impl Provider {
    /// Creates a provider driven by the system clock.
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a provider driven by `clock`.
    #[must_use]
    pub fn with_clock(config: ToastConfig, clock: Arc<dyn Clock>) -> Self {
        let config = config.validated();
        let scheduler = Scheduler::new(&config);
        Self {
            config,
            scheduler,
            clock,
            mounted: false,
        }
    }

    /// Sets the diagnostics handle lifecycle events are reported to.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.scheduler.set_diagnostics(handle);
    }

    /// Registers this provider with the global [`service`] functions.
    ///
    /// Replaces whatever provider registered before.
    pub fn mount(&mut self) {
        let show_handle = self.handle();
        let hide_handle = self.handle();
        service::register_show(move |request| show_handle.show_toast(request));
        service::register_hide(move || hide_handle.hide_toast());
        self.mounted = true;
        tracing::debug!("toast provider mounted");
    }

    /// Cancels timers and forgets every pending request. Finish callbacks of
    /// abandoned requests are not run.
    ///
    /// Handles obtained before, including the ones behind the global
    /// functions, are disconnected. The global functions stay registered;
    /// requests sent through them afterwards are discarded.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        let abandoned = self.scheduler.teardown(self.clock.now());
        self.mounted = false;
        tracing::debug!(abandoned, "toast provider unmounted");
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns a handle for raising toasts from outside the widget tree.
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        self.scheduler.handle()
    }

    /// Queues a toast. Requests sent through handles earlier are applied
    /// first.
    pub fn show_toast(&mut self, request: ToastRequest) -> EnqueueOutcome {
        let now = self.clock.now();
        self.scheduler.process_pending(now);
        self.scheduler.enqueue(request, now)
    }

    /// Hides the displayed toast and resumes the queue after the animation
    /// gap.
    pub fn hide_toast(&mut self) {
        let now = self.clock.now();
        self.scheduler.process_pending(now);
        self.scheduler.hide(now);
    }

    /// Applies handle commands and fires every due timer.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.scheduler.process_pending(now);
        self.scheduler.poll(now);
    }

    pub fn update(&mut self, message: Message) {
        match message {
            // The clock is the only time source, so the tick's own instant
            // is ignored.
            Message::Tick(_) => self.tick(),
            Message::ActionPressed(id) => {
                let action = self
                    .scheduler
                    .displayed()
                    .filter(|active| active.id() == id)
                    .and_then(|active| active.request().action())
                    .cloned();
                if let Some(action) = action {
                    action.press();
                }
                self.tick();
            }
        }
    }

    /// Renders the toast overlay. Stack it above the application content.
    pub fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(self.scheduler.displayed(), &self.config)
    }

    /// Ticks quickly while a toast is up, queued or waiting on a timer.
    ///
    /// An idle mounted provider only polls slowly, to pick up commands sent
    /// from threads that don't go through the host's update loop.
    pub fn subscription(&self) -> Subscription<Message> {
        match self.tick_interval() {
            Some(interval) => time::every(interval).map(Message::Tick),
            None => Subscription::none(),
        }
    }

    fn tick_interval(&self) -> Option<Duration> {
        if self.scheduler.has_work() {
            Some(Duration::from_millis(TICK_INTERVAL_MS))
        } else if self.mounted {
            Some(Duration::from_millis(IDLE_POLL_INTERVAL_MS))
        } else {
            None
        }
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Returns the toast on screen, if any.
    #[must_use]
    pub fn displayed(&self) -> Option<&ActiveToast> {
        self.scheduler.displayed()
    }

    /// Returns the last toast shown, even once hidden.
    #[must_use]
    pub fn current(&self) -> Option<&ActiveToast> {
        self.scheduler.current()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.scheduler.phase()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.scheduler.queued_count()
    }

    pub fn queued(&self) -> impl Iterator<Item = &ToastRequest> {
        self.scheduler.queued()
    }
}

impl Drop for Provider {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::Position;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::PoisonError;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn provider_with_clock() -> (Provider, ManualClock) {
        let clock = ManualClock::new();
        let config = ToastConfig {
            duration_ms: 1000,
            max_queue_size: 3,
            animation_duration_ms: 200,
            ..ToastConfig::default()
        };
        let provider = Provider::with_clock(config, Arc::new(clock.clone()));
        (provider, clock)
    }

    #[test]
    fn show_toast_displays_synchronously() {
        let (mut provider, _clock) = provider_with_clock();

        let outcome = provider.show_toast(ToastRequest::new("hi"));

        assert_eq!(outcome, EnqueueOutcome::Shown { dropped: 0 });
        assert_eq!(provider.displayed().map(ActiveToast::message), Some("hi"));
        assert_eq!(provider.phase(), Phase::Showing);
    }

    #[test]
    fn ticks_follow_the_clock() {
        let (mut provider, clock) = provider_with_clock();

        provider.show_toast(ToastRequest::new("A"));
        provider.show_toast(ToastRequest::new("B"));

        clock.advance(ms(1000));
        provider.update(Message::Tick(Instant::now()));
        assert!(provider.displayed().is_none());

        clock.advance(ms(200));
        provider.update(Message::Tick(Instant::now()));
        assert_eq!(provider.displayed().map(ActiveToast::message), Some("B"));
    }

    #[test]
    fn handle_requests_apply_on_tick() {
        let (mut provider, _clock) = provider_with_clock();
        let handle = provider.handle();

        handle.show_toast(ToastRequest::new("queued elsewhere"));
        assert!(provider.displayed().is_none());

        provider.tick();
        assert_eq!(
            provider.displayed().map(ActiveToast::message),
            Some("queued elsewhere")
        );
    }

    #[test]
    fn handle_requests_keep_order_with_direct_calls() {
        let (mut provider, _clock) = provider_with_clock();
        let handle = provider.handle();

        handle.show_toast(ToastRequest::new("first"));
        provider.show_toast(ToastRequest::new("second"));

        assert_eq!(provider.displayed().map(ActiveToast::message), Some("first"));
        assert_eq!(
            provider.queued().map(ToastRequest::message).collect::<Vec<_>>(),
            vec!["second"]
        );
    }

    #[test]
    fn action_press_runs_callback_of_displayed_toast() {
        let (mut provider, _clock) = provider_with_clock();
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&presses);

        provider.show_toast(ToastRequest::new("Deleted").with_action("Undo", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let id = provider.displayed().map(ActiveToast::id).expect("displayed");

        provider.update(Message::ActionPressed(id));
        assert_eq!(presses.load(Ordering::SeqCst), 1);

        // Presses for a toast that is no longer displayed are ignored.
        provider.hide_toast();
        provider.update(Message::ActionPressed(id));
        assert_eq!(presses.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unmount_abandons_pending_work_without_callbacks() {
        let _guard = service::registry_lock()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let (mut provider, clock) = provider_with_clock();
        let finished = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&finished);

        provider.mount();
        provider.show_toast(ToastRequest::new("A").on_finish(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        provider.show_toast(ToastRequest::new("B"));

        provider.unmount();
        clock.advance(ms(10_000));
        provider.tick();

        assert!(!provider.is_mounted());
        assert!(provider.displayed().is_none());
        assert_eq!(provider.queued_count(), 0);
        assert_eq!(finished.load(Ordering::SeqCst), 0);
        service::reset();
    }

    #[test]
    fn mount_routes_global_calls_to_provider() {
        let _guard = service::registry_lock()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        service::reset();
        let (mut provider, _clock) = provider_with_clock();

        provider.mount();
        service::show(ToastRequest::new("global").with_position(Position::Top))
            .expect("provider is mounted");
        provider.tick();

        let displayed = provider.displayed().expect("global toast displayed");
        assert_eq!(displayed.message(), "global");
        assert_eq!(displayed.position(), Position::Top);

        service::hide().expect("provider is mounted");
        provider.tick();
        assert!(provider.displayed().is_none());
        service::reset();
    }

    #[test]
    fn requests_sent_after_unmount_are_discarded() {
        let _guard = service::registry_lock()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        service::reset();
        let (mut provider, _clock) = provider_with_clock();
        let handle = provider.handle();

        provider.mount();
        provider.unmount();
        for i in 0..5 {
            service::show(ToastRequest::new(format!("after unmount {i}")))
                .expect("global functions stay registered");
        }
        handle.show_toast(ToastRequest::new("stale handle"));
        provider.tick();

        assert!(provider.displayed().is_none());
        assert_eq!(provider.queued_count(), 0);
        assert_eq!(provider.tick_interval(), None);
        service::reset();
    }

    #[test]
    fn unbounded_duration_does_not_panic_on_tick() {
        let (mut provider, clock) = provider_with_clock();

        provider.show_toast(ToastRequest::new("sticky").with_duration(Duration::MAX));
        clock.advance(Duration::from_secs(3600));
        provider.tick();

        assert_eq!(provider.displayed().map(ActiveToast::message), Some("sticky"));
    }

    #[test]
    fn tick_rate_follows_pending_work() {
        let _guard = service::registry_lock()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let (mut provider, clock) = provider_with_clock();
        let fast = Some(ms(TICK_INTERVAL_MS));
        let idle = Some(ms(IDLE_POLL_INTERVAL_MS));

        assert_eq!(provider.tick_interval(), None);

        provider.mount();
        assert_eq!(provider.tick_interval(), idle);

        provider.handle().show_toast(ToastRequest::new("pending"));
        assert_eq!(provider.tick_interval(), fast);

        provider.tick();
        clock.advance(ms(1000));
        provider.tick();
        clock.advance(ms(200));
        provider.tick();
        assert_eq!(provider.phase(), Phase::Idle);
        assert_eq!(provider.tick_interval(), idle);
        service::reset();
    }

    #[test]
    fn config_is_validated_on_construction() {
        let provider = Provider::new(ToastConfig {
            max_queue_size: 0,
            ..ToastConfig::default()
        });
        assert_eq!(provider.config().max_queue_size, 1);
    }
}
