// SPDX-License-Identifier: MPL-2.0
use iced_toast::clock::ManualClock;
use iced_toast::config::{self, Position, ToastConfig};
use iced_toast::diagnostics::{DiagnosticsCollector, FinishReason, ToastEventKind};
use iced_toast::ui::notifications::{ActiveToast, Phase, Provider, ToastRequest};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn provider(config: ToastConfig) -> (Provider, ManualClock) {
    let clock = ManualClock::new();
    let provider = Provider::with_clock(config, Arc::new(clock.clone()));
    (provider, clock)
}

fn scenario_config() -> ToastConfig {
    ToastConfig {
        duration_ms: 1000,
        max_queue_size: 3,
        animation_duration_ms: 200,
        ..ToastConfig::default()
    }
}

/// Advances in small steps, recording every change of displayed message.
fn run_for(provider: &mut Provider, clock: &ManualClock, total_ms: u64) -> Vec<(u64, String)> {
    let mut timeline = Vec::new();
    let mut last = provider.displayed().map(|t| t.message().to_string());
    if let Some(message) = &last {
        timeline.push((0, message.clone()));
    }
    for step in 1..=(total_ms / 50) {
        clock.advance(ms(50));
        provider.tick();
        let now = provider.displayed().map(|t| t.message().to_string());
        if now != last {
            if let Some(message) = &now {
                timeline.push((step * 50, message.clone()));
            }
            last = now;
        }
    }
    timeline
}

#[test]
fn three_toasts_play_in_order_with_gaps() {
    let (mut provider, clock) = provider(scenario_config());

    for name in ["A", "B", "C"] {
        provider.show_toast(ToastRequest::new(name));
    }
    let timeline = run_for(&mut provider, &clock, 4000);

    assert_eq!(
        timeline,
        vec![
            (0, "A".to_string()),
            (1200, "B".to_string()),
            (2400, "C".to_string()),
        ]
    );
    assert_eq!(provider.phase(), Phase::Idle);
}

#[test]
fn display_order_is_arrival_order_modulo_drops() {
    let config = ToastConfig {
        max_queue_size: 2,
        ..scenario_config()
    };
    let (mut provider, clock) = provider(config);

    for i in 0..6 {
        provider.show_toast(ToastRequest::new(format!("t{i}")));
    }
    let shown: Vec<String> = run_for(&mut provider, &clock, 6000)
        .into_iter()
        .map(|(_, message)| message)
        .collect();

    // t0 displays at once; of t1..t5 only the two newest survive.
    assert_eq!(shown, vec!["t0", "t4", "t5"]);
}

#[test]
fn blank_message_changes_nothing() {
    let (mut provider, _clock) = provider(scenario_config());

    provider.show_toast(ToastRequest::new(""));

    assert!(provider.displayed().is_none());
    assert_eq!(provider.queued_count(), 0);
    assert_eq!(provider.phase(), Phase::Idle);
}

#[test]
fn hide_finishes_current_and_shows_next_after_gap() {
    let (mut provider, clock) = provider(scenario_config());
    let finished = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&finished);

    provider.show_toast(ToastRequest::new("A").on_finish(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    provider.show_toast(ToastRequest::new("B"));

    clock.advance(ms(400));
    provider.hide_toast();
    assert!(provider.displayed().is_none());
    assert_eq!(finished.load(Ordering::SeqCst), 1);

    clock.advance(ms(150));
    provider.tick();
    assert!(provider.displayed().is_none());

    clock.advance(ms(50));
    provider.tick();
    assert_eq!(provider.displayed().map(ActiveToast::message), Some("B"));

    clock.advance(ms(5000));
    provider.tick();
    assert_eq!(finished.load(Ordering::SeqCst), 1);
}

#[test]
fn hide_when_idle_keeps_queue_order() {
    let (mut provider, _clock) = provider(scenario_config());

    provider.hide_toast();
    provider.show_toast(ToastRequest::new("A"));
    provider.show_toast(ToastRequest::new("B"));
    provider.show_toast(ToastRequest::new("C"));

    let before: Vec<String> = provider.queued().map(|r| r.message().to_string()).collect();
    provider.hide_toast();
    provider.hide_toast();
    let after: Vec<String> = provider.queued().map(|r| r.message().to_string()).collect();

    assert_eq!(before, vec!["B", "C"]);
    assert_eq!(after, before);
}

#[test]
fn finish_callbacks_fire_in_display_order() {
    let (mut provider, clock) = provider(scenario_config());
    let order = Arc::new(Mutex::new(Vec::new()));

    for name in ["first", "second"] {
        let log = Arc::clone(&order);
        provider.show_toast(ToastRequest::new(name).on_finish(move || {
            log.lock().expect("lock").push(name);
        }));
    }
    clock.advance(ms(10_000));
    provider.tick();

    assert_eq!(*order.lock().expect("lock"), vec!["first", "second"]);
    assert_eq!(
        provider.current().map(ActiveToast::message),
        Some("second")
    );
}

#[test]
fn toast_position_falls_back_to_config() {
    let config = ToastConfig {
        position: Position::Top,
        ..scenario_config()
    };
    let (mut provider, _clock) = provider(config);

    provider.show_toast(ToastRequest::new("default"));
    assert_eq!(
        provider.displayed().map(ActiveToast::position),
        Some(Position::Top)
    );

    provider.hide_toast();
    provider.show_toast(ToastRequest::new("override").with_position(Position::Bottom));
    assert_eq!(
        provider.displayed().map(ActiveToast::position),
        Some(Position::Bottom)
    );
}

#[test]
fn diagnostics_surface_silent_drops() {
    let config = ToastConfig {
        max_queue_size: 1,
        ..scenario_config()
    };
    let (mut provider, clock) = provider(config);
    let mut collector = DiagnosticsCollector::default();
    provider.set_diagnostics(collector.handle());

    provider.show_toast(ToastRequest::new("  "));
    provider.show_toast(ToastRequest::new("A"));
    provider.show_toast(ToastRequest::new("B"));
    provider.show_toast(ToastRequest::new("C"));
    clock.advance(ms(1000));
    provider.tick();
    collector.process_pending();

    let report = collector.report();
    assert_eq!(report.rejected_total, 1);
    assert_eq!(report.dropped_total, 1);
    assert!(collector.iter().any(|event| matches!(
        event.kind,
        ToastEventKind::Finished {
            reason: FinishReason::Expired,
            ..
        }
    )));
}

#[test]
fn config_file_drives_provider() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("toast.toml");
    std::fs::write(
        &path,
        "duration_ms = 500\nmax_queue_size = 2\nanimation_duration_ms = 100\n",
    )
    .expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let (mut provider, clock) = provider(loaded);

    provider.show_toast(ToastRequest::new("A"));
    provider.show_toast(ToastRequest::new("B"));
    let timeline = run_for(&mut provider, &clock, 1000);

    assert_eq!(
        timeline,
        vec![(0, "A".to_string()), (600, "B".to_string())]
    );
    dir.close().expect("Failed to close temporary directory");
}
