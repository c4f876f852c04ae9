// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Display duration and the gap between consecutive toasts
//! - **Queue**: Bound on pending toasts
//! - **Surface**: Blur intensity used by the display surface
//! - **Diagnostics**: Event buffer capacity
//! - **Host**: Tick interval driving the scheduler

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a toast stays visible (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Default gap between one toast hiding and the next one appearing
/// (in milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 1000;

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of pending toasts kept before the oldest are dropped.
pub const DEFAULT_MAX_QUEUE_SIZE: usize = 10;

/// Smallest usable queue bound.
pub const MIN_MAX_QUEUE_SIZE: usize = 1;

// ==========================================================================
// Surface Defaults
// ==========================================================================

/// Default blur intensity (0 to 100).
pub const DEFAULT_BLUR_INTENSITY: f32 = 70.0;

/// Minimum blur intensity.
pub const MIN_BLUR_INTENSITY: f32 = 0.0;

/// Maximum blur intensity.
pub const MAX_BLUR_INTENSITY: f32 = 100.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of toast events kept by the diagnostics collector.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Host Defaults
// ==========================================================================

/// Interval of the tick subscription that advances the scheduler.
pub const TICK_INTERVAL_MS: u64 = 50;

/// Interval at which an idle mounted provider checks for commands sent from
/// other threads.
pub const IDLE_POLL_INTERVAL_MS: u64 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DURATION_MS > 0);

    assert!(MIN_MAX_QUEUE_SIZE > 0);
    assert!(DEFAULT_MAX_QUEUE_SIZE >= MIN_MAX_QUEUE_SIZE);

    assert!(DEFAULT_BLUR_INTENSITY >= MIN_BLUR_INTENSITY);
    assert!(DEFAULT_BLUR_INTENSITY <= MAX_BLUR_INTENSITY);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);

    assert!(TICK_INTERVAL_MS > 0);
    assert!(IDLE_POLL_INTERVAL_MS > TICK_INTERVAL_MS);
};
