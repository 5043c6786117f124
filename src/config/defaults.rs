// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all timing and gesture constants.
//!
//! This module serves as the single source of truth for the fixed delays
//! that drive toast lifecycles. Constants are organized by category.
//!
//! # Categories
//!
//! - **Duration**: Toast lifetime bounds
//! - **Transition**: Entrance and exit timing
//! - **Tick**: Lifecycle polling interval
//! - **Swipe**: Gesture recognition threshold

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default toast lifetime in seconds before auto-dismissal.
pub const DEFAULT_DURATION_SECS: u64 = 5;

/// Minimum allowed toast lifetime (in seconds).
pub const MIN_DURATION_SECS: u64 = 1;

/// Maximum allowed toast lifetime (in seconds).
pub const MAX_DURATION_SECS: u64 = 120;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Delay before a freshly inserted toast starts its slide-in (in milliseconds).
///
/// Decouples the entrance transition from the initial style application.
pub const ENTRANCE_DELAY_MS: u64 = 100;

/// Length of the exit transition played after a dismissal (in milliseconds).
pub const EXIT_DURATION_MS: u64 = 300;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval of the host-driven tick subscription (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Minimum horizontal displacement for a drag to count as a dismiss gesture.
pub const SWIPE_THRESHOLD_PX: f32 = 100.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Duration validation
    assert!(MIN_DURATION_SECS > 0);
    assert!(MAX_DURATION_SECS >= MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS >= MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS <= MAX_DURATION_SECS);

    // Transition validation
    assert!(ENTRANCE_DELAY_MS > 0);
    assert!(EXIT_DURATION_MS > 0);
    assert!(ENTRANCE_DELAY_MS < MIN_DURATION_SECS * 1000);

    // Tick validation: the tick must be able to observe every phase
    assert!(TICK_INTERVAL_MS <= ENTRANCE_DELAY_MS);
    assert!(TICK_INTERVAL_MS <= EXIT_DURATION_MS);

    // Swipe validation
    assert!(SWIPE_THRESHOLD_PX > 0.0);
};
