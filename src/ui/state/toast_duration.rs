// SPDX-License-Identifier: MPL-2.0
//! Toast lifetime domain type.
//!
//! This module provides a type-safe wrapper for the toast auto-dismiss
//! duration in seconds.

use crate::config::defaults::{DEFAULT_DURATION_SECS, MAX_DURATION_SECS, MIN_DURATION_SECS};

/// Toast lifetime in seconds before auto-dismissal.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–120 seconds).
///
/// # Example
///
/// ```
/// use iced_toaster::ToastDuration;
///
/// let duration = ToastDuration::new(5);
/// assert_eq!(duration.value(), 5);
///
/// // Values outside range are clamped
/// let too_high = ToastDuration::new(10_000);
/// assert_eq!(too_high.value(), 120); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// Creates a new toast duration, clamping to the valid range.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS))
    }

    /// Returns the value in whole seconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the lifetime as a Duration.
    #[must_use]
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(self.0)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(DEFAULT_DURATION_SECS)
    }
}
