// SPDX-License-Identifier: MPL-2.0
//! Reusable interaction state, independent of any particular widget.
//!
//! - [`swipe`] - Swipe-to-dismiss gesture recognition
//! - [`toast_duration`] - Clamped toast lifetime newtype

pub mod swipe;
pub mod toast_duration;

pub use swipe::{SwipeOutcome, SwipeState};
pub use toast_duration::ToastDuration;
