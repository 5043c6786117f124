// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` provides toast and toaster notification widgets for the
//! Iced GUI toolkit.
//!
//! A [`Toaster`] is a corner-anchored container that spawns, ticks, and
//! mass-dismisses [`Toast`] notifications. Each toast owns its lifecycle
//! state (entrance delay, linear countdown, auto-dismissal, exit transition)
//! and can also be dismissed by its button or a horizontal swipe gesture.
//! Hosts drive everything through [`Message`] values and a periodic tick
//! subscription; the toaster prunes finished toasts itself, so callers must
//! not hold long-lived references to individual toasts.

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod config;
pub mod error;
pub mod ui;

pub use error::{Error, Result};
pub use ui::state::{SwipeOutcome, SwipeState, ToastDuration};
pub use ui::toasts::{
    view_overlay, view_toast, Corner, Message, Phase, Side, Toast, ToastId, ToastKind,
    ToastOptions, Toaster,
};
