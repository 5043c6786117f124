// SPDX-License-Identifier: MPL-2.0
//! Toast notification widgets.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Toasts appear temporarily to inform users
//! about actions without blocking interaction, and a `Toaster` container
//! positions and manages them.
//!
//! # Components
//!
//! - [`toast`] - The `Toast` state machine with kinds and lifecycle phases
//! - [`toaster`] - The `Toaster` container for spawning and mass-dismissal
//! - [`position`] - Corner and slide-in side resolution
//! - [`widget`] - Rendering of toast cards and the corner overlay
//!
//! # Usage
//!
//! ```ignore
//! use iced_toaster::{Message, ToastKind, ToastOptions, Toaster};
//!
//! // Create a toaster
//! let mut toaster = Toaster::new(Corner::BottomLeft);
//!
//! // Spawn a toast
//! toaster.add_toast("Saved!", ToastKind::Success, ToastOptions::default());
//!
//! // In your update function, forward its messages
//! toaster.handle_message(&message);
//!
//! // In your view function, render the overlay
//! let overlay = iced_toaster::view_overlay(&toaster).map(AppMessage::Toaster);
//! ```
//!
//! # Design Considerations
//!
//! - Lifecycles are driven by a host tick, not self-firing timers
//! - The toaster owns removal; a toast only reports `Phase::Finished`
//! - Dismissal is idempotent and wins over any remaining countdown
//! - Position: one of four corners, bottom-left by default

pub mod position;
pub mod toast;
pub mod toaster;
pub mod widget;

pub use position::{Corner, Side};
pub use toast::{Phase, Toast, ToastId, ToastKind};
pub use toaster::{Message, ToastOptions, Toaster};
pub use widget::{view_overlay, view_toast};
