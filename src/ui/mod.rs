// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`toasts`] - Toast and toaster widgets
//! - [`state`] - Reusable interaction state (swipe gesture, durations)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading and rendering (visual primitives)

pub mod design_tokens;
pub mod icons;
pub mod state;
pub mod toasts;
