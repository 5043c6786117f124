// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the SVG glyphs the toasts consume.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. SVG sources live under `assets/icons/` and carry
//! a plain black fill; widgets recolor them through an `svg::Style` at render
//! time, so a single source serves every severity accent.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(
    checkmark,
    "checkmark.svg",
    "Checkmark icon: check/tick mark for success."
);
define_icon!(info, "info.svg", "Info icon: letter 'i' in circle.");
define_icon!(
    warning,
    "warning.svg",
    "Warning icon: triangle with exclamation mark."
);
define_icon!(error, "error.svg", "Error icon: X mark in circle.");
define_icon!(cross, "cross.svg", "Cross icon: X mark shape.");

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
