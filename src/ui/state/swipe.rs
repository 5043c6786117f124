// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state management
//!
//! Turns horizontal drag deltas on an element into a dismiss decision.
//! The recognizer tracks only the starting x coordinate of the gesture;
//! on release, the absolute displacement is compared against
//! [`SWIPE_THRESHOLD_PX`]. There is no debouncing, no multi-touch
//! handling, and no velocity detection.

use crate::config::defaults::SWIPE_THRESHOLD_PX;

/// Outcome of a completed swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Displacement exceeded the threshold; the element should be dismissed.
    Dismiss,
    /// Displacement stayed within the threshold; the element snaps back.
    Reset,
}

/// Manages swipe-to-dismiss state for a single element.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeState {
    /// X coordinate where the active gesture started, if any.
    start_x: Option<f32>,
    /// Last cursor x seen over the element (used to anchor a press).
    cursor_x: f32,
    /// Current signed visual offset of the element.
    offset: f32,
}

impl SwipeState {
    /// Starts a gesture at the given x coordinate.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.cursor_x = x;
        self.offset = 0.0;
    }

    /// Updates the drag position and returns the new signed offset.
    ///
    /// The offset is the raw displacement from the starting coordinate,
    /// with no clamping. Without an active gesture this only records the
    /// cursor position and leaves the offset untouched.
    pub fn update(&mut self, x: f32) -> f32 {
        self.cursor_x = x;
        if let Some(start) = self.start_x {
            self.offset = x - start;
        }
        self.offset
    }

    /// Ends the gesture at the given x coordinate.
    ///
    /// Returns [`SwipeOutcome::Dismiss`] when the absolute displacement
    /// strictly exceeds the threshold; otherwise snaps the offset back to
    /// zero and returns [`SwipeOutcome::Reset`]. Ending a gesture that was
    /// never started resets.
    pub fn finish(&mut self, x: f32) -> SwipeOutcome {
        self.cursor_x = x;
        let Some(start) = self.start_x.take() else {
            return SwipeOutcome::Reset;
        };

        let displacement = x - start;
        if displacement.abs() > SWIPE_THRESHOLD_PX {
            self.offset = displacement;
            SwipeOutcome::Dismiss
        } else {
            self.offset = 0.0;
            SwipeOutcome::Reset
        }
    }

    /// Anchors a gesture at the last observed cursor position.
    ///
    /// Press events carry no coordinates in Iced's `mouse_area`, so widgets
    /// feed cursor positions through [`update`](Self::update) and anchor the
    /// gesture here when the press arrives.
    pub fn begin_at_cursor(&mut self) {
        self.begin(self.cursor_x);
    }

    /// Ends a gesture at the last observed cursor position.
    pub fn finish_at_cursor(&mut self) -> SwipeOutcome {
        self.finish(self.cursor_x)
    }

    /// Returns the current signed visual offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns whether a gesture is currently in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }
}
