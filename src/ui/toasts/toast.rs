// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` state machine along with the `ToastKind`
//! and `Phase` enums. A toast never mutates its own containment: every
//! lifecycle predicate is a pure function of a supplied `Instant`, and the
//! owning toaster prunes toasts once they report [`Phase::Finished`].

use super::position::Side;
use crate::config::defaults::{ENTRANCE_DELAY_MS, EXIT_DURATION_MS};
use crate::ui::design_tokens::palette;
use crate::ui::state::{SwipeOutcome, SwipeState, ToastDuration};
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of a toast, determining its accent color and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl ToastKind {
    /// Resolves a kind from its boolean flags.
    ///
    /// The flags are mutually exclusive in effect, with precedence
    /// error > warning > info; with no flag set the kind is `Success`.
    #[must_use]
    pub fn from_flags(info: bool, warning: bool, error: bool) -> Self {
        if error {
            ToastKind::Error
        } else if warning {
            ToastKind::Warning
        } else if info {
            ToastKind::Info
        } else {
            ToastKind::Success
        }
    }

    /// Parses a kind name, silently falling back to `Success` for
    /// anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "info" => ToastKind::Info,
            "warning" => ToastKind::Warning,
            "error" => ToastKind::Error,
            _ => ToastKind::Success,
        }
    }

    /// Returns the canonical kind name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Info => palette::INFO_500,
            ToastKind::Warning => palette::WARNING_500,
            ToastKind::Error => palette::ERROR_500,
        }
    }
}

/// Lifecycle phase of a toast, recomputed from a supplied instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting out the short fixed delay before the slide-in starts.
    Entering,
    /// Fully visible; the countdown runs here unless persistent.
    Visible,
    /// Dismissed and playing the exit transition.
    Exiting,
    /// Exit transition over; the parent should remove this toast.
    Finished,
}

/// A single dismissible, auto-expiring notification.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    message: String,
    duration: ToastDuration,
    persistent: bool,
    side: Side,
    created_at: Instant,
    /// Idempotence guard: set exactly once, on the first dismissal.
    dismissed_at: Option<Instant>,
    swipe: SwipeState,
}

impl Toast {
    /// Creates a new toast with the given kind and message.
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            kind,
            message: message.into(),
            duration: ToastDuration::default(),
            persistent: false,
            side: Side::default(),
            created_at: Instant::now(),
            dismissed_at: None,
            swipe: SwipeState::default(),
        }
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    /// Sets the auto-dismiss duration.
    #[must_use]
    pub fn with_duration(mut self, duration: ToastDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Disables (or re-enables) automatic time-based dismissal.
    #[must_use]
    pub fn with_persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Sets the side the toast slides in from.
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the auto-dismiss duration.
    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    /// Returns whether automatic dismissal is disabled.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Returns the side the toast slides in from.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns when this toast was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns whether this toast has been dismissed.
    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed_at.is_some()
    }

    /// Dismisses the toast, recording `now` as the start of its exit
    /// transition.
    ///
    /// Idempotent: only the first call takes effect, later calls are no-ops.
    /// Returns `true` if this call performed the dismissal.
    pub fn dismiss_at(&mut self, now: Instant) -> bool {
        if self.dismissed_at.is_some() {
            return false;
        }
        self.dismissed_at = Some(now);
        true
    }

    /// Dismisses the toast as of the current instant.
    pub fn dismiss(&mut self) -> bool {
        self.dismiss_at(Instant::now())
    }

    /// Returns the lifecycle phase as of `now`.
    ///
    /// A dismissal always wins over the countdown: once `dismissed_at` is
    /// set the toast is `Exiting` (then `Finished`), regardless of how much
    /// lifetime remained.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        if let Some(dismissed_at) = self.dismissed_at {
            if now.duration_since(dismissed_at) >= Duration::from_millis(EXIT_DURATION_MS) {
                Phase::Finished
            } else {
                Phase::Exiting
            }
        } else if now.duration_since(self.created_at) < Duration::from_millis(ENTRANCE_DELAY_MS) {
            Phase::Entering
        } else {
            Phase::Visible
        }
    }

    /// Returns the lifecycle phase as of the current instant.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase_at(Instant::now())
    }

    /// Returns whether this toast is due for automatic dismissal as of `now`.
    ///
    /// A persistent toast is never due, regardless of elapsed time. An
    /// already dismissed toast is not due either.
    #[must_use]
    pub fn should_auto_dismiss_at(&self, now: Instant) -> bool {
        if self.persistent || self.dismissed_at.is_some() {
            return false;
        }
        now.duration_since(self.created_at) >= self.duration.as_duration()
    }

    /// Returns the remaining fraction of the countdown, from 1.0 down to 0.0.
    ///
    /// The countdown runs linearly over the visible lifetime, starting after
    /// the entrance delay. A persistent toast always reports a full bar.
    #[must_use]
    pub fn countdown_remaining_at(&self, now: Instant) -> f32 {
        if self.persistent {
            return 1.0;
        }
        let delay = Duration::from_millis(ENTRANCE_DELAY_MS).as_secs_f32();
        let total = self.duration.as_duration().as_secs_f32();
        let elapsed = now.duration_since(self.created_at).as_secs_f32() - delay;
        (1.0 - elapsed / total).clamp(0.0, 1.0)
    }

    /// Returns the remaining countdown fraction as of the current instant.
    #[must_use]
    pub fn countdown_remaining(&self) -> f32 {
        self.countdown_remaining_at(Instant::now())
    }

    /// Returns the swipe recognizer attached to this toast.
    #[must_use]
    pub fn swipe(&self) -> &SwipeState {
        &self.swipe
    }

    /// Returns the swipe recognizer mutably, for gesture wiring.
    pub fn swipe_mut(&mut self) -> &mut SwipeState {
        &mut self.swipe
    }

    /// Ends the current swipe gesture; past the threshold this invokes the
    /// same idempotent dismiss path as the button and the countdown.
    pub fn end_swipe_at(&mut self, now: Instant) -> SwipeOutcome {
        let outcome = self.swipe.finish_at_cursor();
        if outcome == SwipeOutcome::Dismiss {
            self.dismiss_at(now);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn toast_ids_are_unique() {
        let t1 = Toast::success("test");
        let t2 = Toast::success("test");
        assert_ne!(t1.id(), t2.id());
    }

    #[test]
    fn kind_flags_resolve_with_precedence() {
        assert_eq!(ToastKind::from_flags(false, false, false), ToastKind::Success);
        assert_eq!(ToastKind::from_flags(true, false, false), ToastKind::Info);
        assert_eq!(ToastKind::from_flags(false, true, false), ToastKind::Warning);
        assert_eq!(ToastKind::from_flags(false, false, true), ToastKind::Error);
        // Higher-precedence flags win over lower ones
        assert_eq!(ToastKind::from_flags(true, true, false), ToastKind::Warning);
        assert_eq!(ToastKind::from_flags(true, false, true), ToastKind::Error);
        assert_eq!(ToastKind::from_flags(false, true, true), ToastKind::Error);
        assert_eq!(ToastKind::from_flags(true, true, true), ToastKind::Error);
    }

    #[test]
    fn kind_parse_falls_back_to_success() {
        assert_eq!(ToastKind::parse("info"), ToastKind::Info);
        assert_eq!(ToastKind::parse("warning"), ToastKind::Warning);
        assert_eq!(ToastKind::parse("error"), ToastKind::Error);
        assert_eq!(ToastKind::parse("success"), ToastKind::Success);
        assert_eq!(ToastKind::parse("fatal"), ToastKind::Success);
        assert_eq!(ToastKind::parse(""), ToastKind::Success);
    }

    #[test]
    fn kind_colors_are_distinct() {
        let success = ToastKind::Success.color();
        let info = ToastKind::Info.color();
        let warning = ToastKind::Warning.color();
        let error = ToastKind::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Toast::success("").kind(), ToastKind::Success);
        assert_eq!(Toast::info("").kind(), ToastKind::Info);
        assert_eq!(Toast::warning("").kind(), ToastKind::Warning);
        assert_eq!(Toast::error("").kind(), ToastKind::Error);
    }

    #[test]
    fn phase_walks_through_entrance_and_visibility() {
        let toast = Toast::success("test");
        let born = toast.created_at();

        assert_eq!(toast.phase_at(born), Phase::Entering);
        assert_eq!(toast.phase_at(born + millis(50)), Phase::Entering);
        assert_eq!(toast.phase_at(born + millis(100)), Phase::Visible);
        assert_eq!(toast.phase_at(born + millis(4_000)), Phase::Visible);
    }

    #[test]
    fn phase_after_dismissal_exits_then_finishes() {
        let mut toast = Toast::success("test");
        let born = toast.created_at();

        toast.dismiss_at(born + millis(1_000));
        assert_eq!(toast.phase_at(born + millis(1_100)), Phase::Exiting);
        assert_eq!(toast.phase_at(born + millis(1_299)), Phase::Exiting);
        assert_eq!(toast.phase_at(born + millis(1_300)), Phase::Finished);
        assert_eq!(toast.phase_at(born + millis(60_000)), Phase::Finished);
    }

    #[test]
    fn dismissal_is_idempotent() {
        let mut toast = Toast::success("test");
        let born = toast.created_at();

        assert!(toast.dismiss_at(born + millis(500)));
        assert!(!toast.dismiss_at(born + millis(2_000)));
        // The second call must not restart the exit transition
        assert_eq!(toast.phase_at(born + millis(900)), Phase::Finished);
    }

    #[test]
    fn dismissal_during_entrance_is_honored() {
        let mut toast = Toast::success("test");
        let born = toast.created_at();

        assert!(toast.dismiss_at(born + millis(20)));
        assert_eq!(toast.phase_at(born + millis(30)), Phase::Exiting);
    }

    #[test]
    fn auto_dismiss_becomes_due_at_duration() {
        let toast = Toast::success("test").with_duration(ToastDuration::new(5));
        let born = toast.created_at();

        assert!(!toast.should_auto_dismiss_at(born + millis(4_999)));
        assert!(toast.should_auto_dismiss_at(born + millis(5_000)));
    }

    #[test]
    fn persistent_toast_is_never_due() {
        let toast = Toast::info("test").with_persistent(true);
        let born = toast.created_at();

        assert!(!toast.should_auto_dismiss_at(born + Duration::from_secs(3_600)));
    }

    #[test]
    fn dismissed_toast_is_no_longer_due() {
        let mut toast = Toast::success("test");
        let born = toast.created_at();

        toast.dismiss_at(born + millis(100));
        assert!(!toast.should_auto_dismiss_at(born + Duration::from_secs(10)));
    }

    #[test]
    fn countdown_runs_linearly_after_the_entrance_delay() {
        use approx::assert_abs_diff_eq;

        let toast = Toast::success("test").with_duration(ToastDuration::new(10));
        let born = toast.created_at();

        assert_abs_diff_eq!(toast.countdown_remaining_at(born), 1.0);
        assert_abs_diff_eq!(toast.countdown_remaining_at(born + millis(100)), 1.0);
        assert_abs_diff_eq!(
            toast.countdown_remaining_at(born + millis(5_100)),
            0.5,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            toast.countdown_remaining_at(born + millis(10_100)),
            0.0,
            epsilon = 1e-3
        );
        // Clamped past the end
        assert_abs_diff_eq!(toast.countdown_remaining_at(born + millis(20_000)), 0.0);
    }

    #[test]
    fn persistent_countdown_stays_full() {
        use approx::assert_abs_diff_eq;

        let toast = Toast::success("test").with_persistent(true);
        let born = toast.created_at();

        assert_abs_diff_eq!(
            toast.countdown_remaining_at(born + Duration::from_secs(100)),
            1.0
        );
    }

    #[test]
    fn swipe_past_threshold_dismisses_through_the_guarded_path() {
        let mut toast = Toast::success("test");
        let born = toast.created_at();

        toast.swipe_mut().update(10.0);
        toast.swipe_mut().begin_at_cursor();
        toast.swipe_mut().update(160.0);
        let outcome = toast.end_swipe_at(born + millis(500));

        assert_eq!(outcome, SwipeOutcome::Dismiss);
        assert!(toast.is_dismissed());
        // A later manual dismiss is a no-op
        assert!(!toast.dismiss_at(born + millis(600)));
    }

    #[test]
    fn short_swipe_leaves_toast_alive() {
        let mut toast = Toast::success("test");
        let born = toast.created_at();

        toast.swipe_mut().update(10.0);
        toast.swipe_mut().begin_at_cursor();
        toast.swipe_mut().update(60.0);
        let outcome = toast.end_swipe_at(born + millis(500));

        assert_eq!(outcome, SwipeOutcome::Reset);
        assert!(!toast.is_dismissed());
        assert_eq!(toast.swipe().offset(), 0.0);
    }
}
