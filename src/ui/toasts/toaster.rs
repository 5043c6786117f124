// SPDX-License-Identifier: MPL-2.0
//! Toast container and lifecycle driver.
//!
//! The `Toaster` anchors its toasts to a screen corner, spawns them through
//! [`Toaster::add_toast`], and advances every lifecycle on a host-driven
//! tick. It owns removal: a toast only ever reports [`Phase::Finished`],
//! the toaster prunes it on the next tick.
//!
//! There is deliberately no visible-count cap, uniqueness check, or rate
//! limiting; an unbounded toast count is the caller's responsibility.

use super::position::Corner;
use super::toast::{Phase, Toast, ToastId, ToastKind};
use crate::config::defaults::TICK_INTERVAL_MS;
use crate::config::Config;
use crate::ui::state::ToastDuration;
use iced::{time, Subscription};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Mark every current toast for dismissal.
    Clear,
    /// Tick for advancing lifecycles and pruning finished toasts.
    Tick,
    /// A swipe gesture began on a toast.
    SwipeStarted(ToastId),
    /// The cursor moved over a toast (carries the x coordinate).
    SwipeMoved(ToastId, f32),
    /// A swipe gesture ended on a toast.
    SwipeEnded(ToastId),
}

/// Per-toast attribute overrides applied by [`Toaster::add_toast`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToastOptions {
    /// Overrides the toaster's default persistence.
    pub persistent: Option<bool>,
    /// Overrides the toaster's default lifetime.
    pub duration: Option<ToastDuration>,
}

/// A positioned container that spawns and mass-dismisses toasts.
#[derive(Debug, Default)]
pub struct Toaster {
    corner: Corner,
    /// Current toasts, newest first.
    toasts: VecDeque<Toast>,
    default_duration: ToastDuration,
    default_persistent: bool,
}

impl Toaster {
    /// Creates an empty toaster anchored to the given corner.
    #[must_use]
    pub fn new(corner: Corner) -> Self {
        Self {
            corner,
            ..Self::default()
        }
    }

    /// Builds a toaster from host preferences.
    ///
    /// Applies the same silent fallback validation as the widgets: an
    /// unrecognized position degrades to the default corner and an
    /// out-of-range duration is clamped.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            corner: config
                .position
                .as_deref()
                .map(Corner::parse)
                .unwrap_or_default(),
            toasts: VecDeque::new(),
            default_duration: config.duration.map(ToastDuration::new).unwrap_or_default(),
            default_persistent: config.persistent.unwrap_or(false),
        }
    }

    /// Returns the corner this toaster anchors to.
    #[must_use]
    pub fn corner(&self) -> Corner {
        self.corner
    }

    /// Spawns a new toast and inserts it as the first child
    /// (newest-on-top ordering). Returns the new toast's ID.
    ///
    /// The toast's slide-in side derives from the toaster's corner;
    /// `options` overrides the configured duration and persistence.
    pub fn add_toast(
        &mut self,
        content: impl Into<String>,
        kind: ToastKind,
        options: ToastOptions,
    ) -> ToastId {
        let toast = Toast::new(kind, content)
            .with_side(self.corner.side())
            .with_duration(options.duration.unwrap_or(self.default_duration))
            .with_persistent(options.persistent.unwrap_or(self.default_persistent));
        let id = toast.id();
        self.toasts.push_front(toast);
        id
    }

    /// Dismisses a toast by its ID as of `now`.
    ///
    /// Returns `true` if the toast was found and this call dismissed it.
    pub fn dismiss_at(&mut self, id: ToastId, now: Instant) -> bool {
        self.toasts
            .iter_mut()
            .find(|t| t.id() == id)
            .is_some_and(|t| t.dismiss_at(now))
    }

    /// Marks every current toast for dismissal as of `now`.
    ///
    /// Toasts added afterwards are unaffected; this is a one-shot
    /// broadcast, not a persistent clear mode.
    pub fn clear_at(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            toast.dismiss_at(now);
        }
    }

    /// Marks every current toast for dismissal.
    pub fn clear(&mut self) {
        self.clear_at(Instant::now());
    }

    /// Advances all lifecycles as of `now`: auto-dismisses due toasts and
    /// prunes the ones whose exit transition has finished.
    ///
    /// An overdue toast is dismissed as of its deadline, not the tick
    /// instant, so a late tick does not restart the exit transition.
    pub fn tick_at(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            if toast.should_auto_dismiss_at(now) {
                let due = toast.created_at() + toast.duration().as_duration();
                toast.dismiss_at(due);
            }
        }
        self.toasts.retain(|t| t.phase_at(now) != Phase::Finished);
    }

    /// Handles a toast message as of the current instant.
    pub fn handle_message(&mut self, message: &Message) {
        let now = Instant::now();
        match message {
            Message::Dismiss(id) => {
                self.dismiss_at(*id, now);
            }
            Message::Clear => {
                self.clear_at(now);
            }
            Message::Tick => {
                self.tick_at(now);
            }
            Message::SwipeStarted(id) => {
                if let Some(toast) = self.get_mut(*id) {
                    toast.swipe_mut().begin_at_cursor();
                }
            }
            Message::SwipeMoved(id, x) => {
                if let Some(toast) = self.get_mut(*id) {
                    toast.swipe_mut().update(*x);
                }
            }
            Message::SwipeEnded(id) => {
                if let Some(toast) = self.get_mut(*id) {
                    toast.end_swipe_at(now);
                }
            }
        }
    }

    /// Returns the periodic tick subscription driving the lifecycles.
    ///
    /// Active only while toasts exist, so an idle toaster costs nothing.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.toasts.is_empty() {
            Subscription::none()
        } else {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick)
        }
    }

    /// Returns the current toasts, newest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Returns a toast by its ID.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id() == id)
    }

    /// Returns the number of current toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns whether the toaster has no toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
