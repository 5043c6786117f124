// SPDX-License-Identifier: MPL-2.0
//! Corner and side resolution shared by toasts and the toaster.

/// Screen corner a toaster anchors its toasts to.
///
/// Unrecognized position names silently fall back to the default corner
/// rather than being reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    TopLeft,
    TopRight,
    #[default]
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Parses a position name, falling back to [`Corner::BottomLeft`]
    /// for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "top-left" => Corner::TopLeft,
            "top-right" => Corner::TopRight,
            "bottom-left" => Corner::BottomLeft,
            "bottom-right" => Corner::BottomRight,
            _ => Corner::default(),
        }
    }

    /// Returns the canonical position name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }

    /// Returns the horizontal half of the screen this corner lies in.
    ///
    /// Toasts spawned by a toaster slide in from this side.
    #[must_use]
    pub fn side(self) -> Side {
        match self {
            Corner::TopLeft | Corner::BottomLeft => Side::Left,
            Corner::TopRight | Corner::BottomRight => Side::Right,
        }
    }

    /// Returns whether this corner anchors to the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }
}

/// Horizontal half of the screen a toast slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Returns the canonical side name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}
