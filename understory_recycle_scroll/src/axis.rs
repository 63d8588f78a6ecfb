// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::padding::Padding;

/// The single axis a recycling list scrolls along.
///
/// The axis is chosen once per list; scrolling along both axes at the same
/// time is not modeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollAxis {
    /// Items stack top to bottom; content positions grow along `+y`.
    #[default]
    Vertical,
    /// Items stack left to right; content moves toward `-x` as it scrolls.
    Horizontal,
}

impl ScrollAxis {
    /// Returns `true` for [`ScrollAxis::Vertical`].
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }

    /// Reads how far a content position has scrolled along this axis.
    #[must_use]
    pub fn main_position(self, position: Vec2) -> f64 {
        match self {
            Self::Vertical => position.y,
            Self::Horizontal => -position.x,
        }
    }

    /// Returns the leading inset along this axis (`top` or `left`).
    #[must_use]
    pub fn leading_padding(self, padding: Padding) -> f64 {
        match self {
            Self::Vertical => padding.top,
            Self::Horizontal => padding.left,
        }
    }

    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub fn main_extent(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// Builds a size with `main` along this axis and the cross extent of `cross_source`.
    #[must_use]
    pub fn pack_size(self, main: f64, cross_source: Size) -> Size {
        match self {
            Self::Vertical => Size::new(cross_source.width, main),
            Self::Horizontal => Size::new(main, cross_source.height),
        }
    }
}
