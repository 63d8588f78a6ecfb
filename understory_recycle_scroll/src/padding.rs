// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-sided layout padding.

use kurbo::Insets;

use crate::error::CalculatorError;

/// One side of a [`Padding`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaddingSide {
    /// Leading edge of a vertical list (`x` component).
    Top,
    /// Trailing edge of a vertical list (`y` component).
    Bottom,
    /// Leading edge of a horizontal list (`z` component).
    Left,
    /// Trailing edge of a horizontal list (`w` component).
    Right,
}

/// Insets applied around the item window of a recycling list.
///
/// Hosts move the visible item window by growing the leading inset, so the
/// calculator both consumes padding (see
/// [`ScrollCalculator::rolling`](crate::ScrollCalculator::rolling)) and produces it
/// (see [`ScrollCalculator::offset`](crate::ScrollCalculator::offset)).
///
/// As a four-component vector the order is `(top, bottom, left, right)`, which is
/// what [`Padding::to_array`] and [`Padding::from_array`] use.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Top inset.
    pub top: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Left inset.
    pub left: f64,
    /// Right inset.
    pub right: f64,
}

impl Padding {
    /// Padding with every side at zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates padding from its four sides.
    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Creates padding with the same inset on every side.
    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Creates padding from `[top, bottom, left, right]`.
    #[must_use]
    pub const fn from_array([top, bottom, left, right]: [f64; 4]) -> Self {
        Self::new(top, bottom, left, right)
    }

    /// Returns `[top, bottom, left, right]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.top, self.bottom, self.left, self.right]
    }

    /// Returns `true` if no side is negative.
    ///
    /// `NaN` sides count as non-negative here; they are not a sign error.
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.first_negative().is_none()
    }

    /// Checks that no side is negative.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::NegativePadding`] naming the first negative side,
    /// in `top, bottom, left, right` order.
    pub fn validate(&self) -> Result<(), CalculatorError> {
        match self.first_negative() {
            Some((side, value)) => Err(CalculatorError::NegativePadding { side, value }),
            None => Ok(()),
        }
    }

    fn first_negative(&self) -> Option<(PaddingSide, f64)> {
        [
            (PaddingSide::Top, self.top),
            (PaddingSide::Bottom, self.bottom),
            (PaddingSide::Left, self.left),
            (PaddingSide::Right, self.right),
        ]
        .into_iter()
        .find(|&(_, value)| value < 0.0)
    }
}

impl From<Insets> for Padding {
    fn from(insets: Insets) -> Self {
        Self::new(insets.y0, insets.y1, insets.x0, insets.x1)
    }
}

impl From<Padding> for Insets {
    fn from(padding: Padding) -> Self {
        Self::new(padding.left, padding.top, padding.right, padding.bottom)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Insets;

    use super::{Padding, PaddingSide};
    use crate::CalculatorError;

    #[test]
    fn insets_conversion_keeps_sides() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);
        let insets = Insets::from(padding);
        assert_eq!(insets, Insets::new(3.0, 1.0, 4.0, 2.0));
        assert_eq!(Padding::from(insets), padding);
    }

    #[test]
    fn array_order_is_top_bottom_left_right() {
        let padding = Padding::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(padding.top, 1.0);
        assert_eq!(padding.right, 4.0);
        assert_eq!(padding.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn validate_reports_first_negative_side() {
        assert!(Padding::ZERO.validate().is_ok());
        assert!(Padding::uniform(5.0).is_non_negative());

        let err = Padding::new(0.0, -1.0, -2.0, 0.0).validate().unwrap_err();
        assert_eq!(
            err,
            CalculatorError::NegativePadding {
                side: PaddingSide::Bottom,
                value: -1.0,
            }
        );
    }
}
