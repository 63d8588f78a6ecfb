// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`ScrollCalculator`](crate::ScrollCalculator).

use core::fmt;

use crate::padding::PaddingSide;

/// Error returned when a calculation is asked for with inputs it cannot honor.
///
/// Every variant is a caller error: the same arguments will fail again, so
/// there is nothing to retry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalculatorError {
    /// A padding passed to [`ScrollCalculator::rolling`](crate::ScrollCalculator::rolling)
    /// has a negative component.
    NegativePadding {
        /// The first side found to be negative.
        side: PaddingSide,
        /// The offending value.
        value: f64,
    },
    /// [`ScrollCalculator::offset`](crate::ScrollCalculator::offset) was asked for a
    /// window of zero items.
    ZeroCount,
    /// The geometry has no items, but the operation needs at least one.
    EmptyItems,
    /// The trailing window is larger than the item collection.
    CountExceedsItems {
        /// Requested window size.
        count: usize,
        /// Number of items available.
        len: usize,
    },
    /// The geometry reported a minimum item length that is zero, negative, or not finite.
    InvalidMinimumLength {
        /// The reported minimum length.
        length: f64,
    },
    /// Content does not exceed the viewport, so there is no range for a scrollbar thumb.
    DegenerateScrollRange {
        /// Total length of all items.
        content_length: f64,
        /// Length of the viewport along the scroll axis.
        viewport_length: f64,
    },
    /// A backward roll walked past the first item.
    RollBeforeStart,
    /// A forward roll walked beyond the last item.
    RollPastEnd {
        /// Number of items in the collection.
        len: usize,
    },
    /// An item reached by a roll walk has no usable length.
    DegenerateItemLength {
        /// Index of the item.
        index: usize,
        /// Length reported for it.
        length: f64,
    },
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativePadding { side, value } => {
                write!(f, "padding can not be negative ({side:?} is {value})")
            }
            Self::ZeroCount => f.write_str("offset window count must be greater than zero"),
            Self::EmptyItems => f.write_str("geometry has no items"),
            Self::CountExceedsItems { count, len } => {
                write!(f, "window of {count} items exceeds the {len} available")
            }
            Self::InvalidMinimumLength { length } => {
                write!(f, "minimum item length must be positive and finite, got {length}")
            }
            Self::DegenerateScrollRange {
                content_length,
                viewport_length,
            } => write!(
                f,
                "content length {content_length} does not exceed viewport length {viewport_length}"
            ),
            Self::RollBeforeStart => f.write_str("roll walked before the first item"),
            Self::RollPastEnd { len } => write!(f, "roll walked past the last of {len} items"),
            Self::DegenerateItemLength { index, length } => {
                write!(f, "item {index} has unusable length {length}")
            }
        }
    }
}

impl core::error::Error for CalculatorError {}
