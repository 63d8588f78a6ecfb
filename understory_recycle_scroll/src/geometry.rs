// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry contract the calculator reads item sizes through.

use kurbo::Size;

use crate::axis::ScrollAxis;
use crate::padding::Padding;

/// An item with a stable position in the full collection.
pub trait ScrollItem {
    /// Index of this item in the full collection.
    fn index(&self) -> usize;
}

impl ScrollItem for usize {
    fn index(&self) -> usize {
        *self
    }
}

impl<T: ScrollItem + ?Sized> ScrollItem for &T {
    fn index(&self) -> usize {
        (**self).index()
    }
}

/// Per-item and cumulative lengths along the scroll axis, plus the frame they live in.
///
/// Lengths are in the host's layout units (typically logical pixels) and are
/// expected to be finite and non-negative. `item_length` must answer for any
/// index a roll walk can reach, which includes indices outside the window the
/// host currently has realized.
pub trait ScrollGeometry {
    /// Item type carried by the collection.
    type Item: ScrollItem;

    /// Axis the list scrolls along.
    fn axis(&self) -> ScrollAxis;

    /// Length of the viewport along the scroll axis.
    fn viewport_length(&self) -> f64;

    /// Current size of the content box. Only the cross-axis extent is reused.
    fn content_box(&self) -> Size;

    /// The full item collection, ordered by index.
    fn items(&self) -> &[Self::Item];

    /// Number of items in the collection.
    fn item_count(&self) -> usize {
        self.items().len()
    }

    /// Smallest item length along the scroll axis.
    fn min_item_length(&self) -> f64;

    /// Length of the item at `index`.
    fn item_length(&self, index: usize) -> f64;

    /// Sum of the lengths of the first `count` items.
    fn content_length(&self, count: usize) -> f64;

    /// Sum of the lengths of `count` items starting at `from`.
    fn span_length(&self, count: usize, from: usize) -> f64 {
        self.content_length(from.saturating_add(count)) - self.content_length(from)
    }

    /// Padding the host lays the list out with before any scroll offset is applied.
    fn default_padding(&self) -> Padding {
        Padding::ZERO
    }
}

/// The view-level part of a geometry: orientation, viewport, content box and default padding.
///
/// Shared by [`FixedGeometry`](crate::FixedGeometry) and
/// [`PrefixSumGeometry`](crate::PrefixSumGeometry).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollFrame {
    /// Axis the list scrolls along.
    pub axis: ScrollAxis,
    /// Viewport length along the scroll axis.
    pub viewport_length: f64,
    /// Size of the content box.
    pub content_box: Size,
    /// Padding applied before any scroll offset.
    pub default_padding: Padding,
}

impl ScrollFrame {
    /// Creates a frame for `axis` with the given viewport length.
    #[must_use]
    pub fn new(axis: ScrollAxis, viewport_length: f64) -> Self {
        Self {
            axis,
            viewport_length,
            ..Self::default()
        }
    }

    /// Sets the content box size.
    #[must_use]
    pub fn with_content_box(mut self, content_box: Size) -> Self {
        self.content_box = content_box;
        self
    }

    /// Sets the default padding.
    #[must_use]
    pub fn with_default_padding(mut self, padding: Padding) -> Self {
        self.default_padding = padding;
        self
    }
}
