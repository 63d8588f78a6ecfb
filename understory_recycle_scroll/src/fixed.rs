// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Size;

use crate::axis::ScrollAxis;
use crate::geometry::{ScrollFrame, ScrollGeometry, ScrollItem};
use crate::padding::Padding;

/// Geometry where every item has the same length.
///
/// Lengths are answered for any index, including ones past the end of the
/// collection.
#[derive(Clone, Debug)]
pub struct FixedGeometry<T = usize> {
    frame: ScrollFrame,
    items: Vec<T>,
    item_length: f64,
}

impl FixedGeometry<usize> {
    /// Creates `len` items indexed `0..len`, each `item_length` long.
    #[must_use]
    pub fn with_len(frame: ScrollFrame, len: usize, item_length: f64) -> Self {
        Self::from_items(frame, (0..len).collect(), item_length)
    }
}

impl<T: ScrollItem> FixedGeometry<T> {
    /// Wraps an existing item collection.
    #[must_use]
    pub fn from_items(frame: ScrollFrame, items: Vec<T>, item_length: f64) -> Self {
        Self {
            frame,
            items,
            item_length,
        }
    }

    /// Returns the shared item length.
    #[must_use]
    pub fn uniform_length(&self) -> f64 {
        self.item_length
    }

    /// Sets the shared item length.
    pub fn set_uniform_length(&mut self, item_length: f64) {
        self.item_length = item_length;
    }

    /// Returns the view frame.
    #[must_use]
    pub fn frame(&self) -> &ScrollFrame {
        &self.frame
    }

    /// Returns the view frame mutably.
    pub fn frame_mut(&mut self) -> &mut ScrollFrame {
        &mut self.frame
    }

    /// Returns the item collection mutably.
    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}

impl<T: ScrollItem> ScrollGeometry for FixedGeometry<T> {
    type Item = T;

    fn axis(&self) -> ScrollAxis {
        self.frame.axis
    }

    fn viewport_length(&self) -> f64 {
        self.frame.viewport_length
    }

    fn content_box(&self) -> Size {
        self.frame.content_box
    }

    fn items(&self) -> &[T] {
        &self.items
    }

    fn min_item_length(&self) -> f64 {
        self.item_length
    }

    fn item_length(&self, _index: usize) -> f64 {
        self.item_length
    }

    fn content_length(&self, count: usize) -> f64 {
        count as f64 * self.item_length
    }

    fn span_length(&self, count: usize, _from: usize) -> f64 {
        count as f64 * self.item_length
    }

    fn default_padding(&self) -> Padding {
        self.frame.default_padding
    }
}
