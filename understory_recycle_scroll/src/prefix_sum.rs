// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variable-length geometry backed by a prefix-sum table.

use alloc::vec::Vec;

use kurbo::Size;

use crate::axis::ScrollAxis;
use crate::geometry::{ScrollFrame, ScrollGeometry, ScrollItem};
use crate::padding::Padding;

/// Geometry with a measured length per item.
///
/// Cumulative lengths are kept in a prefix-sum table that is patched from the
/// changed index onward on every edit, so queries stay `O(1)` and edits cost
/// `O(len - index)`.
///
/// Indices past the end of the collection answer with the last item's length.
#[derive(Clone, Debug)]
pub struct PrefixSumGeometry<T = usize> {
    frame: ScrollFrame,
    items: Vec<T>,
    lengths: Vec<f64>,
    // prefix[i] is the sum of lengths[..i]; always lengths.len() + 1 entries.
    prefix: Vec<f64>,
}

impl PrefixSumGeometry<usize> {
    /// Creates items indexed `0..n` with the given lengths.
    #[must_use]
    pub fn from_lengths(frame: ScrollFrame, lengths: impl IntoIterator<Item = f64>) -> Self {
        let mut geometry = Self::new(frame);
        for (index, length) in lengths.into_iter().enumerate() {
            geometry.push(index, length);
        }
        geometry
    }
}

impl<T: ScrollItem> PrefixSumGeometry<T> {
    /// Creates an empty geometry.
    #[must_use]
    pub fn new(frame: ScrollFrame) -> Self {
        Self {
            frame,
            items: Vec::new(),
            lengths: Vec::new(),
            prefix: alloc::vec![0.0],
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item with its length.
    pub fn push(&mut self, item: T, length: f64) {
        let total = self.total();
        self.items.push(item);
        self.lengths.push(length);
        self.prefix.push(total + length);
    }

    /// Updates the length of the item at `index`.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_length(&mut self, index: usize, length: f64) {
        let Some(slot) = self.lengths.get_mut(index) else {
            return;
        };
        if *slot == length {
            return;
        }
        *slot = length;
        self.rebuild_from(index);
    }

    /// Shortens the collection to `len` items.
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
        self.lengths.truncate(len);
        self.prefix.truncate(self.lengths.len() + 1);
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

    fn total(&self) -> f64 {
        self.prefix.last().copied().unwrap_or(0.0)
    }

    fn rebuild_from(&mut self, index: usize) {
        let mut running = self.prefix[index];
        for (i, length) in self.lengths.iter().enumerate().skip(index) {
            running += *length;
            self.prefix[i + 1] = running;
        }
    }
}

impl<T: ScrollItem> ScrollGeometry for PrefixSumGeometry<T> {
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
        self.lengths
            .iter()
            .copied()
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    fn item_length(&self, index: usize) -> f64 {
        self.lengths
            .get(index)
            .or_else(|| self.lengths.last())
            .copied()
            .unwrap_or(0.0)
    }

    fn content_length(&self, count: usize) -> f64 {
        self.prefix[count.min(self.lengths.len())]
    }

    fn default_padding(&self) -> Padding {
        self.frame.default_padding
    }
}
