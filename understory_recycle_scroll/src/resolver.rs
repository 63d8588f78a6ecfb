// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::geometry::ScrollGeometry;

/// Maps a content position back to the index of the item occupying it.
pub trait IndexResolver<G: ScrollGeometry + ?Sized> {
    /// Returns the index of the item at `position`.
    fn index_at_position(&self, position: Vec2, geometry: &G) -> usize;
}

/// Resolves positions by binary search over [`ScrollGeometry::content_length`].
///
/// The scroll-axis reading of `position` (see
/// [`ScrollAxis::main_position`](crate::ScrollAxis::main_position)) selects the
/// item whose span `[start, end)` contains it. Positions before the content map
/// to `0`, positions past it to the last item, and an empty collection to `0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrefixIndexResolver;

impl<G: ScrollGeometry + ?Sized> IndexResolver<G> for PrefixIndexResolver {
    fn index_at_position(&self, position: Vec2, geometry: &G) -> usize {
        let len = geometry.item_count();
        if len == 0 {
            return 0;
        }
        let target = geometry.axis().main_position(position);
        if target.is_nan() || target <= 0.0 {
            return 0;
        }

        // Smallest `i` with content_length(i + 1) > target.
        let (mut lo, mut hi) = (0, len);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if geometry.content_length(mid + 1) > target {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo.min(len - 1)
    }
}
