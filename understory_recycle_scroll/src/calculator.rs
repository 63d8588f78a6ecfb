// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll calculator: cell counts, content size, scrollbar position,
//! padding rolls, and window offsets.

use kurbo::{Size, Vec2};
use tracing::{debug, trace};

use crate::axis::ScrollAxis;
use crate::error::CalculatorError;
use crate::geometry::{ScrollGeometry, ScrollItem};
use crate::padding::Padding;
use crate::resolver::{IndexResolver, PrefixIndexResolver};
use crate::settings::CalculatorSettings;

/// Geometry engine for a recycling scroll list.
///
/// A `ScrollCalculator` owns the list's [`ScrollGeometry`] and an
/// [`IndexResolver`] and turns them into the numbers a host needs to lay out a
/// small pool of recycled cells over a much larger collection.
///
/// The only state it keeps between calls is the preload direction memory used
/// by [`ScrollCalculator::offset`]; every other operation is a pure function
/// of the current geometry. Because of that memory, `offset` with
/// `preload = true` is not idempotent: repeating a call can return a different
/// result, and results depend on call order.
#[derive(Clone, Debug)]
pub struct ScrollCalculator<G, R = PrefixIndexResolver> {
    geometry: G,
    resolver: R,
    settings: CalculatorSettings,
    max_offset: f64,
    last_offset_length: f64,
    last_content_pos: f64,
}

impl<G: ScrollGeometry> ScrollCalculator<G> {
    /// Creates a calculator using [`PrefixIndexResolver`].
    #[must_use]
    pub fn new(geometry: G) -> Self {
        Self::with_resolver(geometry, PrefixIndexResolver)
    }
}

impl<G: ScrollGeometry, R: IndexResolver<G>> ScrollCalculator<G, R> {
    /// Creates a calculator with a custom index resolver.
    #[must_use]
    pub fn with_resolver(geometry: G, resolver: R) -> Self {
        Self {
            geometry,
            resolver,
            settings: CalculatorSettings::default(),
            max_offset: 0.0,
            last_offset_length: 0.0,
            last_content_pos: 0.0,
        }
    }

    /// Replaces the settings, returning `self`.
    #[must_use]
    pub fn with_settings(mut self, settings: CalculatorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the geometry.
    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Returns the geometry mutably, for hosts that update item sizes in place.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// Returns the index resolver.
    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Returns the current settings.
    #[must_use]
    pub fn settings(&self) -> CalculatorSettings {
        self.settings
    }

    /// Sets the settings. The preload direction memory is kept.
    pub fn set_settings(&mut self, settings: CalculatorSettings) {
        self.settings = settings;
    }

    /// Maximum window offset computed by the last [`ScrollCalculator::offset`] call.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Preload shift length returned by the last preloading `offset` call.
    #[must_use]
    pub fn last_offset_length(&self) -> f64 {
        self.last_offset_length
    }

    /// Scroll-axis content position seen by the last preloading `offset` call.
    #[must_use]
    pub fn last_content_pos(&self) -> f64 {
        self.last_content_pos
    }

    /// Consumes the calculator and returns its collaborators.
    pub fn into_parts(self) -> (G, R) {
        (self.geometry, self.resolver)
    }

    /// Number of cells to realize so the viewport is always covered.
    ///
    /// This is `ceil(viewport / min_item_length)` plus the exact-fit slack, or,
    /// when `need_double_generation` is set, twice `ceil(viewport / min_item_length)`
    /// so a preloading list can shift its window without realizing more cells.
    /// The result never exceeds the number of items.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::InvalidMinimumLength`] when the geometry's
    /// minimum item length is not a positive finite number.
    pub fn instance_count(&self, need_double_generation: bool) -> Result<usize, CalculatorError> {
        let min_length = self.geometry.min_item_length();
        if !min_length.is_finite() || min_length <= 0.0 {
            return Err(CalculatorError::InvalidMinimumLength { length: min_length });
        }

        let ratio = libm::ceil(self.geometry.viewport_length() / min_length);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Cell counts are small; negative and NaN ratios saturate to zero"
        )]
        let base = ratio as usize;

        let count = if need_double_generation {
            base.saturating_mul(2)
        } else {
            base.saturating_add(self.settings.exact_fit_slack)
        };
        let count = count.min(self.geometry.item_count());
        trace!(need_double_generation, min_length, count, "instance_count");
        Ok(count)
    }

    /// Size to give the scrollable content container.
    ///
    /// The scroll-axis extent is the total length of all items; the cross-axis
    /// extent is taken from the current content box. An empty collection yields
    /// [`Size::ZERO`].
    #[must_use]
    pub fn content_size(&self) -> Size {
        let len = self.geometry.item_count();
        if len == 0 {
            return Size::ZERO;
        }
        let size = self
            .geometry
            .axis()
            .pack_size(self.geometry.content_length(len), self.geometry.content_box());
        trace!(len, width = size.width, height = size.height, "content_size");
        size
    }

    /// Scrollbar thumb position in `[0, 1]` when the window starts at `index`.
    ///
    /// Vertical lists start at `1` (top) and fall toward `0`; horizontal lists
    /// run the other way, from `0` at the leading edge.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::DegenerateScrollRange`] when the content does
    /// not exceed the viewport.
    pub fn bar_position(&self, index: usize) -> Result<f64, CalculatorError> {
        let content_length = self.geometry.content_length(self.geometry.item_count());
        let viewport_length = self.geometry.viewport_length();
        let range = content_length - viewport_length;
        if range.is_nan() || range <= 0.0 {
            return Err(CalculatorError::DegenerateScrollRange {
                content_length,
                viewport_length,
            });
        }

        let vertical = (1.0 - self.geometry.content_length(index) / range).clamp(0.0, 1.0);
        Ok(match self.geometry.axis() {
            ScrollAxis::Vertical => vertical,
            ScrollAxis::Horizontal => 1.0 - vertical,
        })
    }

    /// Converts a change in leading padding into a whole-item window shift.
    ///
    /// Only the leading inset along the scroll axis is compared (`top` for
    /// vertical lists, `left` for horizontal ones). A growing inset walks
    /// forward from `start_index`, consuming one item length per step; a
    /// shrinking inset walks backward from `start_index - 1`. The walk stops
    /// once the remaining difference is within the configured epsilon, so the
    /// last item may be consumed only partially. Zero-length items are stepped
    /// over and still count toward the roll. The sign of the result is the
    /// direction of the shift.
    ///
    /// Either walk is bounded by the collection: it can neither pass index `0`
    /// nor step beyond the last item.
    ///
    /// # Errors
    ///
    /// - [`CalculatorError::NegativePadding`] if either padding has a negative side.
    /// - [`CalculatorError::RollBeforeStart`] if a backward walk passes index `0`.
    /// - [`CalculatorError::RollPastEnd`] if a forward walk steps beyond the last item.
    /// - [`CalculatorError::DegenerateItemLength`] if a reached item has a
    ///   negative or non-finite length.
    pub fn rolling(
        &self,
        current: Padding,
        new: Padding,
        start_index: usize,
    ) -> Result<isize, CalculatorError> {
        current.validate()?;
        new.validate()?;

        let axis = self.geometry.axis();
        let epsilon = self.settings.epsilon;
        let mut diff = axis.leading_padding(new) - axis.leading_padding(current);
        let mut index = start_index;
        let mut rolling: isize = 0;

        if diff > epsilon {
            let len = self.geometry.item_count();
            while diff > epsilon {
                if index >= len {
                    return Err(CalculatorError::RollPastEnd { len });
                }
                diff -= self.walk_length(index)?;
                rolling += 1;
                index += 1;
            }
        } else if diff < -epsilon {
            while diff < -epsilon {
                let Some(previous) = index.checked_sub(1) else {
                    return Err(CalculatorError::RollBeforeStart);
                };
                diff += self.walk_length(previous)?;
                rolling -= 1;
                index = previous;
            }
        }

        trace!(start_index, rolling, "rolling");
        Ok(rolling)
    }

    /// Padding that positions a window of `count` items for `content_pos`.
    ///
    /// `content_pos` is the content container's position: vertical lists read
    /// `y`, horizontal lists read `-x`. Positions before the content reset to
    /// the origin and positions past it reset to the maximum offset. The
    /// position is resolved to an item, and that item's start is clamped to
    /// `[0, max_offset]`, where `max_offset` leaves exactly the trailing
    /// `count` items in the window. The result is the default padding with the
    /// offset added to the leading inset; the trailing inset along the scroll
    /// axis is zero.
    ///
    /// With `preload`, the position is first pulled back by a fraction of the
    /// trailing window's length (see [`CalculatorSettings::preload_fraction`]).
    /// That shift is held steady while scrolling continues in one direction,
    /// which keeps a double-generated window from oscillating.
    ///
    /// # Errors
    ///
    /// - [`CalculatorError::ZeroCount`] if `count` is zero.
    /// - [`CalculatorError::EmptyItems`] if the geometry has no items.
    /// - [`CalculatorError::CountExceedsItems`] if `count` is larger than the collection.
    pub fn offset(
        &mut self,
        count: usize,
        content_pos: Vec2,
        preload: bool,
    ) -> Result<Padding, CalculatorError> {
        if count == 0 {
            return Err(CalculatorError::ZeroCount);
        }
        let len = self.geometry.item_count();
        if len == 0 {
            return Err(CalculatorError::EmptyItems);
        }
        if count > len {
            return Err(CalculatorError::CountExceedsItems { count, len });
        }

        let axis = self.geometry.axis();
        let content_length = self.geometry.content_length(len);
        let anchor = self
            .geometry
            .items()
            .get(len - count)
            .ok_or(CalculatorError::CountExceedsItems { count, len })?
            .index();
        self.max_offset = content_length - self.geometry.span_length(count, anchor);

        let mut position = content_pos;
        if (-position.x).min(position.y) < 0.0 {
            position = Vec2::ZERO;
        }
        if (-position.x).max(position.y) > content_length {
            let edge = match axis {
                ScrollAxis::Vertical => self.max_offset,
                ScrollAxis::Horizontal => -self.max_offset,
            };
            position = Vec2::new(edge, edge);
        }

        let mut shift = Vec2::ZERO;
        if preload {
            let length = self.preload_length(anchor, count, position);
            shift = Vec2::new(-length, length);
        }

        let index = self
            .resolver
            .index_at_position(position - shift, &self.geometry);
        let target = self.geometry.content_length(index);
        let offset = if target < 0.0 {
            0.0
        } else if target > self.max_offset {
            self.max_offset
        } else {
            target
        };

        trace!(count, preload, index, offset, max_offset = self.max_offset, "offset");
        Ok(self.padding_with_offset(axis, offset))
    }

    /// Returns a snapshot of the calculator's inputs and smoothing state.
    #[must_use]
    pub fn debug_info(&self) -> ScrollCalculatorDebugInfo {
        let item_count = self.geometry.item_count();
        ScrollCalculatorDebugInfo {
            axis: self.geometry.axis(),
            item_count,
            content_length: self.geometry.content_length(item_count),
            viewport_length: self.geometry.viewport_length(),
            max_offset: self.max_offset,
            last_offset_length: self.last_offset_length,
            last_content_pos: self.last_content_pos,
            settings: self.settings,
        }
    }

    fn walk_length(&self, index: usize) -> Result<f64, CalculatorError> {
        let length = self.geometry.item_length(index);
        if !length.is_finite() || length < 0.0 {
            return Err(CalculatorError::DegenerateItemLength { index, length });
        }
        Ok(length)
    }

    // Moving the same way the shift last changed keeps the previous shift.
    fn preload_length(&mut self, index: usize, count: usize, position: Vec2) -> f64 {
        let mut length =
            self.geometry.span_length(count, index) * self.settings.preload_fraction;
        let pos = self.geometry.axis().main_position(position);

        let same_direction = (pos > self.last_content_pos && length > self.last_offset_length)
            || (pos < self.last_content_pos && length < self.last_offset_length);
        if same_direction {
            debug!(
                held = self.last_offset_length,
                candidate = length,
                "preload shift held"
            );
            length = self.last_offset_length;
        }

        self.last_offset_length = length;
        self.last_content_pos = pos;
        length
    }

    fn padding_with_offset(&self, axis: ScrollAxis, offset: f64) -> Padding {
        let base = self.geometry.default_padding();
        match axis {
            ScrollAxis::Vertical => Padding::new(offset + base.top, 0.0, base.left, base.right),
            ScrollAxis::Horizontal => {
                Padding::new(base.top, base.bottom, offset + base.left, 0.0)
            }
        }
    }
}

/// Debug snapshot of a [`ScrollCalculator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCalculatorDebugInfo {
    /// Scroll axis.
    pub axis: ScrollAxis,
    /// Number of items in the collection.
    pub item_count: usize,
    /// Total length of all items.
    pub content_length: f64,
    /// Viewport length along the scroll axis.
    pub viewport_length: f64,
    /// Maximum offset from the last `offset` call.
    pub max_offset: f64,
    /// Preload shift from the last preloading `offset` call.
    pub last_offset_length: f64,
    /// Scroll-axis position from the last preloading `offset` call.
    pub last_content_pos: f64,
    /// Active settings.
    pub settings: CalculatorSettings,
}
