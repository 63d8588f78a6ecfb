// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_recycle_scroll --heading-base-level=0

//! Understory Recycle Scroll: geometry for recycling scroll lists.
//!
//! A recycling list realizes a small pool of cells and moves them over a much
//! larger collection of variable-sized items. This crate computes the numbers
//! such a list needs, without knowing anything about widgets or rendering:
//!
//! - [`ScrollCalculator::instance_count`]: how many cells to realize.
//! - [`ScrollCalculator::content_size`]: the size of the scrollable content.
//! - [`ScrollCalculator::bar_position`]: where the scrollbar thumb sits for a
//!   given leading item.
//! - [`ScrollCalculator::rolling`]: how many whole items a padding change shifts
//!   the window by.
//! - [`ScrollCalculator::offset`]: the padding that positions the window for a
//!   content position, optionally with a direction-locked preload shift.
//!
//! The calculator reads geometry through two collaborator traits:
//!
//! - [`ScrollGeometry`]: per-item and cumulative lengths, viewport, content box,
//!   orientation, and default padding. [`FixedGeometry`] and
//!   [`PrefixSumGeometry`] are ready-made implementations.
//! - [`IndexResolver`]: maps a content position back to an item index.
//!   [`PrefixIndexResolver`] is the default.
//!
//! Host controllers keep one calculator per view, typically in a
//! [`CalculatorRegistry`], and call it from their layout pass.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_recycle_scroll::{
//!     FixedGeometry, Padding, ScrollAxis, ScrollCalculator, ScrollFrame,
//! };
//!
//! // 20 rows, 50 logical pixels each, in a 300 pixel tall viewport.
//! let frame = ScrollFrame::new(ScrollAxis::Vertical, 300.0)
//!     .with_content_box(Size::new(320.0, 300.0));
//! let mut calc = ScrollCalculator::new(FixedGeometry::with_len(frame, 20, 50.0));
//!
//! assert_eq!(calc.instance_count(false), Ok(7));
//! assert_eq!(calc.content_size(), Size::new(320.0, 1000.0));
//!
//! // The content has scrolled 225 pixels; the window starts at row 4.
//! let padding = calc.offset(7, Vec2::new(0.0, 225.0), false).unwrap();
//! assert_eq!(padding, Padding::new(200.0, 0.0, 0.0, 0.0));
//! ```
//!
//! All lengths live in a caller-chosen 1D coordinate space (typically logical
//! pixels) and are expected to be finite and non-negative.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod calculator;
mod error;
mod fixed;
mod geometry;
mod padding;
mod prefix_sum;
mod registry;
mod resolver;
mod settings;

pub use axis::ScrollAxis;
pub use calculator::{ScrollCalculator, ScrollCalculatorDebugInfo};
pub use error::CalculatorError;
pub use fixed::FixedGeometry;
pub use geometry::{ScrollFrame, ScrollGeometry, ScrollItem};
pub use padding::{Padding, PaddingSide};
pub use prefix_sum::PrefixSumGeometry;
pub use registry::CalculatorRegistry;
pub use resolver::{IndexResolver, PrefixIndexResolver};
pub use settings::CalculatorSettings;
