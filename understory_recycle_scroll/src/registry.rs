// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-owned binding of views to calculators.

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use tracing::debug;

use crate::calculator::ScrollCalculator;
use crate::resolver::PrefixIndexResolver;

/// At most one [`ScrollCalculator`] per view key.
///
/// The registry is an ordinary value owned by the host controller; there is no
/// process-wide lookup. Because it is generic over the geometry type, each item
/// type gets its own registry, and within it each view (keyed by `K`) has its
/// own smoothing state.
///
/// [`CalculatorRegistry::get_or_create`] hands back the existing calculator for
/// a key until [`CalculatorRegistry::dispose`] releases it; the next request for
/// that key then builds a fresh one.
///
/// ```rust
/// use understory_recycle_scroll::{
///     CalculatorRegistry, FixedGeometry, ScrollAxis, ScrollCalculator, ScrollFrame,
/// };
///
/// let mut registry = CalculatorRegistry::<&str, FixedGeometry>::new();
/// let frame = ScrollFrame::new(ScrollAxis::Vertical, 300.0);
///
/// let calc = registry.get_or_create("inbox", || {
///     ScrollCalculator::new(FixedGeometry::with_len(frame, 20, 50.0))
/// });
/// assert_eq!(calc.instance_count(false), Ok(7));
///
/// assert!(registry.dispose(&"inbox").is_some());
/// assert!(registry.is_empty());
/// ```
#[derive(Clone)]
pub struct CalculatorRegistry<K, G, R = PrefixIndexResolver> {
    calculators: HashMap<K, ScrollCalculator<G, R>>,
}

impl<K, G, R> Default for CalculatorRegistry<K, G, R> {
    fn default() -> Self {
        Self {
            calculators: HashMap::new(),
        }
    }
}

impl<K: Debug, G, R> Debug for CalculatorRegistry<K, G, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CalculatorRegistry")
            .field("keys", &self.calculators.keys().collect::<alloc::vec::Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<K: Hash + Eq + Debug, G, R> CalculatorRegistry<K, G, R> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calculator bound to `key`, creating it with `make` if there is none.
    pub fn get_or_create(
        &mut self,
        key: K,
        make: impl FnOnce() -> ScrollCalculator<G, R>,
    ) -> &mut ScrollCalculator<G, R> {
        self.calculators.entry(key).or_insert_with_key(|key| {
            debug!(?key, "calculator created");
            make()
        })
    }

    /// Returns the calculator bound to `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&ScrollCalculator<G, R>> {
        self.calculators.get(key)
    }

    /// Returns the calculator bound to `key` mutably, if any.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut ScrollCalculator<G, R>> {
        self.calculators.get_mut(key)
    }

    /// Returns `true` if a calculator is bound to `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.calculators.contains_key(key)
    }

    /// Number of bound calculators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    /// Returns `true` if no calculators are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    /// Releases the binding for `key`, returning the calculator that held it.
    pub fn dispose(&mut self, key: &K) -> Option<ScrollCalculator<G, R>> {
        let removed = self.calculators.remove(key);
        if removed.is_some() {
            debug!(?key, "calculator disposed");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::CalculatorRegistry;
    use crate::{FixedGeometry, ScrollAxis, ScrollCalculator, ScrollFrame};

    fn make() -> ScrollCalculator<FixedGeometry> {
        let frame = ScrollFrame::new(ScrollAxis::Vertical, 300.0);
        ScrollCalculator::new(FixedGeometry::with_len(frame, 20, 50.0))
    }

    #[test]
    fn same_key_returns_existing_calculator() {
        let mut registry = CalculatorRegistry::<u32, FixedGeometry>::new();
        registry
            .get_or_create(1, make)
            .offset(14, Vec2::new(0.0, 300.0), true)
            .unwrap();
        let held = registry.get(&1).unwrap().last_content_pos();
        assert_eq!(held, 300.0);

        let mut built_again = false;
        let calc = registry.get_or_create(1, || {
            built_again = true;
            make()
        });
        assert_eq!(calc.last_content_pos(), 300.0);
        assert!(!built_again);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn dispose_releases_binding() {
        let mut registry = CalculatorRegistry::<u32, FixedGeometry>::new();
        registry
            .get_or_create(1, make)
            .offset(14, Vec2::new(0.0, 300.0), true)
            .unwrap();
        registry.get_or_create(2, make);

        assert!(registry.dispose(&1).is_some());
        assert!(registry.dispose(&1).is_none());
        assert!(!registry.contains(&1));
        assert!(registry.contains(&2));

        let fresh = registry.get_or_create(1, make);
        assert_eq!(fresh.last_content_pos(), 0.0);
    }
}
