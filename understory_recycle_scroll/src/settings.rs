// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunables for [`ScrollCalculator`](crate::ScrollCalculator).
///
/// The defaults are what recycling lists are normally driven with; most hosts
/// never change them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorSettings {
    /// Tolerance below which a padding difference is treated as zero when rolling.
    pub epsilon: f64,
    /// Fraction of the trailing window length used as the preload pre-shift.
    ///
    /// Preloading doubles the number of realized cells, so a quarter of that
    /// doubled window is half of the visible window.
    pub preload_fraction: f64,
    /// Extra cells realized when not double-generating, so an exact fit never
    /// leaves a gap during fast scrolling.
    pub exact_fit_slack: usize,
}

impl CalculatorSettings {
    /// Default rolling tolerance.
    pub const DEFAULT_EPSILON: f64 = 1e-3;
    /// Default preload fraction.
    pub const DEFAULT_PRELOAD_FRACTION: f64 = 0.25;

    /// Sets the rolling tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the preload fraction.
    #[must_use]
    pub fn with_preload_fraction(mut self, fraction: f64) -> Self {
        self.preload_fraction = fraction;
        self
    }

    /// Sets the exact-fit slack.
    #[must_use]
    pub fn with_exact_fit_slack(mut self, slack: usize) -> Self {
        self.exact_fit_slack = slack;
        self
    }
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
            preload_fraction: Self::DEFAULT_PRELOAD_FRACTION,
            exact_fit_slack: 1,
        }
    }
}
