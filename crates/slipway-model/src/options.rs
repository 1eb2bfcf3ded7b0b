// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Configuration for a packing call.
//!
//! `PackOptions` collects the strategy selection and its tuning knobs. Two
//! of the knobs (`sort_by` values other than `Start`, and `allow_overlap`)
//! are accepted extension points with no current effect; they are recognized
//! configuration, never rejected as invalid input.

/// The lane-selection policy used by [`pack`].
///
/// [`pack`]: https://docs.rs/slipway-pack
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Strategy {
    /// Earliest-fit over start-sorted input; O(n log n); provably minimal
    /// lane count when no lane limit is configured.
    #[default]
    Greedy,
    /// Brute-force minimal-lane search over round-robin trials with
    /// increasing lane counts; O(n³) worst case.
    Optimized,
    /// Round-robin load spreading. Currently reuses the same minimal-lane
    /// round-robin search as `Optimized`; a distinct balancing algorithm is
    /// an extension point.
    Balanced,
}

impl Strategy {
    /// Returns the canonical name of the strategy.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Optimized => "optimized",
            Self::Balanced => "balanced",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The advisory input ordering key.
///
/// Only `Start` ordering is implemented; `End` and `Duration` are accepted
/// extension points with no current effect.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SortKey {
    /// Sort by start ascending (the implemented ordering).
    #[default]
    Start,
    /// Extension point; currently no effect.
    End,
    /// Extension point; currently no effect.
    Duration,
}

/// Options recognized by a packing call.
///
/// # Examples
///
/// ```rust
/// # use slipway_model::options::{PackOptions, Strategy};
///
/// let options = PackOptions::new()
///     .with_strategy(Strategy::Optimized)
///     .with_max_lanes(4);
/// assert_eq!(options.strategy(), Strategy::Optimized);
/// assert_eq!(options.max_lanes(), Some(4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PackOptions {
    strategy: Strategy,
    max_lanes: Option<usize>,
    sort_by: SortKey,
    allow_overlap: bool,
}

impl PackOptions {
    /// Creates options with all defaults: greedy strategy, no lane limit,
    /// start ordering, overlap disallowed.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the packing strategy.
    #[inline]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Caps the number of lanes the greedy strategy may open.
    ///
    /// Intervals that fit no lane once the cap is reached end up in the
    /// result's unplaced list. Only the greedy strategy enforces the cap.
    ///
    /// # Panics
    ///
    /// Panics if `max_lanes` is zero; the cap must be a positive count.
    #[inline]
    pub fn with_max_lanes(mut self, max_lanes: usize) -> Self {
        assert!(
            max_lanes > 0,
            "called `PackOptions::with_max_lanes` with a zero lane cap"
        );
        self.max_lanes = Some(max_lanes);
        self
    }

    /// Sets the advisory ordering key. Values other than `SortKey::Start`
    /// are accepted but currently have no effect.
    #[inline]
    pub fn with_sort_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Accepted extension point; currently has no effect on placement.
    #[inline]
    pub fn with_allow_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = allow_overlap;
        self
    }

    /// Returns the selected strategy.
    #[inline]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the lane cap, if any.
    #[inline]
    pub const fn max_lanes(&self) -> Option<usize> {
        self.max_lanes
    }

    /// Returns the advisory ordering key.
    #[inline]
    pub const fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    /// Returns the `allow_overlap` flag.
    #[inline]
    pub const fn allow_overlap(&self) -> bool {
        self.allow_overlap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PackOptions::new();
        assert_eq!(options.strategy(), Strategy::Greedy);
        assert_eq!(options.max_lanes(), None);
        assert_eq!(options.sort_by(), SortKey::Start);
        assert!(!options.allow_overlap());
    }

    #[test]
    fn test_builder_chain() {
        let options = PackOptions::new()
            .with_strategy(Strategy::Balanced)
            .with_max_lanes(3)
            .with_sort_by(SortKey::Duration)
            .with_allow_overlap(true);
        assert_eq!(options.strategy(), Strategy::Balanced);
        assert_eq!(options.max_lanes(), Some(3));
        assert_eq!(options.sort_by(), SortKey::Duration);
        assert!(options.allow_overlap());
    }

    #[test]
    #[should_panic(expected = "zero lane cap")]
    fn test_zero_max_lanes_panics() {
        let _ = PackOptions::new().with_max_lanes(0);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::Greedy.name(), "greedy");
        assert_eq!(Strategy::Optimized.name(), "optimized");
        assert_eq!(Strategy::Balanced.name(), "balanced");
        assert_eq!(format!("{}", Strategy::Optimized), "optimized");
    }

    #[test]
    fn test_no_op_options_are_accepted() {
        // Extension points must be recognized configuration, not errors.
        let options = PackOptions::new()
            .with_sort_by(SortKey::End)
            .with_allow_overlap(true);
        assert_eq!(options.sort_by(), SortKey::End);
    }
}
