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

//! The packing entry point.
//!
//! `pack` times the run, dispatches on the configured strategy, computes
//! the efficiency metric, and assembles the immutable `Packing` result.
//! It never re-validates its input: run `validate` beforehand if malformed
//! intervals should be rejected. Out-of-contract bounds flow through the
//! as-is comparisons without panicking.

use crate::efficiency::efficiency;
use crate::greedy::pack_greedy;
use crate::num::PackNumeric;
use crate::search::pack_minimal;
use slipway_model::interval::Interval;
use slipway_model::options::{PackOptions, Strategy};
use slipway_model::packing::{Packing, PackStatisticsBuilder};

/// Packs `intervals` into lanes according to `options`.
///
/// Every input id ends up in exactly one lane of the result, except ids a
/// greedy lane cap forced out, which are listed in the result's `unplaced`
/// set. Empty input yields zero lanes and zero efficiency.
///
/// # Examples
///
/// ```rust
/// # use slipway_model::interval::Interval;
/// # use slipway_model::options::PackOptions;
/// # use slipway_pack::pack::pack;
///
/// let intervals = vec![
///     Interval::new("a", 0, 5),
///     Interval::new("b", 5, 10),
/// ];
/// let packing = pack(&intervals, &PackOptions::new());
/// assert_eq!(packing.lanes(), &[vec!["a", "b"]]);
/// assert_eq!(packing.efficiency(), 1.0);
/// ```
pub fn pack<I, T>(intervals: &[Interval<I, T>], options: &PackOptions) -> Packing<I>
where
    I: Clone,
    T: PackNumeric,
{
    let started = std::time::Instant::now();

    let (lanes, unplaced) = match options.strategy() {
        Strategy::Greedy => pack_greedy(intervals, options.max_lanes()).into_parts(),
        // Balanced currently reuses the round-robin minimal search; a
        // distinct balancing algorithm is an extension point.
        Strategy::Optimized | Strategy::Balanced => (pack_minimal(intervals), Vec::new()),
    };

    let efficiency = efficiency(intervals, lanes.len());
    let stats = PackStatisticsBuilder::new()
        .strategy(options.strategy().name())
        .elapsed(started.elapsed())
        .input_size(intervals.len())
        .build();

    Packing::new(lanes, unplaced, efficiency, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(id: &'static str, start: i64, end: i64) -> Interval<&'static str, i64> {
        Interval::new(id, start, end)
    }

    #[test]
    fn test_empty_input() {
        let intervals: Vec<Interval<&str, i64>> = Vec::new();
        let packing = pack(&intervals, &PackOptions::new());
        assert_eq!(packing.lane_count(), 0);
        assert_eq!(packing.efficiency(), 0.0);
        assert!(packing.is_empty());
        assert_eq!(packing.stats().input_size, 0);
    }

    #[test]
    fn test_default_strategy_is_greedy() {
        let packing = pack(&[iv("x", 0, 5)], &PackOptions::new());
        assert_eq!(packing.stats().strategy, "greedy");
        assert_eq!(packing.lanes(), &[vec!["x"]]);
        assert_eq!(packing.efficiency(), 1.0);
    }

    #[test]
    fn test_greedy_reference_scenario() {
        let intervals = vec![
            iv("a", 1, 10),
            iv("b", 5, 15),
            iv("c", 10, 20),
            iv("d", 12, 20),
            iv("e", 16, 17),
        ];
        let packing = pack(&intervals, &PackOptions::new());
        assert_eq!(
            packing.lanes(),
            &[vec!["a", "c"], vec!["b", "e"], vec!["d"]]
        );
    }

    #[test]
    fn test_optimized_strategy_dispatch() {
        let intervals = vec![iv("a", 0, 10), iv("b", 0, 10)];
        let options = PackOptions::new().with_strategy(Strategy::Optimized);
        let packing = pack(&intervals, &options);
        assert_eq!(packing.stats().strategy, "optimized");
        assert_eq!(packing.lane_count(), 2);
        assert!(packing.unplaced().is_empty());
    }

    #[test]
    fn test_balanced_reuses_round_robin_search() {
        let intervals = vec![iv("a", 0, 10), iv("b", 10, 20), iv("c", 5, 15)];
        let balanced = pack(
            &intervals,
            &PackOptions::new().with_strategy(Strategy::Balanced),
        );
        let optimized = pack(
            &intervals,
            &PackOptions::new().with_strategy(Strategy::Optimized),
        );
        assert_eq!(balanced.lanes(), optimized.lanes());
        assert_eq!(balanced.stats().strategy, "balanced");
    }

    #[test]
    fn test_max_lanes_overflow_is_surfaced() {
        let intervals = vec![iv("a", 0, 10), iv("b", 0, 10), iv("c", 0, 10)];
        let options = PackOptions::new().with_max_lanes(2);
        let packing = pack(&intervals, &options);
        assert_eq!(packing.lane_count(), 2);
        assert_eq!(packing.unplaced(), &["c"]);
        assert_eq!(packing.placed_count(), 2);
    }

    #[test]
    fn test_max_lanes_ignored_by_optimized() {
        // The cap is a greedy-only knob.
        let intervals = vec![iv("a", 0, 10), iv("b", 0, 10), iv("c", 0, 10)];
        let options = PackOptions::new()
            .with_strategy(Strategy::Optimized)
            .with_max_lanes(2);
        let packing = pack(&intervals, &options);
        assert_eq!(packing.lane_count(), 3);
        assert!(packing.unplaced().is_empty());
    }

    #[test]
    fn test_invalid_bounds_flow_through_without_panic() {
        // end < start is not re-validated by pack.
        let intervals = vec![iv("a", 10, 2), iv("b", 0, 5)];
        let packing = pack(&intervals, &PackOptions::new());
        assert_eq!(packing.placed_count(), 2);
        assert!((0.0..=1.0).contains(&packing.efficiency()));
    }

    #[test]
    fn test_cardinality_across_strategies() {
        let intervals = vec![
            iv("a", 1, 10),
            iv("b", 5, 15),
            iv("c", 10, 20),
            iv("d", 12, 20),
            iv("e", 16, 17),
        ];
        for strategy in [Strategy::Greedy, Strategy::Optimized, Strategy::Balanced] {
            let packing = pack(&intervals, &PackOptions::new().with_strategy(strategy));
            assert_eq!(packing.placed_count(), intervals.len());

            let mut ids: Vec<_> = packing.lanes().iter().flatten().copied().collect();
            ids.sort_unstable();
            assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
        }
    }

    #[test]
    fn test_stats_are_filled() {
        let packing = pack(&[iv("a", 0, 5), iv("b", 5, 10)], &PackOptions::new());
        assert_eq!(packing.stats().input_size, 2);
        // The elapsed clock is monotonic; the field is present and sane.
        assert!(packing.stats().elapsed >= std::time::Duration::ZERO);
    }
}
