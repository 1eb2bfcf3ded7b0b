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

//! Fixed-width round-robin placement trial.
//!
//! Attempts to place every interval, in ORIGINAL input order, into exactly
//! `lane_count` lanes. A cursor local to the trial rotates over the lanes
//! and persists across intervals: each interval examines up to `lane_count`
//! candidates starting at `cursor % lane_count`, and the cursor advances
//! after every candidate examined whether or not it matched. The rotation
//! spreads load across lanes instead of always favoring low-index lanes,
//! which improves the chance that a small lane count succeeds when the
//! compatible choice is ambiguous.
//!
//! A trial either places everything or fails as a whole; failure is the
//! normal probing signal the minimal-lane search relies on, not an error.

use crate::num::PackNumeric;
use slipway_core::math::window::TimeWindow;
use slipway_model::interval::Interval;

/// Attempts to pack `intervals` into exactly `lane_count` lanes.
///
/// Returns the lanes (each an ordered sequence of ids in placement order)
/// on success, or `None` if some interval fits no lane. An empty lane
/// accepts any interval.
///
/// # Panics
///
/// Panics if `lane_count` is zero; a trial over zero lanes is a
/// caller-contract violation.
///
/// # Examples
///
/// ```rust
/// # use slipway_model::interval::Interval;
/// # use slipway_pack::round_robin::round_robin_trial;
///
/// let intervals = vec![Interval::new("a", 0, 10), Interval::new("b", 0, 10)];
/// assert!(round_robin_trial(&intervals, 1).is_none());
/// assert!(round_robin_trial(&intervals, 2).is_some());
/// ```
pub fn round_robin_trial<I, T>(
    intervals: &[Interval<I, T>],
    lane_count: usize,
) -> Option<Vec<Vec<I>>>
where
    I: Clone,
    T: PackNumeric,
{
    assert!(
        lane_count > 0,
        "called `round_robin_trial` with a zero lane count"
    );

    let mut lanes: Vec<Vec<I>> = vec![Vec::new(); lane_count];
    let mut horizons: Vec<Option<TimeWindow<T>>> = vec![None; lane_count];
    let mut cursor = 0usize;

    'next_interval: for interval in intervals {
        for _ in 0..lane_count {
            let candidate = cursor % lane_count;
            cursor += 1;

            let accepts = match horizons[candidate] {
                None => true,
                Some(last) => last.precedes(interval.window()),
            };
            if accepts {
                lanes[candidate].push(interval.id().clone());
                horizons[candidate] = Some(interval.window());
                continue 'next_interval;
            }
        }
        // Every lane was examined and none accepted: the trial fails.
        return None;
    }

    Some(lanes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(id: &'static str, start: i64, end: i64) -> Interval<&'static str, i64> {
        Interval::new(id, start, end)
    }

    #[test]
    #[should_panic(expected = "zero lane count")]
    fn test_zero_lane_count_panics() {
        let _ = round_robin_trial(&[iv("a", 0, 1)], 0);
    }

    #[test]
    fn test_empty_input_fills_no_lanes() {
        let intervals: Vec<Interval<&str, i64>> = Vec::new();
        let lanes = round_robin_trial(&intervals, 3).unwrap();
        assert_eq!(lanes, vec![Vec::<&str>::new(); 3]);
    }

    #[test]
    fn test_single_lane_success_and_failure() {
        assert_eq!(
            round_robin_trial(&[iv("a", 0, 5), iv("b", 5, 10)], 1),
            Some(vec![vec!["a", "b"]])
        );
        assert_eq!(round_robin_trial(&[iv("a", 0, 10), iv("b", 0, 10)], 1), None);
    }

    #[test]
    fn test_cursor_rotates_across_intervals() {
        // "b" fits lane 0 too, but the cursor moved on after placing "a",
        // so "b" lands in the empty lane 1.
        let lanes = round_robin_trial(&[iv("a", 0, 10), iv("b", 10, 20)], 2).unwrap();
        assert_eq!(lanes, vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_cursor_wraps_back_to_first_lane() {
        // After "a" (lane 0) and "b" (lane 1) the cursor wraps to lane 0,
        // which has the earliest horizon and accepts "c".
        let lanes =
            round_robin_trial(&[iv("a", 0, 10), iv("b", 10, 20), iv("c", 20, 30)], 2).unwrap();
        assert_eq!(lanes, vec![vec!["a", "c"], vec!["b"]]);
    }

    #[test]
    fn test_cursor_advances_past_failed_candidates() {
        // "c" starts its scan at lane 0 (occupied until 10), skips it, and
        // settles in lane 1 after one failed probe.
        let lanes =
            round_robin_trial(&[iv("a", 0, 10), iv("b", 0, 5), iv("c", 5, 8)], 2).unwrap();
        assert_eq!(lanes, vec![vec!["a"], vec!["b", "c"]]);
    }

    #[test]
    fn test_original_input_order_is_used() {
        // Unsorted input: with one lane, "c" first blocks "a" entirely.
        assert_eq!(round_robin_trial(&[iv("c", 10, 20), iv("a", 1, 10)], 1), None);
        // With two lanes each gets its own.
        let lanes = round_robin_trial(&[iv("c", 10, 20), iv("a", 1, 10)], 2).unwrap();
        assert_eq!(lanes, vec![vec!["c"], vec!["a"]]);
    }

    #[test]
    fn test_failure_is_total_not_partial() {
        let intervals = vec![iv("a", 0, 10), iv("b", 0, 10), iv("c", 0, 10)];
        assert_eq!(round_robin_trial(&intervals, 2), None);
    }

    #[test]
    fn test_touching_windows_share_a_lane() {
        let lanes = round_robin_trial(&[iv("a", 0, 5), iv("b", 5, 10)], 1).unwrap();
        assert_eq!(lanes, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_cardinality_on_success() {
        let intervals = vec![
            iv("a", 1, 10),
            iv("b", 5, 15),
            iv("c", 10, 20),
            iv("d", 12, 20),
            iv("e", 16, 17),
        ];
        let lanes = round_robin_trial(&intervals, 3).unwrap();
        let placed: usize = lanes.iter().map(Vec::len).sum();
        assert_eq!(placed, intervals.len());

        let mut ids: Vec<_> = lanes.iter().flatten().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }
}
