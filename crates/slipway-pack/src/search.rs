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

//! Minimal-lane search over round-robin trials.
//!
//! Probes lane counts `1, 2, 3, ...` up to the input size and keeps the
//! first trial that places every interval. A trial with one lane per
//! interval cannot fail (some lane is always still empty), so the search
//! terminates with a valid result for any non-empty input.
//!
//! This is a deliberate brute-force trade-off: O(n) trials of O(n) scans
//! each give O(n³) worst case, in exchange for the round-robin placement
//! semantics (original input order, rotating cursor) that the greedy
//! packer does not provide. Each trial depends only on its lane count,
//! never on prior trial results, so the loop is trivially serial.

use crate::num::PackNumeric;
use crate::round_robin::round_robin_trial;
use slipway_model::interval::Interval;

/// Packs `intervals` into the smallest lane count for which a round-robin
/// trial succeeds.
///
/// Empty input yields zero lanes immediately.
///
/// # Examples
///
/// ```rust
/// # use slipway_model::interval::Interval;
/// # use slipway_pack::search::pack_minimal;
///
/// let intervals = vec![Interval::new("a", 0, 10), Interval::new("b", 10, 20)];
/// let lanes = pack_minimal(&intervals);
/// assert_eq!(lanes.len(), 1);
/// ```
pub fn pack_minimal<I, T>(intervals: &[Interval<I, T>]) -> Vec<Vec<I>>
where
    I: Clone,
    T: PackNumeric,
{
    if intervals.is_empty() {
        return Vec::new();
    }

    for lane_count in 1..=intervals.len() {
        if let Some(lanes) = round_robin_trial(intervals, lane_count) {
            return lanes;
        }
    }

    unreachable!("a round-robin trial with one lane per interval always succeeds")
}
