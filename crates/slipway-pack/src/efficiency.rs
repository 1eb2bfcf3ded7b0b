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

//! Utilization metric for a completed packing.
//!
//! `efficiency = used / capacity` where `used` is the summed interval
//! duration, `capacity` is the overall time span (hull of all windows)
//! multiplied by the lane count, and a zero capacity yields `0`. The value
//! is descriptive only; it never feeds back into placement decisions.

use crate::num::PackNumeric;
use slipway_model::interval::Interval;

/// Computes the `[0, 1]` utilization of packing `intervals` into
/// `lane_count` lanes.
///
/// The result is clamped to `[0, 1]` so that out-of-contract inputs
/// (negative durations) still yield a well-defined value. Empty input or a
/// zero lane count yields `0`.
///
/// # Examples
///
/// ```rust
/// # use slipway_model::interval::Interval;
/// # use slipway_pack::efficiency::efficiency;
///
/// let intervals = vec![Interval::new("x", 0, 5)];
/// assert_eq!(efficiency(&intervals, 1), 1.0);
/// ```
pub fn efficiency<I, T>(intervals: &[Interval<I, T>], lane_count: usize) -> f64
where
    T: PackNumeric,
{
    if intervals.is_empty() || lane_count == 0 {
        return 0.0;
    }

    let mut hull = intervals[0].window();
    let mut used = 0.0f64;
    for interval in intervals {
        hull = hull.hull(interval.window());
        used += interval
            .duration()
            .to_f64()
            .expect("interval duration exceeds f64 range");
    }

    let span = hull
        .duration()
        .to_f64()
        .expect("packing span exceeds f64 range");
    let capacity = span * lane_count as f64;

    if capacity > 0.0 {
        (used / capacity).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
