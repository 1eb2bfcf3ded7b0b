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

//! Greedy earliest-fit lane packer.
//!
//! A single left-to-right pass over the intervals in start order. Each
//! interval goes into the first existing lane whose most recent occupant
//! has ended by the interval's start; if no lane is free, a new lane is
//! opened. The sort is stable, so intervals sharing a start keep their
//! input order, which makes results reproducible.
//!
//! Without a lane cap this is optimal by the classical interval-graph
//! coloring argument: the produced lane count equals the maximum number of
//! intervals overlapping at any single point. With a `max_lanes` cap, an
//! interval that fits no existing lane is reported in the outcome's
//! `unplaced` list instead of being dropped.

use crate::num::PackNumeric;
use slipway_core::math::window::TimeWindow;
use slipway_model::interval::Interval;
use smallvec::SmallVec;

/// The raw outcome of a greedy packing pass: lanes of ids in placement
/// order, plus the ids a lane cap forced out.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GreedyOutcome<I> {
    lanes: Vec<Vec<I>>,
    unplaced: Vec<I>,
}

impl<I> GreedyOutcome<I> {
    /// Returns the lanes.
    #[inline]
    pub fn lanes(&self) -> &[Vec<I>] {
        &self.lanes
    }

    /// Returns the ids that could not be placed under the lane cap.
    #[inline]
    pub fn unplaced(&self) -> &[I] {
        &self.unplaced
    }

    /// Consumes the outcome and returns `(lanes, unplaced)`.
    #[inline]
    pub fn into_parts(self) -> (Vec<Vec<I>>, Vec<I>) {
        (self.lanes, self.unplaced)
    }
}

/// One open lane during the scan; `last` is the window of the most
/// recently appended interval, which is the lane's occupancy horizon.
struct OpenLane<I, T>
where
    T: PackNumeric,
{
    ids: Vec<I>,
    last: TimeWindow<T>,
}

/// Packs `intervals` greedily, optionally capping the number of lanes.
///
/// The input is not mutated; the pass works on a sorted view of borrowed
/// intervals and clones ids into the outcome.
///
/// # Examples
///
/// ```rust
/// # use slipway_model::interval::Interval;
/// # use slipway_pack::greedy::pack_greedy;
///
/// let intervals = vec![
///     Interval::new("a", 1, 10),
///     Interval::new("b", 5, 15),
///     Interval::new("c", 10, 20),
/// ];
/// let outcome = pack_greedy(&intervals, None);
/// assert_eq!(outcome.lanes(), &[vec!["a", "c"], vec!["b"]]);
/// assert!(outcome.unplaced().is_empty());
/// ```
pub fn pack_greedy<I, T>(intervals: &[Interval<I, T>], max_lanes: Option<usize>) -> GreedyOutcome<I>
where
    I: Clone,
    T: PackNumeric,
{
    let mut sorted: Vec<&Interval<I, T>> = intervals.iter().collect();
    // Stable sort: equal starts keep input order.
    sorted.sort_by_key(|interval| interval.start());

    let mut lanes: SmallVec<[OpenLane<I, T>; 8]> = SmallVec::new();
    let mut unplaced: Vec<I> = Vec::new();

    for interval in sorted {
        let free = lanes
            .iter()
            .position(|lane| lane.last.precedes(interval.window()));

        match free {
            Some(index) => {
                lanes[index].ids.push(interval.id().clone());
                lanes[index].last = interval.window();
            }
            None if max_lanes.is_none_or(|max| lanes.len() < max) => {
                lanes.push(OpenLane {
                    ids: vec![interval.id().clone()],
                    last: interval.window(),
                });
            }
            None => {
                // Lane cap reached and nothing compatible: report instead
                // of dropping.
                unplaced.push(interval.id().clone());
            }
        }
    }

    GreedyOutcome {
        lanes: lanes.into_iter().map(|lane| lane.ids).collect(),
        unplaced,
    }
}
