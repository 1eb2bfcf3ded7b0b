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

//! Record adaptation layer.
//!
//! Callers with their own record types supply a single transform closure;
//! `pack_by_mapping` derives the intervals, packs them, and rejoins the
//! placed ids back to clones of the original records. The transform is the
//! whole interface boundary: no trait implementation on the record type is
//! required.

use crate::num::PackNumeric;
use crate::pack::pack;
use rustc_hash::FxHashMap;
use slipway_model::interval::Interval;
use slipway_model::options::PackOptions;
use std::hash::Hash;

/// Packs arbitrary `records` by mapping each one to an interval.
///
/// Returns the lanes as ordered sequences of cloned records. The id-based
/// rejoin silently skips any id that resolves to no record; given the
/// id-preservation invariant of `pack` this is unreachable for an
/// injective `to_interval`, and is kept purely as a defensive measure.
///
/// # Examples
///
/// ```rust
/// # use slipway_model::interval::Interval;
/// # use slipway_model::options::PackOptions;
/// # use slipway_pack::mapping::pack_by_mapping;
///
/// #[derive(Clone)]
/// struct Booking {
///     room: &'static str,
///     from: i64,
///     to: i64,
/// }
///
/// let bookings = vec![
///     Booking { room: "101", from: 0, to: 5 },
///     Booking { room: "102", from: 5, to: 10 },
/// ];
/// let lanes = pack_by_mapping(
///     &bookings,
///     |b| Interval::new(b.room, b.from, b.to),
///     &PackOptions::new(),
/// );
/// assert_eq!(lanes.len(), 1);
/// assert_eq!(lanes[0][1].room, "102");
/// ```
pub fn pack_by_mapping<R, I, T, F>(
    records: &[R],
    to_interval: F,
    options: &PackOptions,
) -> Vec<Vec<R>>
where
    R: Clone,
    I: Clone + Eq + Hash,
    T: PackNumeric,
    F: Fn(&R) -> Interval<I, T>,
{
    let intervals: Vec<Interval<I, T>> = records.iter().map(&to_interval).collect();
    let packing = pack(&intervals, options);

    let mut by_id: FxHashMap<I, &R> =
        FxHashMap::with_capacity_and_hasher(records.len(), Default::default());
    for (interval, record) in intervals.iter().zip(records) {
        by_id.insert(interval.id().clone(), record);
    }

    packing
        .lanes()
        .iter()
        .map(|lane| {
            lane.iter()
                .filter_map(|id| by_id.get(id).map(|record| (*record).clone()))
                .collect()
        })
        .collect()
}
