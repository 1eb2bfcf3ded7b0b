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

use num_traits::PrimInt;
use std::cmp::{max, min};

/// A half-open occupancy window `[start, end)` over a totally-ordered
/// integer time scale (e.g. epoch milliseconds derived externally from a
/// richer timestamp type).
///
/// Two windows that merely touch (`a.end == b.start`) do NOT overlap; a
/// lane occupant ending at `t` is compatible with a successor starting at
/// `t`. A zero-length window (`start == end`) is legal and occupies its
/// lane instantaneously.
///
/// # Invariants
///
/// `start <= end` is *expected* but deliberately not enforced here: raw
/// caller input flows through validation as a reporting pass, and the
/// packing algorithms use the bounds as-is. Queries on a window with
/// `end < start` are well-defined (they never panic) but carry no useful
/// geometric meaning.
///
/// # Examples
///
/// ```rust
/// # use slipway_core::math::window::TimeWindow;
///
/// let a = TimeWindow::new(0, 10);
/// let b = TimeWindow::new(10, 20);
/// assert!(!a.overlaps(b));
/// assert!(a.precedes(b));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TimeWindow<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

impl<T> TimeWindow<T>
where
    T: PrimInt,
{
    /// Creates a new `TimeWindow` from raw bounds.
    ///
    /// Accepts `end < start` so that malformed input can be surfaced by a
    /// validation pass instead of a construction panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slipway_core::math::window::TimeWindow;
    ///
    /// let w = TimeWindow::new(5, 10);
    /// assert_eq!(w.start(), 5);
    /// assert_eq!(w.end(), 10);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive start bound of the window.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive end bound of the window.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the duration of the window (`end - start`), saturating at
    /// the numeric bounds of `T`.
    ///
    /// For an unsigned `T` with `end < start` this saturates to zero; for
    /// a signed `T` the (nonsensical) negative duration is returned as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slipway_core::math::window::TimeWindow;
    ///
    /// assert_eq!(TimeWindow::new(10, 25).duration(), 15);
    /// assert_eq!(TimeWindow::new(10u32, 5u32).duration(), 0);
    /// ```
    #[inline]
    pub fn duration(&self) -> T {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the window is zero-length (`start == end`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slipway_core::math::window::TimeWindow;
    ///
    /// assert!(TimeWindow::new(7, 7).is_instant());
    /// assert!(!TimeWindow::new(7, 8).is_instant());
    /// ```
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this window overlaps `other`.
    ///
    /// Touching endpoints do not count as overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slipway_core::math::window::TimeWindow;
    ///
    /// let a = TimeWindow::new(0, 10);
    /// assert!(a.overlaps(TimeWindow::new(5, 15)));
    /// assert!(!a.overlaps(TimeWindow::new(10, 20))); // Adjacent
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns `true` if this window ends at or before `other` starts,
    /// i.e. `other` may follow this window in the same lane.
    ///
    /// This is the lane-compatibility check used by every packing
    /// strategy: adjacent-touching windows are compatible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slipway_core::math::window::TimeWindow;
    ///
    /// let a = TimeWindow::new(0, 10);
    /// assert!(a.precedes(TimeWindow::new(10, 20)));
    /// assert!(!a.precedes(TimeWindow::new(9, 20)));
    /// ```
    #[inline]
    pub fn precedes(&self, other: Self) -> bool {
        self.end <= other.start
    }

    /// Returns `true` if `value` lies inside the half-open window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slipway_core::math::window::TimeWindow;
    ///
    /// let w = TimeWindow::new(0, 10);
    /// assert!(w.contains_point(0));
    /// assert!(w.contains_point(9));
    /// assert!(!w.contains_point(10));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value < self.end
    }

    /// Returns the smallest window covering both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slipway_core::math::window::TimeWindow;
    ///
    /// let a = TimeWindow::new(0, 5);
    /// let b = TimeWindow::new(12, 20);
    /// assert_eq!(a.hull(b), TimeWindow::new(0, 20));
    /// ```
    #[inline]
    pub fn hull(&self, other: Self) -> Self {
        Self {
            start: min(self.start, other.start),
            end: max(self.end, other.end),
        }
    }
}

impl<T> std::fmt::Display for TimeWindow<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<T> From<std::ops::Range<T>> for TimeWindow<T>
where
    T: PrimInt,
{
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let w = TimeWindow::new(3, 9);
        assert_eq!(w.start(), 3);
        assert_eq!(w.end(), 9);
        assert_eq!(w.duration(), 6);
    }

    #[test]
    fn test_new_accepts_unordered_bounds() {
        // Must not panic; validation is a separate pass.
        let w = TimeWindow::new(9, 3);
        assert_eq!(w.start(), 9);
        assert_eq!(w.end(), 3);
    }

    #[test]
    fn test_duration_saturates_for_unsigned() {
        let w: TimeWindow<u32> = TimeWindow::new(10, 4);
        assert_eq!(w.duration(), 0);
    }

    #[test]
    fn test_duration_signed_negative() {
        let w: TimeWindow<i64> = TimeWindow::new(10, 4);
        assert_eq!(w.duration(), -6);
    }

    #[test]
    fn test_is_instant() {
        assert!(TimeWindow::new(5, 5).is_instant());
        assert!(!TimeWindow::new(5, 6).is_instant());
    }

    #[test]
    fn test_overlaps() {
        let a = TimeWindow::new(0, 10);
        assert!(a.overlaps(TimeWindow::new(5, 15)));
        assert!(a.overlaps(TimeWindow::new(-5, 1)));
        assert!(!a.overlaps(TimeWindow::new(10, 20)));
        assert!(!a.overlaps(TimeWindow::new(-5, 0)));
    }

    #[test]
    fn test_instant_window_never_overlaps() {
        let instant = TimeWindow::new(5, 5);
        let covering = TimeWindow::new(0, 10);
        assert!(!instant.overlaps(covering));
        assert!(!covering.overlaps(instant));
    }

    #[test]
    fn test_precedes_allows_touching() {
        let a = TimeWindow::new(0, 5);
        assert!(a.precedes(TimeWindow::new(5, 10)));
        assert!(a.precedes(TimeWindow::new(6, 10)));
        assert!(!a.precedes(TimeWindow::new(4, 10)));
    }

    #[test]
    fn test_contains_point() {
        let w = TimeWindow::new(2, 4);
        assert!(!w.contains_point(1));
        assert!(w.contains_point(2));
        assert!(w.contains_point(3));
        assert!(!w.contains_point(4));
    }

    #[test]
    fn test_hull() {
        let a = TimeWindow::new(3, 7);
        let b = TimeWindow::new(0, 5);
        assert_eq!(a.hull(b), TimeWindow::new(0, 7));
        // Hull of disjoint windows spans the gap.
        assert_eq!(
            TimeWindow::new(0, 1).hull(TimeWindow::new(10, 11)),
            TimeWindow::new(0, 11)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TimeWindow::new(1, 10)), "[1, 10)");
    }

    #[test]
    fn test_from_range() {
        let w = TimeWindow::from(0..10);
        assert_eq!(w.start(), 0);
        assert_eq!(w.end(), 10);
    }
}
