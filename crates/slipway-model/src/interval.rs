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

use crate::validate::ValidationErrorKind;
use num_traits::PrimInt;
use slipway_core::math::window::TimeWindow;

/// One schedulable interval: a caller-supplied identifier attached to an
/// occupancy window.
///
/// The identifier must be unique within a single packing call; any
/// equatable/hashable type works (string, number, opaque handle). The
/// interval is immutable for the duration of a call and is never mutated
/// by the packer, only copied and reordered.
///
/// `start <= end` is expected but not enforced at construction; run
/// [`validate`](crate::validate::validate) over [`IntervalDraft`]s to
/// detect malformed input before packing. Packing an interval with
/// `end < start` is defined (no panic) but produces no useful placement.
///
/// # Examples
///
/// ```rust
/// # use slipway_model::interval::Interval;
///
/// let iv = Interval::new("a", 1, 10);
/// assert_eq!(*iv.id(), "a");
/// assert_eq!(iv.start(), 1);
/// assert_eq!(iv.end(), 10);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Interval<I, T>
where
    T: PrimInt,
{
    id: I,
    window: TimeWindow<T>,
}

impl<I, T> Interval<I, T>
where
    T: PrimInt,
{
    /// Creates a new `Interval` from an id and raw bounds.
    #[inline]
    pub fn new(id: I, start: T, end: T) -> Self {
        Self {
            id,
            window: TimeWindow::new(start, end),
        }
    }

    /// Creates a new `Interval` from an id and an existing window.
    #[inline]
    pub fn from_window(id: I, window: TimeWindow<T>) -> Self {
        Self { id, window }
    }

    /// Returns a reference to the caller-supplied identifier.
    #[inline]
    pub const fn id(&self) -> &I {
        &self.id
    }

    /// Consumes the interval and returns its identifier.
    #[inline]
    pub fn into_id(self) -> I {
        self.id
    }

    /// Returns the occupancy window.
    #[inline]
    pub const fn window(&self) -> TimeWindow<T> {
        self.window
    }

    /// Returns the start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.window.start()
    }

    /// Returns the end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.window.end()
    }

    /// Returns the duration (`end - start`), saturating at numeric bounds.
    #[inline]
    pub fn duration(&self) -> T {
        self.window.duration()
    }
}

impl<I, T> std::fmt::Display for Interval<I, T>
where
    I: std::fmt::Display,
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.window)
    }
}

/// The raw, possibly-incomplete caller shape of an interval.
///
/// Every field is optional so that structurally malformed input (a missing
/// id or bound) is representable and can be *reported* by
/// [`validate`](crate::validate::validate) rather than being unconstructible.
/// A draft with all fields present converts into an [`Interval`] via
/// [`build`](IntervalDraft::build).
///
/// # Examples
///
/// ```rust
/// # use slipway_model::interval::IntervalDraft;
///
/// let draft = IntervalDraft::of("a", 1, 10);
/// let iv = draft.build().unwrap();
/// assert_eq!(iv.start(), 1);
///
/// let incomplete: IntervalDraft<&str, i64> = IntervalDraft::new();
/// assert!(incomplete.build().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IntervalDraft<I, T>
where
    T: PrimInt,
{
    /// The caller-supplied identifier, if present.
    pub id: Option<I>,
    /// The start bound, if present.
    pub start: Option<T>,
    /// The end bound, if present.
    pub end: Option<T>,
}

impl<I, T> Default for IntervalDraft<I, T>
where
    T: PrimInt,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T> IntervalDraft<I, T>
where
    T: PrimInt,
{
    /// Creates an empty draft with no fields set.
    #[inline]
    pub const fn new() -> Self {
        Self {
            id: None,
            start: None,
            end: None,
        }
    }

    /// Creates a fully-populated draft.
    #[inline]
    pub const fn of(id: I, start: T, end: T) -> Self {
        Self {
            id: Some(id),
            start: Some(start),
            end: Some(end),
        }
    }

    /// Converts the draft into an [`Interval`], reporting the first defect
    /// encountered.
    ///
    /// To collect *all* defects across a batch of drafts, use
    /// [`validate`](crate::validate::validate) instead.
    pub fn build(self) -> Result<Interval<I, T>, ValidationErrorKind> {
        let id = self.id.ok_or(ValidationErrorKind::MissingField("id"))?;
        let start = self
            .start
            .ok_or(ValidationErrorKind::MissingField("start"))?;
        let end = self.end.ok_or(ValidationErrorKind::MissingField("end"))?;

        if end < start {
            return Err(ValidationErrorKind::NegativeDuration);
        }
        if end.checked_sub(&start).is_none() {
            return Err(ValidationErrorKind::InvalidInterval);
        }

        Ok(Interval::new(id, start, end))
    }
}
