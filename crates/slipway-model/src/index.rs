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

/// A strongly-typed index identifying one lane within a packing result.
///
/// Wrapping the raw `usize` keeps lane positions from being confused with
/// interval indices or other index spaces, at zero runtime cost.
///
/// # Examples
///
/// ```rust
/// # use slipway_model::index::LaneIndex;
///
/// let lane = LaneIndex::new(2);
/// assert_eq!(lane.get(), 2);
/// assert_eq!(format!("{}", lane), "LaneIndex(2)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LaneIndex(usize);

impl LaneIndex {
    /// Creates a new `LaneIndex` from a raw position.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw position of this lane.
    #[inline]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for LaneIndex {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<LaneIndex> for usize {
    #[inline]
    fn from(index: LaneIndex) -> Self {
        index.0
    }
}

impl std::fmt::Display for LaneIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LaneIndex({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_get_roundtrip() {
        let lane = LaneIndex::new(7);
        assert_eq!(lane.get(), 7);
        assert_eq!(usize::from(lane), 7);
        assert_eq!(LaneIndex::from(7usize), lane);
    }

    #[test]
    fn test_ordering() {
        assert!(LaneIndex::new(1) < LaneIndex::new(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", LaneIndex::new(0)), "LaneIndex(0)");
    }
}
