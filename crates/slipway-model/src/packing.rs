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

use crate::index::LaneIndex;

/// Run statistics attached to every [`Packing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackStatistics {
    /// Canonical name of the strategy that produced the packing.
    pub strategy: &'static str,
    /// Wall-clock duration of the packing call.
    pub elapsed: std::time::Duration,
    /// Number of intervals in the input.
    pub input_size: usize,
}

impl std::fmt::Display for PackStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Packing Statistics:")?;
        writeln!(f, "  Strategy: {}", self.strategy)?;
        writeln!(f, "  Input Size: {}", self.input_size)?;
        writeln!(f, "  Elapsed (secs): {:.6}", self.elapsed.as_secs_f64())
    }
}

/// Builder for `PackStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackStatisticsBuilder {
    strategy: &'static str,
    elapsed: std::time::Duration,
    input_size: usize,
}

impl Default for PackStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PackStatisticsBuilder {
    /// Creates a new `PackStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            strategy: "greedy",
            elapsed: std::time::Duration::ZERO,
            input_size: 0,
        }
    }

    /// Sets the strategy name.
    #[inline]
    pub fn strategy(mut self, strategy: &'static str) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the elapsed wall-clock duration.
    #[inline]
    pub fn elapsed(mut self, elapsed: std::time::Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Sets the input size.
    #[inline]
    pub fn input_size(mut self, input_size: usize) -> Self {
        self.input_size = input_size;
        self
    }

    /// Builds the `PackStatistics` instance.
    #[inline]
    pub fn build(self) -> PackStatistics {
        PackStatistics {
            strategy: self.strategy,
            elapsed: self.elapsed,
            input_size: self.input_size,
        }
    }
}

/// The immutable result of one packing call.
///
/// Each lane is an ordered sequence of interval ids in *placement* order,
/// which after round-robin placement is not necessarily start order. Every
/// input id appears in exactly one lane, except ids that a greedy lane cap
/// forced out, which are listed in `unplaced` instead of being silently
/// lost.
#[derive(Debug, Clone, PartialEq)]
pub struct Packing<I> {
    lanes: Vec<Vec<I>>,
    unplaced: Vec<I>,
    efficiency: f64,
    stats: PackStatistics,
}

impl<I> Packing<I> {
    /// Constructs a new `Packing`.
    pub fn new(
        lanes: Vec<Vec<I>>,
        unplaced: Vec<I>,
        efficiency: f64,
        stats: PackStatistics,
    ) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&efficiency),
            "called `Packing::new` with efficiency outside [0, 1]: {}",
            efficiency
        );

        Self {
            lanes,
            unplaced,
            efficiency,
            stats,
        }
    }

    /// Returns the lanes, each an ordered sequence of interval ids.
    #[inline]
    pub fn lanes(&self) -> &[Vec<I>] {
        &self.lanes
    }

    /// Returns the ids placed in one lane, or `None` if the index is out
    /// of bounds.
    #[inline]
    pub fn lane(&self, index: LaneIndex) -> Option<&[I]> {
        self.lanes.get(index.get()).map(Vec::as_slice)
    }

    /// Returns the total number of lanes.
    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Returns the ids a greedy lane cap forced out of the packing.
    ///
    /// Empty unless `max_lanes` was configured and too small.
    #[inline]
    pub fn unplaced(&self) -> &[I] {
        &self.unplaced
    }

    /// Returns the utilization metric in `[0, 1]`.
    #[inline]
    pub const fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Returns the run statistics.
    #[inline]
    pub const fn stats(&self) -> &PackStatistics {
        &self.stats
    }

    /// Returns the number of placed ids across all lanes.
    #[inline]
    pub fn placed_count(&self) -> usize {
        self.lanes.iter().map(Vec::len).sum()
    }

    /// Returns `true` if nothing was placed and nothing was unplaced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty() && self.unplaced.is_empty()
    }
}

impl<I> std::fmt::Display for Packing<I>
where
    I: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Packing Summary")?;
        writeln!(f, "   Strategy: {}", self.stats.strategy)?;
        writeln!(f, "   Lanes: {}", self.lane_count())?;
        writeln!(f, "   Efficiency: {:.3}", self.efficiency)?;

        if self.lanes.is_empty() {
            writeln!(f, "   (No intervals placed)")?;
        }
        for (index, lane) in self.lanes.iter().enumerate() {
            write!(f, "   Lane {:<4} |", index)?;
            for id in lane {
                write!(f, " {}", id)?;
            }
            writeln!(f)?;
        }

        if !self.unplaced.is_empty() {
            write!(f, "   Unplaced   |")?;
            for id in &self.unplaced {
                write!(f, " {}", id)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
