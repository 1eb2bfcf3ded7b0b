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

//! # Slipway Model
//!
//! **The Core Domain Model for the Slipway Lane Packer.**
//!
//! This crate defines the data structures exchanged between callers and the
//! packing algorithms in `slipway-pack`: the interval inputs, their
//! validation, the configuration options, and the immutable packing result.
//!
//! ## Architecture
//!
//! The crate separates *untrusted construction* from *packing*:
//!
//! * **`interval`**: `Interval<I, T>` (the immutable packed shape) and
//!   `IntervalDraft<I, T>` (the raw, possibly-incomplete caller shape).
//! * **`validate`**: A pure reporting pass over drafts that collects every
//!   defect with its originating index. Validation never filters or mutates;
//!   callers decide whether to abort or pack anyway.
//! * **`index`**: The strongly-typed `LaneIndex` to keep lane positions from
//!   mixing with other `usize` spaces.
//! * **`options`**: Strategy selection and tuning knobs for `pack`.
//! * **`packing`**: The `Packing<I>` result with its lanes, unplaced ids,
//!   efficiency metric, and run statistics.
//!
//! ## Design Philosophy
//!
//! 1. **Report, don't reject**: malformed input is described, not silently
//!    corrected or dropped; the packer uses raw bounds as-is.
//! 2. **Immutability**: inputs are never mutated by a packing call, and a
//!    `Packing` never changes after construction.

pub mod index;
pub mod interval;
pub mod options;
pub mod packing;
pub mod validate;
