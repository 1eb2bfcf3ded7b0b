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

//! # Packing Numeric Trait
//!
//! Unified numeric bounds for the packing algorithms. `PackNumeric`
//! collects the capabilities required of the time scale into a single
//! alias: primitive-integer semantics (comparisons, checked and saturating
//! arithmetic, casts to `f64` for the efficiency metric), formatting for
//! diagnostics, and `Send + Sync` so packings can run concurrently from
//! multiple threads.
//!
//! Both signed and unsigned integer types qualify; epoch milliseconds in a
//! `u64` or an `i64` are the common choices.

use num_traits::PrimInt;

/// A trait alias for numeric types usable as the packing time scale.
///
/// Blanket-implemented for every type meeting the bounds; callers never
/// implement it by hand.
pub trait PackNumeric:
    PrimInt + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> PackNumeric for T where T: PrimInt + std::fmt::Debug + std::fmt::Display + Send + Sync {}
