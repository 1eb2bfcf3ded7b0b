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

//! # Slipway Core
//!
//! Foundational math primitives for the slipway lane-packing ecosystem.
//! This crate hosts the reusable building blocks that underpin the
//! higher-level model and packing crates.
//!
//! ## Modules
//!
//! - `math`: Half-open occupancy window `[start, end)` primitives with
//!   duration/overlap/precedence queries and hull computation. Unlike a
//!   validated interval type, `TimeWindow` tolerates unordered bounds so
//!   that malformed input can be carried to a separate validation pass
//!   instead of panicking at construction time.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
