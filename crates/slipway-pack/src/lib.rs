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

//! # Slipway Pack
//!
//! Lane-packing algorithms over the `slipway-model` domain types. Given a
//! set of intervals, these routines assign every interval to one of as few
//! non-overlapping lanes as possible, for Gantt-style row layout, resource
//! allocation over overlapping bookings, or grouping tasks into parallel
//! tracks.
//!
//! ## Modules
//!
//! - `greedy`: Earliest-fit placement over start-sorted input; O(n log n)
//!   and provably lane-minimal when no lane cap is configured.
//! - `round_robin`: The fixed-width trial primitive. Attempts to place
//!   every interval, in original input order, into exactly N lanes with a
//!   rotating cursor; failure is a normal `None` outcome.
//! - `search`: Brute-force minimal-lane search that probes round-robin
//!   trials with increasing lane counts and keeps the first success.
//! - `efficiency`: The descriptive `[0, 1]` utilization metric.
//! - `pack`: The entry point with strategy dispatch and run statistics.
//! - `mapping`: The record adaptation layer (`pack_by_mapping`).
//! - `num`: The `PackNumeric` trait alias bounding the time scale.
//!
//! All routines are single-threaded, synchronous, and pure: inputs are
//! read-only, nothing is shared across calls, and concurrent calls from
//! multiple threads are safe as long as each call's input is not mutated
//! underneath it.

pub mod efficiency;
pub mod greedy;
pub mod mapping;
pub mod num;
pub mod pack;
pub mod round_robin;
pub mod search;
