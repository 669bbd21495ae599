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

//! # Math Primitives
//!
//! Closed intervals `[low, high]` over `i128` and the interval arithmetic
//! that propagates static value ranges through integer operations.
//!
//! ## Submodules
//!
//! - `interval`: `ClosedInterval` with validated construction, set queries
//!   (`contains`, `includes`, `intersects`, `intersection`, `hull`) and
//!   checked interval arithmetic for every operator. Bounds that leave `i128`
//!   are reported as overflow of the range itself.
//!
//! The interval computed for an operation decides whether the runtime check
//! can be skipped: if it lies within both the working type and the
//! destination, and the operation has no domain hazard, the plain native
//! operation is exact.

pub mod interval;
