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

//! # Keel Core
//!
//! A checked integer arithmetic engine. Every operation either yields the
//! mathematically exact result or a classification of why it cannot, and the
//! work needed to decide which is reduced by static range analysis.
//!
//! ## Modules
//!
//! - `error`: `ArithmeticError`, the closed set of failure classifications
//!   (uninitialized, negative/positive overflow, range and domain errors).
//! - `checked`: `CheckedResult<T>`, a value or a classification, returned by
//!   every operation in this crate.
//! - `math`: `ClosedInterval` and the interval arithmetic that bounds the
//!   results of every operator.
//! - `num`: The `Integer` model of native types, `Operand` types with declared
//!   ranges, native checked operations, exact mixed-type comparisons and the
//!   extended algebra over `CheckedResult<T>`.
//! - `promotion`: `PromotionPolicy` with C-style `NativePromotion` (platform
//!   presets `Pic16`, `Ilp32`, `Llp64`, `Lp64`) and `AutomaticPromotion`, plus
//!   the `Promotion` analysis deciding when a check can be skipped.
//! - `dispatch`: `Binary`, `Unary` and `convert`, the entry points combining
//!   all of the above.
//!
//! ## Purpose
//!
//! The engine never formats, logs, or panics on an arithmetic failure; it
//! returns the classification and leaves the reaction to the caller.
//!
//! Refer to each module for detailed APIs and examples.

pub mod checked;
pub mod dispatch;
pub mod error;
pub mod math;
pub mod num;
pub mod promotion;

mod property_tests;
