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

//! # Keel
//!
//! Integer values that never silently wrap.
//!
//! `Safe<T, P, E>` wraps a value of operand type `T` (a native integer or a
//! `Ranged` type with declared bounds). Its operators run through the
//! checked engine in `keel-core` under the promotion policy `P`, and every
//! failure is handed to the exception policy `E`.
//!
//! ```rust
//! use keel::{Safe, Pic16, IgnoreErrors, ArithmeticError};
//!
//! type Int = Safe<i16, Pic16, IgnoreErrors>;
//! let speed = Int::new(300);
//! assert_eq!((speed * Int::new(100)).get(), Ok(30000));
//! assert_eq!((speed * speed).get(), Err(ArithmeticError::PositiveOverflow));
//! ```
//!
//! ## Modules
//!
//! - `safe`: The `Safe` wrapper and its operators.
//! - `exception`: `ExceptionPolicy` with `PanicOnError` (the default),
//!   `LogOnError` and `IgnoreErrors`.

pub mod exception;
pub mod safe;

pub use exception::{ExceptionPolicy, IgnoreErrors, LogOnError, PanicOnError};
pub use keel_core::{
    checked::CheckedResult,
    error::ArithmeticError,
    num::operand::{Operand, Ranged},
    promotion::{
        AutomaticPromotion, Ilp32, Llp64, Lp64, Native, NativePromotion, Pic16, PromotionPolicy,
    },
};
pub use safe::Safe;
