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

//! Exception policies decide what happens when a `Safe` operation fails.
//!
//! The failed value itself always keeps its classification; a policy only
//! controls whether the failure interrupts the program, is recorded, or is
//! left for the caller to inspect.

use keel_core::error::ArithmeticError;

/// Reacts to a classified failure of a checked operation.
pub trait ExceptionPolicy: 'static {
    /// Called once for every operation whose result is an error.
    ///
    /// `operation` names what failed, for example `"addition"`.
    fn on_error(error: ArithmeticError, operation: &'static str);
}

/// Panics on every failure.
///
/// # Examples
///
/// ```rust,should_panic
/// # use keel::exception::{ExceptionPolicy, PanicOnError};
/// # use keel::ArithmeticError;
/// PanicOnError::on_error(ArithmeticError::PositiveOverflow, "addition");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PanicOnError;

impl ExceptionPolicy for PanicOnError {
    #[inline]
    #[track_caller]
    fn on_error(error: ArithmeticError, operation: &'static str) {
        panic!("checked {} failed: {}", operation, error);
    }
}

/// Emits a `tracing` warning for every failure and lets the poisoned value flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LogOnError;

impl ExceptionPolicy for LogOnError {
    #[inline]
    fn on_error(error: ArithmeticError, operation: &'static str) {
        tracing::warn!(%error, operation, "checked integer operation failed");
    }
}

/// Lets the poisoned value flow without any reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IgnoreErrors;

impl ExceptionPolicy for IgnoreErrors {
    #[inline]
    fn on_error(_error: ArithmeticError, _operation: &'static str) {}
}
