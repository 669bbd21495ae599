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

//! # Arithmetic Error Classification
//!
//! The closed vocabulary of failures every checked operation reports.
//! Exception policies switch on these kinds exhaustively; adding a kind is a
//! breaking change.

use std::fmt::Display;

/// The classification of a failed integer operation.
///
/// # Examples
///
/// ```rust
/// # use keel_core::error::ArithmeticError;
/// let e = ArithmeticError::PositiveOverflow;
/// assert!(e.is_overflow());
/// assert_eq!(e.to_string(), "positive overflow");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The value was never assigned.
    Uninitialized,
    /// The true result lies below the representable (or provable) minimum.
    NegativeOverflow,
    /// The true result lies above the representable (or provable) maximum.
    PositiveOverflow,
    /// The result lies outside anything the destination can ever hold, or
    /// cannot be determined from already-invalid operands.
    RangeError,
    /// The operation is undefined for its operands, e.g. division by zero or
    /// a shift by a negative amount or by at least the bit width.
    DomainError,
}

impl ArithmeticError {
    /// Every classification, in declaration order.
    pub const ALL: [ArithmeticError; 5] = [
        ArithmeticError::Uninitialized,
        ArithmeticError::NegativeOverflow,
        ArithmeticError::PositiveOverflow,
        ArithmeticError::RangeError,
        ArithmeticError::DomainError,
    ];

    /// Returns `true` for `NegativeOverflow` and `PositiveOverflow`.
    #[inline]
    pub const fn is_overflow(self) -> bool {
        matches!(
            self,
            ArithmeticError::NegativeOverflow | ArithmeticError::PositiveOverflow
        )
    }

    /// The kind an operand of this kind turns a derived result into when no
    /// arithmetic can be attempted on it.
    ///
    /// Uninitialized stays uninitialized; range and domain errors escalate to
    /// a range error; overflows are handled by the extended algebra and map to
    /// themselves here.
    #[inline]
    pub const fn poisoned(self) -> ArithmeticError {
        match self {
            ArithmeticError::Uninitialized => ArithmeticError::Uninitialized,
            ArithmeticError::RangeError | ArithmeticError::DomainError => {
                ArithmeticError::RangeError
            }
            overflow => overflow,
        }
    }
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticError::Uninitialized => write!(f, "uninitialized value"),
            ArithmeticError::NegativeOverflow => write!(f, "negative overflow"),
            ArithmeticError::PositiveOverflow => write!(f, "positive overflow"),
            ArithmeticError::RangeError => write!(f, "range error"),
            ArithmeticError::DomainError => write!(f, "domain error"),
        }
    }
}

impl std::error::Error for ArithmeticError {}
