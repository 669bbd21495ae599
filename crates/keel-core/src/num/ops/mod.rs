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

//! # Numeric Operations
//!
//! Classified integer operations.
//!
//! ## Submodules
//!
//! - `checked_arithmetic`: Same-type checked add, subtract, multiply, divide,
//!   remainder, shifts and negation. Overflow is detected with pre-checks
//!   against the type bounds before the native operation runs.
//! - `comparison`: Exact comparisons between any two integer types, with
//!   signedness reconciled by comparing against zero first.
//! - `extended`: Operator implementations on `CheckedResult<T>`. Poisoned
//!   operands short-circuit; overflow classifications behave as values beyond
//!   the type bounds.

pub mod checked_arithmetic;
pub mod comparison;
pub mod extended;

use std::fmt::Display;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
}

impl BinaryOperator {
    /// Every binary operator.
    pub const ALL: [BinaryOperator; 7] = [
        BinaryOperator::Add,
        BinaryOperator::Sub,
        BinaryOperator::Mul,
        BinaryOperator::Div,
        BinaryOperator::Rem,
        BinaryOperator::Shl,
        BinaryOperator::Shr,
    ];

    /// Returns `true` for the shift operators, whose right operand is an
    /// amount rather than a value taking part in promotion.
    #[inline]
    pub const fn is_shift(self) -> bool {
        matches!(self, BinaryOperator::Shl | BinaryOperator::Shr)
    }

    /// Returns `true` for the operators with a divisor that must not be zero.
    #[inline]
    pub const fn is_division(self) -> bool {
        matches!(self, BinaryOperator::Div | BinaryOperator::Rem)
    }

    /// The operator's name, as reported to exception policies.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            BinaryOperator::Add => "addition",
            BinaryOperator::Sub => "subtraction",
            BinaryOperator::Mul => "multiplication",
            BinaryOperator::Div => "division",
            BinaryOperator::Rem => "remainder",
            BinaryOperator::Shl => "left shift",
            BinaryOperator::Shr => "right shift",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Rem => "%",
            BinaryOperator::Shl => "<<",
            BinaryOperator::Shr => ">>",
        };
        write!(f, "{}", symbol)
    }
}

/// A unary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Neg,
}

impl UnaryOperator {
    /// The operator's name, as reported to exception policies.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            UnaryOperator::Neg => "negation",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Neg => write!(f, "-"),
        }
    }
}
