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

//! Result-type promotion.
//!
//! The working type is the narrowest native type that holds both operands and
//! every possible result of the operation, as computed by interval arithmetic
//! over the operands' ranges. Addition, subtraction and multiplication of types up to
//! 64 bits therefore never overflow; where no native type is wide enough the
//! policy falls back to `i128` and the runtime check stays in place.

use super::PromotionPolicy;
use crate::{
    checked::CheckedResult,
    math::interval::ClosedInterval,
    num::{
        integer::IntegerType,
        operand::Bounds,
        ops::{BinaryOperator, UnaryOperator},
    },
};

/// Promotes to the narrowest type containing the operand and result ranges.
///
/// At each width the signed type is preferred if either operand is signed,
/// otherwise the unsigned one. Shifts only consider the value operand.
///
/// # Examples
///
/// ```rust
/// # use keel_core::promotion::{AutomaticPromotion, PromotionPolicy};
/// # use keel_core::num::{integer::IntegerType, operand::Bounds, ops::BinaryOperator};
/// let i8_ = Bounds::of_type(IntegerType::I8);
/// let u8_ = Bounds::of_type(IntegerType::U8);
/// assert_eq!(AutomaticPromotion::binary(BinaryOperator::Add, u8_, u8_), IntegerType::U16);
/// assert_eq!(AutomaticPromotion::binary(BinaryOperator::Sub, u8_, u8_), IntegerType::I16);
/// assert_eq!(AutomaticPromotion::binary(BinaryOperator::Mul, i8_, u8_), IntegerType::I16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AutomaticPromotion;

impl AutomaticPromotion {
    /// The narrowest type holding the result range and every operand range.
    #[inline]
    fn fit(range: CheckedResult<ClosedInterval>, operands: &[ClosedInterval], prefer_signed: bool) -> IntegerType {
        match range {
            CheckedResult::Value(r) => {
                let all = operands.iter().fold(r, |acc, o| acc.hull(*o));
                IntegerType::narrowest_containing(all, prefer_signed).unwrap_or(IntegerType::WIDEST)
            }
            CheckedResult::Error(_) => IntegerType::WIDEST,
        }
    }

    /// A shift runs in the narrowest type that holds the value operand and
    /// every result for the amounts valid at that width.
    fn fit_shift(op: BinaryOperator, value: ClosedInterval, amount: ClosedInterval, prefer_signed: bool) -> IntegerType {
        IntegerType::narrowest_where(prefer_signed, |candidate| {
            let domain = candidate.interval();
            domain.includes(value)
                && matches!(
                    value.checked_op(op, amount, candidate),
                    CheckedResult::Value(r) if domain.includes(r)
                )
        })
        .unwrap_or(IntegerType::WIDEST)
    }
}

impl PromotionPolicy for AutomaticPromotion {
    fn binary(op: BinaryOperator, lhs: Bounds, rhs: Bounds) -> IntegerType {
        let prefer_signed = lhs.ty().is_signed() || rhs.ty().is_signed();
        let (a, b) = (lhs.range(), rhs.range());

        match op {
            BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Rem => {
                Self::fit(a.checked_op(op, b, IntegerType::WIDEST), &[a, b], prefer_signed)
            }
            BinaryOperator::Div => {
                // A divisor straddling zero can produce any quotient with
                // magnitude up to the dividend's.
                let range = a.checked_neg().and_then(|negated| a.checked_div(b, a.hull(negated)));
                Self::fit(range, &[a, b], prefer_signed)
            }
            BinaryOperator::Shl | BinaryOperator::Shr => {
                Self::fit_shift(op, a, b, lhs.ty().is_signed())
            }
        }
    }

    fn unary(op: UnaryOperator, operand: Bounds) -> IntegerType {
        match op {
            UnaryOperator::Neg => {
                Self::fit(operand.range().checked_neg(), &[operand.range()], true)
            }
        }
    }
}
