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

//! # Operation Entry Points
//!
//! `Binary<P, L, R>` and `Unary<P, O>` run an operation on operands of static
//! types `L`, `R` (or `O`) under the promotion policy `P`, delivering the
//! result as the destination operand type `D`:
//!
//! 1. Poisoned operands decide the result without any arithmetic.
//! 2. The policy names the working type `W`. If no successful result can lie
//!    in `D`'s range the result is a range error.
//! 3. If the range analysis proves the operation exact and the result within
//!    `D`, the plain native operation runs in `W`.
//! 4. Otherwise the operands are converted into `W`, the checked operation
//!    runs there, and the result is narrowed into `D`.
//!
//! Values passed in must lie within their operand's declared range; this is
//! checked with `debug_assert!`.

use crate::{
    checked::CheckedResult,
    error::ArithmeticError,
    math::interval::ClosedInterval,
    num::{
        integer::{Integer, with_native_type},
        operand::Operand,
        ops::{BinaryOperator, UnaryOperator, comparison::compare_checked, extended},
    },
    promotion::{Promotion, PromotionPolicy},
};
use std::{cmp::Ordering, marker::PhantomData};

/// Moves a checked value from the range `from` into the range `to`.
///
/// Overflow classifications survive only where the bound they exceeded
/// implies the destination bound is exceeded as well.
fn reclassify<S, D>(value: CheckedResult<S>, from: ClosedInterval, to: ClosedInterval) -> CheckedResult<D>
where
    S: Integer,
    D: Integer,
{
    match value {
        CheckedResult::Value(_) if !from.intersects(to) => {
            CheckedResult::Error(ArithmeticError::RangeError)
        }
        CheckedResult::Value(v) => {
            let x = v.widen();
            if x < to.low() {
                CheckedResult::Error(ArithmeticError::NegativeOverflow)
            } else if x > to.high() {
                CheckedResult::Error(ArithmeticError::PositiveOverflow)
            } else {
                CheckedResult::Value(D::wrap_from(x))
            }
        }
        CheckedResult::Error(ArithmeticError::PositiveOverflow) if from.high() >= to.high() => {
            CheckedResult::Error(ArithmeticError::PositiveOverflow)
        }
        CheckedResult::Error(ArithmeticError::NegativeOverflow) if from.low() <= to.low() => {
            CheckedResult::Error(ArithmeticError::NegativeOverflow)
        }
        CheckedResult::Error(e) if e.is_overflow() => CheckedResult::Error(ArithmeticError::RangeError),
        CheckedResult::Error(e) => CheckedResult::Error(e.poisoned()),
    }
}

/// Checked conversion between operand types.
///
/// A value below `D`'s range is a negative overflow, above it a positive
/// overflow. If the two ranges share no value at all, every value is a range
/// error.
///
/// # Examples
///
/// ```rust
/// # use keel_core::dispatch::convert;
/// # use keel_core::num::operand::Ranged;
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// assert_eq!(convert::<i32, u8>(CheckedResult::Value(200)), CheckedResult::Value(200u8));
/// assert_eq!(convert::<i32, u8>(CheckedResult::Value(-1)), CheckedResult::Error(ArithmeticError::NegativeOverflow));
///
/// type High = Ranged<u16, 1000, 2000>;
/// assert_eq!(convert::<High, i8>(CheckedResult::Value(1500)), CheckedResult::Error(ArithmeticError::RangeError));
/// ```
#[inline]
pub fn convert<S, D>(value: CheckedResult<S::Repr>) -> CheckedResult<D::Repr>
where
    S: Operand,
    D: Operand,
{
    debug_assert_declared::<S>(value);
    reclassify(value, S::RANGE, D::RANGE)
}

/// Converts an operand into the working type; a value the working type
/// cannot hold is a range error.
#[inline]
fn promote<O, W>(value: CheckedResult<O::Repr>) -> CheckedResult<W>
where
    O: Operand,
    W: Integer,
{
    match reclassify(value, O::RANGE, W::TYPE.interval()) {
        CheckedResult::Error(_) if value.is_value() => {
            CheckedResult::Error(ArithmeticError::RangeError)
        }
        promoted => promoted,
    }
}

#[inline]
fn debug_assert_declared<O>(value: CheckedResult<O::Repr>)
where
    O: Operand,
{
    if let CheckedResult::Value(v) = value {
        debug_assert!(
            O::RANGE.contains(v.widen()),
            "value {} outside declared range {}",
            v,
            O::RANGE
        );
    }
}

/// Binary operations between operand types `L` and `R` under policy `P`.
///
/// # Examples
///
/// ```rust
/// # use keel_core::dispatch::Binary;
/// # use keel_core::promotion::{AutomaticPromotion, Native};
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// // Under native rules i32 * i32 runs in i32 and overflows.
/// let r = Binary::<Native, i32, i32>::mul::<i64>(CheckedResult::Value(i32::MAX), CheckedResult::Value(2));
/// assert_eq!(r, CheckedResult::Error(ArithmeticError::PositiveOverflow));
///
/// // The automatic policy runs it in i64.
/// let r = Binary::<AutomaticPromotion, i32, i32>::mul::<i64>(CheckedResult::Value(i32::MAX), CheckedResult::Value(2));
/// assert_eq!(r, CheckedResult::Value(2 * i32::MAX as i64));
/// ```
pub struct Binary<P, L, R>(PhantomData<fn() -> (P, L, R)>);

impl<P, L, R> Binary<P, L, R>
where
    P: PromotionPolicy,
    L: Operand,
    R: Operand,
{
    /// The working type and result range of `L op R`.
    #[inline]
    pub fn promotion(op: BinaryOperator) -> Promotion {
        Promotion::binary::<P>(op, L::bounds(), R::bounds())
    }

    /// Checked `lhs + rhs`.
    #[inline]
    pub fn add<D: Operand>(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<D::Repr> {
        Self::apply::<D>(BinaryOperator::Add, lhs, rhs)
    }

    /// Checked `lhs - rhs`.
    #[inline]
    pub fn sub<D: Operand>(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<D::Repr> {
        Self::apply::<D>(BinaryOperator::Sub, lhs, rhs)
    }

    /// Checked `lhs * rhs`.
    #[inline]
    pub fn mul<D: Operand>(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<D::Repr> {
        Self::apply::<D>(BinaryOperator::Mul, lhs, rhs)
    }

    /// Checked truncating `lhs / rhs`.
    #[inline]
    pub fn div<D: Operand>(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<D::Repr> {
        Self::apply::<D>(BinaryOperator::Div, lhs, rhs)
    }

    /// Checked truncating `lhs % rhs`.
    #[inline]
    pub fn rem<D: Operand>(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<D::Repr> {
        Self::apply::<D>(BinaryOperator::Rem, lhs, rhs)
    }

    /// Checked `lhs << rhs`.
    #[inline]
    pub fn shl<D: Operand>(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<D::Repr> {
        Self::apply::<D>(BinaryOperator::Shl, lhs, rhs)
    }

    /// Checked arithmetic `lhs >> rhs`.
    #[inline]
    pub fn shr<D: Operand>(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<D::Repr> {
        Self::apply::<D>(BinaryOperator::Shr, lhs, rhs)
    }

    /// Exact comparison; no promotion takes place.
    #[inline]
    pub fn compare(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<Ordering> {
        debug_assert_declared::<L>(lhs);
        debug_assert_declared::<R>(rhs);
        compare_checked(lhs, L::RANGE, rhs, R::RANGE)
    }

    /// Checked `lhs < rhs`.
    #[inline]
    pub fn lt(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<bool> {
        Self::compare(lhs, rhs).map(|o| o == Ordering::Less)
    }

    /// Checked `lhs <= rhs`.
    #[inline]
    pub fn le(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<bool> {
        Self::compare(lhs, rhs).map(|o| o != Ordering::Greater)
    }

    /// Checked `lhs > rhs`.
    #[inline]
    pub fn gt(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<bool> {
        Self::compare(lhs, rhs).map(|o| o == Ordering::Greater)
    }

    /// Checked `lhs >= rhs`.
    #[inline]
    pub fn ge(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<bool> {
        Self::compare(lhs, rhs).map(|o| o != Ordering::Less)
    }

    /// Checked `lhs == rhs`.
    #[inline]
    pub fn eq(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<bool> {
        Self::compare(lhs, rhs).map(|o| o == Ordering::Equal)
    }

    /// Checked `lhs != rhs`.
    #[inline]
    pub fn ne(lhs: CheckedResult<L::Repr>, rhs: CheckedResult<R::Repr>) -> CheckedResult<bool> {
        Self::compare(lhs, rhs).map(|o| o != Ordering::Equal)
    }

    /// Runs `op` under the policy and delivers the result as `D`.
    pub fn apply<D: Operand>(
        op: BinaryOperator,
        lhs: CheckedResult<L::Repr>,
        rhs: CheckedResult<R::Repr>,
    ) -> CheckedResult<D::Repr> {
        debug_assert_declared::<L>(lhs);
        debug_assert_declared::<R>(rhs);

        if let Some(e) = extended::poison(lhs.error(), rhs.error()) {
            return CheckedResult::Error(e);
        }
        let promotion = Self::promotion(op);
        if promotion.is_disjoint_from(D::RANGE) {
            return CheckedResult::Error(ArithmeticError::RangeError);
        }
        with_native_type!(promotion.working(), W => Self::run::<W, D>(op, &promotion, lhs, rhs))
    }

    #[inline]
    fn run<W, D>(
        op: BinaryOperator,
        promotion: &Promotion,
        lhs: CheckedResult<L::Repr>,
        rhs: CheckedResult<R::Repr>,
    ) -> CheckedResult<D::Repr>
    where
        W: Integer,
        D: Operand,
    {
        if let (CheckedResult::Value(l), CheckedResult::Value(r)) = (lhs, rhs) {
            if promotion.elides(D::RANGE) {
                let a = W::wrap_from(l.widen());
                let exact = match op {
                    BinaryOperator::Add => a + W::wrap_from(r.widen()),
                    BinaryOperator::Sub => a - W::wrap_from(r.widen()),
                    BinaryOperator::Mul => a * W::wrap_from(r.widen()),
                    BinaryOperator::Div => a / W::wrap_from(r.widen()),
                    BinaryOperator::Rem => a % W::wrap_from(r.widen()),
                    BinaryOperator::Shl => a << r.widen() as usize,
                    BinaryOperator::Shr => a >> r.widen() as usize,
                };
                return CheckedResult::Value(D::Repr::wrap_from(exact.widen()));
            }
        }

        let a = promote::<L, W>(lhs);
        let result = match op {
            BinaryOperator::Add => extended::add(a, promote::<R, W>(rhs)),
            BinaryOperator::Sub => extended::sub(a, promote::<R, W>(rhs)),
            BinaryOperator::Mul => extended::mul(a, promote::<R, W>(rhs)),
            BinaryOperator::Div => extended::div(a, promote::<R, W>(rhs)),
            BinaryOperator::Rem => extended::rem(a, promote::<R, W>(rhs)),
            BinaryOperator::Shl => extended::shl(a, rhs),
            BinaryOperator::Shr => extended::shr(a, rhs),
        };
        // A fresh failure in the working type is already the final classification.
        result.and_then(|x| reclassify(CheckedResult::Value(x), W::TYPE.interval(), D::RANGE))
    }
}

/// Unary operations on operand type `O` under policy `P`.
pub struct Unary<P, O>(PhantomData<fn() -> (P, O)>);

impl<P, O> Unary<P, O>
where
    P: PromotionPolicy,
    O: Operand,
{
    /// The working type and result range of `-O`.
    #[inline]
    pub fn promotion() -> Promotion {
        Promotion::unary::<P>(UnaryOperator::Neg, O::bounds())
    }

    /// Checked `-operand`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::dispatch::Unary;
    /// # use keel_core::promotion::{AutomaticPromotion, Native};
    /// # use keel_core::checked::CheckedResult;
    /// # use keel_core::error::ArithmeticError;
    /// let r = Unary::<Native, i32>::neg::<i32>(CheckedResult::Value(i32::MIN));
    /// assert_eq!(r, CheckedResult::Error(ArithmeticError::PositiveOverflow));
    ///
    /// let r = Unary::<AutomaticPromotion, u8>::neg::<i16>(CheckedResult::Value(255));
    /// assert_eq!(r, CheckedResult::Value(-255));
    /// ```
    pub fn neg<D: Operand>(operand: CheckedResult<O::Repr>) -> CheckedResult<D::Repr> {
        debug_assert_declared::<O>(operand);

        if let Some(e) = extended::poison(operand.error(), None) {
            return CheckedResult::Error(e);
        }
        let promotion = Self::promotion();
        if promotion.is_disjoint_from(D::RANGE) {
            return CheckedResult::Error(ArithmeticError::RangeError);
        }
        with_native_type!(promotion.working(), W => Self::run::<W, D>(&promotion, operand))
    }

    #[inline]
    fn run<W, D>(promotion: &Promotion, operand: CheckedResult<O::Repr>) -> CheckedResult<D::Repr>
    where
        W: Integer,
        D: Operand,
    {
        match operand {
            CheckedResult::Value(v) if promotion.elides(D::RANGE) => {
                let exact = W::zero() - W::wrap_from(v.widen());
                CheckedResult::Value(D::Repr::wrap_from(exact.widen()))
            }
            _ => extended::neg(promote::<O, W>(operand)).and_then(|x| {
                reclassify(CheckedResult::Value(x), W::TYPE.interval(), D::RANGE)
            }),
        }
    }
}
