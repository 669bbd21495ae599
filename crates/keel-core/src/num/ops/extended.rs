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

//! Arithmetic on `CheckedResult<T>`.
//!
//! Operands that already carry a classification propagate it:
//!
//! - `Uninitialized` poisons every result as `Uninitialized`.
//! - `RangeError` and `DomainError` poison every result as `RangeError`.
//! - `PositiveOverflow` and `NegativeOverflow` stand for some value above
//!   `T::MAX` or below `T::MIN`. They take part in the arithmetic like
//!   infinities of that sign: the result is the classification the sign rule
//!   determines, a value where the value is certain (`0 * overflow == 0`),
//!   and `RangeError` where the outcome cannot be determined.
//!
//! A value is only ever produced when it is the exact result.

use crate::{
    checked::CheckedResult,
    error::ArithmeticError,
    num::{
        integer::Integer,
        ops::{checked_arithmetic, comparison::compare_checked},
    },
};
use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub},
};

/// The classification a result inherits from its operands' non-overflow errors.
///
/// `Uninitialized` takes precedence over range and domain errors. Returns
/// `None` if neither operand carries such an error.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::extended::poison;
/// # use keel_core::error::ArithmeticError::*;
/// assert_eq!(poison(Some(DomainError), None), Some(RangeError));
/// assert_eq!(poison(Some(RangeError), Some(Uninitialized)), Some(Uninitialized));
/// assert_eq!(poison(Some(PositiveOverflow), None), None);
/// ```
#[inline]
pub fn poison(
    lhs: Option<ArithmeticError>,
    rhs: Option<ArithmeticError>,
) -> Option<ArithmeticError> {
    let poisoned = |e: Option<ArithmeticError>| e.map(ArithmeticError::poisoned).filter(|e| !e.is_overflow());
    match (poisoned(lhs), poisoned(rhs)) {
        (Some(ArithmeticError::Uninitialized), _) | (_, Some(ArithmeticError::Uninitialized)) => {
            Some(ArithmeticError::Uninitialized)
        }
        (Some(e), _) | (_, Some(e)) => Some(e),
        (None, None) => None,
    }
}

/// An operand on the extended number line of `T`.
#[derive(Debug, Clone, Copy)]
enum Extended<T> {
    BelowMin,
    Finite(T),
    AboveMax,
}

impl<T> Extended<T>
where
    T: Integer,
{
    /// Sign of the operand: `-1`, `0` or `1`.
    #[inline]
    fn signum(self) -> i8 {
        match self {
            Extended::BelowMin => -1,
            Extended::AboveMax => 1,
            Extended::Finite(v) if v.is_negative() => -1,
            Extended::Finite(v) if v == T::zero() => 0,
            Extended::Finite(_) => 1,
        }
    }
}

/// Extends a result that carries no poisoning error.
#[inline]
fn extend<T>(operand: CheckedResult<T>) -> Extended<T> {
    match operand {
        CheckedResult::Value(v) => Extended::Finite(v),
        CheckedResult::Error(ArithmeticError::NegativeOverflow) => Extended::BelowMin,
        _ => Extended::AboveMax,
    }
}

#[inline]
fn error<T>(e: ArithmeticError) -> CheckedResult<T> {
    CheckedResult::Error(e)
}

/// Overflow in the direction of `sign`.
#[inline]
fn overflow<T>(sign: i8) -> CheckedResult<T> {
    if sign < 0 {
        error(ArithmeticError::NegativeOverflow)
    } else {
        error(ArithmeticError::PositiveOverflow)
    }
}

/// Runs `f` on the extended operands unless one of them is poisoned.
#[inline]
fn binary<T, U, F>(lhs: CheckedResult<T>, rhs: CheckedResult<U>, f: F) -> CheckedResult<T>
where
    F: FnOnce(Extended<T>, Extended<U>) -> CheckedResult<T>,
{
    match poison(lhs.error(), rhs.error()) {
        Some(e) => error(e),
        None => f(extend(lhs), extend(rhs)),
    }
}

/// Extended addition.
pub fn add<T>(lhs: CheckedResult<T>, rhs: CheckedResult<T>) -> CheckedResult<T>
where
    T: Integer,
{
    binary(lhs, rhs, |l, r| match (l, r) {
        (Extended::Finite(a), Extended::Finite(b)) => checked_arithmetic::checked_add(a, b),
        (Extended::AboveMax, Extended::BelowMin) | (Extended::BelowMin, Extended::AboveMax) => {
            error(ArithmeticError::RangeError)
        }
        (Extended::AboveMax, _) | (_, Extended::AboveMax) => overflow(1),
        (Extended::BelowMin, _) | (_, Extended::BelowMin) => overflow(-1),
    })
}

/// Extended subtraction.
pub fn sub<T>(lhs: CheckedResult<T>, rhs: CheckedResult<T>) -> CheckedResult<T>
where
    T: Integer,
{
    binary(lhs, rhs, |l, r| match (l, r) {
        (Extended::Finite(a), Extended::Finite(b)) => checked_arithmetic::checked_sub(a, b),
        (Extended::AboveMax, Extended::AboveMax) | (Extended::BelowMin, Extended::BelowMin) => {
            error(ArithmeticError::RangeError)
        }
        (Extended::AboveMax, _) | (_, Extended::BelowMin) => overflow(1),
        (Extended::BelowMin, _) | (_, Extended::AboveMax) => overflow(-1),
    })
}

/// Extended multiplication.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::extended::mul;
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// let above: CheckedResult<i8> = CheckedResult::Error(ArithmeticError::PositiveOverflow);
/// assert_eq!(mul(above, CheckedResult::Value(-1)), CheckedResult::Error(ArithmeticError::NegativeOverflow));
/// assert_eq!(mul(above, CheckedResult::Value(0)), CheckedResult::Value(0));
/// ```
pub fn mul<T>(lhs: CheckedResult<T>, rhs: CheckedResult<T>) -> CheckedResult<T>
where
    T: Integer,
{
    binary(lhs, rhs, |l, r| match (l, r) {
        (Extended::Finite(a), Extended::Finite(b)) => checked_arithmetic::checked_mul(a, b),
        _ => match l.signum() * r.signum() {
            0 => CheckedResult::Value(T::zero()),
            sign => overflow(sign),
        },
    })
}

/// Whether `a / x` is certainly zero for every `x` represented by `divisor`.
#[inline]
fn quotient_vanishes<T>(a: T, divisor: Extended<T>) -> bool
where
    T: Integer,
{
    match divisor {
        // |x| >= MAX + 1 >= |a|, equal only for a == MIN of a signed type.
        Extended::AboveMax => !(T::TYPE.is_signed() && a == T::min_value()),
        // Signed: |x| >= MAX + 2 > |a|. Unsigned: x is negative and may be small.
        Extended::BelowMin => T::TYPE.is_signed() || a == T::zero(),
        Extended::Finite(_) => false,
    }
}

/// Extended truncating division.
pub fn div<T>(lhs: CheckedResult<T>, rhs: CheckedResult<T>) -> CheckedResult<T>
where
    T: Integer,
{
    binary(lhs, rhs, |l, r| match (l, r) {
        (_, Extended::Finite(b)) if b == T::zero() => error(ArithmeticError::DomainError),
        (Extended::Finite(a), Extended::Finite(b)) => checked_arithmetic::checked_div(a, b),
        (Extended::Finite(a), divisor) if quotient_vanishes(a, divisor) => {
            CheckedResult::Value(T::zero())
        }
        (Extended::AboveMax, Extended::Finite(b)) if b == T::one() => overflow(1),
        (Extended::BelowMin, Extended::Finite(b)) if b == T::one() => overflow(-1),
        (Extended::BelowMin, Extended::Finite(b)) if b.widen() == -1 => overflow(1),
        _ => error(ArithmeticError::RangeError),
    })
}

/// Extended truncating remainder.
pub fn rem<T>(lhs: CheckedResult<T>, rhs: CheckedResult<T>) -> CheckedResult<T>
where
    T: Integer,
{
    binary(lhs, rhs, |l, r| match (l, r) {
        (_, Extended::Finite(b)) if b == T::zero() => error(ArithmeticError::DomainError),
        (Extended::Finite(a), Extended::Finite(b)) => checked_arithmetic::checked_rem(a, b),
        (Extended::Finite(a), divisor) if quotient_vanishes(a, divisor) => CheckedResult::Value(a),
        _ => error(ArithmeticError::RangeError),
    })
}

/// Extended left shift by an amount of any integer type.
///
/// An amount that overflowed is out of range for every width and is a domain
/// error. A value above `T::MAX` stays above it; a value below `T::MIN` is a
/// negative value that cannot be shifted and is a domain error.
pub fn shl<T, A>(value: CheckedResult<T>, amount: CheckedResult<A>) -> CheckedResult<T>
where
    T: Integer,
    A: Integer,
{
    binary(value, amount, |v, n| match (v, n) {
        (_, Extended::AboveMax | Extended::BelowMin) => error(ArithmeticError::DomainError),
        (Extended::Finite(a), Extended::Finite(n)) => checked_arithmetic::checked_shl(a, n),
        (Extended::AboveMax, Extended::Finite(n)) => {
            checked_arithmetic::checked_shl(T::zero(), n).and_then(|_| overflow(1))
        }
        (Extended::BelowMin, Extended::Finite(n)) => {
            checked_arithmetic::checked_shl(T::zero(), n)
                .and_then(|_| error(ArithmeticError::DomainError))
        }
    })
}

/// Extended arithmetic right shift by an amount of any integer type.
pub fn shr<T, A>(value: CheckedResult<T>, amount: CheckedResult<A>) -> CheckedResult<T>
where
    T: Integer,
    A: Integer,
{
    binary(value, amount, |v, n| match (v, n) {
        (_, Extended::AboveMax | Extended::BelowMin) => error(ArithmeticError::DomainError),
        (Extended::Finite(a), Extended::Finite(n)) => checked_arithmetic::checked_shr(a, n),
        (unbounded, Extended::Finite(n)) => {
            checked_arithmetic::checked_shr(T::zero(), n).and_then(|_| {
                if n == A::zero() {
                    overflow(unbounded.signum())
                } else {
                    error(ArithmeticError::RangeError)
                }
            })
        }
    })
}

/// Extended negation.
pub fn neg<T>(operand: CheckedResult<T>) -> CheckedResult<T>
where
    T: Integer,
{
    if let Some(e) = poison(operand.error(), None) {
        return error(e);
    }
    match (extend(operand), T::TYPE.is_signed()) {
        (Extended::Finite(v), _) => checked_arithmetic::checked_neg(v),
        // -x > MAX + 1 when x < MIN; -x < 0 when x > MAX >= 0.
        (Extended::BelowMin, true) | (Extended::AboveMax, false) => overflow(-extend(operand).signum()),
        _ => error(ArithmeticError::RangeError),
    }
}

impl<T> CheckedResult<T>
where
    T: Integer,
{
    /// Compares with a result of any integer type by mathematical value.
    ///
    /// Overflow classifications are read against the bounds of their type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::checked::CheckedResult;
    /// # use std::cmp::Ordering;
    /// let a = CheckedResult::from(-1i32);
    /// assert_eq!(a.checked_cmp(CheckedResult::from(0u32)), CheckedResult::Value(Ordering::Less));
    /// assert_eq!(a.checked_lt(CheckedResult::from(0u32)), CheckedResult::Value(true));
    /// ```
    #[inline]
    pub fn checked_cmp<U>(self, other: CheckedResult<U>) -> CheckedResult<Ordering>
    where
        U: Integer,
    {
        compare_checked(self, T::TYPE.interval(), other, U::TYPE.interval())
    }

    /// Checked `self < other`.
    #[inline]
    pub fn checked_lt<U: Integer>(self, other: CheckedResult<U>) -> CheckedResult<bool> {
        self.checked_cmp(other).map(|o| o == Ordering::Less)
    }

    /// Checked `self <= other`.
    #[inline]
    pub fn checked_le<U: Integer>(self, other: CheckedResult<U>) -> CheckedResult<bool> {
        self.checked_cmp(other).map(|o| o != Ordering::Greater)
    }

    /// Checked `self > other`.
    #[inline]
    pub fn checked_gt<U: Integer>(self, other: CheckedResult<U>) -> CheckedResult<bool> {
        self.checked_cmp(other).map(|o| o == Ordering::Greater)
    }

    /// Checked `self >= other`.
    #[inline]
    pub fn checked_ge<U: Integer>(self, other: CheckedResult<U>) -> CheckedResult<bool> {
        self.checked_cmp(other).map(|o| o != Ordering::Less)
    }

    /// Checked `self == other`.
    #[inline]
    pub fn checked_eq<U: Integer>(self, other: CheckedResult<U>) -> CheckedResult<bool> {
        self.checked_cmp(other).map(|o| o == Ordering::Equal)
    }

    /// Checked `self != other`.
    #[inline]
    pub fn checked_ne<U: Integer>(self, other: CheckedResult<U>) -> CheckedResult<bool> {
        self.checked_cmp(other).map(|o| o != Ordering::Equal)
    }
}

macro_rules! impl_extended_binary {
    ($trait_name:ident, $method:ident) => {
        impl<T> $trait_name for CheckedResult<T>
        where
            T: Integer,
        {
            type Output = CheckedResult<T>;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                $method(self, rhs)
            }
        }

        impl<T> $trait_name<T> for CheckedResult<T>
        where
            T: Integer,
        {
            type Output = CheckedResult<T>;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                $method(self, CheckedResult::Value(rhs))
            }
        }
    };
}

impl_extended_binary!(Add, add);
impl_extended_binary!(Sub, sub);
impl_extended_binary!(Mul, mul);
impl_extended_binary!(Div, div);
impl_extended_binary!(Rem, rem);

macro_rules! impl_extended_shift {
    ($trait_name:ident, $method:ident) => {
        impl<T, A> $trait_name<CheckedResult<A>> for CheckedResult<T>
        where
            T: Integer,
            A: Integer,
        {
            type Output = CheckedResult<T>;

            #[inline]
            fn $method(self, amount: CheckedResult<A>) -> Self::Output {
                $method(self, amount)
            }
        }
    };
}

impl_extended_shift!(Shl, shl);
impl_extended_shift!(Shr, shr);

impl<T> Neg for CheckedResult<T>
where
    T: Integer,
{
    type Output = CheckedResult<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        neg(self)
    }
}
