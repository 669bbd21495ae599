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

//! Same-type checked arithmetic with classified failures.
//!
//! Each operation checks its operands against the bounds of `T` before the
//! native operation runs, so the native operation itself can never overflow,
//! trap or lose bits. Failures are reported as the `ArithmeticError` that
//! describes them rather than as `None`.

use crate::{checked::CheckedResult, error::ArithmeticError, num::integer::Integer};

/// Checked addition.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::checked_arithmetic::checked_add;
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// assert_eq!(checked_add(100i8, 27), CheckedResult::Value(127));
/// assert_eq!(checked_add(100i8, 28), CheckedResult::Error(ArithmeticError::PositiveOverflow));
/// assert_eq!(checked_add(-100i8, -29), CheckedResult::Error(ArithmeticError::NegativeOverflow));
/// ```
#[inline]
pub fn checked_add<T>(lhs: T, rhs: T) -> CheckedResult<T>
where
    T: Integer,
{
    let zero = T::zero();
    if rhs > zero && lhs > T::max_value() - rhs {
        CheckedResult::Error(ArithmeticError::PositiveOverflow)
    } else if rhs < zero && lhs < T::min_value() - rhs {
        CheckedResult::Error(ArithmeticError::NegativeOverflow)
    } else {
        CheckedResult::Value(lhs + rhs)
    }
}

/// Checked subtraction.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::checked_arithmetic::checked_sub;
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// assert_eq!(checked_sub(3u8, 5), CheckedResult::Error(ArithmeticError::NegativeOverflow));
/// assert_eq!(checked_sub(5u8, 3), CheckedResult::Value(2));
/// ```
#[inline]
pub fn checked_sub<T>(lhs: T, rhs: T) -> CheckedResult<T>
where
    T: Integer,
{
    let zero = T::zero();
    if rhs < zero && lhs > T::max_value() + rhs {
        CheckedResult::Error(ArithmeticError::PositiveOverflow)
    } else if rhs > zero && lhs < T::min_value() + rhs {
        CheckedResult::Error(ArithmeticError::NegativeOverflow)
    } else {
        CheckedResult::Value(lhs - rhs)
    }
}

/// Checked multiplication.
///
/// The product's sign decides the direction of an overflow. The bound checks
/// divide the limit by one operand instead of forming the product.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::checked_arithmetic::checked_mul;
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// assert_eq!(checked_mul(-128i8, -1), CheckedResult::Error(ArithmeticError::PositiveOverflow));
/// assert_eq!(checked_mul(-64i8, 2), CheckedResult::Value(-128));
/// assert_eq!(checked_mul(-43i8, 3), CheckedResult::Error(ArithmeticError::NegativeOverflow));
/// ```
#[inline]
pub fn checked_mul<T>(lhs: T, rhs: T) -> CheckedResult<T>
where
    T: Integer,
{
    let zero = T::zero();
    let overflow = if lhs > zero {
        if rhs > zero {
            (lhs > T::max_value() / rhs).then_some(ArithmeticError::PositiveOverflow)
        } else {
            (rhs < T::min_value() / lhs).then_some(ArithmeticError::NegativeOverflow)
        }
    } else if rhs > zero {
        (lhs < T::min_value() / rhs).then_some(ArithmeticError::NegativeOverflow)
    } else {
        (lhs != zero && rhs < T::max_value() / lhs).then_some(ArithmeticError::PositiveOverflow)
    };

    match overflow {
        Some(e) => CheckedResult::Error(e),
        None => CheckedResult::Value(lhs * rhs),
    }
}

/// Checked truncating division.
///
/// Division by zero is a domain error. `T::MIN / -1` is a positive overflow.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::checked_arithmetic::checked_div;
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// assert_eq!(checked_div(-7i32, 2), CheckedResult::Value(-3));
/// assert_eq!(checked_div(1i32, 0), CheckedResult::Error(ArithmeticError::DomainError));
/// assert_eq!(checked_div(i32::MIN, -1), CheckedResult::Error(ArithmeticError::PositiveOverflow));
/// ```
#[inline]
pub fn checked_div<T>(lhs: T, rhs: T) -> CheckedResult<T>
where
    T: Integer,
{
    if rhs == T::zero() {
        CheckedResult::Error(ArithmeticError::DomainError)
    } else if T::TYPE.is_signed() && lhs == T::min_value() && rhs.widen() == -1 {
        CheckedResult::Error(ArithmeticError::PositiveOverflow)
    } else {
        CheckedResult::Value(lhs / rhs)
    }
}

/// Checked truncating remainder; the result takes the dividend's sign.
///
/// A zero divisor is a domain error. Any remainder by `-1` is zero, including
/// `T::MIN % -1`.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::checked_arithmetic::checked_rem;
/// # use keel_core::checked::CheckedResult;
/// assert_eq!(checked_rem(-7i16, 2), CheckedResult::Value(-1));
/// assert_eq!(checked_rem(i16::MIN, -1), CheckedResult::Value(0));
/// ```
#[inline]
pub fn checked_rem<T>(lhs: T, rhs: T) -> CheckedResult<T>
where
    T: Integer,
{
    if rhs == T::zero() {
        CheckedResult::Error(ArithmeticError::DomainError)
    } else if T::TYPE.is_signed() && rhs.widen() == -1 {
        CheckedResult::Value(T::zero())
    } else {
        CheckedResult::Value(lhs % rhs)
    }
}

/// Validates a shift amount against the width of `T`.
#[inline]
fn shift_amount<T, A>(amount: A) -> Result<usize, ArithmeticError>
where
    T: Integer,
    A: Integer,
{
    let n = amount.widen();
    if n < 0 || n >= T::TYPE.bits() as i128 {
        Err(ArithmeticError::DomainError)
    } else {
        Ok(n as usize)
    }
}

/// Checked left shift, `value * 2^amount`.
///
/// The amount may be of any integer type. A negative amount, or one of at
/// least the bit width of `T`, is a domain error. A non-negative value whose
/// shifted bits would not fit is a positive overflow; a negative value whose
/// shifted result would not fit is a domain error.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::checked_arithmetic::checked_shl;
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// assert_eq!(checked_shl(1i8, 6u8), CheckedResult::Value(64));
/// assert_eq!(checked_shl(1i8, 7u8), CheckedResult::Error(ArithmeticError::PositiveOverflow));
/// assert_eq!(checked_shl(1i8, 8u8), CheckedResult::Error(ArithmeticError::DomainError));
/// assert_eq!(checked_shl(-1i8, 7u8), CheckedResult::Value(-128));
/// ```
#[inline]
pub fn checked_shl<T, A>(value: T, amount: A) -> CheckedResult<T>
where
    T: Integer,
    A: Integer,
{
    let n = match shift_amount::<T, A>(amount) {
        Ok(n) => n,
        Err(e) => return CheckedResult::Error(e),
    };
    if value.is_negative() {
        if value < (T::min_value() >> n) {
            return CheckedResult::Error(ArithmeticError::DomainError);
        }
    } else if value > (T::max_value() >> n) {
        return CheckedResult::Error(ArithmeticError::PositiveOverflow);
    }
    CheckedResult::Value(value << n)
}

/// Checked right shift; arithmetic for signed types.
///
/// The amount is validated exactly as for [`checked_shl`].
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::checked_arithmetic::checked_shr;
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// assert_eq!(checked_shr(-128i8, 7i32), CheckedResult::Value(-1));
/// assert_eq!(checked_shr(1u32, -1i32), CheckedResult::Error(ArithmeticError::DomainError));
/// ```
#[inline]
pub fn checked_shr<T, A>(value: T, amount: A) -> CheckedResult<T>
where
    T: Integer,
    A: Integer,
{
    match shift_amount::<T, A>(amount) {
        Ok(n) => CheckedResult::Value(value >> n),
        Err(e) => CheckedResult::Error(e),
    }
}

/// Checked negation.
///
/// Negating `T::MIN` of a signed type is a positive overflow; negating any
/// non-zero unsigned value is a negative overflow.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::checked_arithmetic::checked_neg;
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// assert_eq!(checked_neg(-128i8), CheckedResult::Error(ArithmeticError::PositiveOverflow));
/// assert_eq!(checked_neg(0u8), CheckedResult::Value(0));
/// assert_eq!(checked_neg(1u8), CheckedResult::Error(ArithmeticError::NegativeOverflow));
/// ```
#[inline]
pub fn checked_neg<T>(value: T) -> CheckedResult<T>
where
    T: Integer,
{
    let zero = T::zero();
    if T::TYPE.is_signed() {
        if value == T::min_value() {
            CheckedResult::Error(ArithmeticError::PositiveOverflow)
        } else {
            CheckedResult::Value(zero - value)
        }
    } else if value == zero {
        CheckedResult::Value(zero)
    } else {
        CheckedResult::Error(ArithmeticError::NegativeOverflow)
    }
}
