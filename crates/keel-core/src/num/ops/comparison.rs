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

//! Exact comparisons across integer types.
//!
//! Comparisons are never subject to promotion. Mixed signedness is reconciled
//! by comparing against zero first, so `-1i32 < 0u32` holds even though the
//! usual arithmetic conversions would turn `-1` into `u32::MAX`.
//!
//! The checked forms additionally accept overflow classifications, which
//! stand for a value beyond the bound of the range the operand came from.

use crate::{
    checked::CheckedResult, error::ArithmeticError, math::interval::ClosedInterval,
    num::integer::Integer,
};
use std::cmp::Ordering;

/// Compares two integers of possibly different types by their mathematical value.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::comparison::compare;
/// # use std::cmp::Ordering;
/// assert_eq!(compare(-1i32, 0u32), Ordering::Less);
/// assert_eq!(compare(u64::MAX, -1i8), Ordering::Greater);
/// assert_eq!(compare(200u8, 200i64), Ordering::Equal);
/// ```
#[inline]
pub fn compare<L, R>(lhs: L, rhs: R) -> Ordering
where
    L: Integer,
    R: Integer,
{
    match (lhs.is_negative(), rhs.is_negative()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => lhs.widen().cmp(&rhs.widen()),
    }
}

/// `lhs < rhs` by mathematical value.
#[inline]
pub fn less_than<L: Integer, R: Integer>(lhs: L, rhs: R) -> bool {
    compare(lhs, rhs) == Ordering::Less
}

/// `lhs <= rhs` by mathematical value.
#[inline]
pub fn less_equal<L: Integer, R: Integer>(lhs: L, rhs: R) -> bool {
    compare(lhs, rhs) != Ordering::Greater
}

/// `lhs > rhs` by mathematical value.
#[inline]
pub fn greater_than<L: Integer, R: Integer>(lhs: L, rhs: R) -> bool {
    compare(lhs, rhs) == Ordering::Greater
}

/// `lhs >= rhs` by mathematical value.
#[inline]
pub fn greater_equal<L: Integer, R: Integer>(lhs: L, rhs: R) -> bool {
    compare(lhs, rhs) != Ordering::Less
}

/// `lhs == rhs` by mathematical value.
#[inline]
pub fn equal<L: Integer, R: Integer>(lhs: L, rhs: R) -> bool {
    compare(lhs, rhs) == Ordering::Equal
}

/// `lhs != rhs` by mathematical value.
#[inline]
pub fn not_equal<L: Integer, R: Integer>(lhs: L, rhs: R) -> bool {
    compare(lhs, rhs) != Ordering::Equal
}

/// A checked operand seen as a point on the extended number line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extended {
    BelowMin,
    Finite(i128),
    AboveMax,
}

fn extend<T: Integer>(operand: CheckedResult<T>) -> Result<Extended, ArithmeticError> {
    match operand {
        CheckedResult::Value(v) => Ok(Extended::Finite(v.widen())),
        CheckedResult::Error(ArithmeticError::NegativeOverflow) => Ok(Extended::BelowMin),
        CheckedResult::Error(ArithmeticError::PositiveOverflow) => Ok(Extended::AboveMax),
        CheckedResult::Error(e) => Err(e),
    }
}

/// Compares two checked operands.
///
/// `lhs_range` and `rhs_range` are the ranges the operands were checked
/// against: a positive overflow of `lhs` means a value above
/// `lhs_range.high()`, and so on. An ordering is returned only when it is
/// certain; two overflows in the same direction, or an overflow whose bound
/// does not separate it from the other operand, yield a range error.
/// Uninitialized operands yield `Uninitialized`; range and domain errors
/// yield a range error.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::ops::comparison::compare_checked;
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// # use keel_core::math::interval::ClosedInterval;
/// # use std::cmp::Ordering;
/// let r8 = ClosedInterval::new(-128, 127);
/// let above: CheckedResult<i8> = CheckedResult::Error(ArithmeticError::PositiveOverflow);
/// assert_eq!(
///     compare_checked(above, r8, CheckedResult::Value(100i8), r8),
///     CheckedResult::Value(Ordering::Greater)
/// );
/// ```
pub fn compare_checked<L, R>(
    lhs: CheckedResult<L>,
    lhs_range: ClosedInterval,
    rhs: CheckedResult<R>,
    rhs_range: ClosedInterval,
) -> CheckedResult<Ordering>
where
    L: Integer,
    R: Integer,
{
    if let Some(e) = super::extended::poison(lhs.error(), rhs.error()) {
        return CheckedResult::Error(e);
    }
    let (Ok(l), Ok(r)) = (extend(lhs), extend(rhs)) else {
        return CheckedResult::Error(ArithmeticError::RangeError);
    };

    let ordering = match (l, r) {
        (Extended::Finite(a), Extended::Finite(b)) => Some(a.cmp(&b)),
        (Extended::AboveMax, Extended::BelowMin) => Some(Ordering::Greater),
        (Extended::BelowMin, Extended::AboveMax) => Some(Ordering::Less),
        (Extended::AboveMax, Extended::Finite(b)) => {
            (b <= lhs_range.high()).then_some(Ordering::Greater)
        }
        (Extended::BelowMin, Extended::Finite(b)) => {
            (b >= lhs_range.low()).then_some(Ordering::Less)
        }
        (Extended::Finite(a), Extended::AboveMax) => {
            (a <= rhs_range.high()).then_some(Ordering::Less)
        }
        (Extended::Finite(a), Extended::BelowMin) => {
            (a >= rhs_range.low()).then_some(Ordering::Greater)
        }
        (Extended::AboveMax, Extended::AboveMax) | (Extended::BelowMin, Extended::BelowMin) => {
            None
        }
    };

    match ordering {
        Some(o) => CheckedResult::Value(o),
        None => CheckedResult::Error(ArithmeticError::RangeError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ArithmeticError::*;

    #[test]
    fn test_mixed_signedness() {
        assert!(less_than(-1i32, 0u32));
        assert!(less_than(-1i64, u64::MAX));
        assert!(greater_than(u64::MAX, i64::MAX));
        assert!(greater_than(0u8, i128::MIN));
        assert!(equal(255u8, 255i16));
        assert!(not_equal(-1i8, 255u8));
        assert!(less_equal(5u16, 5i8));
        assert!(greater_equal(5i8, 5u16));
        assert!(!greater_equal(-5i8, 0u16));
    }

    #[test]
    fn test_matches_exact_ordering_for_8_bit() {
        for a in i8::MIN..=i8::MAX {
            for b in u8::MIN..=u8::MAX {
                assert_eq!(compare(a, b), (a as i128).cmp(&(b as i128)));
                assert_eq!(compare(b, a), (b as i128).cmp(&(a as i128)));
            }
        }
    }

    #[test]
    fn test_checked_overflow_operands() {
        let r8 = i8::TYPE.interval();
        let ru8 = u8::TYPE.interval();
        let above: CheckedResult<i8> = CheckedResult::Error(PositiveOverflow);
        let below: CheckedResult<i8> = CheckedResult::Error(NegativeOverflow);

        assert_eq!(
            compare_checked(below, r8, CheckedResult::Value(0u8), ru8),
            CheckedResult::Value(Ordering::Less)
        );
        assert_eq!(
            compare_checked(above, r8, below, r8),
            CheckedResult::Value(Ordering::Greater)
        );
        // 200 may or may not exceed a value above 127.
        assert_eq!(
            compare_checked(above, r8, CheckedResult::Value(200u8), ru8),
            CheckedResult::Error(RangeError)
        );
        assert_eq!(
            compare_checked(above, r8, above, r8),
            CheckedResult::Error(RangeError)
        );
        assert_eq!(
            compare_checked(CheckedResult::Value(3i8), r8, CheckedResult::<u8>::Error(PositiveOverflow), ru8),
            CheckedResult::Value(Ordering::Less)
        );
    }

    #[test]
    fn test_checked_poisoning() {
        let r = i16::TYPE.interval();
        let v = CheckedResult::Value(1i16);
        assert_eq!(
            compare_checked(CheckedResult::<i16>::Error(Uninitialized), r, v, r),
            CheckedResult::Error(Uninitialized)
        );
        assert_eq!(
            compare_checked(v, r, CheckedResult::<i16>::Error(DomainError), r),
            CheckedResult::Error(RangeError)
        );
        assert_eq!(
            compare_checked(CheckedResult::<i16>::Error(RangeError), r, CheckedResult::<i16>::Error(Uninitialized), r),
            CheckedResult::Error(Uninitialized)
        );
    }
}
