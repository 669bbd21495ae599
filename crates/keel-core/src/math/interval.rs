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

use crate::{
    checked::CheckedResult,
    error::ArithmeticError,
    num::{
        integer::IntegerType,
        ops::{
            BinaryOperator,
            checked_arithmetic::{checked_add, checked_div, checked_mul, checked_neg, checked_sub},
        },
    },
};

/// A closed interval `[low, high]` of integers, both bounds inclusive.
///
/// Every integer value the engine reasons about fits in `i128`, so one
/// concrete bound type serves all native types and all declared sub-ranges.
///
/// # Invariants
/// `low` must always be less than or equal to `high`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval {
    low: i128,
    high: i128,
}

impl ClosedInterval {
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(-3, 7);
    /// assert_eq!(iv.low(), -3);
    /// assert_eq!(iv.high(), 7);
    /// ```
    #[inline]
    pub const fn new(low: i128, high: i128) -> Self {
        assert!(
            low <= high,
            "Invalid interval: low must be less than or equal to high"
        );
        Self { low, high }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `low > high`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 0).is_some());
    /// assert!(ClosedInterval::try_new(1, 0).is_none());
    /// ```
    #[inline]
    pub const fn try_new(low: i128, high: i128) -> Option<Self> {
        if low <= high {
            Some(Self { low, high })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure `low <= high`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub const fn new_unchecked(low: i128, high: i128) -> Self {
        debug_assert!(
            low <= high,
            "Invalid interval: low must be less than or equal to high"
        );
        Self { low, high }
    }

    /// Creates the single-point interval `[value, value]`.
    #[inline]
    pub const fn point(value: i128) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn low(&self) -> i128 {
        self.low
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn high(&self) -> i128 {
        self.high
    }

    /// Checks if `value` lies within the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 10);
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(10));
    /// assert!(!iv.contains(11));
    /// ```
    #[inline]
    pub const fn contains(&self, value: i128) -> bool {
        self.low <= value && value <= self.high
    }

    /// Checks if `other` is a subset of this interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::math::interval::ClosedInterval;
    ///
    /// let outer = ClosedInterval::new(-128, 127);
    /// assert!(outer.includes(ClosedInterval::new(0, 127)));
    /// assert!(!outer.includes(ClosedInterval::new(0, 128)));
    /// ```
    #[inline]
    pub const fn includes(&self, other: ClosedInterval) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// Checks if the two intervals share at least one value.
    #[inline]
    pub const fn intersects(&self, other: ClosedInterval) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// Returns the intersection of two intervals, or `None` if they are disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert_eq!(a.intersection(ClosedInterval::new(5, 20)), Some(ClosedInterval::new(5, 10)));
    /// assert_eq!(a.intersection(ClosedInterval::new(11, 20)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: ClosedInterval) -> Option<Self> {
        Self::try_new(self.low.max(other.low), self.high.min(other.high))
    }

    /// Returns the smallest interval containing both intervals.
    #[inline]
    pub fn hull(&self, other: ClosedInterval) -> Self {
        Self {
            low: self.low.min(other.low),
            high: self.high.max(other.high),
        }
    }

    /// Interval of `a + b` for `a` in `self` and `b` in `rhs`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::math::interval::ClosedInterval;
    /// # use keel_core::checked::CheckedResult;
    ///
    /// let sum = ClosedInterval::new(0, 255).checked_add(ClosedInterval::new(-128, 127));
    /// assert_eq!(sum, CheckedResult::Value(ClosedInterval::new(-128, 382)));
    /// ```
    #[inline]
    pub fn checked_add(self, rhs: ClosedInterval) -> CheckedResult<Self> {
        hull_of([
            checked_add(self.low, rhs.low),
            checked_add(self.high, rhs.high),
        ])
    }

    /// Interval of `a - b` for `a` in `self` and `b` in `rhs`.
    #[inline]
    pub fn checked_sub(self, rhs: ClosedInterval) -> CheckedResult<Self> {
        hull_of([
            checked_sub(self.low, rhs.high),
            checked_sub(self.high, rhs.low),
        ])
    }

    /// Interval of `a * b`: the hull of the four corner products.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::math::interval::ClosedInterval;
    /// # use keel_core::checked::CheckedResult;
    ///
    /// let product = ClosedInterval::new(-3, 2).checked_mul(ClosedInterval::new(-5, 4));
    /// assert_eq!(product, CheckedResult::Value(ClosedInterval::new(-12, 15)));
    /// ```
    #[inline]
    pub fn checked_mul(self, rhs: ClosedInterval) -> CheckedResult<Self> {
        hull_of([
            checked_mul(self.low, rhs.low),
            checked_mul(self.low, rhs.high),
            checked_mul(self.high, rhs.low),
            checked_mul(self.high, rhs.high),
        ])
    }

    /// Interval of the truncating quotient `a / b`.
    ///
    /// A divisor of exactly `[0, 0]` is a domain error. A divisor that
    /// straddles zero yields `domain`, the full range of the type the
    /// division runs in; otherwise the quotient is the hull of the corners.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::math::interval::ClosedInterval;
    /// # use keel_core::checked::CheckedResult;
    /// # use keel_core::error::ArithmeticError;
    ///
    /// let w = ClosedInterval::new(-128, 127);
    /// let q = ClosedInterval::new(-100, 100).checked_div(ClosedInterval::new(2, 5), w);
    /// assert_eq!(q, CheckedResult::Value(ClosedInterval::new(-50, 50)));
    ///
    /// let zero = ClosedInterval::point(0);
    /// let q = ClosedInterval::new(1, 2).checked_div(zero, w);
    /// assert_eq!(q, CheckedResult::Error(ArithmeticError::DomainError));
    /// ```
    pub fn checked_div(self, rhs: ClosedInterval, domain: ClosedInterval) -> CheckedResult<Self> {
        if rhs.low == 0 && rhs.high == 0 {
            return CheckedResult::Error(ArithmeticError::DomainError);
        }
        if rhs.contains(0) {
            return CheckedResult::Value(domain);
        }
        hull_of([
            checked_div(self.low, rhs.low),
            checked_div(self.low, rhs.high),
            checked_div(self.high, rhs.low),
            checked_div(self.high, rhs.high),
        ])
    }

    /// Interval of the truncating remainder `a % b`.
    ///
    /// The remainder takes the dividend's sign and stays strictly below the
    /// largest divisor magnitude.
    pub fn checked_rem(self, rhs: ClosedInterval) -> CheckedResult<Self> {
        if rhs.low == 0 && rhs.high == 0 {
            return CheckedResult::Error(ArithmeticError::DomainError);
        }
        // Largest |divisor| - 1, at most 2^127 - 1.
        let bound = (rhs.low.unsigned_abs().max(rhs.high.unsigned_abs()) - 1) as i128;
        let low = if self.low >= 0 { 0 } else { self.low.max(-bound) };
        let high = if self.high <= 0 { 0 } else { self.high.min(bound) };
        CheckedResult::Value(Self::new_unchecked(low, high))
    }

    /// Interval of `a << n` for `n` in `amount`, shifting a type of `bits` width.
    ///
    /// Amounts outside `[0, bits - 1]` fail at runtime and are clipped away;
    /// if nothing valid remains the result is a domain error.
    pub fn checked_shl(self, amount: ClosedInterval, bits: u32) -> CheckedResult<Self> {
        let Some((first, last)) = valid_shift_amounts(amount, bits) else {
            return CheckedResult::Error(ArithmeticError::DomainError);
        };
        hull_of([
            shifted_left(self.low, first),
            shifted_left(self.low, last),
            shifted_left(self.high, first),
            shifted_left(self.high, last),
        ])
    }

    /// Interval of the arithmetic right shift `a >> n` for `n` in `amount`.
    pub fn checked_shr(self, amount: ClosedInterval, bits: u32) -> CheckedResult<Self> {
        let Some((first, last)) = valid_shift_amounts(amount, bits) else {
            return CheckedResult::Error(ArithmeticError::DomainError);
        };
        hull_of([
            CheckedResult::Value(self.low >> first),
            CheckedResult::Value(self.low >> last),
            CheckedResult::Value(self.high >> first),
            CheckedResult::Value(self.high >> last),
        ])
    }

    /// Interval of `-a`.
    #[inline]
    pub fn checked_neg(self) -> CheckedResult<Self> {
        hull_of([checked_neg(self.high), checked_neg(self.low)])
    }

    /// Interval of `a op b` when the operation runs in `working`.
    ///
    /// `self` and, except for shifts, `rhs` are taken as already lying in
    /// `working`; the working type supplies the division domain and the shift
    /// width.
    pub fn checked_op(
        self,
        op: BinaryOperator,
        rhs: ClosedInterval,
        working: IntegerType,
    ) -> CheckedResult<Self> {
        match op {
            BinaryOperator::Add => self.checked_add(rhs),
            BinaryOperator::Sub => self.checked_sub(rhs),
            BinaryOperator::Mul => self.checked_mul(rhs),
            BinaryOperator::Div => self.checked_div(rhs, working.interval()),
            BinaryOperator::Rem => self.checked_rem(rhs),
            BinaryOperator::Shl => self.checked_shl(rhs, working.bits()),
            BinaryOperator::Shr => self.checked_shr(rhs, working.bits()),
        }
    }
}

/// Combines candidate extreme values into their hull.
///
/// A candidate that leaves `i128` makes the whole range unrepresentable; when
/// candidates overflow in both directions, negative overflow is reported.
fn hull_of<const N: usize>(candidates: [CheckedResult<i128>; N]) -> CheckedResult<ClosedInterval> {
    let mut low = i128::MAX;
    let mut high = i128::MIN;
    let mut negative = false;
    let mut positive = false;

    for candidate in candidates {
        match candidate {
            CheckedResult::Value(v) => {
                low = low.min(v);
                high = high.max(v);
            }
            CheckedResult::Error(ArithmeticError::NegativeOverflow) => negative = true,
            CheckedResult::Error(ArithmeticError::PositiveOverflow) => positive = true,
            CheckedResult::Error(e) => return CheckedResult::Error(e),
        }
    }

    if negative {
        CheckedResult::Error(ArithmeticError::NegativeOverflow)
    } else if positive {
        CheckedResult::Error(ArithmeticError::PositiveOverflow)
    } else {
        CheckedResult::Value(ClosedInterval::new_unchecked(low, high))
    }
}

/// The first and last shift amount in `amount` that is valid for `bits`.
#[inline]
fn valid_shift_amounts(amount: ClosedInterval, bits: u32) -> Option<(u32, u32)> {
    let valid = amount.intersection(ClosedInterval::new_unchecked(0, bits as i128 - 1))?;
    Some((valid.low as u32, valid.high as u32))
}

/// `value * 2^shift` as an exact `i128`, for `shift < 128`.
#[inline]
fn shifted_left(value: i128, shift: u32) -> CheckedResult<i128> {
    let shifted = value << shift;
    if shifted >> shift == value {
        CheckedResult::Value(shifted)
    } else if value < 0 {
        CheckedResult::Error(ArithmeticError::NegativeOverflow)
    } else {
        CheckedResult::Error(ArithmeticError::PositiveOverflow)
    }
}

impl std::ops::BitAnd for ClosedInterval {
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl std::ops::BitOr for ClosedInterval {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.hull(rhs)
    }
}

impl std::fmt::Debug for ClosedInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("low", &self.low)
            .field("high", &self.high)
            .finish()
    }
}

impl std::fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl std::ops::RangeBounds<i128> for ClosedInterval {
    fn start_bound(&self) -> std::ops::Bound<&i128> {
        std::ops::Bound::Included(&self.low)
    }

    fn end_bound(&self) -> std::ops::Bound<&i128> {
        std::ops::Bound::Included(&self.high)
    }
}

impl From<std::ops::RangeInclusive<i128>> for ClosedInterval {
    #[inline]
    fn from(range: std::ops::RangeInclusive<i128>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::{Bound, RangeBounds};

    fn iv(low: i128, high: i128) -> ClosedInterval {
        ClosedInterval::new(low, high)
    }

    fn value(low: i128, high: i128) -> CheckedResult<ClosedInterval> {
        CheckedResult::Value(iv(low, high))
    }

    #[test]
    fn test_construction_valid() {
        let i = iv(-5, 5);
        assert_eq!(i.low(), -5);
        assert_eq!(i.high(), 5);
        assert_eq!(ClosedInterval::point(3), iv(3, 3));
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(5, 10).is_some());
        assert!(ClosedInterval::try_new(5, 5).is_some());
        // Invalid: low > high
        assert!(ClosedInterval::try_new(10, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        ClosedInterval::new(10, 5);
    }

    #[test]
    fn test_set_queries() {
        let a = iv(0, 10);
        assert!(a.contains(0) && a.contains(10) && !a.contains(-1));
        assert!(a.includes(iv(2, 8)));
        assert!(a.includes(a));
        assert!(!a.includes(iv(-1, 8)));
        // Touching at a single point counts, both ends are closed.
        assert!(a.intersects(iv(10, 20)));
        assert!(!a.intersects(iv(11, 20)));
        assert_eq!(a & iv(5, 15), Some(iv(5, 10)));
        assert_eq!(a & iv(11, 15), None);
        assert_eq!(a | iv(20, 30), iv(0, 30));
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(iv(-128, 127).checked_add(iv(-128, 127)), value(-256, 254));
        assert_eq!(iv(0, 255).checked_sub(iv(0, 255)), value(-255, 255));
        assert_eq!(iv(5, 10).checked_sub(iv(1, 2)), value(3, 9));
    }

    #[test]
    fn test_mul_corners() {
        assert_eq!(iv(-128, 127).checked_mul(iv(-128, 127)), value(-16256, 16384));
        assert_eq!(iv(0, 255).checked_mul(iv(0, 255)), value(0, 65025));
        assert_eq!(iv(-2, -1).checked_mul(iv(-3, -3)), value(3, 6));
    }

    #[test]
    fn test_bound_overflow_is_reported() {
        let full = iv(i128::MIN, i128::MAX);
        assert_eq!(
            iv(0, i128::MAX).checked_add(iv(0, 1)),
            CheckedResult::Error(ArithmeticError::PositiveOverflow)
        );
        assert_eq!(
            iv(i128::MIN, 0).checked_sub(iv(0, 1)),
            CheckedResult::Error(ArithmeticError::NegativeOverflow)
        );
        // Corners overflow both ways; negative wins.
        assert_eq!(
            full.checked_mul(iv(-2, 2)),
            CheckedResult::Error(ArithmeticError::NegativeOverflow)
        );
        assert_eq!(
            iv(i128::MIN, 0).checked_neg(),
            CheckedResult::Error(ArithmeticError::PositiveOverflow)
        );
    }

    #[test]
    fn test_div() {
        let w = iv(-128, 127);
        assert_eq!(iv(-128, 127).checked_div(iv(1, 127), w), value(-128, 127));
        assert_eq!(iv(-128, 127).checked_div(iv(-1, -1), w), value(-127, 128));
        assert_eq!(iv(7, 9).checked_div(iv(-3, -2), w), value(-4, -2));
        // Straddling divisor falls back to the domain.
        assert_eq!(iv(1, 2).checked_div(iv(-1, 1), w), CheckedResult::Value(w));
        assert_eq!(
            iv(1, 2).checked_div(iv(0, 0), w),
            CheckedResult::Error(ArithmeticError::DomainError)
        );
    }

    #[test]
    fn test_rem() {
        assert_eq!(iv(5, 10).checked_rem(iv(3, 3)), value(0, 2));
        assert_eq!(iv(-7, -7).checked_rem(iv(2, 2)), value(-1, 0));
        assert_eq!(iv(-128, 127).checked_rem(iv(-128, 127)), value(-127, 127));
        assert_eq!(iv(-5, 5).checked_rem(iv(1, 1)), value(0, 0));
        assert_eq!(iv(i128::MIN, 0).checked_rem(iv(i128::MIN, -1)), value(-i128::MAX, 0));
        assert_eq!(
            iv(1, 2).checked_rem(iv(0, 0)),
            CheckedResult::Error(ArithmeticError::DomainError)
        );
    }

    #[test]
    fn test_shifts() {
        assert_eq!(iv(1, 3).checked_shl(iv(0, 2), 8), value(1, 12));
        assert_eq!(iv(-3, 1).checked_shl(iv(1, 2), 8), value(-12, 4));
        // Negative and oversized amounts are clipped away.
        assert_eq!(iv(1, 1).checked_shl(iv(-5, 100), 8), value(1, 128));
        assert_eq!(
            iv(1, 1).checked_shl(iv(8, 100), 8),
            CheckedResult::Error(ArithmeticError::DomainError)
        );
        assert_eq!(iv(-128, 127).checked_shr(iv(0, 7), 8), value(-128, 127));
        assert_eq!(iv(64, 100).checked_shr(iv(2, 3), 8), value(8, 25));
        assert_eq!(iv(-1, -1).checked_shl(iv(127, 127), 128), value(i128::MIN, i128::MIN));
        assert_eq!(
            iv(1, 1).checked_shl(iv(127, 127), 128),
            CheckedResult::Error(ArithmeticError::PositiveOverflow)
        );
    }

    #[test]
    fn test_neg() {
        assert_eq!(iv(-128, 127).checked_neg(), value(-127, 128));
        assert_eq!(iv(0, 255).checked_neg(), value(-255, 0));
    }

    #[test]
    fn test_checked_op_uses_working_type() {
        let w = IntegerType::I16;
        assert_eq!(
            iv(1, 1).checked_op(BinaryOperator::Shl, iv(0, 20), w),
            value(1, 1 << 15)
        );
        assert_eq!(
            iv(1, 2).checked_op(BinaryOperator::Div, iv(-1, 1), w),
            value(-32768, 32767)
        );
    }

    #[test]
    fn test_formatting_and_conversions() {
        let i = iv(-1, 2);
        assert_eq!(format!("{}", i), "[-1, 2]");
        assert_eq!(
            format!("{:?}", i),
            "ClosedInterval { low: -1, high: 2 }"
        );
        assert_eq!(ClosedInterval::from(-1..=2), i);
        assert_eq!(i.start_bound(), Bound::Included(&-1));
        assert_eq!(i.end_bound(), Bound::Included(&2));
    }
}
