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

//! Static descriptions of the operands the engine works on.
//!
//! An `Operand` pairs a native representation with the range its values are
//! known to lie in. Every native integer type is an operand over its full
//! range; `Ranged<T, LOW, HIGH>` declares a narrower one.

use crate::{
    checked::CheckedResult,
    error::ArithmeticError,
    math::interval::ClosedInterval,
    num::integer::{Integer, IntegerType},
};
use std::marker::PhantomData;

/// A type whose values are represented by `Repr` and lie within `RANGE`.
pub trait Operand: 'static {
    /// The native type holding the value.
    type Repr: Integer;

    /// The values this operand can take. Always a subset of `Repr`'s range.
    const RANGE: ClosedInterval;

    /// The static description promotion policies receive.
    #[inline]
    fn bounds() -> Bounds {
        Bounds::new(Self::Repr::TYPE, Self::RANGE)
    }

    /// Classifies `value` against `RANGE`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::num::operand::{Operand, Ranged};
    /// # use keel_core::checked::CheckedResult;
    /// # use keel_core::error::ArithmeticError;
    /// type Percent = Ranged<u8, 0, 100>;
    /// assert_eq!(Percent::admit(42), CheckedResult::Value(42));
    /// assert_eq!(Percent::admit(101), CheckedResult::Error(ArithmeticError::PositiveOverflow));
    /// ```
    #[inline]
    fn admit(value: Self::Repr) -> CheckedResult<Self::Repr> {
        let v = value.widen();
        if v < Self::RANGE.low() {
            CheckedResult::Error(ArithmeticError::NegativeOverflow)
        } else if v > Self::RANGE.high() {
            CheckedResult::Error(ArithmeticError::PositiveOverflow)
        } else {
            CheckedResult::Value(value)
        }
    }
}

impl<T> Operand for T
where
    T: Integer,
{
    type Repr = T;
    const RANGE: ClosedInterval = T::TYPE.interval();
}

/// An operand represented by `T` whose values are declared to lie in `[LOW, HIGH]`.
///
/// The declaration is checked at compile time: `LOW <= HIGH` and both bounds
/// must be representable in `T`.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::operand::{Operand, Ranged};
/// # use keel_core::math::interval::ClosedInterval;
/// type Steps = Ranged<i32, 0, 1000>;
/// assert_eq!(Steps::RANGE, ClosedInterval::new(0, 1000));
/// ```
pub struct Ranged<T, const LOW: i128, const HIGH: i128>(PhantomData<fn() -> T>);

impl<T, const LOW: i128, const HIGH: i128> Ranged<T, LOW, HIGH>
where
    T: Integer,
{
    const DECLARED: ClosedInterval = {
        assert!(LOW <= HIGH, "Invalid range: LOW must be less than or equal to HIGH");
        assert!(
            T::TYPE.min() <= LOW && HIGH <= T::TYPE.max(),
            "Invalid range: bounds must be representable in the underlying type"
        );
        ClosedInterval::new_unchecked(LOW, HIGH)
    };
}

impl<T, const LOW: i128, const HIGH: i128> Operand for Ranged<T, LOW, HIGH>
where
    T: Integer,
{
    type Repr = T;
    const RANGE: ClosedInterval = Self::DECLARED;
}

/// The static type information a promotion policy decides on: the native
/// type of an operand and the range of its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    ty: IntegerType,
    range: ClosedInterval,
}

impl Bounds {
    /// Creates new bounds.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within the range of `ty`.
    #[inline]
    pub fn new(ty: IntegerType, range: ClosedInterval) -> Self {
        assert!(
            ty.interval().includes(range),
            "Invalid bounds: range {} exceeds type {}",
            range,
            ty
        );
        Self { ty, range }
    }

    /// Bounds spanning the full range of `ty`.
    #[inline]
    pub const fn of_type(ty: IntegerType) -> Self {
        Self {
            ty,
            range: ty.interval(),
        }
    }

    /// Returns the native type.
    #[inline]
    pub const fn ty(&self) -> IntegerType {
        self.ty
    }

    /// Returns the range of values.
    #[inline]
    pub const fn range(&self) -> ClosedInterval {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_operands_span_their_type() {
        assert_eq!(<i8 as Operand>::RANGE, ClosedInterval::new(-128, 127));
        assert_eq!(<u64 as Operand>::RANGE, ClosedInterval::new(0, u64::MAX as i128));
        assert_eq!(<u16 as Operand>::bounds(), Bounds::of_type(IntegerType::U16));
    }

    #[test]
    fn test_ranged_operand() {
        type Small = Ranged<i16, -10, 10>;
        assert_eq!(Small::RANGE, ClosedInterval::new(-10, 10));
        assert_eq!(Small::bounds().ty(), IntegerType::I16);
        assert_eq!(Small::admit(-10), CheckedResult::Value(-10));
        assert_eq!(Small::admit(-11), CheckedResult::Error(ArithmeticError::NegativeOverflow));
        assert_eq!(Small::admit(11), CheckedResult::Error(ArithmeticError::PositiveOverflow));
    }

    #[test]
    #[should_panic(expected = "Invalid bounds")]
    fn test_bounds_must_fit_type() {
        Bounds::new(IntegerType::U8, ClosedInterval::new(-1, 10));
    }
}
