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

//! `Safe<T, P, E>`, an integer value that carries its own validity.
//!
//! Every operator routes through `keel_core::dispatch`, so the arithmetic is
//! exact or classified, and checks the promotion analysis can prove redundant
//! are skipped. Failures are handed to the exception policy `E` and the
//! classification keeps flowing through later operations.

use crate::exception::{ExceptionPolicy, PanicOnError};
use keel_core::{
    checked::CheckedResult,
    dispatch::{self, Binary, Unary},
    error::ArithmeticError,
    num::{
        operand::Operand,
        ops::{BinaryOperator, UnaryOperator},
    },
    promotion::{Native, PromotionPolicy},
};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    marker::PhantomData,
    ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
        ShrAssign, Sub, SubAssign,
    },
};

/// A checked integer of operand type `T`, promoted under `P`, with failures
/// reported to `E`.
///
/// The result of a binary operator takes the type of its left operand.
///
/// # Examples
///
/// ```rust
/// # use keel::{Safe, IgnoreErrors, Native, ArithmeticError};
/// type I8 = Safe<i8, Native, IgnoreErrors>;
///
/// let a = I8::new(100);
/// assert_eq!((a + I8::new(27)).get(), Ok(127));
/// assert_eq!((a + a).get(), Err(ArithmeticError::PositiveOverflow));
/// ```
pub struct Safe<T, P = Native, E = PanicOnError>
where
    T: Operand,
{
    value: CheckedResult<T::Repr>,
    _marker: PhantomData<fn() -> (T, P, E)>,
}

impl<T, P, E> Safe<T, P, E>
where
    T: Operand,
    P: PromotionPolicy,
    E: ExceptionPolicy,
{
    /// Creates a value, checking it against the declared range of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel::{Safe, IgnoreErrors, Native, Ranged, ArithmeticError};
    /// type Percent = Safe<Ranged<u8, 0, 100>, Native, IgnoreErrors>;
    /// assert_eq!(Percent::new(100).get(), Ok(100));
    /// assert_eq!(Percent::new(101).get(), Err(ArithmeticError::PositiveOverflow));
    /// ```
    #[inline]
    pub fn new(value: T::Repr) -> Self {
        Self::report(T::admit(value), "construction")
    }

    /// A value that was never assigned. Using it poisons every result.
    #[inline]
    pub fn uninitialized() -> Self {
        Self::from_result(CheckedResult::Error(ArithmeticError::Uninitialized))
    }

    /// The underlying checked result.
    #[inline]
    pub fn result(&self) -> CheckedResult<T::Repr> {
        self.value
    }

    /// The value, or the classification of why there is none.
    #[inline]
    pub fn get(&self) -> Result<T::Repr, ArithmeticError> {
        self.value.into_result()
    }

    /// Returns `true` if this holds a value.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.value.is_value()
    }

    /// Converts into another operand type, checking the destination range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel::{Safe, IgnoreErrors, Native, ArithmeticError};
    /// let wide = Safe::<i32, Native, IgnoreErrors>::new(300);
    /// assert_eq!(wide.convert::<u8>().get(), Err(ArithmeticError::PositiveOverflow));
    /// assert_eq!(wide.convert::<i16>().get(), Ok(300));
    /// ```
    #[inline]
    pub fn convert<U>(self) -> Safe<U, P, E>
    where
        U: Operand,
    {
        Safe::<U, P, E>::report(dispatch::convert::<T, U>(self.value), "conversion")
    }

    #[inline]
    fn from_result(value: CheckedResult<T::Repr>) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn report(value: CheckedResult<T::Repr>, operation: &'static str) -> Self {
        if let CheckedResult::Error(e) = value {
            E::on_error(e, operation);
        }
        Self::from_result(value)
    }

    #[inline]
    fn binary<U>(self, op: BinaryOperator, rhs: Safe<U, P, E>) -> Self
    where
        U: Operand,
    {
        Self::report(Binary::<P, T, U>::apply::<T>(op, self.value, rhs.value), op.name())
    }

    #[inline]
    fn compare<U>(&self, rhs: &Safe<U, P, E>) -> Option<Ordering>
    where
        U: Operand,
    {
        match Binary::<P, T, U>::compare(self.value, rhs.value) {
            CheckedResult::Value(ordering) => Some(ordering),
            CheckedResult::Error(e) => {
                E::on_error(e, "comparison");
                None
            }
        }
    }
}

impl<T, P, E> Clone for Safe<T, P, E>
where
    T: Operand,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, P, E> Copy for Safe<T, P, E> where T: Operand {}

impl<T, P, E> Default for Safe<T, P, E>
where
    T: Operand,
    P: PromotionPolicy,
    E: ExceptionPolicy,
{
    #[inline]
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl<T, P, E> Debug for Safe<T, P, E>
where
    T: Operand,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Safe").field("value", &self.value).finish()
    }
}

impl<T, P, E> Display for Safe<T, P, E>
where
    T: Operand,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

macro_rules! impl_binary_operator {
    ($($trait:ident :: $method:ident, $assign_trait:ident :: $assign_method:ident => $op:ident;)*) => {
        $(
            impl<T, U, P, E> $trait<Safe<U, P, E>> for Safe<T, P, E>
            where
                T: Operand,
                U: Operand,
                P: PromotionPolicy,
                E: ExceptionPolicy,
            {
                type Output = Safe<T, P, E>;

                #[inline]
                fn $method(self, rhs: Safe<U, P, E>) -> Self::Output {
                    self.binary(BinaryOperator::$op, rhs)
                }
            }

            impl<T, U, P, E> $assign_trait<Safe<U, P, E>> for Safe<T, P, E>
            where
                T: Operand,
                U: Operand,
                P: PromotionPolicy,
                E: ExceptionPolicy,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Safe<U, P, E>) {
                    *self = self.binary(BinaryOperator::$op, rhs);
                }
            }
        )*
    };
}

impl_binary_operator! {
    Add::add, AddAssign::add_assign => Add;
    Sub::sub, SubAssign::sub_assign => Sub;
    Mul::mul, MulAssign::mul_assign => Mul;
    Div::div, DivAssign::div_assign => Div;
    Rem::rem, RemAssign::rem_assign => Rem;
    Shl::shl, ShlAssign::shl_assign => Shl;
    Shr::shr, ShrAssign::shr_assign => Shr;
}

impl<T, P, E> Neg for Safe<T, P, E>
where
    T: Operand,
    P: PromotionPolicy,
    E: ExceptionPolicy,
{
    type Output = Safe<T, P, E>;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::report(Unary::<P, T>::neg::<T>(self.value), UnaryOperator::Neg.name())
    }
}

/// Exact equality. Comparing an invalid value reports the failure and yields
/// `false`, so an invalid value is unequal even to itself.
impl<T, U, P, E> PartialEq<Safe<U, P, E>> for Safe<T, P, E>
where
    T: Operand,
    U: Operand,
    P: PromotionPolicy,
    E: ExceptionPolicy,
{
    #[inline]
    fn eq(&self, other: &Safe<U, P, E>) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl<T, U, P, E> PartialOrd<Safe<U, P, E>> for Safe<T, P, E>
where
    T: Operand,
    U: Operand,
    P: PromotionPolicy,
    E: ExceptionPolicy,
{
    #[inline]
    fn partial_cmp(&self, other: &Safe<U, P, E>) -> Option<Ordering> {
        self.compare(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::IgnoreErrors;
    use keel_core::{
        num::operand::Ranged,
        promotion::{AutomaticPromotion, Pic16},
    };
    use std::cell::RefCell;
    use ArithmeticError::*;

    thread_local! {
        static REPORTED: RefCell<Vec<(ArithmeticError, &'static str)>> = const { RefCell::new(Vec::new()) };
    }

    /// Records every report of the current thread.
    struct Record;

    impl ExceptionPolicy for Record {
        fn on_error(error: ArithmeticError, operation: &'static str) {
            REPORTED.with(|r| r.borrow_mut().push((error, operation)));
        }
    }

    fn take_reports() -> Vec<(ArithmeticError, &'static str)> {
        REPORTED.with(|r| std::mem::take(&mut *r.borrow_mut()))
    }

    type I8 = Safe<i8, Native, IgnoreErrors>;
    type I32 = Safe<i32, Native, IgnoreErrors>;
    type U32 = Safe<u32, Native, IgnoreErrors>;

    #[test]
    fn test_operators_in_range() {
        let a = I32::new(1000);
        let b = I32::new(7);
        assert_eq!((a + b).get(), Ok(1007));
        assert_eq!((a - b).get(), Ok(993));
        assert_eq!((a * b).get(), Ok(7000));
        assert_eq!((a / b).get(), Ok(142));
        assert_eq!((a % b).get(), Ok(6));
        assert_eq!((b << I32::new(3)).get(), Ok(56));
        assert_eq!((a >> I32::new(2)).get(), Ok(250));
        assert_eq!((-a).get(), Ok(-1000));
    }

    #[test]
    fn test_result_takes_left_operand_type() {
        let small = I8::new(100);
        let wide = I32::new(27);
        assert_eq!((small + wide).get(), Ok(127i8));
        assert_eq!((small + I32::new(28)).get(), Err(PositiveOverflow));
        assert_eq!((wide + small).get(), Ok(127i32));
    }

    #[test]
    fn test_boundary_failures() {
        assert_eq!((I8::new(127) * I8::new(127)).get(), Err(PositiveOverflow));
        assert_eq!((I8::new(-128) * I8::new(-1)).get(), Err(PositiveOverflow));
        assert_eq!((I8::new(-128) - I8::new(1)).get(), Err(NegativeOverflow));
        assert_eq!((-I8::new(-128)).get(), Err(PositiveOverflow));
        assert_eq!((I32::new(10) / I32::new(0)).get(), Err(DomainError));
        assert_eq!((I32::new(-5) % I32::new(0)).get(), Err(DomainError));
        assert_eq!((I32::new(1) << I32::new(32)).get(), Err(DomainError));
    }

    #[test]
    fn test_assign_operators() {
        let mut x = I32::new(10);
        x += I32::new(5);
        x -= I32::new(3);
        x *= I32::new(4);
        x /= I32::new(6);
        x %= I32::new(5);
        x <<= I32::new(4);
        x >>= I32::new(2);
        assert_eq!(x.get(), Ok(12));
    }

    #[test]
    fn test_errors_propagate() {
        let mut x = I8::new(120);
        x += I8::new(120);
        assert_eq!(x.get(), Err(PositiveOverflow));
        // Above i8 says nothing about where the value sits in the i32 working type.
        x -= I8::new(100);
        assert_eq!(x.get(), Err(RangeError));

        let mut y = I32::new(i32::MAX);
        y += I32::new(1);
        y -= I32::new(100);
        assert_eq!(y.get(), Err(PositiveOverflow));

        let u = I8::uninitialized();
        assert_eq!((u + I8::new(1)).get(), Err(Uninitialized));
        assert_eq!(I8::default().get(), Err(Uninitialized));
        assert!(!u.is_valid());

        let domain = I32::new(1) / I32::new(0);
        assert_eq!((domain + I32::new(1)).get(), Err(RangeError));
    }

    #[test]
    fn test_declared_range_construction_and_conversion() {
        type Percent = Safe<Ranged<u8, 0, 100>, Native, IgnoreErrors>;
        assert_eq!(Percent::new(55).get(), Ok(55));
        assert_eq!(Percent::new(200).get(), Err(PositiveOverflow));

        assert_eq!(I32::new(300).convert::<Ranged<u8, 0, 100>>().get(), Err(PositiveOverflow));
        assert_eq!(I32::new(-1).convert::<u8>().get(), Err(NegativeOverflow));
        assert_eq!(I32::new(42).convert::<Ranged<u8, 0, 100>>().get(), Ok(42));
    }

    #[test]
    fn test_comparisons_are_exact_across_signedness() {
        let minus_one = I32::new(-1);
        let one = U32::new(1);
        assert!(minus_one < one);
        assert!(one > minus_one);
        assert!(minus_one != one);
        assert!(I32::new(7) == U32::new(7));
        assert!(I32::new(7) <= U32::new(7));
        assert_eq!(I32::uninitialized().partial_cmp(&one), None);
        assert!(I32::uninitialized() != I32::uninitialized());
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(I32::new(-12).to_string(), "-12");
        assert_eq!((I8::new(100) + I8::new(100)).to_string(), "positive overflow");
        assert_eq!(format!("{:?}", I8::new(3)), "Safe { value: Value(3) }");
    }

    #[test]
    fn test_every_failure_is_reported_with_operation_name() {
        type R = Safe<i8, Native, Record>;
        take_reports();

        let _ = R::new(100) + R::new(100);
        let _ = R::new(1) / R::new(0);
        let _ = -R::new(-128);
        let _ = R::uninitialized() < R::new(0);
        let _ = Safe::<i32, Native, Record>::new(1000).convert::<i8>();
        let _ = R::new(1) + R::new(1);

        assert_eq!(
            take_reports(),
            vec![
                (PositiveOverflow, "addition"),
                (DomainError, "division"),
                (PositiveOverflow, "negation"),
                (Uninitialized, "comparison"),
                (PositiveOverflow, "conversion"),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "checked multiplication failed: positive overflow")]
    fn test_default_policy_panics() {
        let a: Safe<i16> = Safe::new(300);
        let _ = a * a;
    }

    #[test]
    fn test_pic16_promotion_keeps_16_bit_int() {
        type P16 = Safe<i16, Pic16, IgnoreErrors>;
        // int is 16 bits, so 300 * 300 overflows before any widening.
        assert_eq!((P16::new(300) * P16::new(300)).get(), Err(PositiveOverflow));
        type L16 = Safe<i16, Native, IgnoreErrors>;
        // On a 32-bit int the product fits and only the narrowing back fails.
        assert_eq!((L16::new(300) * L16::new(300)).get(), Err(PositiveOverflow));
        assert_eq!(
            (Safe::<i32, Native, IgnoreErrors>::new(0) + L16::new(300) * L16::new(100)).get(),
            Ok(30000)
        );
    }

    #[test]
    fn test_automatic_promotion_with_declared_ranges() {
        type Small = Safe<Ranged<i16, -1000, 1000>, AutomaticPromotion, IgnoreErrors>;
        type Wide = Safe<i32, AutomaticPromotion, IgnoreErrors>;
        let product = Wide::new(0) + Small::new(-1000);
        assert_eq!(product.get(), Ok(-1000));
        assert_eq!((Small::new(999) + Small::new(1)).get(), Ok(1000));
        assert_eq!((Small::new(1000) + Small::new(1)).get(), Err(PositiveOverflow));
    }
}
