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

//! # Promotion Policies
//!
//! A promotion policy names the working type an operation runs in, as a pure
//! function of the operands' static types and ranges. `Promotion` pairs that
//! working type with the range analysis that decides whether the runtime check
//! can be skipped.
//!
//! ## Submodules
//!
//! - `native`: `NativePromotion`, the C integer promotions and usual
//!   arithmetic conversions for a platform described by its five standard
//!   integer widths, with presets such as `Lp64`.
//! - `automatic`: `AutomaticPromotion`, which picks the narrowest type that
//!   holds every possible result so the common operations cannot overflow.

pub mod automatic;
pub mod native;

pub use automatic::AutomaticPromotion;
pub use native::{Ilp32, Llp64, Lp64, Native, NativePromotion, Pic16};

use crate::{
    checked::CheckedResult,
    error::ArithmeticError,
    math::interval::ClosedInterval,
    num::{
        integer::IntegerType,
        operand::Bounds,
        ops::{BinaryOperator, UnaryOperator},
    },
};

/// Chooses the working type of an operation from static type information.
///
/// Implementations must be pure: the same query always yields the same type.
pub trait PromotionPolicy: 'static {
    /// The working type of `lhs op rhs`.
    fn binary(op: BinaryOperator, lhs: Bounds, rhs: Bounds) -> IntegerType;

    /// The working type of `op operand`.
    fn unary(op: UnaryOperator, operand: Bounds) -> IntegerType;
}

/// The working type of an operation and the range of its possible results.
///
/// # Examples
///
/// ```rust
/// # use keel_core::promotion::{AutomaticPromotion, Promotion};
/// # use keel_core::num::{integer::IntegerType, operand::{Bounds, Operand}, ops::BinaryOperator};
/// # use keel_core::math::interval::ClosedInterval;
/// # use keel_core::checked::CheckedResult;
/// let p = Promotion::binary::<AutomaticPromotion>(
///     BinaryOperator::Add,
///     <u8 as Operand>::bounds(),
///     <u8 as Operand>::bounds(),
/// );
/// assert_eq!(p.working(), IntegerType::U16);
/// assert_eq!(p.range(), CheckedResult::Value(ClosedInterval::new(0, 510)));
/// assert!(p.elides(ClosedInterval::new(0, 510)));
/// assert!(!p.elides(ClosedInterval::new(0, 255)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Promotion {
    working: IntegerType,
    range: CheckedResult<ClosedInterval>,
    exact: bool,
}

impl Promotion {
    /// Promotes `lhs op rhs` under the policy `P`.
    #[inline]
    pub fn binary<P>(op: BinaryOperator, lhs: Bounds, rhs: Bounds) -> Self
    where
        P: PromotionPolicy,
    {
        Self::binary_in(op, lhs, rhs, P::binary(op, lhs, rhs))
    }

    /// Analyzes `lhs op rhs` running in `working`.
    ///
    /// Operands are converted into `working` before the operation, except the
    /// amount of a shift. The result range covers the successful outcomes
    /// only; it is a range error if no operand value survives the conversion.
    pub fn binary_in(
        op: BinaryOperator,
        lhs: Bounds,
        rhs: Bounds,
        working: IntegerType,
    ) -> Self {
        let domain = working.interval();
        let value = lhs.range().intersection(domain);
        let other = if op.is_shift() {
            Some(rhs.range())
        } else {
            rhs.range().intersection(domain)
        };

        let range = match (value, other) {
            (Some(a), Some(b)) => a.checked_op(op, b, working),
            _ => CheckedResult::Error(ArithmeticError::RangeError),
        };

        let hazard = if op.is_division() {
            rhs.range().contains(0)
                // MIN % -1 traps natively although its result is representable.
                || (op == BinaryOperator::Rem
                    && working.is_signed()
                    && lhs.range().contains(working.min())
                    && rhs.range().contains(-1))
        } else if op.is_shift() {
            let amounts = ClosedInterval::new_unchecked(0, working.bits() as i128 - 1);
            !amounts.includes(rhs.range())
        } else {
            false
        };
        let operands_fit =
            domain.includes(lhs.range()) && (op.is_shift() || domain.includes(rhs.range()));

        Self {
            working,
            range,
            exact: operands_fit && !hazard && Self::fits(range, domain),
        }
    }

    /// Promotes `op operand` under the policy `P`.
    #[inline]
    pub fn unary<P>(op: UnaryOperator, operand: Bounds) -> Self
    where
        P: PromotionPolicy,
    {
        Self::unary_in(op, operand, P::unary(op, operand))
    }

    /// Analyzes `op operand` running in `working`.
    pub fn unary_in(op: UnaryOperator, operand: Bounds, working: IntegerType) -> Self {
        let domain = working.interval();
        let range = match (op, operand.range().intersection(domain)) {
            (UnaryOperator::Neg, Some(a)) => a.checked_neg(),
            (_, None) => CheckedResult::Error(ArithmeticError::RangeError),
        };
        Self {
            working,
            range,
            exact: domain.includes(operand.range()) && Self::fits(range, domain),
        }
    }

    #[inline]
    fn fits(range: CheckedResult<ClosedInterval>, domain: ClosedInterval) -> bool {
        matches!(range, CheckedResult::Value(r) if domain.includes(r))
    }

    /// The type the operation is performed in.
    #[inline]
    pub const fn working(&self) -> IntegerType {
        self.working
    }

    /// The range of every successful result.
    ///
    /// An error means the range itself cannot be represented, or no
    /// operation can succeed at all.
    #[inline]
    pub const fn range(&self) -> CheckedResult<ClosedInterval> {
        self.range
    }

    /// Returns `true` if the plain native operation is exact for every
    /// operand value and its result always fits in `destination`.
    #[inline]
    pub fn elides(&self, destination: ClosedInterval) -> bool {
        self.exact && Self::fits(self.range, destination)
    }

    /// Returns `true` if no successful result can ever lie in `destination`.
    #[inline]
    pub fn is_disjoint_from(&self, destination: ClosedInterval) -> bool {
        matches!(self.range, CheckedResult::Value(r) if !r.intersects(destination))
    }
}
