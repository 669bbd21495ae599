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

//! C integer promotion rules.
//!
//! A platform is described by the bit widths of `char`, `short`, `int`,
//! `long` and `long long`. Operand types map onto those by width, so the rules
//! reduce to two steps:
//!
//! 1. Integer promotion: a type narrower than `int` becomes signed `int`.
//! 2. Usual arithmetic conversions between the promoted operands: equal
//!    signedness takes the wider type; an unsigned type at least as wide as
//!    the signed one wins; a strictly wider signed type wins.
//!
//! C's last conversion rule (the unsigned counterpart of the signed type) only
//! applies when a signed type of higher rank has the same width as the
//! unsigned one, and then yields the same unsigned width as the second rule.

use super::PromotionPolicy;
use crate::num::{
    integer::IntegerType,
    operand::Bounds,
    ops::{BinaryOperator, UnaryOperator},
};

/// Emulates the integer promotions of a C implementation with the given
/// widths for `char`, `short`, `int`, `long` and `long long`.
///
/// The widths are validated at compile time.
///
/// # Examples
///
/// ```rust
/// # use keel_core::promotion::{Lp64, Pic16, PromotionPolicy};
/// # use keel_core::num::{integer::IntegerType, operand::Bounds, ops::BinaryOperator};
/// let u8_ = Bounds::of_type(IntegerType::U8);
/// let u32_ = Bounds::of_type(IntegerType::U32);
/// let i32_ = Bounds::of_type(IntegerType::I32);
/// let i64_ = Bounds::of_type(IntegerType::I64);
///
/// assert_eq!(Lp64::binary(BinaryOperator::Add, u8_, u8_), IntegerType::I32);
/// assert_eq!(Lp64::binary(BinaryOperator::Add, i32_, u32_), IntegerType::U32);
/// assert_eq!(Lp64::binary(BinaryOperator::Add, i64_, u32_), IntegerType::I64);
/// assert_eq!(Pic16::binary(BinaryOperator::Add, u8_, u8_), IntegerType::I16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NativePromotion<
    const CHAR: u32,
    const SHORT: u32,
    const INT: u32,
    const LONG: u32,
    const LONG_LONG: u32,
>;

/// 8-bit microcontroller toolchains with a 16-bit `int` and 32-bit `long long`.
pub type Pic16 = NativePromotion<8, 16, 16, 16, 32>;
/// 32-bit Unix-like platforms.
pub type Ilp32 = NativePromotion<8, 16, 32, 32, 64>;
/// 64-bit Windows.
pub type Llp64 = NativePromotion<8, 16, 32, 32, 64>;
/// 64-bit Unix-like platforms.
pub type Lp64 = NativePromotion<8, 16, 32, 64, 64>;
/// The default platform.
pub type Native = Lp64;

const fn is_standard_width(bits: u32) -> bool {
    matches!(bits, 8 | 16 | 32 | 64)
}

impl<const CHAR: u32, const SHORT: u32, const INT: u32, const LONG: u32, const LONG_LONG: u32>
    NativePromotion<CHAR, SHORT, INT, LONG, LONG_LONG>
{
    const PLATFORM: () = {
        assert!(CHAR == 8, "Invalid platform: char must be 8 bits wide");
        assert!(
            is_standard_width(SHORT)
                && is_standard_width(INT)
                && is_standard_width(LONG)
                && is_standard_width(LONG_LONG),
            "Invalid platform: widths must be 8, 16, 32 or 64 bits"
        );
        assert!(
            CHAR <= SHORT && SHORT <= INT && INT <= LONG && LONG <= LONG_LONG,
            "Invalid platform: widths must not decrease with rank"
        );
        assert!(SHORT >= 16 && INT >= 16, "Invalid platform: short and int need at least 16 bits");
    };

    /// The platform's widths, from `char` to `long long`.
    #[inline]
    pub const fn widths() -> [u32; 5] {
        let () = Self::PLATFORM;
        [CHAR, SHORT, INT, LONG, LONG_LONG]
    }

    /// The platform's `int`.
    #[inline]
    pub const fn int() -> IntegerType {
        let () = Self::PLATFORM;
        IntegerType::new(INT, true)
    }

    /// Integer promotion of a single operand type.
    #[inline]
    pub const fn promote(ty: IntegerType) -> IntegerType {
        if ty.bits() < INT { Self::int() } else { ty }
    }

    /// The usual arithmetic conversions of two operand types.
    pub const fn common_type(lhs: IntegerType, rhs: IntegerType) -> IntegerType {
        let lhs = Self::promote(lhs);
        let rhs = Self::promote(rhs);

        if lhs.is_signed() == rhs.is_signed() {
            return if lhs.bits() >= rhs.bits() { lhs } else { rhs };
        }

        let (signed, unsigned) = if lhs.is_signed() { (lhs, rhs) } else { (rhs, lhs) };
        if unsigned.bits() >= signed.bits() {
            unsigned
        } else {
            signed
        }
    }
}

impl<const CHAR: u32, const SHORT: u32, const INT: u32, const LONG: u32, const LONG_LONG: u32>
    PromotionPolicy for NativePromotion<CHAR, SHORT, INT, LONG, LONG_LONG>
{
    #[inline]
    fn binary(op: BinaryOperator, lhs: Bounds, rhs: Bounds) -> IntegerType {
        if op.is_shift() {
            Self::promote(lhs.ty())
        } else {
            Self::common_type(lhs.ty(), rhs.ty())
        }
    }

    #[inline]
    fn unary(op: UnaryOperator, operand: Bounds) -> IntegerType {
        match op {
            UnaryOperator::Neg => Self::promote(operand.ty()),
        }
    }
}
