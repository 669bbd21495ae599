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

use crate::{checked::CheckedResult, error::ArithmeticError, math::interval::ClosedInterval};
use num_traits::PrimInt;
use std::{fmt::Display, hash::Hash};

/// A value-level descriptor of a native integer type: its bit width and
/// signedness.
///
/// Valid descriptors name a type the engine can compute in: widths 8, 16, 32
/// and 64 in both signednesses, plus signed 128-bit. Unsigned 128-bit is not
/// available because range bounds are carried in `i128`.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::integer::IntegerType;
/// let t = IntegerType::new(16, false);
/// assert_eq!(t, IntegerType::U16);
/// assert_eq!(t.min(), 0);
/// assert_eq!(t.max(), 65_535);
/// assert_eq!(t.to_string(), "u16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerType {
    bits: u32,
    signed: bool,
}

impl IntegerType {
    pub const I8: IntegerType = IntegerType::new(8, true);
    pub const I16: IntegerType = IntegerType::new(16, true);
    pub const I32: IntegerType = IntegerType::new(32, true);
    pub const I64: IntegerType = IntegerType::new(64, true);
    pub const I128: IntegerType = IntegerType::new(128, true);
    pub const U8: IntegerType = IntegerType::new(8, false);
    pub const U16: IntegerType = IntegerType::new(16, false);
    pub const U32: IntegerType = IntegerType::new(32, false);
    pub const U64: IntegerType = IntegerType::new(64, false);

    /// Every valid descriptor, narrowest first, signed before unsigned.
    pub const ALL: [IntegerType; 9] = [
        IntegerType::I8,
        IntegerType::U8,
        IntegerType::I16,
        IntegerType::U16,
        IntegerType::I32,
        IntegerType::U32,
        IntegerType::I64,
        IntegerType::U64,
        IntegerType::I128,
    ];

    /// The widest type the engine computes in.
    pub const WIDEST: IntegerType = IntegerType::I128;

    /// Creates a descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `(bits, signed)` does not name a supported native type.
    #[inline]
    pub const fn new(bits: u32, signed: bool) -> Self {
        assert!(
            IntegerType::is_supported(bits, signed),
            "Invalid integer type: width must be 8, 16, 32 or 64 bits, or 128 bits signed"
        );
        Self { bits, signed }
    }

    /// Creates a descriptor if `(bits, signed)` names a supported native type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::num::integer::IntegerType;
    /// assert!(IntegerType::try_new(32, true).is_some());
    /// assert!(IntegerType::try_new(24, true).is_none());
    /// assert!(IntegerType::try_new(128, false).is_none());
    /// ```
    #[inline]
    pub const fn try_new(bits: u32, signed: bool) -> Option<Self> {
        if IntegerType::is_supported(bits, signed) {
            Some(Self { bits, signed })
        } else {
            None
        }
    }

    #[inline]
    const fn is_supported(bits: u32, signed: bool) -> bool {
        matches!(bits, 8 | 16 | 32 | 64) || (bits == 128 && signed)
    }

    /// The bit width.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Whether the type is signed.
    #[inline]
    pub const fn is_signed(self) -> bool {
        self.signed
    }

    /// The smallest representable value.
    #[inline]
    pub const fn min(self) -> i128 {
        if !self.signed {
            0
        } else if self.bits == 128 {
            i128::MIN
        } else {
            -(1i128 << (self.bits - 1))
        }
    }

    /// The largest representable value.
    #[inline]
    pub const fn max(self) -> i128 {
        if self.bits == 128 {
            i128::MAX
        } else if self.signed {
            (1i128 << (self.bits - 1)) - 1
        } else {
            (1i128 << self.bits) - 1
        }
    }

    /// The full range of the type as a closed interval.
    #[inline]
    pub const fn interval(self) -> ClosedInterval {
        ClosedInterval::new_unchecked(self.min(), self.max())
    }

    /// The narrowest type whose range includes `interval`.
    ///
    /// At each width the type with signedness `prefer_signed` is tried first.
    /// Returns `None` only if not even `i128` includes the interval, which
    /// cannot happen for an interval of `i128` bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::num::integer::IntegerType;
    /// # use keel_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 200);
    /// assert_eq!(IntegerType::narrowest_containing(iv, true), Some(IntegerType::U8));
    /// let iv = ClosedInterval::new(-1, 100);
    /// assert_eq!(IntegerType::narrowest_containing(iv, false), Some(IntegerType::I8));
    /// ```
    pub fn narrowest_containing(interval: ClosedInterval, prefer_signed: bool) -> Option<Self> {
        Self::narrowest_where(prefer_signed, |t| t.interval().includes(interval))
    }

    /// Returns the narrowest supported type satisfying `predicate`, trying
    /// the `prefer_signed` signedness first at each width.
    pub fn narrowest_where<F>(prefer_signed: bool, mut predicate: F) -> Option<Self>
    where
        F: FnMut(IntegerType) -> bool,
    {
        [8u32, 16, 32, 64, 128].into_iter().find_map(|bits| {
            [prefer_signed, !prefer_signed]
                .into_iter()
                .filter_map(|signed| IntegerType::try_new(bits, signed))
                .find(|t| predicate(*t))
        })
    }
}

impl Display for IntegerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", if self.signed { 'i' } else { 'u' }, self.bits)
    }
}

/// A native integer type the engine can operate on.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `i128`, `isize`, `u8`, `u16`,
/// `u32`, `u64` and `usize`. Every value widens losslessly into `i128`.
///
/// # Examples
///
/// ```rust
/// # use keel_core::num::integer::{Integer, IntegerType};
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// assert_eq!(<u8 as Integer>::TYPE, IntegerType::U8);
/// assert_eq!((-5i8).widen(), -5i128);
/// assert_eq!(u8::narrow(256), CheckedResult::Error(ArithmeticError::PositiveOverflow));
/// assert_eq!(u8::narrow(-1), CheckedResult::Error(ArithmeticError::NegativeOverflow));
/// assert_eq!(u8::narrow(255), CheckedResult::Value(255u8));
/// ```
pub trait Integer: PrimInt + std::fmt::Debug + Display + Hash + Send + Sync + 'static {
    /// The descriptor of this type.
    const TYPE: IntegerType;

    /// Widens the value into `i128` without loss.
    fn widen(self) -> i128;

    /// Truncating conversion from `i128`.
    ///
    /// Only meaningful for values already proven to lie within the range of
    /// `Self`; out-of-range inputs wrap.
    fn wrap_from(value: i128) -> Self;

    /// Checked conversion from `i128`, classifying values below the minimum as
    /// negative overflow and values above the maximum as positive overflow.
    #[inline]
    fn narrow(value: i128) -> CheckedResult<Self> {
        if value < Self::TYPE.min() {
            CheckedResult::Error(ArithmeticError::NegativeOverflow)
        } else if value > Self::TYPE.max() {
            CheckedResult::Error(ArithmeticError::PositiveOverflow)
        } else {
            CheckedResult::Value(Self::wrap_from(value))
        }
    }

    /// Returns `true` if the value is below zero.
    #[inline(always)]
    fn is_negative(self) -> bool {
        self < Self::zero()
    }
}

macro_rules! impl_integer_for {
    ($t:ty, $signed:expr) => {
        impl Integer for $t {
            const TYPE: IntegerType = IntegerType::new(<$t>::BITS, $signed);

            #[inline(always)]
            fn widen(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn wrap_from(value: i128) -> Self {
                value as $t
            }
        }
    };
}

impl_integer_for!(i8, true);
impl_integer_for!(i16, true);
impl_integer_for!(i32, true);
impl_integer_for!(i64, true);
impl_integer_for!(i128, true);
impl_integer_for!(isize, true);

impl_integer_for!(u8, false);
impl_integer_for!(u16, false);
impl_integer_for!(u32, false);
impl_integer_for!(u64, false);
impl_integer_for!(usize, false);

/// Runs `$body` with `$alias` bound to the native type described by the
/// `IntegerType` expression `$ty`.
///
/// When `$ty` is a constant after monomorphization the match folds away.
macro_rules! with_native_type {
    ($ty:expr, $alias:ident => $body:expr) => {{
        let ty: $crate::num::integer::IntegerType = $ty;
        match (ty.bits(), ty.is_signed()) {
            (8, true) => {
                type $alias = i8;
                $body
            }
            (16, true) => {
                type $alias = i16;
                $body
            }
            (32, true) => {
                type $alias = i32;
                $body
            }
            (64, true) => {
                type $alias = i64;
                $body
            }
            (128, true) => {
                type $alias = i128;
                $body
            }
            (8, false) => {
                type $alias = u8;
                $body
            }
            (16, false) => {
                type $alias = u16;
                $body
            }
            (32, false) => {
                type $alias = u32;
                $body
            }
            (64, false) => {
                type $alias = u64;
                $body
            }
            _ => unreachable!("IntegerType invariant violated: {}", ty),
        }
    }};
}

pub(crate) use with_native_type;
