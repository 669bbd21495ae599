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

//! # Checked Result
//!
//! `CheckedResult<T>` is the universal return type of every core operation:
//! either a value representable in `T`, or one `ArithmeticError`. The
//! classification alone is the payload of the error state.
//!
//! There is no accessor that reads the value without first branching on the
//! state; use `match`, [`CheckedResult::value`] or
//! [`CheckedResult::into_result`].

use crate::{error::ArithmeticError, num::integer::Integer};
use std::fmt::Display;

/// A value of `T` or the classification of why there is none.
///
/// Equality follows the contents: two errors are equal when they are the same
/// kind, a value never equals an error, and values compare numerically.
///
/// # Examples
///
/// ```rust
/// # use keel_core::checked::CheckedResult;
/// # use keel_core::error::ArithmeticError;
/// let ok: CheckedResult<i8> = CheckedResult::from(5);
/// assert_eq!(ok.value(), Some(5));
///
/// let err: CheckedResult<i8> = CheckedResult::Error(ArithmeticError::DomainError);
/// assert_eq!(err.error(), Some(ArithmeticError::DomainError));
/// assert_ne!(ok, err);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckedResult<T> {
    /// A value representable in `T`.
    Value(T),
    /// The classification of a failed operation.
    Error(ArithmeticError),
}

impl<T> CheckedResult<T> {
    /// Returns `true` if this result holds a value.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, CheckedResult::Value(_))
    }

    /// Returns `true` if this result holds an error classification.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, CheckedResult::Error(_))
    }

    /// Returns the error classification, if any.
    #[inline]
    pub fn error(&self) -> Option<ArithmeticError> {
        match self {
            CheckedResult::Value(_) => None,
            CheckedResult::Error(e) => Some(*e),
        }
    }

    /// Converts into a `Result`, the form `?` works with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::checked::CheckedResult;
    /// # use keel_core::error::ArithmeticError;
    /// fn double(v: CheckedResult<u8>) -> Result<u16, ArithmeticError> {
    ///     Ok(u16::from(v.into_result()?) * 2)
    /// }
    /// assert_eq!(double(CheckedResult::from(200u8)), Ok(400));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, ArithmeticError> {
        match self {
            CheckedResult::Value(v) => Ok(v),
            CheckedResult::Error(e) => Err(e),
        }
    }

    /// Maps the value, leaving an error untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> CheckedResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            CheckedResult::Value(v) => CheckedResult::Value(f(v)),
            CheckedResult::Error(e) => CheckedResult::Error(e),
        }
    }

    /// Chains a further checked computation on the value.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> CheckedResult<U>
    where
        F: FnOnce(T) -> CheckedResult<U>,
    {
        match self {
            CheckedResult::Value(v) => f(v),
            CheckedResult::Error(e) => CheckedResult::Error(e),
        }
    }
}

impl<T> CheckedResult<T>
where
    T: Copy,
{
    /// Returns the value, if any.
    #[inline]
    pub fn value(&self) -> Option<T> {
        match self {
            CheckedResult::Value(v) => Some(*v),
            CheckedResult::Error(_) => None,
        }
    }
}

impl<T> Default for CheckedResult<T> {
    /// A result that was never assigned.
    #[inline]
    fn default() -> Self {
        CheckedResult::Error(ArithmeticError::Uninitialized)
    }
}

impl<T> From<T> for CheckedResult<T>
where
    T: Integer,
{
    #[inline]
    fn from(value: T) -> Self {
        CheckedResult::Value(value)
    }
}

impl<T> From<Result<T, ArithmeticError>> for CheckedResult<T> {
    #[inline]
    fn from(result: Result<T, ArithmeticError>) -> Self {
        match result {
            Ok(v) => CheckedResult::Value(v),
            Err(e) => CheckedResult::Error(e),
        }
    }
}

impl<T> Display for CheckedResult<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckedResult::Value(v) => write!(f, "{}", v),
            CheckedResult::Error(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_state() {
        let r = CheckedResult::from(42i32);
        assert!(r.is_value());
        assert!(!r.is_error());
        assert_eq!(r.value(), Some(42));
        assert_eq!(r.error(), None);
        assert_eq!(r.into_result(), Ok(42));
    }

    #[test]
    fn test_error_state() {
        let r: CheckedResult<i32> = CheckedResult::Error(ArithmeticError::NegativeOverflow);
        assert!(r.is_error());
        assert_eq!(r.value(), None);
        assert_eq!(r.error(), Some(ArithmeticError::NegativeOverflow));
        assert_eq!(r.into_result(), Err(ArithmeticError::NegativeOverflow));
    }

    #[test]
    fn test_default_is_uninitialized() {
        let r: CheckedResult<u16> = CheckedResult::default();
        assert_eq!(r, CheckedResult::Error(ArithmeticError::Uninitialized));
    }

    #[test]
    fn test_equality_semantics() {
        let a: CheckedResult<i8> = CheckedResult::Error(ArithmeticError::RangeError);
        let b: CheckedResult<i8> = CheckedResult::Error(ArithmeticError::RangeError);
        let c: CheckedResult<i8> = CheckedResult::Error(ArithmeticError::DomainError);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(CheckedResult::from(0i8), a);
        assert_eq!(CheckedResult::from(-3i8), CheckedResult::from(-3i8));
        assert_ne!(CheckedResult::from(-3i8), CheckedResult::from(3i8));
    }

    #[test]
    fn test_map_and_then() {
        let r = CheckedResult::from(7u8).map(|v| v as u16 * 100);
        assert_eq!(r, CheckedResult::Value(700u16));

        let e: CheckedResult<u8> = CheckedResult::Error(ArithmeticError::DomainError);
        assert_eq!(
            e.map(|v| v + 1),
            CheckedResult::Error(ArithmeticError::DomainError)
        );

        let chained = CheckedResult::from(3u8).and_then(|v| {
            if v > 2 {
                CheckedResult::Error(ArithmeticError::PositiveOverflow)
            } else {
                CheckedResult::Value(v)
            }
        });
        assert_eq!(
            chained,
            CheckedResult::Error(ArithmeticError::PositiveOverflow)
        );
    }

    #[test]
    fn test_from_result() {
        let ok: CheckedResult<i64> = Ok(9).into();
        let err: CheckedResult<i64> = Err(ArithmeticError::RangeError).into();
        assert_eq!(ok, CheckedResult::Value(9));
        assert_eq!(err, CheckedResult::Error(ArithmeticError::RangeError));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CheckedResult::from(-12i16)), "-12");
        let e: CheckedResult<i16> = CheckedResult::Error(ArithmeticError::PositiveOverflow);
        assert_eq!(format!("{}", e), "positive overflow");
    }
}
