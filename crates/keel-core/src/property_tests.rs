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

//! Property-based tests for the checked arithmetic engine.
//!
//! Uses proptest to check the core invariants on random operands: native
//! checked operations agree with exact arithmetic, every successful result
//! lies in the statically computed range, poisoned operands never produce a
//! value, and the automatic policy never overflows the common operations.

#[cfg(test)]
mod tests {
    use crate::{
        checked::CheckedResult,
        dispatch::Binary,
        error::ArithmeticError,
        math::interval::ClosedInterval,
        num::{
            integer::{Integer, IntegerType},
            ops::{BinaryOperator, checked_arithmetic::*, comparison::compare, extended},
        },
        promotion::{AutomaticPromotion, Lp64},
    };
    use proptest::prelude::*;

    /// An interval with its endpoints drawn from `i16` and a value inside it.
    fn interval_and_value() -> impl Strategy<Value = (ClosedInterval, i16)> {
        (any::<i16>(), any::<i16>(), any::<i16>()).prop_map(|(a, b, c)| {
            let (low, high) = (a.min(b), a.max(b));
            (ClosedInterval::new(low as i128, high as i128), c.clamp(low, high))
        })
    }

    fn operator() -> impl Strategy<Value = BinaryOperator> {
        prop::sample::select(BinaryOperator::ALL.to_vec())
    }

    fn poisoning_error() -> impl Strategy<Value = ArithmeticError> {
        prop::sample::select(vec![
            ArithmeticError::Uninitialized,
            ArithmeticError::RangeError,
            ArithmeticError::DomainError,
        ])
    }

    fn checked_operand() -> impl Strategy<Value = CheckedResult<i16>> {
        prop_oneof![
            any::<i16>().prop_map(CheckedResult::Value),
            prop::sample::select(ArithmeticError::ALL.to_vec()).prop_map(CheckedResult::Error),
        ]
    }

    fn run<W: Integer>(op: BinaryOperator, a: CheckedResult<W>, b: CheckedResult<W>, amount: CheckedResult<i16>) -> CheckedResult<W> {
        match op {
            BinaryOperator::Add => extended::add(a, b),
            BinaryOperator::Sub => extended::sub(a, b),
            BinaryOperator::Mul => extended::mul(a, b),
            BinaryOperator::Div => extended::div(a, b),
            BinaryOperator::Rem => extended::rem(a, b),
            BinaryOperator::Shl => extended::shl(a, amount),
            BinaryOperator::Shr => extended::shr(a, amount),
        }
    }

    /// Every value a checked operation in `W` produces lies in the range
    /// interval arithmetic computed for it.
    fn assert_range_sound<W: Integer>(
        op: BinaryOperator,
        (lhs, x): (ClosedInterval, i16),
        (rhs, y): (ClosedInterval, i16),
    ) -> Result<(), TestCaseError> {
        let a = W::narrow(x as i128);
        let b = W::narrow(y as i128);
        if let CheckedResult::Value(result) = run(op, a, b, CheckedResult::Value(y)) {
            match lhs.checked_op(op, rhs, W::TYPE) {
                CheckedResult::Value(range) => prop_assert!(
                    range.contains(result.widen()),
                    "{} {} {} = {} escapes {}",
                    x,
                    op,
                    y,
                    result,
                    range
                ),
                CheckedResult::Error(e) => prop_assert!(
                    e.is_overflow(),
                    "{} {} {} succeeded in a statically failing range: {}",
                    x,
                    op,
                    y,
                    e
                ),
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_range_soundness_i16(op in operator(), lhs in interval_and_value(), rhs in interval_and_value()) {
            assert_range_sound::<i16>(op, lhs, rhs)?;
        }

        #[test]
        fn prop_range_soundness_i32(op in operator(), lhs in interval_and_value(), rhs in interval_and_value()) {
            assert_range_sound::<i32>(op, lhs, rhs)?;
        }

        #[test]
        fn prop_range_soundness_i64(op in operator(), lhs in interval_and_value(), rhs in interval_and_value()) {
            assert_range_sound::<i64>(op, lhs, rhs)?;
        }

        #[test]
        fn prop_native_ops_match_exact_arithmetic_i32(a in any::<i32>(), b in any::<i32>()) {
            let (x, y) = (a as i128, b as i128);
            prop_assert_eq!(checked_add(a, b), i32::narrow(x + y));
            prop_assert_eq!(checked_sub(a, b), i32::narrow(x - y));
            prop_assert_eq!(checked_mul(a, b), i32::narrow(x * y));
            if b != 0 {
                prop_assert_eq!(checked_div(a, b), i32::narrow(x / y));
                prop_assert_eq!(checked_rem(a, b), i32::narrow(x % y));
            }
            prop_assert_eq!(checked_neg(a), i32::narrow(-x));
        }

        #[test]
        fn prop_native_ops_match_exact_arithmetic_u32(a in any::<u32>(), b in any::<u32>()) {
            let (x, y) = (a as i128, b as i128);
            prop_assert_eq!(checked_add(a, b), u32::narrow(x + y));
            prop_assert_eq!(checked_sub(a, b), u32::narrow(x - y));
            prop_assert_eq!(checked_mul(a, b), u32::narrow(x * y));
            if b != 0 {
                prop_assert_eq!(checked_div(a, b), u32::narrow(x / y));
                prop_assert_eq!(checked_rem(a, b), u32::narrow(x % y));
            }
        }

        #[test]
        fn prop_native_ops_match_exact_arithmetic_i64(a in any::<i64>(), b in any::<i64>()) {
            let (x, y) = (a as i128, b as i128);
            prop_assert_eq!(checked_add(a, b), i64::narrow(x + y));
            prop_assert_eq!(checked_sub(a, b), i64::narrow(x - y));
            prop_assert_eq!(checked_mul(a, b), i64::narrow(x * y));
        }

        #[test]
        fn prop_left_shift_matches_exact_arithmetic(a in any::<i32>(), n in 0u32..32) {
            let exact = (a as i128) << n;
            let expected = match i32::narrow(exact) {
                CheckedResult::Error(ArithmeticError::NegativeOverflow) => {
                    CheckedResult::Error(ArithmeticError::DomainError)
                }
                other => other,
            };
            prop_assert_eq!(checked_shl(a, n), expected);
        }

        #[test]
        fn prop_poisoned_operands_never_yield_values(
            op in operator(),
            poison in poisoning_error(),
            other in checked_operand(),
            poisoned_left in any::<bool>(),
        ) {
            let p: CheckedResult<i16> = CheckedResult::Error(poison);
            let (a, b) = if poisoned_left { (p, other) } else { (other, p) };
            let result = run(op, a, b, b);
            let expected = if poison == ArithmeticError::Uninitialized
                || other == CheckedResult::Error(ArithmeticError::Uninitialized)
            {
                ArithmeticError::Uninitialized
            } else {
                ArithmeticError::RangeError
            };
            prop_assert_eq!(result, CheckedResult::Error(expected));
        }

        #[test]
        fn prop_extended_ops_are_total(op in operator(), a in checked_operand(), b in checked_operand()) {
            // Any combination classifies without panicking.
            let _ = run(op, a, b, b);
            let _ = extended::neg(a);
        }

        #[test]
        fn prop_automatic_policy_never_overflows_i32(a in any::<i32>(), b in any::<i32>()) {
            type B = Binary<AutomaticPromotion, i32, i32>;
            let (x, y) = (a as i128, b as i128);
            prop_assert_eq!(B::add::<i128>(CheckedResult::Value(a), CheckedResult::Value(b)), CheckedResult::Value(x + y));
            prop_assert_eq!(B::sub::<i128>(CheckedResult::Value(a), CheckedResult::Value(b)), CheckedResult::Value(x - y));
            prop_assert_eq!(B::mul::<i128>(CheckedResult::Value(a), CheckedResult::Value(b)), CheckedResult::Value(x * y));
            prop_assert_eq!(B::promotion(BinaryOperator::Mul).working(), IntegerType::I64);
        }

        #[test]
        fn prop_native_policy_classifies_like_the_working_type(a in any::<i32>(), b in any::<i32>()) {
            type B = Binary<Lp64, i32, i32>;
            let (x, y) = (a as i128, b as i128);
            let widen = |r: CheckedResult<i32>| r.map(i64::from);
            prop_assert_eq!(B::add::<i64>(CheckedResult::Value(a), CheckedResult::Value(b)), widen(i32::narrow(x + y)));
            prop_assert_eq!(B::mul::<i64>(CheckedResult::Value(a), CheckedResult::Value(b)), widen(i32::narrow(x * y)));
        }

        #[test]
        fn prop_comparison_matches_exact_ordering(a in any::<i64>(), b in any::<u64>()) {
            prop_assert_eq!(compare(a, b), (a as i128).cmp(&(b as i128)));
            prop_assert_eq!(compare(b, a), (b as i128).cmp(&(a as i128)));
        }
    }
}
