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

//! # Numeric Foundations
//!
//! The native integer model and the operations the engine performs on it.
//!
//! ## Submodules
//!
//! - `integer`: The `Integer` trait implemented for every supported native
//!   type, and `IntegerType`, a value-level descriptor (width + signedness)
//!   used wherever a working type has to be named.
//! - `operand`: The `Operand` trait binding a native representation to the
//!   static range its values are known to lie in, `Ranged<T, LOW, HIGH>` for
//!   declared sub-ranges, and `Bounds`, the descriptor promotion policies read.
//! - `ops`: Checked native operations, sign-reconciling comparisons, and the
//!   extended algebra over `CheckedResult<T>` that propagates poisoned
//!   operands.

pub mod integer;
pub mod operand;
pub mod ops;
