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

//! # Overflow Policy Engine
//!
//! An overflow policy decides what a strict integer operation does when the
//! exact result does not fit the logical range. Policies are zero-sized
//! marker types implementing [`OverflowPolicy`]; the policy of a strict
//! integer type is a type parameter, so the choice is made at compile time
//! and never branches at run time.
//!
//! | Policy       | Out-of-range result              | `Output<T>`                   |
//! |--------------|----------------------------------|-------------------------------|
//! | [`Wrap`]     | reduced modulo `2^BITS`          | `T`                           |
//! | [`Fail`]     | `Err(ArithmeticError)`           | `Result<T, ArithmeticError>`  |
//! | [`Saturate`] | clamped to the logical min/max   | `T`                           |
//!
//! Division by zero panics under [`Wrap`] and [`Saturate`], since neither
//! has a value to produce; only [`Fail`] reports it as an error.

use crate::error::{ArithmeticError, ErrorKind, Operation};
use crate::num::ops::{checked_arithmetic, saturating_arithmetic, wrapping_arithmetic};
use crate::num::repr::Layout;

/// Run-time description of an overflow policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Policy {
    Wrap,
    Fail,
    Saturate,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Wrap => write!(f, "wrap"),
            Policy::Fail => write!(f, "fail"),
            Policy::Saturate => write!(f, "saturate"),
        }
    }
}

/// Compile-time overflow policy.
///
/// Every operation takes storage values of a [`Layout`] that lie within its
/// logical range and produces either a storage value in that range or,
/// depending on the policy, an error, wrapped in [`OverflowPolicy::Output`].
pub trait OverflowPolicy: Sized + 'static {
    /// The policy this marker stands for.
    const POLICY: Policy;

    /// The shape of a result that may overflow under this policy.
    type Output<T>;

    fn add<L: Layout>(a: L::Storage, b: L::Storage) -> Self::Output<L::Storage>;

    fn sub<L: Layout>(a: L::Storage, b: L::Storage) -> Self::Output<L::Storage>;

    fn mul<L: Layout>(a: L::Storage, b: L::Storage) -> Self::Output<L::Storage>;

    fn div<L: Layout>(a: L::Storage, b: L::Storage) -> Self::Output<L::Storage>;

    fn shl<L: Layout>(a: L::Storage, shift: u32) -> Self::Output<L::Storage>;

    fn shr<L: Layout>(a: L::Storage, shift: u32) -> Self::Output<L::Storage>;

    fn neg<L: Layout>(a: L::Storage) -> Self::Output<L::Storage>;

    /// Brings an exact value from another layout into `L`. This is the
    /// destination side of a cross-type cast.
    fn convert<L: Layout>(value: i128) -> Self::Output<L::Storage>;

    /// Applies `f` to the value inside an output, keeping its shape.
    fn map<T, U, F>(output: Self::Output<T>, f: F) -> Self::Output<U>
    where
        F: FnOnce(T) -> U;
}

/// Arithmetic modulo `2^BITS`. Never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Wrap;

impl OverflowPolicy for Wrap {
    const POLICY: Policy = Policy::Wrap;

    type Output<T> = T;

    #[inline(always)]
    fn add<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
        wrapping_arithmetic::wrapping_add::<L>(a, b)
    }

    #[inline(always)]
    fn sub<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
        wrapping_arithmetic::wrapping_sub::<L>(a, b)
    }

    #[inline(always)]
    fn mul<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
        wrapping_arithmetic::wrapping_mul::<L>(a, b)
    }

    #[inline(always)]
    fn div<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
        wrapping_arithmetic::wrapping_div::<L>(a, b)
    }

    #[inline(always)]
    fn shl<L: Layout>(a: L::Storage, shift: u32) -> L::Storage {
        wrapping_arithmetic::wrapping_shl::<L>(a, shift)
    }

    #[inline(always)]
    fn shr<L: Layout>(a: L::Storage, shift: u32) -> L::Storage {
        wrapping_arithmetic::wrapping_shr::<L>(a, shift)
    }

    #[inline(always)]
    fn neg<L: Layout>(a: L::Storage) -> L::Storage {
        wrapping_arithmetic::wrapping_neg::<L>(a)
    }

    #[inline(always)]
    fn convert<L: Layout>(value: i128) -> L::Storage {
        wrapping_arithmetic::wrapping_convert::<L>(value)
    }

    #[inline(always)]
    fn map<T, U, F>(output: T, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        f(output)
    }
}

/// Out-of-range results and division by zero are reported as
/// [`ArithmeticError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fail;

#[inline(always)]
fn fail<L: Layout, T>(result: Result<T, ErrorKind>, op: Operation) -> Result<T, ArithmeticError> {
    result.map_err(|kind| {
        log::trace!(
            "{op} on {} {}-bit integer failed: {kind}",
            L::SIGNEDNESS,
            L::BITS
        );
        ArithmeticError::new(kind, op)
    })
}

impl OverflowPolicy for Fail {
    const POLICY: Policy = Policy::Fail;

    type Output<T> = Result<T, ArithmeticError>;

    #[inline(always)]
    fn add<L: Layout>(a: L::Storage, b: L::Storage) -> Result<L::Storage, ArithmeticError> {
        fail::<L, _>(checked_arithmetic::try_add::<L>(a, b), Operation::Add)
    }

    #[inline(always)]
    fn sub<L: Layout>(a: L::Storage, b: L::Storage) -> Result<L::Storage, ArithmeticError> {
        fail::<L, _>(checked_arithmetic::try_sub::<L>(a, b), Operation::Sub)
    }

    #[inline(always)]
    fn mul<L: Layout>(a: L::Storage, b: L::Storage) -> Result<L::Storage, ArithmeticError> {
        fail::<L, _>(checked_arithmetic::try_mul::<L>(a, b), Operation::Mul)
    }

    #[inline(always)]
    fn div<L: Layout>(a: L::Storage, b: L::Storage) -> Result<L::Storage, ArithmeticError> {
        fail::<L, _>(checked_arithmetic::try_div::<L>(a, b), Operation::Div)
    }

    #[inline(always)]
    fn shl<L: Layout>(a: L::Storage, shift: u32) -> Result<L::Storage, ArithmeticError> {
        fail::<L, _>(checked_arithmetic::try_shl::<L>(a, shift), Operation::Shl)
    }

    #[inline(always)]
    fn shr<L: Layout>(a: L::Storage, shift: u32) -> Result<L::Storage, ArithmeticError> {
        fail::<L, _>(checked_arithmetic::try_shr::<L>(a, shift), Operation::Shr)
    }

    #[inline(always)]
    fn neg<L: Layout>(a: L::Storage) -> Result<L::Storage, ArithmeticError> {
        fail::<L, _>(checked_arithmetic::try_neg::<L>(a), Operation::Neg)
    }

    #[inline(always)]
    fn convert<L: Layout>(value: i128) -> Result<L::Storage, ArithmeticError> {
        fail::<L, _>(checked_arithmetic::try_convert::<L>(value), Operation::Cast)
    }

    #[inline(always)]
    fn map<T, U, F>(output: Result<T, ArithmeticError>, f: F) -> Result<U, ArithmeticError>
    where
        F: FnOnce(T) -> U,
    {
        output.map(f)
    }
}

/// Out-of-range results are clamped to the logical bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Saturate;

impl OverflowPolicy for Saturate {
    const POLICY: Policy = Policy::Saturate;

    type Output<T> = T;

    #[inline(always)]
    fn add<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
        saturating_arithmetic::saturating_add::<L>(a, b)
    }

    #[inline(always)]
    fn sub<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
        saturating_arithmetic::saturating_sub::<L>(a, b)
    }

    #[inline(always)]
    fn mul<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
        saturating_arithmetic::saturating_mul::<L>(a, b)
    }

    #[inline(always)]
    fn div<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
        saturating_arithmetic::saturating_div::<L>(a, b)
    }

    #[inline(always)]
    fn shl<L: Layout>(a: L::Storage, shift: u32) -> L::Storage {
        saturating_arithmetic::saturating_shl::<L>(a, shift)
    }

    #[inline(always)]
    fn shr<L: Layout>(a: L::Storage, shift: u32) -> L::Storage {
        saturating_arithmetic::saturating_shr::<L>(a, shift)
    }

    #[inline(always)]
    fn neg<L: Layout>(a: L::Storage) -> L::Storage {
        saturating_arithmetic::saturating_neg::<L>(a)
    }

    #[inline(always)]
    fn convert<L: Layout>(value: i128) -> L::Storage {
        saturating_arithmetic::saturating_convert::<L>(value)
    }

    #[inline(always)]
    fn map<T, U, F>(output: T, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        f(output)
    }
}
