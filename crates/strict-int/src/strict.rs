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

//! # Strict Integer Value
//!
//! [`StrictInt<L, P>`] bundles one storage value with a compile-time
//! [`Layout`] (signedness and logical width) and [`OverflowPolicy`]. Named
//! types are plain aliases of it (see [`crate::types`]), so adding two
//! 32-bit values yields another 32-bit value of the same policy without the
//! caller naming the type again.
//!
//! Arithmetic operators (`+ - * / << >>` and unary `-`) delegate to the
//! policy and return `P::Output<Self>`: the value itself under [`Wrap`] and
//! [`Saturate`], a `Result` under [`Fail`]. Bitwise operators (`& | ^ !`)
//! never overflow and always return `Self`.
//!
//! ```rust
//! use strict_int::error::ErrorKind;
//! use strict_int::types::{I32, ISize};
//!
//! let wrapped = I32::max_value() + I32::new(1);
//! assert_eq!(wrapped, I32::min_value());
//!
//! let err = (ISize::max_value() + ISize::new(1)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Overflow);
//! ```
//!
//! [`Wrap`]: crate::policy::Wrap
//! [`Saturate`]: crate::policy::Saturate
//! [`Fail`]: crate::policy::Fail

use crate::cast;
use crate::num::limits;
use crate::num::ops::wrapping_arithmetic::wrap_to_width;
use crate::num::repr::{Layout, Signedness, Storage};
use crate::policy::{OverflowPolicy, Policy};
use num_traits::{One, Zero};
use std::marker::PhantomData;

/// A fixed-width integer whose overflow behavior is part of its type.
///
/// The raw value always lies within the logical range of `L`.
#[repr(transparent)]
pub struct StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    raw: L::Storage,
    _marker: PhantomData<fn() -> (L, P)>,
}

/// Common interface of strict integer types, used by [`cast`](crate::cast::cast).
pub trait StrictInteger: Copy {
    /// Signedness, width and storage of the type.
    type Layout: Layout;

    /// Overflow policy of the type.
    type Policy: OverflowPolicy;

    /// Creates a value from a raw storage value.
    ///
    /// # Panics
    ///
    /// Panics if `raw` lies outside the logical range of the layout.
    fn new(raw: <Self::Layout as Layout>::Storage) -> Self;

    /// Returns the raw storage value.
    fn get(self) -> <Self::Layout as Layout>::Storage;
}

impl<L, P> StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    /// Logical width in bits.
    pub const BITS: u32 = L::BITS;

    /// Signedness of the type.
    pub const SIGNEDNESS: Signedness = L::SIGNEDNESS;

    /// Overflow policy of the type.
    pub const POLICY: Policy = P::POLICY;

    #[inline(always)]
    pub(crate) fn from_raw(raw: L::Storage) -> Self {
        let () = L::WELL_FORMED;
        debug_assert!(limits::contains::<L>(raw.widen()));
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Creates a new value from a raw storage value.
    ///
    /// For the built-in layouts every storage value is in range and this
    /// never panics.
    ///
    /// # Panics
    ///
    /// Panics if `raw` lies outside the logical range of `L`, which is only
    /// possible for layouts whose storage is wider than their logical width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strict_int::types::U16;
    /// let v = U16::new(42);
    /// assert_eq!(v.get(), 42);
    /// ```
    #[inline]
    pub fn new(raw: L::Storage) -> Self {
        assert!(
            limits::contains::<L>(raw.widen()),
            "Invalid value: {} is outside [{}, {}]",
            raw,
            L::MIN,
            L::MAX
        );
        Self::from_raw(raw)
    }

    /// Creates a new value, returning `None` if `raw` lies outside the
    /// logical range of `L`.
    #[inline]
    pub fn try_new(raw: L::Storage) -> Option<Self> {
        if limits::contains::<L>(raw.widen()) {
            Some(Self::from_raw(raw))
        } else {
            None
        }
    }

    /// Returns the raw storage value.
    #[inline(always)]
    pub fn get(self) -> L::Storage {
        self.raw
    }

    /// Returns the value widened to `i128`.
    #[inline(always)]
    pub fn to_i128(self) -> i128 {
        self.raw.widen()
    }

    /// Returns the low `BITS` bits of the two's complement representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strict_int::types::I8;
    /// assert_eq!(I8::new(-1).to_bits(), 0xFF);
    /// assert_eq!(I8::new(5).to_bits(), 5);
    /// ```
    #[inline]
    pub fn to_bits(self) -> u64 {
        let bits = self.raw.widen() as u64;
        if L::BITS >= u64::BITS {
            bits
        } else {
            bits & ((1u64 << L::BITS) - 1)
        }
    }

    /// The smallest value of the type.
    #[inline]
    pub fn min_value() -> Self {
        Self::from_raw(limits::min_of::<L>())
    }

    /// The largest value of the type.
    #[inline]
    pub fn max_value() -> Self {
        Self::from_raw(limits::max_of::<L>())
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_raw(<L::Storage as Zero>::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_raw(<L::Storage as One>::one())
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.raw.is_zero()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.raw < <L::Storage as Zero>::zero()
    }

    /// Logical negation: `1` if the value is zero, `0` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strict_int::types::U8;
    /// assert_eq!(U8::new(0).logical_not(), U8::new(1));
    /// assert_eq!(U8::new(7).logical_not(), U8::new(0));
    /// ```
    #[inline]
    pub fn logical_not(self) -> Self {
        if self.is_zero() {
            Self::one()
        } else {
            Self::zero()
        }
    }

    /// Converts to another strict integer type under the destination's
    /// overflow policy. See [`cast`](crate::cast::cast).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strict_int::types::{CheckedInt, I64};
    /// let narrowed = I64::new(300).cast::<CheckedInt<8>>();
    /// assert!(narrowed.is_err());
    /// ```
    #[inline]
    pub fn cast<To>(self) -> <To::Policy as OverflowPolicy>::Output<To>
    where
        To: StrictInteger,
    {
        cast::cast::<To, Self>(self)
    }
}

impl<L, P> StrictInteger for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    type Layout = L;
    type Policy = P;

    #[inline]
    fn new(raw: L::Storage) -> Self {
        StrictInt::new(raw)
    }

    #[inline(always)]
    fn get(self) -> L::Storage {
        self.raw
    }
}

impl<L, P> Clone for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, P> Copy for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
}

impl<L, P> PartialEq for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<L, P> Eq for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
}

impl<L, P> PartialOrd for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<L, P> Ord for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<L, P> std::hash::Hash for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<L, P> Default for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<L, P> num_traits::Bounded for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    #[inline]
    fn min_value() -> Self {
        StrictInt::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        StrictInt::max_value()
    }
}

impl<L, P> std::fmt::Debug for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match L::SIGNEDNESS {
            Signedness::Signed => 'i',
            Signedness::Unsigned => 'u',
        };
        write!(f, "{}{}<{}>({})", prefix, L::BITS, P::POLICY, self.raw)
    }
}

impl<L, P> std::fmt::Display for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.raw, f)
    }
}

macro_rules! impl_bits_fmt {
    ($fmt_trait:ident) => {
        impl<L, P> std::fmt::$fmt_trait for StrictInt<L, P>
        where
            L: Layout,
            P: OverflowPolicy,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::$fmt_trait::fmt(&self.to_bits(), f)
            }
        }
    };
}

impl_bits_fmt!(LowerHex);
impl_bits_fmt!(UpperHex);
impl_bits_fmt!(Binary);

macro_rules! impl_policy_binop {
    ($trait_name:ident, $method:ident) => {
        impl<L, P> std::ops::$trait_name for StrictInt<L, P>
        where
            L: Layout,
            P: OverflowPolicy,
        {
            type Output = P::Output<Self>;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                P::map::<L::Storage, Self, _>(P::$method::<L>(self.raw, rhs.raw), Self::from_raw)
            }
        }
    };
}

impl_policy_binop!(Add, add);
impl_policy_binop!(Sub, sub);
impl_policy_binop!(Mul, mul);
impl_policy_binop!(Div, div);

macro_rules! impl_policy_shift {
    ($trait_name:ident, $method:ident) => {
        impl<L, P> std::ops::$trait_name<u32> for StrictInt<L, P>
        where
            L: Layout,
            P: OverflowPolicy,
        {
            type Output = P::Output<Self>;

            #[inline]
            fn $method(self, shift: u32) -> Self::Output {
                P::map::<L::Storage, Self, _>(P::$method::<L>(self.raw, shift), Self::from_raw)
            }
        }
    };
}

impl_policy_shift!(Shl, shl);
impl_policy_shift!(Shr, shr);

impl<L, P> std::ops::Neg for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    type Output = P::Output<Self>;

    #[inline]
    fn neg(self) -> Self::Output {
        P::map::<L::Storage, Self, _>(P::neg::<L>(self.raw), Self::from_raw)
    }
}

macro_rules! impl_bitwise_binop {
    ($trait_name:ident, $method:ident, $op:tt) => {
        impl<L, P> std::ops::$trait_name for StrictInt<L, P>
        where
            L: Layout,
            P: OverflowPolicy,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self::from_raw(self.raw $op rhs.raw)
            }
        }
    };
}

impl_bitwise_binop!(BitAnd, bitand, &);
impl_bitwise_binop!(BitOr, bitor, |);
impl_bitwise_binop!(BitXor, bitxor, ^);

impl<L, P> std::ops::Not for StrictInt<L, P>
where
    L: Layout,
    P: OverflowPolicy,
{
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self::from_raw(wrap_to_width::<L>(!self.raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArithmeticError, ErrorKind, Operation};
    use crate::num::repr::{Signed, Unsigned};
    use crate::policy::{Fail, Saturate, Wrap};

    type W8 = StrictInt<Signed<8>, Wrap>;
    type F8 = StrictInt<Signed<8>, Fail>;
    type S8 = StrictInt<Signed<8>, Saturate>;
    type FU8 = StrictInt<Unsigned<8>, Fail>;

    struct Unsigned12InU16;

    impl Layout for Unsigned12InU16 {
        type Storage = u16;
        const SIGNEDNESS: Signedness = Signedness::Unsigned;
        const BITS: u32 = 12;
    }

    type W12 = StrictInt<Unsigned12InU16, Wrap>;

    fn err(kind: ErrorKind, op: Operation) -> ArithmeticError {
        ArithmeticError::new(kind, op)
    }

    #[test]
    fn test_constants() {
        assert_eq!(W8::BITS, 8);
        assert_eq!(W8::SIGNEDNESS, Signedness::Signed);
        assert_eq!(W8::POLICY, Policy::Wrap);
        assert_eq!(FU8::SIGNEDNESS, Signedness::Unsigned);
        assert_eq!(FU8::POLICY, Policy::Fail);
        assert_eq!(W12::BITS, 12);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(W8::min_value().get(), -128);
        assert_eq!(W8::max_value().get(), 127);
        assert_eq!(FU8::min_value().get(), 0);
        assert_eq!(FU8::max_value().get(), 255);
        assert_eq!(W12::max_value().get(), 4095);
        assert_eq!(<W8 as num_traits::Bounded>::max_value(), W8::max_value());
    }

    #[test]
    fn test_wrap_operators() {
        assert_eq!(W8::new(127) + W8::new(1), W8::new(-128));
        assert_eq!(W8::new(-128) - W8::new(1), W8::new(127));
        assert_eq!(W8::new(16) * W8::new(16), W8::new(0));
        assert_eq!(W8::new(-128) / W8::new(-1), W8::new(-128));
        assert_eq!(-W8::new(-128), W8::new(-128));
        assert_eq!(W8::new(1) << 7, W8::new(-128));
        assert_eq!(W8::new(-128) >> 7, W8::new(-1));
        assert_eq!(W8::new(1) << 8, W8::new(0));
    }

    #[test]
    fn test_fail_operators() {
        assert_eq!(F8::new(100) + F8::new(27), Ok(F8::new(127)));
        assert_eq!(F8::new(100) + F8::new(28), Err(err(ErrorKind::Overflow, Operation::Add)));
        assert_eq!(F8::new(-100) - F8::new(29), Err(err(ErrorKind::Underflow, Operation::Sub)));
        assert_eq!(F8::new(-128) * F8::new(-1), Err(err(ErrorKind::Overflow, Operation::Mul)));
        assert_eq!(F8::new(1) / F8::new(0), Err(err(ErrorKind::DivisionByZero, Operation::Div)));
        assert_eq!(-F8::new(-128), Err(err(ErrorKind::Overflow, Operation::Neg)));
        assert_eq!(F8::new(1) << 7, Err(err(ErrorKind::Overflow, Operation::Shl)));
        assert_eq!(F8::new(1) >> 8, Err(err(ErrorKind::Overflow, Operation::Shr)));
        assert_eq!(-FU8::new(1), Err(err(ErrorKind::Underflow, Operation::Neg)));
    }

    #[test]
    fn test_fail_chains_with_question_mark() {
        fn area(w: F8, h: F8) -> Result<F8, ArithmeticError> {
            let doubled = (w + w)?;
            doubled * h
        }
        assert_eq!(area(F8::new(3), F8::new(4)), Ok(F8::new(24)));
        assert_eq!(area(F8::new(64), F8::new(1)).unwrap_err().op(), Operation::Add);
        assert_eq!(area(F8::new(30), F8::new(3)).unwrap_err().op(), Operation::Mul);
    }

    #[test]
    fn test_saturate_operators() {
        assert_eq!(S8::new(127) + S8::new(1), S8::max_value());
        assert_eq!(S8::new(-128) - S8::new(1), S8::min_value());
        assert_eq!(S8::new(-128) / S8::new(-1), S8::max_value());
        assert_eq!(-S8::new(-128), S8::max_value());
        assert_eq!(S8::new(-5) << 20, S8::min_value());
    }

    #[test]
    fn test_bitwise_never_fails() {
        assert_eq!(F8::new(0b0110) & F8::new(0b0011), F8::new(0b0010));
        assert_eq!(F8::new(0b0110) | F8::new(0b0011), F8::new(0b0111));
        assert_eq!(F8::new(0b0110) ^ F8::new(0b0011), F8::new(0b0101));
        assert_eq!(!F8::new(0), F8::new(-1));
        assert_eq!(!FU8::new(0), FU8::max_value());
        assert_eq!(F8::new(0).logical_not(), F8::new(1));
        assert_eq!(F8::new(-3).logical_not(), F8::new(0));
    }

    #[test]
    fn test_not_masks_wide_storage() {
        assert_eq!((!W12::new(0)).get(), 0x0FFF);
        assert_eq!((!W12::new(0x0F0)).get(), 0x0F0F);
    }

    #[test]
    fn test_wide_storage_wraps() {
        assert_eq!(W12::max_value() + W12::one(), W12::zero());
        assert_eq!(W12::zero() - W12::one(), W12::max_value());
    }

    #[test]
    fn test_new_and_try_new() {
        assert!(W12::try_new(4095).is_some());
        assert!(W12::try_new(4096).is_none());
        assert_eq!(W8::try_new(-1), Some(W8::new(-1)));
    }

    #[test]
    #[should_panic(expected = "Invalid value")]
    fn test_new_panics_outside_logical_range() {
        W12::new(4096);
    }

    #[test]
    fn test_comparisons() {
        assert!(W8::new(-1) < W8::new(0));
        assert!(FU8::new(200) > FU8::new(100));
        assert_eq!(W8::new(3).max(W8::new(5)), W8::new(5));
        assert_ne!(W8::new(3), W8::new(4));
    }

    #[test]
    fn test_default_and_predicates() {
        assert_eq!(W8::default(), W8::zero());
        assert!(W8::default().is_zero());
        assert!(W8::new(-1).is_negative());
        assert!(!FU8::max_value().is_negative());
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format!("{}", W8::new(-5)), "-5");
        assert_eq!(format!("{:?}", W8::new(-5)), "i8<wrap>(-5)");
        assert_eq!(format!("{:?}", FU8::new(5)), "u8<fail>(5)");
        assert_eq!(format!("{:x}", W8::new(-1)), "ff");
        assert_eq!(format!("{:#X}", W12::new(0xABC)), "0xABC");
        assert_eq!(format!("{:08b}", W8::new(5)), "00000101");
    }

    #[test]
    fn test_hash_follows_value() {
        use std::collections::HashSet;
        let set: HashSet<W8> = [W8::new(1), W8::new(1), W8::new(2)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
