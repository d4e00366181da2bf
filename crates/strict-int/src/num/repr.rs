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

//! # Representation Selector
//!
//! Maps a logical `(signedness, bit-width)` pair to the native integer that
//! stores it. Two traits split the concern:
//!
//! - [`Storage`] describes a native storage unit (`i8`..`i64`, `u8`..`u64`):
//!   its native width, its unsigned counterpart, bit-pattern reinterpretation
//!   and exact widening to `i128`.
//! - [`Layout`] is the type-level `(signedness, bit-width)` pair. It names a
//!   storage unit that is *at least* as wide as the logical width, and derives
//!   the logical bounds from the pair alone (see [`crate::num::limits`]).
//!
//! The built-in markers [`Signed<N>`] and [`Unsigned<N>`] implement
//! [`Layout`] for `N` in `{8, 16, 32, 64}`.
//!
//! ```rust
//! use strict_int::num::repr::{Layout, Signed, Signedness, Unsigned};
//!
//! assert_eq!(<Signed<16> as Layout>::SIGNEDNESS, Signedness::Signed);
//! assert_eq!(<Unsigned<8> as Layout>::MAX, 255);
//! assert_eq!(<Signed<64> as Layout>::MIN, i64::MIN as i128);
//! ```

use crate::num::limits;
use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};

/// Whether a logical integer uses two's complement or is unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl Signedness {
    /// Returns `true` for [`Signedness::Signed`].
    #[inline]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Signedness::Signed)
    }
}

impl std::fmt::Display for Signedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signedness::Signed => write!(f, "signed"),
            Signedness::Unsigned => write!(f, "unsigned"),
        }
    }
}

/// A native integer that can back a strict integer.
pub trait Storage:
    PrimInt
    + std::hash::Hash
    + std::fmt::Debug
    + std::fmt::Display
    + std::fmt::LowerHex
    + std::fmt::UpperHex
    + std::fmt::Binary
    + Default
    + Send
    + Sync
    + 'static
{
    /// The unsigned integer of the same native width.
    type Unsigned: Storage + WrappingAdd + WrappingSub + WrappingMul;

    /// Width of the native integer in bits.
    const NATIVE_BITS: u32;

    /// Whether the native integer is signed.
    const IS_SIGNED: bool;

    /// Reinterprets the bit pattern as the unsigned counterpart.
    fn to_unsigned(self) -> Self::Unsigned;

    /// Reinterprets an unsigned bit pattern as `Self`.
    fn from_unsigned(bits: Self::Unsigned) -> Self;

    /// The magnitude of the value. Exact for every value, including `MIN`.
    fn unsigned_abs(self) -> Self::Unsigned;

    /// Returns `true` if the value is `-1`. Always `false` for unsigned storage.
    fn is_minus_one(self) -> bool;

    /// Widens the value to `i128` without loss.
    fn widen(self) -> i128;

    /// Keeps the low `NATIVE_BITS` bits of `value`.
    fn truncate(value: i128) -> Self;
}

macro_rules! impl_storage_signed {
    ($t:ty, $u:ty) => {
        impl Storage for $t {
            type Unsigned = $u;

            const NATIVE_BITS: u32 = <$t>::BITS;
            const IS_SIGNED: bool = true;

            #[inline(always)]
            fn to_unsigned(self) -> $u {
                self as $u
            }

            #[inline(always)]
            fn from_unsigned(bits: $u) -> Self {
                bits as $t
            }

            #[inline(always)]
            fn unsigned_abs(self) -> $u {
                <$t>::unsigned_abs(self)
            }

            #[inline(always)]
            fn is_minus_one(self) -> bool {
                self == -1
            }

            #[inline(always)]
            fn widen(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn truncate(value: i128) -> Self {
                value as $t
            }
        }
    };
}

macro_rules! impl_storage_unsigned {
    ($t:ty) => {
        impl Storage for $t {
            type Unsigned = $t;

            const NATIVE_BITS: u32 = <$t>::BITS;
            const IS_SIGNED: bool = false;

            #[inline(always)]
            fn to_unsigned(self) -> $t {
                self
            }

            #[inline(always)]
            fn from_unsigned(bits: $t) -> Self {
                bits
            }

            #[inline(always)]
            fn unsigned_abs(self) -> $t {
                self
            }

            #[inline(always)]
            fn is_minus_one(self) -> bool {
                false
            }

            #[inline(always)]
            fn widen(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn truncate(value: i128) -> Self {
                value as $t
            }
        }
    };
}

impl_storage_signed!(i8, u8);
impl_storage_signed!(i16, u16);
impl_storage_signed!(i32, u32);
impl_storage_signed!(i64, u64);

impl_storage_unsigned!(u8);
impl_storage_unsigned!(u16);
impl_storage_unsigned!(u32);
impl_storage_unsigned!(u64);

/// A logical `(signedness, bit-width)` pair and the storage unit backing it.
///
/// The storage unit must be at least `BITS` wide and match the signedness.
/// Both conditions are checked at compile time when a strict integer of the
/// layout is first constructed.
///
/// # Examples
///
/// A 12-bit unsigned counter kept in a `u16`:
///
/// ```rust
/// # use strict_int::num::repr::{Layout, Signedness};
/// struct Counter12;
///
/// impl Layout for Counter12 {
///     type Storage = u16;
///     const SIGNEDNESS: Signedness = Signedness::Unsigned;
///     const BITS: u32 = 12;
/// }
///
/// assert_eq!(Counter12::MAX, 4095);
/// ```
pub trait Layout: 'static {
    /// The native integer holding the value.
    type Storage: Storage;

    /// Signedness of the logical integer.
    const SIGNEDNESS: Signedness;

    /// Logical width in bits.
    const BITS: u32;

    /// Smallest logical value.
    const MIN: i128 = limits::logical_min(Self::SIGNEDNESS, Self::BITS);

    /// Largest logical value.
    const MAX: i128 = limits::logical_max(Self::SIGNEDNESS, Self::BITS);

    #[doc(hidden)]
    const WELL_FORMED: () = {
        assert!(Self::BITS > 0, "logical width must be positive");
        assert!(
            Self::BITS <= <Self::Storage as Storage>::NATIVE_BITS,
            "storage unit is narrower than the logical width"
        );
        assert!(
            Self::SIGNEDNESS.is_signed() == <Self::Storage as Storage>::IS_SIGNED,
            "storage signedness does not match the layout"
        );
    };
}

/// The storage unit selected for layout `L`.
pub type StorageOf<L> = <L as Layout>::Storage;

/// Two's complement layout of `BITS` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Signed<const BITS: u32>;

/// Unsigned layout of `BITS` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unsigned<const BITS: u32>;

macro_rules! impl_layout {
    ($marker:ident, $signedness:expr, $bits:literal, $t:ty) => {
        impl Layout for $marker<$bits> {
            type Storage = $t;
            const SIGNEDNESS: Signedness = $signedness;
            const BITS: u32 = $bits;
        }
    };
}

impl_layout!(Signed, Signedness::Signed, 8, i8);
impl_layout!(Signed, Signedness::Signed, 16, i16);
impl_layout!(Signed, Signedness::Signed, 32, i32);
impl_layout!(Signed, Signedness::Signed, 64, i64);

impl_layout!(Unsigned, Signedness::Unsigned, 8, u8);
impl_layout!(Unsigned, Signedness::Unsigned, 16, u16);
impl_layout!(Unsigned, Signedness::Unsigned, 32, u32);
impl_layout!(Unsigned, Signedness::Unsigned, 64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_bits<L: Layout>() -> u32 {
        <L::Storage as Storage>::NATIVE_BITS
    }

    #[test]
    fn test_builtin_layouts_select_exact_width() {
        assert_eq!(storage_bits::<Signed<8>>(), 8);
        assert_eq!(storage_bits::<Signed<16>>(), 16);
        assert_eq!(storage_bits::<Signed<32>>(), 32);
        assert_eq!(storage_bits::<Signed<64>>(), 64);
        assert_eq!(storage_bits::<Unsigned<8>>(), 8);
        assert_eq!(storage_bits::<Unsigned<16>>(), 16);
        assert_eq!(storage_bits::<Unsigned<32>>(), 32);
        assert_eq!(storage_bits::<Unsigned<64>>(), 64);
    }

    #[test]
    fn test_storage_signedness_matches_layout() {
        assert!(<StorageOf<Signed<32>> as Storage>::IS_SIGNED);
        assert!(!<StorageOf<Unsigned<32>> as Storage>::IS_SIGNED);
    }

    #[test]
    fn test_reinterpretation() {
        assert_eq!((-1i8).to_unsigned(), 0xFFu8);
        assert_eq!(i8::from_unsigned(0x80), i8::MIN);
        assert_eq!(i64::MIN.unsigned_abs(), 1u64 << 63);
        assert_eq!(200u8.unsigned_abs(), 200u8);
    }

    #[test]
    fn test_widen_and_truncate() {
        assert_eq!(u64::MAX.widen(), (1i128 << 64) - 1);
        assert_eq!(i64::MIN.widen(), -(1i128 << 63));
        assert_eq!(i32::truncate((1i128 << 32) + 1), 1);
        assert_eq!(i32::truncate(-((1i128 << 32) + 1)), -1);
        assert_eq!(u8::truncate(-1), 255);
    }

    #[test]
    fn test_is_minus_one() {
        assert!((-1i16).is_minus_one());
        assert!(!1i16.is_minus_one());
        assert!(!u16::MAX.is_minus_one());
    }

    #[test]
    fn test_signedness_display() {
        assert_eq!(Signedness::Signed.to_string(), "signed");
        assert_eq!(Signedness::Unsigned.to_string(), "unsigned");
        assert!(Signedness::Signed.is_signed());
        assert!(!Signedness::Unsigned.is_signed());
    }
}
