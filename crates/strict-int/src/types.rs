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

//! # Named Types
//!
//! Concrete instantiations of [`StrictInt`] and per-policy aliases by width.
//!
//! | Alias                | Layout          | Policy       |
//! |----------------------|-----------------|--------------|
//! | `I8` .. `I64`        | signed 8..64    | [`Wrap`]     |
//! | `U8` .. `U64`        | unsigned 8..64  | [`Wrap`]     |
//! | `ISize` / `USize`    | platform size   | [`Fail`]     |
//! | `IPtr` / `UPtr`      | pointer width   | [`Fail`]     |
//!
//! The generic aliases [`WrappingInt`], [`CheckedInt`], [`SaturatingInt`]
//! (and their unsigned counterparts) select any built-in width.
//!
//! ```rust
//! use strict_int::error::ErrorKind;
//! use strict_int::types::{CheckedInt, I32, ISize};
//!
//! assert_eq!(I32::max_value() + I32::new(1), I32::min_value());
//!
//! let err = (ISize::max_value() + ISize::new(1)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Overflow);
//!
//! let narrowed = ISize::new(40).cast::<CheckedInt<32>>();
//! assert_eq!(narrowed, Ok(CheckedInt::<32>::new(40)));
//! ```

use crate::num::constants::{POINTER_BITS, SIZE_BITS};
use crate::num::repr::{Signed, Unsigned};
use crate::policy::{Fail, OverflowPolicy, Saturate, Wrap};
use crate::strict::StrictInt;

/// Signed integer of `BITS` bits that wraps on overflow.
pub type WrappingInt<const BITS: u32> = StrictInt<Signed<BITS>, Wrap>;
/// Unsigned integer of `BITS` bits that wraps on overflow.
pub type WrappingUint<const BITS: u32> = StrictInt<Unsigned<BITS>, Wrap>;
/// Signed integer of `BITS` bits whose arithmetic returns `Result`.
pub type CheckedInt<const BITS: u32> = StrictInt<Signed<BITS>, Fail>;
/// Unsigned integer of `BITS` bits whose arithmetic returns `Result`.
pub type CheckedUint<const BITS: u32> = StrictInt<Unsigned<BITS>, Fail>;
/// Signed integer of `BITS` bits that clamps on overflow.
pub type SaturatingInt<const BITS: u32> = StrictInt<Signed<BITS>, Saturate>;
/// Unsigned integer of `BITS` bits that clamps on overflow.
pub type SaturatingUint<const BITS: u32> = StrictInt<Unsigned<BITS>, Saturate>;

pub type I8 = WrappingInt<8>;
pub type I16 = WrappingInt<16>;
pub type I32 = WrappingInt<32>;
pub type I64 = WrappingInt<64>;
pub type U8 = WrappingUint<8>;
pub type U16 = WrappingUint<16>;
pub type U32 = WrappingUint<32>;
pub type U64 = WrappingUint<64>;

/// Signed platform-size integer (the width of `isize`).
pub type ISize = CheckedInt<{ SIZE_BITS }>;
/// Unsigned platform-size integer (the width of `usize`).
pub type USize = CheckedUint<{ SIZE_BITS }>;
/// Signed pointer-width integer.
pub type IPtr = CheckedInt<{ POINTER_BITS }>;
/// Unsigned pointer-width integer.
pub type UPtr = CheckedUint<{ POINTER_BITS }>;

macro_rules! impl_primitive_conversions {
    ($layout:ident, $bits:literal, $prim:ty) => {
        impl<P: OverflowPolicy> From<$prim> for StrictInt<$layout<$bits>, P> {
            #[inline]
            fn from(value: $prim) -> Self {
                Self::from_raw(value)
            }
        }

        impl<P: OverflowPolicy> From<StrictInt<$layout<$bits>, P>> for $prim {
            #[inline]
            fn from(value: StrictInt<$layout<$bits>, P>) -> Self {
                value.get()
            }
        }
    };
}

impl_primitive_conversions!(Signed, 8, i8);
impl_primitive_conversions!(Signed, 16, i16);
impl_primitive_conversions!(Signed, 32, i32);
impl_primitive_conversions!(Signed, 64, i64);
impl_primitive_conversions!(Unsigned, 8, u8);
impl_primitive_conversions!(Unsigned, 16, u16);
impl_primitive_conversions!(Unsigned, 32, u32);
impl_primitive_conversions!(Unsigned, 64, u64);
