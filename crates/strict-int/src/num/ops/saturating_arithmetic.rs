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

//! # Saturating Arithmetic
//!
//! Arithmetic that clamps to the logical bounds of a [`Layout`] instead of
//! failing or wrapping. Every operation runs the matching checked primitive
//! and maps [`ErrorKind::Overflow`] to the logical maximum and
//! [`ErrorKind::Underflow`] to the logical minimum.
//!
//! Division by zero has no bound to clamp to and panics.

use crate::error::ErrorKind;
use crate::num::limits::{self, max_of, min_of};
use crate::num::ops::checked_arithmetic::{try_add, try_div, try_mul, try_neg, try_shl, try_sub};
use crate::num::repr::Layout;
use num_traits::Zero;

#[inline(always)]
fn saturate<L: Layout>(kind: ErrorKind) -> L::Storage {
    match kind {
        ErrorKind::Overflow => max_of::<L>(),
        ErrorKind::Underflow => min_of::<L>(),
        ErrorKind::DivisionByZero => panic!("attempt to divide by zero"),
    }
}

/// Saturating addition.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::saturating_arithmetic::saturating_add;
/// # use strict_int::num::repr::{Signed, Unsigned};
/// assert_eq!(saturating_add::<Unsigned<8>>(250, 10), 255);
/// assert_eq!(saturating_add::<Signed<8>>(-120, -20), -128);
/// ```
#[inline]
pub fn saturating_add<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
    try_add::<L>(a, b).unwrap_or_else(saturate::<L>)
}

/// Saturating subtraction.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::saturating_arithmetic::saturating_sub;
/// # use strict_int::num::repr::{Signed, Unsigned};
/// assert_eq!(saturating_sub::<Unsigned<8>>(5, 10), 0);
/// assert_eq!(saturating_sub::<Signed<8>>(120, -20), 127);
/// ```
#[inline]
pub fn saturating_sub<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
    try_sub::<L>(a, b).unwrap_or_else(saturate::<L>)
}

/// Saturating multiplication.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::saturating_arithmetic::saturating_mul;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(saturating_mul::<Signed<8>>(30, 10), 127);
/// assert_eq!(saturating_mul::<Signed<8>>(-30, 10), -128);
/// ```
#[inline]
pub fn saturating_mul<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
    try_mul::<L>(a, b).unwrap_or_else(saturate::<L>)
}

/// Saturating division. `MIN / -1` clamps to `MAX`.
///
/// # Panics
///
/// Panics if `b` is zero.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::saturating_arithmetic::saturating_div;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(saturating_div::<Signed<8>>(-128, -1), 127);
/// assert_eq!(saturating_div::<Signed<8>>(9, 2), 4);
/// ```
#[inline]
pub fn saturating_div<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
    try_div::<L>(a, b).unwrap_or_else(saturate::<L>)
}

/// Saturating negation.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::saturating_arithmetic::saturating_neg;
/// # use strict_int::num::repr::{Signed, Unsigned};
/// assert_eq!(saturating_neg::<Signed<8>>(-128), 127);
/// assert_eq!(saturating_neg::<Unsigned<8>>(3), 0);
/// ```
#[inline]
pub fn saturating_neg<L: Layout>(a: L::Storage) -> L::Storage {
    try_neg::<L>(a).unwrap_or_else(saturate::<L>)
}

/// Saturating left shift, treated as multiplication by `2^shift`.
///
/// Shifting a non-zero value by `BITS` or more clamps by sign; shifting
/// zero always yields zero.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::saturating_arithmetic::saturating_shl;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(saturating_shl::<Signed<8>>(1, 6), 64);
/// assert_eq!(saturating_shl::<Signed<8>>(1, 7), 127);
/// assert_eq!(saturating_shl::<Signed<8>>(-1, 40), -128);
/// assert_eq!(saturating_shl::<Signed<8>>(0, 40), 0);
/// ```
#[inline]
pub fn saturating_shl<L: Layout>(a: L::Storage, shift: u32) -> L::Storage {
    let zero = <L::Storage as Zero>::zero();
    if shift >= L::BITS {
        return if a == zero {
            zero
        } else if a < zero {
            min_of::<L>()
        } else {
            max_of::<L>()
        };
    }
    try_shl::<L>(a, shift).unwrap_or_else(saturate::<L>)
}

/// Saturating right shift. Never clamps; shifting by `BITS` or more yields
/// `0`, or `-1` for a negative value.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::saturating_arithmetic::saturating_shr;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(saturating_shr::<Signed<8>>(-100, 2), -25);
/// assert_eq!(saturating_shr::<Signed<8>>(-100, 9), -1);
/// ```
#[inline]
pub fn saturating_shr<L: Layout>(a: L::Storage, shift: u32) -> L::Storage {
    let zero = <L::Storage as Zero>::zero();
    if shift >= L::BITS {
        return if a < zero { !zero } else { zero };
    }
    a >> shift as usize
}

/// Converts an exact `i128` value by clamping it into the logical range.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::saturating_arithmetic::saturating_convert;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(saturating_convert::<Signed<32>>(5_000_000_000), i32::MAX);
/// assert_eq!(saturating_convert::<Signed<32>>(-5_000_000_000), i32::MIN);
/// ```
#[inline]
pub fn saturating_convert<L: Layout>(value: i128) -> L::Storage {
    limits::clamp::<L>(value)
}
