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

//! # Checked-Arithmetic Primitives
//!
//! Policy-independent fallible operations on plain storage values. Each
//! function is generic over a [`Layout`], checks its operands against the
//! layout's *logical* bounds and either returns the new value or the
//! [`ErrorKind`] explaining why there is none.
//!
//! The checks are arranged so that the native operation is only performed
//! once it is known to stay in range; none of the functions can trip a
//! native overflow for operands that lie within the logical range.
//!
//! Operands outside the logical range of `L` are a caller bug and are caught
//! by debug assertions.

use crate::error::ErrorKind;
use crate::num::limits::{contains, max_of, min_of};
use crate::num::repr::{Layout, Storage};
use num_traits::Zero;

#[inline(always)]
fn debug_assert_in_range<L: Layout>(v: L::Storage) {
    debug_assert!(
        contains::<L>(v.widen()),
        "operand {} is outside the logical range of the layout",
        v
    );
}

/// Checked addition.
///
/// Fails with [`ErrorKind::Underflow`] when a negative `b` would carry the
/// sum below the minimum, and with [`ErrorKind::Overflow`] when a
/// non-negative `b` would carry it above the maximum.
///
/// # Examples
///
/// ```rust
/// # use strict_int::error::ErrorKind;
/// # use strict_int::num::ops::checked_arithmetic::try_add;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(try_add::<Signed<8>>(100, 27), Ok(127));
/// assert_eq!(try_add::<Signed<8>>(100, 28), Err(ErrorKind::Overflow));
/// assert_eq!(try_add::<Signed<8>>(-100, -29), Err(ErrorKind::Underflow));
/// ```
#[inline]
pub fn try_add<L: Layout>(a: L::Storage, b: L::Storage) -> Result<L::Storage, ErrorKind> {
    debug_assert_in_range::<L>(a);
    debug_assert_in_range::<L>(b);

    if b < <L::Storage as Zero>::zero() {
        if min_of::<L>() - b > a {
            return Err(ErrorKind::Underflow);
        }
    } else if max_of::<L>() - b < a {
        return Err(ErrorKind::Overflow);
    }
    Ok(a + b)
}

/// Checked subtraction.
///
/// # Examples
///
/// ```rust
/// # use strict_int::error::ErrorKind;
/// # use strict_int::num::ops::checked_arithmetic::try_sub;
/// # use strict_int::num::repr::{Signed, Unsigned};
/// assert_eq!(try_sub::<Unsigned<8>>(50, 20), Ok(30));
/// assert_eq!(try_sub::<Unsigned<8>>(20, 50), Err(ErrorKind::Underflow));
/// assert_eq!(try_sub::<Signed<8>>(127, -1), Err(ErrorKind::Overflow));
/// ```
#[inline]
pub fn try_sub<L: Layout>(a: L::Storage, b: L::Storage) -> Result<L::Storage, ErrorKind> {
    debug_assert_in_range::<L>(a);
    debug_assert_in_range::<L>(b);

    if b < <L::Storage as Zero>::zero() {
        if max_of::<L>() + b < a {
            return Err(ErrorKind::Overflow);
        }
    } else if min_of::<L>() + b > a {
        return Err(ErrorKind::Underflow);
    }
    Ok(a - b)
}

/// Checked multiplication.
///
/// A zero factor always yields zero. Otherwise the bounds are divided by `b`
/// (truncating toward zero) and compared against `a`, with the comparison
/// direction flipped for a negative `b`. `b == -1` is handled on its own
/// since `min / -1` is itself unrepresentable.
///
/// # Examples
///
/// ```rust
/// # use strict_int::error::ErrorKind;
/// # use strict_int::num::ops::checked_arithmetic::try_mul;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(try_mul::<Signed<8>>(-42, 3), Ok(-126));
/// assert_eq!(try_mul::<Signed<8>>(-43, 3), Err(ErrorKind::Underflow));
/// assert_eq!(try_mul::<Signed<8>>(-128, -1), Err(ErrorKind::Overflow));
/// assert_eq!(try_mul::<Signed<8>>(-128, 0), Ok(0));
/// ```
#[inline]
pub fn try_mul<L: Layout>(a: L::Storage, b: L::Storage) -> Result<L::Storage, ErrorKind> {
    debug_assert_in_range::<L>(a);
    debug_assert_in_range::<L>(b);

    let zero = <L::Storage as Zero>::zero();
    if b == zero {
        return Ok(zero);
    }

    let (min, max) = (min_of::<L>(), max_of::<L>());
    if b > zero {
        if a > max / b {
            return Err(ErrorKind::Overflow);
        }
        if a < min / b {
            return Err(ErrorKind::Underflow);
        }
    } else if b.is_minus_one() {
        if a == min {
            return Err(ErrorKind::Overflow);
        }
    } else {
        if a < max / b {
            return Err(ErrorKind::Overflow);
        }
        if a > min / b {
            return Err(ErrorKind::Underflow);
        }
    }
    Ok(a * b)
}

/// Checked division, truncating toward zero.
///
/// # Examples
///
/// ```rust
/// # use strict_int::error::ErrorKind;
/// # use strict_int::num::ops::checked_arithmetic::try_div;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(try_div::<Signed<8>>(-7, 2), Ok(-3));
/// assert_eq!(try_div::<Signed<8>>(5, 0), Err(ErrorKind::DivisionByZero));
/// assert_eq!(try_div::<Signed<8>>(-128, -1), Err(ErrorKind::Overflow));
/// ```
#[inline]
pub fn try_div<L: Layout>(a: L::Storage, b: L::Storage) -> Result<L::Storage, ErrorKind> {
    debug_assert_in_range::<L>(a);
    debug_assert_in_range::<L>(b);

    if b == <L::Storage as Zero>::zero() {
        return Err(ErrorKind::DivisionByZero);
    }
    if b.is_minus_one() && a == min_of::<L>() {
        return Err(ErrorKind::Overflow);
    }
    Ok(a / b)
}

/// Checked negation, defined as `0 - a`.
///
/// Negating the signed minimum overflows; negating any non-zero unsigned
/// value underflows.
///
/// # Examples
///
/// ```rust
/// # use strict_int::error::ErrorKind;
/// # use strict_int::num::ops::checked_arithmetic::try_neg;
/// # use strict_int::num::repr::{Signed, Unsigned};
/// assert_eq!(try_neg::<Signed<8>>(127), Ok(-127));
/// assert_eq!(try_neg::<Signed<8>>(-128), Err(ErrorKind::Overflow));
/// assert_eq!(try_neg::<Unsigned<8>>(1), Err(ErrorKind::Underflow));
/// ```
#[inline]
pub fn try_neg<L: Layout>(a: L::Storage) -> Result<L::Storage, ErrorKind> {
    try_sub::<L>(<L::Storage as Zero>::zero(), a)
}

/// Checked left shift.
///
/// The shift amount must be smaller than the logical width, otherwise the
/// shift fails with [`ErrorKind::Overflow`]. The shift is treated as a
/// multiplication by `2^shift`: a set bit moved into or past the sign
/// position of a signed value, or past the top of an unsigned one, fails
/// with [`ErrorKind::Overflow`] (or [`ErrorKind::Underflow`] for a negative
/// value).
///
/// # Examples
///
/// ```rust
/// # use strict_int::error::ErrorKind;
/// # use strict_int::num::ops::checked_arithmetic::try_shl;
/// # use strict_int::num::repr::{Signed, Unsigned};
/// assert_eq!(try_shl::<Unsigned<8>>(1, 7), Ok(128));
/// assert_eq!(try_shl::<Signed<8>>(1, 7), Err(ErrorKind::Overflow));
/// assert_eq!(try_shl::<Signed<8>>(-1, 7), Ok(-128));
/// assert_eq!(try_shl::<Signed<8>>(-2, 7), Err(ErrorKind::Underflow));
/// assert_eq!(try_shl::<Unsigned<8>>(0, 8), Err(ErrorKind::Overflow));
/// ```
#[inline]
pub fn try_shl<L: Layout>(a: L::Storage, shift: u32) -> Result<L::Storage, ErrorKind> {
    debug_assert_in_range::<L>(a);

    if shift >= L::BITS {
        return Err(ErrorKind::Overflow);
    }
    // |a| < 2^64 and shift < 64, so the product is exact in i128.
    try_convert::<L>(a.widen() << shift)
}

/// Checked right shift: arithmetic for signed layouts, logical for unsigned
/// ones.
///
/// Fails with [`ErrorKind::Overflow`] only when the shift amount is not
/// smaller than the logical width.
///
/// # Examples
///
/// ```rust
/// # use strict_int::error::ErrorKind;
/// # use strict_int::num::ops::checked_arithmetic::try_shr;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(try_shr::<Signed<8>>(-128, 7), Ok(-1));
/// assert_eq!(try_shr::<Signed<8>>(64, 3), Ok(8));
/// assert_eq!(try_shr::<Signed<8>>(64, 8), Err(ErrorKind::Overflow));
/// ```
#[inline]
pub fn try_shr<L: Layout>(a: L::Storage, shift: u32) -> Result<L::Storage, ErrorKind> {
    debug_assert_in_range::<L>(a);

    if shift >= L::BITS {
        return Err(ErrorKind::Overflow);
    }
    Ok(a >> shift as usize)
}

/// Checked conversion of an exact `i128` value into the storage of `L`.
///
/// # Examples
///
/// ```rust
/// # use strict_int::error::ErrorKind;
/// # use strict_int::num::ops::checked_arithmetic::try_convert;
/// # use strict_int::num::repr::Unsigned;
/// assert_eq!(try_convert::<Unsigned<8>>(255), Ok(255u8));
/// assert_eq!(try_convert::<Unsigned<8>>(256), Err(ErrorKind::Overflow));
/// assert_eq!(try_convert::<Unsigned<8>>(-1), Err(ErrorKind::Underflow));
/// ```
#[inline]
pub fn try_convert<L: Layout>(value: i128) -> Result<L::Storage, ErrorKind> {
    if value > L::MAX {
        return Err(ErrorKind::Overflow);
    }
    if value < L::MIN {
        return Err(ErrorKind::Underflow);
    }
    Ok(<L::Storage as Storage>::truncate(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::repr::{Signed, Signedness, Unsigned};

    struct Signed32InI64;

    impl Layout for Signed32InI64 {
        type Storage = i64;
        const SIGNEDNESS: Signedness = Signedness::Signed;
        const BITS: u32 = 32;
    }

    const I32_MIN: i64 = i32::MIN as i64;
    const I32_MAX: i64 = i32::MAX as i64;

    #[test]
    fn test_try_add() {
        assert_eq!(try_add::<Signed<64>>(i64::MAX, 1), Err(ErrorKind::Overflow));
        assert_eq!(try_add::<Signed<64>>(1, i64::MAX), Err(ErrorKind::Overflow));
        assert_eq!(try_add::<Signed<64>>(i64::MIN, -1), Err(ErrorKind::Underflow));
        assert_eq!(try_add::<Signed<64>>(-1, i64::MIN), Err(ErrorKind::Underflow));
        assert_eq!(try_add::<Signed<64>>(i64::MAX, i64::MIN), Ok(-1));
        assert_eq!(try_add::<Unsigned<8>>(255, 0), Ok(255));
        assert_eq!(try_add::<Unsigned<8>>(255, 1), Err(ErrorKind::Overflow));
    }

    #[test]
    fn test_try_sub() {
        assert_eq!(try_sub::<Signed<64>>(i64::MAX, -1), Err(ErrorKind::Overflow));
        assert_eq!(try_sub::<Signed<64>>(-2, i64::MAX), Err(ErrorKind::Underflow));
        assert_eq!(try_sub::<Signed<64>>(i64::MIN, 1), Err(ErrorKind::Underflow));
        assert_eq!(try_sub::<Signed<64>>(1, i64::MIN), Err(ErrorKind::Overflow));
        assert_eq!(try_sub::<Signed<64>>(-1, i64::MIN), Ok(i64::MAX));
        assert_eq!(try_sub::<Unsigned<32>>(0, 0), Ok(0));
        assert_eq!(try_sub::<Unsigned<32>>(0, 1), Err(ErrorKind::Underflow));
    }

    #[test]
    fn test_try_mul_matches_exact_product() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                let exact = a as i32 * b as i32;
                let expected = if exact > i8::MAX as i32 {
                    Err(ErrorKind::Overflow)
                } else if exact < i8::MIN as i32 {
                    Err(ErrorKind::Underflow)
                } else {
                    Ok(exact as i8)
                };
                assert_eq!(try_mul::<Signed<8>>(a, b), expected, "{a} * {b}");
            }
        }
    }

    #[test]
    fn test_try_mul_unsigned() {
        assert_eq!(try_mul::<Unsigned<8>>(20, 10), Ok(200));
        assert_eq!(try_mul::<Unsigned<8>>(20, 20), Err(ErrorKind::Overflow));
        assert_eq!(try_mul::<Unsigned<64>>(u64::MAX, 1), Ok(u64::MAX));
        assert_eq!(try_mul::<Unsigned<64>>(u64::MAX, 2), Err(ErrorKind::Overflow));
    }

    #[test]
    fn test_try_div() {
        assert_eq!(try_div::<Signed<64>>(5, 0), Err(ErrorKind::DivisionByZero));
        assert_eq!(try_div::<Signed<64>>(i64::MIN, -1), Err(ErrorKind::Overflow));
        assert_eq!(try_div::<Signed<64>>(i64::MIN, 1), Ok(i64::MIN));
        assert_eq!(try_div::<Unsigned<16>>(u16::MAX, 2), Ok(u16::MAX / 2));
        assert_eq!(try_div::<Unsigned<16>>(0, 0), Err(ErrorKind::DivisionByZero));
    }

    #[test]
    fn test_try_shl_matches_exact_product() {
        for a in i8::MIN..=i8::MAX {
            for shift in 0..8u32 {
                let exact = (a as i32) << shift;
                let expected = if exact > i8::MAX as i32 {
                    Err(ErrorKind::Overflow)
                } else if exact < i8::MIN as i32 {
                    Err(ErrorKind::Underflow)
                } else {
                    Ok(exact as i8)
                };
                assert_eq!(try_shl::<Signed<8>>(a, shift), expected, "{a} << {shift}");
            }
        }
    }

    #[test]
    fn test_shift_amount_is_bounded_by_logical_width() {
        assert_eq!(try_shl::<Unsigned<64>>(1, 63), Ok(1 << 63));
        assert_eq!(try_shl::<Unsigned<64>>(1, 64), Err(ErrorKind::Overflow));
        assert_eq!(try_shr::<Unsigned<64>>(u64::MAX, 63), Ok(1));
        assert_eq!(try_shr::<Unsigned<64>>(u64::MAX, 64), Err(ErrorKind::Overflow));
        assert_eq!(try_shr::<Signed32InI64>(I32_MIN, 31), Ok(-1));
        assert_eq!(try_shr::<Signed32InI64>(I32_MIN, 32), Err(ErrorKind::Overflow));
    }

    #[test]
    fn test_wide_storage_uses_logical_bounds() {
        assert_eq!(try_add::<Signed32InI64>(I32_MAX, 1), Err(ErrorKind::Overflow));
        assert_eq!(try_sub::<Signed32InI64>(I32_MIN, 1), Err(ErrorKind::Underflow));
        assert_eq!(try_mul::<Signed32InI64>(I32_MIN, -1), Err(ErrorKind::Overflow));
        assert_eq!(try_div::<Signed32InI64>(I32_MIN, -1), Err(ErrorKind::Overflow));
        assert_eq!(try_neg::<Signed32InI64>(I32_MIN), Err(ErrorKind::Overflow));
        assert_eq!(try_shl::<Signed32InI64>(1, 31), Err(ErrorKind::Overflow));
        assert_eq!(try_mul::<Signed32InI64>(65_536, 32_767), Ok(65_536 * 32_767));
        assert_eq!(try_mul::<Signed32InI64>(65_536, 32_768), Err(ErrorKind::Overflow));
    }

    #[test]
    fn test_try_neg() {
        assert_eq!(try_neg::<Signed<64>>(i64::MAX), Ok(-i64::MAX));
        assert_eq!(try_neg::<Signed<64>>(i64::MIN), Err(ErrorKind::Overflow));
        assert_eq!(try_neg::<Unsigned<64>>(0), Ok(0));
        assert_eq!(try_neg::<Unsigned<64>>(7), Err(ErrorKind::Underflow));
    }

    #[test]
    fn test_try_convert() {
        assert_eq!(try_convert::<Signed<32>>(i32::MAX as i128), Ok(i32::MAX));
        assert_eq!(try_convert::<Signed<32>>(5_000_000_000), Err(ErrorKind::Overflow));
        assert_eq!(try_convert::<Signed<32>>(-5_000_000_000), Err(ErrorKind::Underflow));
        assert_eq!(try_convert::<Unsigned<64>>(u64::MAX as i128), Ok(u64::MAX));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside the logical range")]
    fn test_out_of_range_operand_is_caught() {
        let _ = try_add::<Signed32InI64>(I32_MAX + 1, 0);
    }
}
