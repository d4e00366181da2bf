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

//! # Wrapping Arithmetic
//!
//! Arithmetic modulo `2^BITS` for a [`Layout`]. Every operation is carried
//! out on the unsigned counterpart of the storage unit, where native
//! wrapping is fully defined, and the bit pattern is then reinterpreted and
//! reduced to the logical width: sign-extended from bit `BITS - 1` for signed
//! layouts and masked for unsigned ones. For the built-in layouts the
//! reduction is a no-op.
//!
//! Division is the one operation without a modular meaning for every input:
//! a zero divisor panics, exactly like `std::num::Wrapping`. `MIN / -1`
//! wraps to `MIN`.

use crate::num::repr::{Layout, Storage};
use num_traits::{WrappingAdd, WrappingMul, WrappingSub, Zero};

type Bits<L> = <<L as Layout>::Storage as Storage>::Unsigned;

/// Reduces a storage value to the logical width of `L`.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::wrapping_arithmetic::wrap_to_width;
/// # use strict_int::num::repr::{Layout, Signedness};
/// struct Signed4;
///
/// impl Layout for Signed4 {
///     type Storage = i8;
///     const SIGNEDNESS: Signedness = Signedness::Signed;
///     const BITS: u32 = 4;
/// }
///
/// assert_eq!(wrap_to_width::<Signed4>(8), -8);
/// assert_eq!(wrap_to_width::<Signed4>(17), 1);
/// ```
#[inline(always)]
pub fn wrap_to_width<L: Layout>(raw: L::Storage) -> L::Storage {
    let spare = (<L::Storage as Storage>::NATIVE_BITS - L::BITS) as usize;
    if spare == 0 {
        raw
    } else {
        (raw << spare) >> spare
    }
}

#[inline(always)]
fn from_bits<L: Layout>(bits: Bits<L>) -> L::Storage {
    wrap_to_width::<L>(<L::Storage as Storage>::from_unsigned(bits))
}

/// Wrapping addition.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::wrapping_arithmetic::wrapping_add;
/// # use strict_int::num::repr::{Signed, Unsigned};
/// assert_eq!(wrapping_add::<Signed<32>>(i32::MAX, 1), i32::MIN);
/// assert_eq!(wrapping_add::<Unsigned<8>>(250, 10), 4);
/// ```
#[inline]
pub fn wrapping_add<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
    from_bits::<L>(a.to_unsigned().wrapping_add(&b.to_unsigned()))
}

/// Wrapping subtraction.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::wrapping_arithmetic::wrapping_sub;
/// # use strict_int::num::repr::{Signed, Unsigned};
/// assert_eq!(wrapping_sub::<Signed<8>>(-128, 1), 127);
/// assert_eq!(wrapping_sub::<Unsigned<8>>(0, 1), 255);
/// ```
#[inline]
pub fn wrapping_sub<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
    from_bits::<L>(a.to_unsigned().wrapping_sub(&b.to_unsigned()))
}

/// Wrapping multiplication.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::wrapping_arithmetic::wrapping_mul;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(wrapping_mul::<Signed<8>>(-128, -1), -128);
/// assert_eq!(wrapping_mul::<Signed<8>>(16, 16), 0);
/// assert_eq!(wrapping_mul::<Signed<8>>(-3, 50), 106);
/// ```
#[inline]
pub fn wrapping_mul<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
    from_bits::<L>(a.to_unsigned().wrapping_mul(&b.to_unsigned()))
}

/// Wrapping division, truncating toward zero.
///
/// The quotient of the magnitudes is computed unsigned and negated (modulo
/// `2^BITS`) when the operand signs differ.
///
/// # Panics
///
/// Panics if `b` is zero.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::wrapping_arithmetic::wrapping_div;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(wrapping_div::<Signed<8>>(-7, 2), -3);
/// assert_eq!(wrapping_div::<Signed<8>>(-128, -1), -128);
/// ```
#[inline]
pub fn wrapping_div<L: Layout>(a: L::Storage, b: L::Storage) -> L::Storage {
    let zero = <L::Storage as Zero>::zero();
    if b == zero {
        panic!("attempt to divide by zero");
    }

    let quotient = a.unsigned_abs() / b.unsigned_abs();
    if (a < zero) != (b < zero) {
        from_bits::<L>(<Bits<L> as Zero>::zero().wrapping_sub(&quotient))
    } else {
        from_bits::<L>(quotient)
    }
}

/// Wrapping negation, `0 - a` modulo `2^BITS`.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::wrapping_arithmetic::wrapping_neg;
/// # use strict_int::num::repr::{Signed, Unsigned};
/// assert_eq!(wrapping_neg::<Signed<8>>(-128), -128);
/// assert_eq!(wrapping_neg::<Unsigned<8>>(1), 255);
/// ```
#[inline]
pub fn wrapping_neg<L: Layout>(a: L::Storage) -> L::Storage {
    wrapping_sub::<L>(<L::Storage as Zero>::zero(), a)
}

/// Wrapping left shift. Shifting by `BITS` or more yields zero.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::wrapping_arithmetic::wrapping_shl;
/// # use strict_int::num::repr::Signed;
/// assert_eq!(wrapping_shl::<Signed<8>>(1, 7), -128);
/// assert_eq!(wrapping_shl::<Signed<8>>(3, 7), -128);
/// assert_eq!(wrapping_shl::<Signed<8>>(1, 8), 0);
/// ```
#[inline]
pub fn wrapping_shl<L: Layout>(a: L::Storage, shift: u32) -> L::Storage {
    if shift >= L::BITS {
        return <L::Storage as Zero>::zero();
    }
    from_bits::<L>(a.to_unsigned() << shift as usize)
}

/// Wrapping right shift: arithmetic for signed layouts, logical for
/// unsigned ones. Shifting by `BITS` or more yields `0`, or `-1` for a
/// negative value.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::wrapping_arithmetic::wrapping_shr;
/// # use strict_int::num::repr::{Signed, Unsigned};
/// assert_eq!(wrapping_shr::<Signed<8>>(-128, 7), -1);
/// assert_eq!(wrapping_shr::<Signed<8>>(-128, 100), -1);
/// assert_eq!(wrapping_shr::<Unsigned<8>>(128, 100), 0);
/// ```
#[inline]
pub fn wrapping_shr<L: Layout>(a: L::Storage, shift: u32) -> L::Storage {
    let zero = <L::Storage as Zero>::zero();
    if shift >= L::BITS {
        return if a < zero { !zero } else { zero };
    }
    a >> shift as usize
}

/// Converts an exact `i128` value by keeping its low `BITS` bits.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::ops::wrapping_arithmetic::wrapping_convert;
/// # use strict_int::num::repr::{Signed, Unsigned};
/// assert_eq!(wrapping_convert::<Signed<32>>((1 << 32) + 1), 1);
/// assert_eq!(wrapping_convert::<Signed<32>>(-((1 << 32) + 1)), -1);
/// assert_eq!(wrapping_convert::<Unsigned<8>>(-1), 255);
/// ```
#[inline]
pub fn wrapping_convert<L: Layout>(value: i128) -> L::Storage {
    wrap_to_width::<L>(<L::Storage as Storage>::truncate(value))
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

    struct Unsigned12InU16;

    impl Layout for Unsigned12InU16 {
        type Storage = u16;
        const SIGNEDNESS: Signedness = Signedness::Unsigned;
        const BITS: u32 = 12;
    }

    #[test]
    fn test_matches_native_wrapping_for_i8() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                assert_eq!(wrapping_add::<Signed<8>>(a, b), a.wrapping_add(b));
                assert_eq!(wrapping_sub::<Signed<8>>(a, b), a.wrapping_sub(b));
                assert_eq!(wrapping_mul::<Signed<8>>(a, b), a.wrapping_mul(b));
                if b != 0 {
                    assert_eq!(wrapping_div::<Signed<8>>(a, b), a.wrapping_div(b));
                }
            }
        }
    }

    #[test]
    fn test_matches_native_wrapping_for_u8() {
        for a in u8::MIN..=u8::MAX {
            for b in u8::MIN..=u8::MAX {
                assert_eq!(wrapping_add::<Unsigned<8>>(a, b), a.wrapping_add(b));
                assert_eq!(wrapping_sub::<Unsigned<8>>(a, b), a.wrapping_sub(b));
                assert_eq!(wrapping_mul::<Unsigned<8>>(a, b), a.wrapping_mul(b));
                if b != 0 {
                    assert_eq!(wrapping_div::<Unsigned<8>>(a, b), a / b);
                }
            }
        }
    }

    #[test]
    fn test_boundary_identity() {
        let max = i64::MAX;
        for a in [i64::MIN, -1, 0, 1, 12345, max] {
            let gap = wrapping_sub::<Signed<64>>(max, a);
            let sum = wrapping_add::<Signed<64>>(wrapping_add::<Signed<64>>(a, gap), 1);
            assert_eq!(sum, i64::MIN);
        }
    }

    #[test]
    fn test_wide_storage_wraps_at_logical_width() {
        let min = i32::MIN as i64;
        let max = i32::MAX as i64;
        assert_eq!(wrapping_add::<Signed32InI64>(max, 1), min);
        assert_eq!(wrapping_sub::<Signed32InI64>(min, 1), max);
        assert_eq!(wrapping_mul::<Signed32InI64>(min, -1), min);
        assert_eq!(wrapping_div::<Signed32InI64>(min, -1), min);
        assert_eq!(wrapping_neg::<Signed32InI64>(min), min);
        assert_eq!(wrapping_shl::<Signed32InI64>(1, 31), min);
        assert_eq!(wrapping_shr::<Signed32InI64>(min, 32), -1);

        assert_eq!(wrapping_add::<Unsigned12InU16>(4095, 1), 0);
        assert_eq!(wrapping_sub::<Unsigned12InU16>(0, 1), 4095);
        assert_eq!(wrapping_mul::<Unsigned12InU16>(64, 64), 0);
        assert_eq!(wrapping_shl::<Unsigned12InU16>(0xFFF, 4), 0xFF0);
        assert_eq!(wrapping_convert::<Unsigned12InU16>(4097), 1);
    }

    #[test]
    fn test_shift_past_width_is_defined() {
        assert_eq!(wrapping_shl::<Signed<64>>(-1, 64), 0);
        assert_eq!(wrapping_shl::<Unsigned<32>>(u32::MAX, u32::MAX), 0);
        assert_eq!(wrapping_shr::<Signed<64>>(i64::MIN, 64), -1);
        assert_eq!(wrapping_shr::<Signed<64>>(i64::MAX, 64), 0);
        assert_eq!(wrapping_shr::<Unsigned<64>>(u64::MAX, 64), 0);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_divide_by_zero_panics() {
        wrapping_div::<Signed<32>>(5, 0);
    }
}
