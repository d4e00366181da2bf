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

//! # Portable Limits
//!
//! Logical bounds of a `(signedness, bit-width)` pair, computed from the pair
//! alone and never from the native range of the storage unit. A 32-bit
//! logical value kept in a 64-bit storage unit still reports 32-bit bounds.
//!
//! - Unsigned: `[0, 2^BITS - 1]`
//! - Signed: `[-2^(BITS-1), 2^(BITS-1) - 1]`
//!
//! Bounds are computed in `i128`, where every width up to 64 is exact.

use crate::num::repr::{Layout, Signedness, Storage};

/// Smallest value of a `bits`-wide integer with the given signedness.
///
/// # Panics
///
/// Panics (at compile time when used in a constant) if `bits` is `0` or
/// greater than `64`.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::limits::logical_min;
/// # use strict_int::num::repr::Signedness;
/// assert_eq!(logical_min(Signedness::Signed, 8), -128);
/// assert_eq!(logical_min(Signedness::Unsigned, 64), 0);
/// ```
pub const fn logical_min(signedness: Signedness, bits: u32) -> i128 {
    assert!(bits > 0 && bits <= 64, "unsupported logical width");
    match signedness {
        Signedness::Signed => -(1i128 << (bits - 1)),
        Signedness::Unsigned => 0,
    }
}

/// Largest value of a `bits`-wide integer with the given signedness.
///
/// # Panics
///
/// Panics (at compile time when used in a constant) if `bits` is `0` or
/// greater than `64`.
///
/// # Examples
///
/// ```rust
/// # use strict_int::num::limits::logical_max;
/// # use strict_int::num::repr::Signedness;
/// assert_eq!(logical_max(Signedness::Signed, 8), 127);
/// assert_eq!(logical_max(Signedness::Unsigned, 8), 255);
/// ```
pub const fn logical_max(signedness: Signedness, bits: u32) -> i128 {
    assert!(bits > 0 && bits <= 64, "unsupported logical width");
    match signedness {
        Signedness::Signed => (1i128 << (bits - 1)) - 1,
        Signedness::Unsigned => (1i128 << bits) - 1,
    }
}

/// The logical minimum of `L`, in its storage unit.
#[inline(always)]
pub fn min_of<L: Layout>() -> L::Storage {
    <L::Storage as Storage>::truncate(L::MIN)
}

/// The logical maximum of `L`, in its storage unit.
#[inline(always)]
pub fn max_of<L: Layout>() -> L::Storage {
    <L::Storage as Storage>::truncate(L::MAX)
}

/// Returns `true` if `value` lies within the logical range of `L`.
#[inline(always)]
pub fn contains<L: Layout>(value: i128) -> bool {
    value >= L::MIN && value <= L::MAX
}

/// Clamps `value` into the logical range of `L`.
#[inline(always)]
pub fn clamp<L: Layout>(value: i128) -> L::Storage {
    <L::Storage as Storage>::truncate(value.clamp(L::MIN, L::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::repr::{Signed, Unsigned};

    struct Signed32InI64;

    impl Layout for Signed32InI64 {
        type Storage = i64;
        const SIGNEDNESS: Signedness = Signedness::Signed;
        const BITS: u32 = 32;
    }

    struct Unsigned32InU64;

    impl Layout for Unsigned32InU64 {
        type Storage = u64;
        const SIGNEDNESS: Signedness = Signedness::Unsigned;
        const BITS: u32 = 32;
    }

    #[test]
    fn test_unsigned_boundaries() {
        assert_eq!(min_of::<Unsigned<8>>(), 0);
        assert_eq!(max_of::<Unsigned<8>>(), u8::MAX);
        assert_eq!(max_of::<Unsigned<16>>(), u16::MAX);
        assert_eq!(max_of::<Unsigned<32>>(), u32::MAX);
        assert_eq!(max_of::<Unsigned<64>>(), u64::MAX);
    }

    #[test]
    fn test_signed_boundaries() {
        assert_eq!(min_of::<Signed<8>>(), i8::MIN);
        assert_eq!(max_of::<Signed<8>>(), i8::MAX);
        assert_eq!(min_of::<Signed<16>>(), i16::MIN);
        assert_eq!(max_of::<Signed<16>>(), i16::MAX);
        assert_eq!(min_of::<Signed<32>>(), i32::MIN);
        assert_eq!(max_of::<Signed<32>>(), i32::MAX);
        assert_eq!(min_of::<Signed<64>>(), i64::MIN);
        assert_eq!(max_of::<Signed<64>>(), i64::MAX);
    }

    #[test]
    fn test_limits_ignore_storage_width() {
        assert_eq!(min_of::<Signed32InI64>(), i32::MIN as i64);
        assert_eq!(max_of::<Signed32InI64>(), i32::MAX as i64);
        assert_eq!(min_of::<Unsigned32InU64>(), 0);
        assert_eq!(max_of::<Unsigned32InU64>(), u32::MAX as u64);
    }

    #[test]
    fn test_odd_widths() {
        assert_eq!(logical_min(Signedness::Signed, 1), -1);
        assert_eq!(logical_max(Signedness::Signed, 1), 0);
        assert_eq!(logical_max(Signedness::Unsigned, 1), 1);
        assert_eq!(logical_max(Signedness::Unsigned, 12), 4095);
    }

    #[test]
    fn test_contains_and_clamp() {
        assert!(contains::<Signed<8>>(-128));
        assert!(!contains::<Signed<8>>(128));
        assert!(!contains::<Unsigned<8>>(-1));
        assert_eq!(clamp::<Signed<8>>(1000), i8::MAX);
        assert_eq!(clamp::<Signed<8>>(-1000), i8::MIN);
        assert_eq!(clamp::<Unsigned<16>>(-5), 0);
        assert_eq!(clamp::<Unsigned<16>>(7), 7);
    }

    #[test]
    #[should_panic(expected = "unsupported logical width")]
    fn test_zero_width_panics() {
        let bits = std::hint::black_box(0);
        logical_min(Signedness::Signed, bits);
    }
}
