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

//! # Cross-Type Cast
//!
//! Conversion between strict integer types of possibly different widths,
//! signedness and policies. The *destination* type's policy decides what
//! happens at the boundary:
//!
//! - [`Fail`]: `Err` with [`ErrorKind::Overflow`] above `To::max_value()`,
//!   [`ErrorKind::Underflow`] below `To::min_value()`.
//! - [`Saturate`]: clamps to `To::min_value()` / `To::max_value()`.
//! - [`Wrap`]: keeps the low bits of the two's complement pattern, i.e. the
//!   usual truncating or sign-extending integer conversion.
//!
//! Range comparisons are exact regardless of the source and destination
//! signedness; both sides are compared as `i128`.
//!
//! [`Fail`]: crate::policy::Fail
//! [`Saturate`]: crate::policy::Saturate
//! [`Wrap`]: crate::policy::Wrap
//! [`ErrorKind::Overflow`]: crate::error::ErrorKind::Overflow
//! [`ErrorKind::Underflow`]: crate::error::ErrorKind::Underflow

use crate::num::repr::Storage;
use crate::policy::OverflowPolicy;
use crate::strict::StrictInteger;

/// Converts `from` into `To`, applying `To`'s overflow policy.
///
/// # Examples
///
/// ```rust
/// use strict_int::cast::cast;
/// use strict_int::error::ErrorKind;
/// use strict_int::types::{CheckedInt, I64, SaturatingUint, U8};
///
/// // Wrap: truncation to the low 8 bits.
/// assert_eq!(cast::<U8, _>(I64::new(257)), U8::new(1));
///
/// // Fail: out of range is an error.
/// let err = cast::<CheckedInt<8>, _>(I64::new(-129)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Underflow);
///
/// // Saturate: clamped.
/// assert_eq!(cast::<SaturatingUint<8>, _>(I64::new(-5)).get(), 0);
/// ```
#[inline]
pub fn cast<To, From>(from: From) -> <To::Policy as OverflowPolicy>::Output<To>
where
    To: StrictInteger,
    From: StrictInteger,
{
    let value = from.get().widen();
    <To::Policy as OverflowPolicy>::map::<_, To, _>(
        <To::Policy as OverflowPolicy>::convert::<To::Layout>(value),
        To::new,
    )
}
