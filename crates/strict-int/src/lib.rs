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

//! # Strict Int
//!
//! Fixed-width integers whose overflow behavior is part of the type. A value
//! of [`StrictInt<L, P>`] carries a logical signedness and width (the layout
//! `L`) and an overflow policy `P`:
//!
//! - [`Wrap`]: arithmetic modulo `2^BITS`, never fails.
//! - [`Fail`]: every arithmetic operator returns
//!   `Result<_, ArithmeticError>` and reports underflow, overflow and
//!   division by zero.
//! - [`Saturate`]: results are clamped to the logical bounds.
//!
//! ## Modules
//!
//! - `num`: storage selection, portable limits and the raw arithmetic
//!   primitives (checked, wrapping, saturating).
//! - `policy`: the overflow policies and their compile-time dispatch.
//! - `strict`: the value type and its operators.
//! - `cast`: policy-aware conversion between strict integer types.
//! - `types`: named instantiations (`I32`, `U8`, `ISize`, ...) and aliases.
//! - `error`: the error taxonomy surfaced by the `Fail` policy.
//!
//! ## Example
//!
//! ```rust
//! use strict_int::{cast, CheckedInt, ErrorKind, ISize, I32};
//!
//! assert_eq!(I32::max_value() + I32::new(1), I32::min_value());
//!
//! let sum = ISize::new(2) + ISize::new(3);
//! assert_eq!(sum, Ok(ISize::new(5)));
//!
//! let err = (ISize::new(5) / ISize::new(0)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DivisionByZero);
//!
//! assert_eq!(cast::<I32, _>(ISize::new(-1)), I32::new(-1));
//! assert!(cast::<CheckedInt<8>, _>(ISize::new(128)).is_err());
//! ```
//!
//! Failures under the `Fail` policy are also traced through the `log` facade
//! at `trace` level. The crate never installs a logger.

pub mod cast;
pub mod error;
pub mod num;
pub mod policy;
pub mod strict;
pub mod types;


pub use cast::cast;
pub use error::{ArithmeticError, ErrorKind, Operation};
pub use policy::{Fail, OverflowPolicy, Policy, Saturate, Wrap};
pub use strict::{StrictInt, StrictInteger};
pub use types::{
    CheckedInt, CheckedUint, I8, I16, I32, I64, IPtr, ISize, SaturatingInt, SaturatingUint, U8,
    U16, U32, U64, UPtr, USize, WrappingInt, WrappingUint,
};
