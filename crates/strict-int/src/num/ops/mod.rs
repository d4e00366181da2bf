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

//! # Arithmetic Primitives
//!
//! Free functions over raw storage values, one module per overflow behavior.
//! Each function is generic over a [`Layout`](crate::num::repr::Layout) and
//! respects its *logical* width, not the width of the storage unit.
//!
//! ## Submodules
//!
//! - `checked_arithmetic`: `try_add`, `try_sub`, `try_mul`, `try_div`,
//!   `try_neg`, `try_shl`, `try_shr` and `try_convert`, returning
//!   `Result<_, ErrorKind>` on underflow, overflow or division by zero.
//! - `wrapping_arithmetic`: modular arithmetic over `2^BITS`, computed in the
//!   unsigned counterpart of the storage unit.
//! - `saturating_arithmetic`: results clamped to the logical bounds.
//!
//! The overflow policies in [`crate::policy`] are thin dispatchers over these
//! modules.

pub mod checked_arithmetic;
pub mod saturating_arithmetic;
pub mod wrapping_arithmetic;
