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

//! # Numeric Foundations
//!
//! The storage and arithmetic layer underneath [`StrictInt`](crate::strict::StrictInt).
//! Everything here works on plain storage values, parameterized by a
//! [`Layout`](repr::Layout) that fixes the logical signedness and width.
//!
//! ## Submodules
//!
//! - `repr`: the representation selector. Maps a `(signedness, width)` pair
//!   to a native storage unit through the `Storage` and `Layout` traits.
//! - `limits`: portable logical bounds, computed from the pair alone and
//!   never from the storage unit's native range.
//! - `constants`: platform-derived widths for the size and pointer types.
//! - `ops`: checked, wrapping and saturating primitives over storage values,
//!   one module per overflow behavior.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod constants;
pub mod limits;
pub mod ops;
pub mod repr;
