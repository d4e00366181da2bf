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

//! Error types surfaced by fail-policy arithmetic and casts.
//!
//! The checked primitives in [`crate::num::ops::checked_arithmetic`] report a
//! bare [`ErrorKind`]. Once the fail policy lifts such a result into a value
//! operation, the kind is paired with the [`Operation`] that produced it,
//! giving an [`ArithmeticError`] that can be matched on or displayed.

/// The reason a checked operation could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The exact result lies below the logical minimum.
    Underflow,
    /// The exact result lies above the logical maximum, or the shift
    /// amount is not smaller than the logical width.
    Overflow,
    /// The divisor was zero.
    DivisionByZero,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Underflow => write!(f, "underflow"),
            ErrorKind::Overflow => write!(f, "overflow"),
            ErrorKind::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// The operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Shl,
    Shr,
    Neg,
    Cast,
}

impl Operation {
    /// Returns the short lowercase tag of the operation, e.g. `"add"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Shl => "shl",
            Operation::Shr => "shr",
            Operation::Neg => "neg",
            Operation::Cast => "cast",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed strict integer operation: what went wrong, and where.
///
/// # Examples
///
/// ```rust
/// # use strict_int::error::{ArithmeticError, ErrorKind, Operation};
/// let err = ArithmeticError::new(ErrorKind::Overflow, Operation::Add);
/// assert_eq!(err.kind(), ErrorKind::Overflow);
/// assert_eq!(err.to_string(), "add: overflow");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArithmeticError {
    kind: ErrorKind,
    op: Operation,
}

impl ArithmeticError {
    /// Creates a new error for `op` failing with `kind`.
    #[inline]
    pub const fn new(kind: ErrorKind, op: Operation) -> Self {
        Self { kind, op }
    }

    /// Returns the kind of the failure.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the operation that failed.
    #[inline]
    pub const fn op(&self) -> Operation {
        self.op
    }
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.op, self.kind)
    }
}

impl std::error::Error for ArithmeticError {}

impl From<ArithmeticError> for ErrorKind {
    #[inline]
    fn from(e: ArithmeticError) -> Self {
        e.kind
    }
}
