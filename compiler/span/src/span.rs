// Copyright (C) 2024-2026 the pkl-rs contributors.
// This file is part of the pkl-rs library.

// The pkl-rs library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The pkl-rs library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the pkl-rs library. If not, see <https://www.gnu.org/licenses/>.

use serde::{Deserialize, Serialize};
use std::{fmt, ops::Add};

/// Offset of a byte in the source buffer.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BytePos(pub u32);

/// Conversions between raw `usize` offsets and typed positions.
pub trait Pos {
    fn from_usize(n: usize) -> Self;
    fn to_usize(&self) -> usize;
}

impl Pos for BytePos {
    fn from_usize(n: usize) -> Self {
        BytePos(n as u32)
    }

    fn to_usize(&self) -> usize {
        self.0 as usize
    }
}

impl Add for BytePos {
    type Output = BytePos;

    fn add(self, rhs: BytePos) -> BytePos {
        BytePos(self.0 + rhs.0)
    }
}

impl fmt::Display for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A half-open interval `[lo, hi)` of byte offsets into the source buffer.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Span {
    /// The start position of the span, inclusive.
    pub lo: BytePos,
    /// The end position of the span, exclusive.
    pub hi: BytePos,
}

impl Span {
    /// Generates a new span from the `lo` and `hi` positions.
    pub fn new(lo: BytePos, hi: BytePos) -> Self {
        Self { lo, hi }
    }

    /// Generates a dummy span with all defaults.
    /// Should only be used in temporary or test situations.
    pub const fn dummy() -> Self {
        Self { lo: BytePos(0), hi: BytePos(0) }
    }

    /// Is the span empty?
    pub fn is_dummy(&self) -> bool {
        self.lo == self.hi
    }

    /// The length of the span in bytes.
    pub fn len(&self) -> usize {
        self.hi.to_usize() - self.lo.to_usize()
    }

    /// Is the span zero bytes long?
    pub fn is_empty(&self) -> bool {
        self.lo == self.hi
    }

    /// Does `self` fully contain `other`?
    pub fn contains(&self, other: Span) -> bool {
        self.lo <= other.lo && other.hi <= self.hi
    }

    /// Extends `self` to the end of `other`, keeping this span's start.
    pub fn extend_to(&self, other: Span) -> Span {
        Span::new(self.lo, other.hi)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.lo, self.hi)
    }
}

impl Add<&Span> for &Span {
    type Output = Span;

    fn add(self, other: &Span) -> Span {
        *self + *other
    }
}

impl Add for Span {
    type Output = Self;

    /// The union of two spans: from the smaller start to the larger end.
    fn add(self, other: Self) -> Self {
        let lo = self.lo.min(other.lo);
        let hi = self.hi.max(other.hi);
        Span::new(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(lo: u32, hi: u32) -> Span {
        Span::new(BytePos(lo), BytePos(hi))
    }

    #[test]
    fn test_union() {
        assert_eq!(span(3, 5) + span(8, 9), span(3, 9));
        assert_eq!(span(8, 9) + span(3, 5), span(3, 9));
        assert_eq!(span(3, 9) + span(4, 5), span(3, 9));
    }

    #[test]
    fn test_extend_to() {
        assert_eq!(span(3, 5).extend_to(span(8, 9)), span(3, 9));
        assert_eq!(span(3, 5).extend_to(span(5, 5)), span(3, 5));
    }

    #[test]
    fn test_contains() {
        assert!(span(0, 10).contains(span(0, 10)));
        assert!(span(0, 10).contains(span(3, 5)));
        assert!(!span(3, 5).contains(span(0, 10)));
        assert!(!span(3, 5).contains(span(4, 6)));
    }
}
