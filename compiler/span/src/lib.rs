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

//! Byte positions and source spans for the pkl-rs front-end.
//!
//! A [`Span`] is a half-open byte interval into the source buffer handed to
//! the parser. Spans carry no reference to the buffer itself; all consumers
//! that need the underlying text slice it back out of the original source.

#![forbid(unsafe_code)]

pub mod span;
pub use span::{BytePos, Pos, Span};
