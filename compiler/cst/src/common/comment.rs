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

use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// The kind of a comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentKind {
    /// A `//` comment, up to the end of the line.
    Line,
    /// A `/* ... */` comment; may nest.
    Block,
    /// A `///` documentation comment line.
    Doc,
}

/// A comment removed from the token stream, kept for consumers that need
/// trivia (formatters, doc tools).
///
/// Comments are not CST nodes; they live in a side list in source order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub kind: CommentKind,
    pub span: Span,
    /// The comment text, verbatim, including its delimiters.
    pub text: String,
}
