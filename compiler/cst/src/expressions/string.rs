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

use crate::{simple_node_impl, Expr, Node, NodeID};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// A string literal consisting of exactly one constant text run: no escape
/// sequences, no interpolation.
///
/// `value` is the content between the delimiters, verbatim. In a
/// pound-delimited string a backslash that does not carry the required
/// pounds is ordinary text and lands here unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringConstant {
    pub value: String,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(StringConstant);

/// A single-line string literal with escapes and/or interpolated
/// expressions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpolatedString {
    pub parts: Vec<StringPart>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(InterpolatedString);

/// A multi-line string literal. Line breaks appear as explicit
/// [`StringConstantPart::Newline`] markers so that indentation-aware
/// processing downstream can find them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpolatedMultiString {
    pub parts: Vec<StringPart>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(InterpolatedMultiString);

/// One part of an interpolated string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StringPart {
    /// A run of constant content between interpolations.
    Constant(ConstantParts),
    /// An interpolated expression, `\(expr)`.
    Interpolation(Interpolation),
}

impl Node for StringPart {
    fn span(&self) -> Span {
        match self {
            Self::Constant(n) => n.span(),
            Self::Interpolation(n) => n.span(),
        }
    }

    fn id(&self) -> NodeID {
        match self {
            Self::Constant(n) => n.id(),
            Self::Interpolation(n) => n.id(),
        }
    }
}

/// A run of constant string content: text, escapes, and line breaks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantParts {
    pub parts: Vec<StringConstantPart>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ConstantParts);

/// An interpolated expression inside a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpolation {
    pub expr: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(Interpolation);

/// The kind of a simple character escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscapeKind {
    /// `\n`
    Newline,
    /// `\t`
    Tab,
    /// `\r`
    Return,
    /// `\"`
    Quote,
    /// `\\`
    Backslash,
}

/// A piece of constant string content.
///
/// Escapes are kept as opaque markers; the parser does not substitute them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StringConstantPart {
    /// A literal line break in a multi-line string.
    Newline,
    /// Verbatim text.
    Constant(String),
    /// A `\u{...}` escape; carries the hex digits between the braces.
    UnicodeEscape(String),
    /// A simple character escape.
    Escape(EscapeKind),
}
