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

use crate::{simple_node_impl, Expr, NodeID, ObjectBody, QualifiedIdent};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// An annotation applied to a declaration, e.g. `@Deprecated { since = "2" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// The annotation type name, without the `@`.
    pub name: QualifiedIdent,
    pub body: Option<ObjectBody>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(Annotation);

/// A parenthesized, comma-separated argument list of a call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentList {
    pub arguments: Vec<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ArgumentList);

/// A documentation comment block (one or more `///` lines).
///
/// Only the location is recorded; consumers slice the text out of the source
/// buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(DocComment);
