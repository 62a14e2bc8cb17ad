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

use crate::{simple_node_impl, Expr, NodeID, Parameter, StringConstant};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// `throw (expr)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowExpr {
    pub expr: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ThrowExpr);

/// `trace (expr)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceExpr {
    pub expr: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(TraceExpr);

/// An `import`/`import*` expression; the url must be a constant string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportExpr {
    pub url: StringConstant,
    pub is_glob: bool,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ImportExpr);

/// The flavor of a `read` expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadKind {
    /// `read (expr)`; fails when the resource is absent.
    Read,
    /// `read? (expr)`; yields `null` when the resource is absent.
    ReadNull,
    /// `read* (expr)`; globs over matching resources.
    ReadGlob,
}

/// A `read`/`read?`/`read*` expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadExpr {
    pub kind: ReadKind,
    pub expr: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ReadExpr);

/// `if (cond) then else other`. The else branch is mandatory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then: Box<Expr>,
    pub otherwise: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(IfExpr);

/// `let (param = value) body`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetExpr {
    pub parameter: Parameter,
    pub value: Box<Expr>,
    pub body: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(LetExpr);
