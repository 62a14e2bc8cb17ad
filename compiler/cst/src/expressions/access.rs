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

use crate::{simple_node_impl, ArgumentList, Expr, Ident, NodeID};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// A bare identifier reference, optionally called: `x` or `f(args)`.
///
/// An argument list is only attached when its opening paren sits on the same
/// line as the identifier with no semicolon in between.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnqualifiedAccessExpr {
    pub ident: Ident,
    pub args: Option<ArgumentList>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(UnqualifiedAccessExpr);

/// A member access `recv.name` / `recv?.name`, optionally called.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedAccessExpr {
    pub receiver: Box<Expr>,
    pub ident: Ident,
    /// `true` for the null-propagating form `?.`.
    pub is_nullable: bool,
    pub args: Option<ArgumentList>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(QualifiedAccessExpr);

/// A member access on the supertype receiver, `super.name`, optionally
/// called.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperAccessExpr {
    pub ident: Ident,
    pub args: Option<ArgumentList>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(SuperAccessExpr);

/// A subscript on the supertype receiver, `super[expr]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperSubscriptExpr {
    pub index: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(SuperSubscriptExpr);

/// A subscript, `recv[expr]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptExpr {
    pub receiver: Box<Expr>,
    pub index: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(SubscriptExpr);
