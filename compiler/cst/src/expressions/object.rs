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

use crate::{simple_node_impl, Expr, NodeID, ObjectBody, ParameterList, Type};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// An instantiation, `new Type? { ... }`. Without a type the instantiated
/// type is inferred from context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpr {
    pub type_: Option<Type>,
    pub body: ObjectBody,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(NewExpr);

/// An amend expression, `base { ... }`.
///
/// The parser only accepts parenthesized, `new`, and amend expressions as
/// the base; anything else raises an error at the `{`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmendsExpr {
    pub base: Box<Expr>,
    pub body: ObjectBody,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(AmendsExpr);

/// A function literal, `(params) -> body`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionLiteralExpr {
    pub parameters: ParameterList,
    pub body: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(FunctionLiteralExpr);

/// A parenthesized expression, `(expr)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParenthesizedExpr {
    pub expr: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ParenthesizedExpr);
