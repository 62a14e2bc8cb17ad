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

use crate::{simple_node_impl, Expr, NodeID};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// The non-null assertion, `expr!!`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonNullExpr {
    pub expr: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(NonNullExpr);

/// Arithmetic negation, `-expr`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnaryMinusExpr {
    pub expr: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(UnaryMinusExpr);

/// Logical negation, `!expr`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalNotExpr {
    pub expr: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(LogicalNotExpr);
