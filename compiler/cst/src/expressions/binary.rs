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
use std::fmt;

/// A binary operator.
///
/// Precedence is defined in the parser. The type-test operators `is`/`as`
/// are not here; they resolve to dedicated `TypeCheck`/`TypeCast` nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperation {
    /// Exponentiation, i.e. `**`. Right-associative.
    Pow,
    /// Multiplication, i.e. `*`.
    Mult,
    /// Division, i.e. `/`.
    Div,
    /// Truncating integer division, i.e. `~/`.
    IntDiv,
    /// Remainder, i.e. `%`.
    Mod,
    /// Addition, i.e. `+`.
    Plus,
    /// Subtraction, i.e. `-`.
    Minus,
    /// Lesser-than relation, i.e. `<`.
    Lt,
    /// Greater-than relation, i.e. `>`.
    Gt,
    /// Lesser-or-equal relation, i.e. `<=`.
    Lte,
    /// Greater-or-equal relation, i.e. `>=`.
    Gte,
    /// Equality relation, i.e. `==`.
    Eq,
    /// Inequality relation, i.e. `!=`.
    NotEq,
    /// Logical AND, i.e. `&&`.
    And,
    /// Logical OR, i.e. `||`.
    Or,
    /// Function pipe, i.e. `|>`.
    Pipe,
    /// Null coalescing, i.e. `??`. Right-associative.
    NullCoalesce,
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Pow => "**",
            Self::Mult => "*",
            Self::Div => "/",
            Self::IntDiv => "~/",
            Self::Mod => "%",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Lte => "<=",
            Self::Gte => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Pipe => "|>",
            Self::NullCoalesce => "??",
        })
    }
}

/// A binary expression, e.g. `42 + 24`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOperation,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(BinaryExpr);
