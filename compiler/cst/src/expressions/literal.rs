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

use crate::{simple_node_impl, NodeID};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// The receiver `this`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThisExpr {
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ThisExpr);

/// The enclosing-scope receiver `outer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OuterExpr {
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(OuterExpr);

/// The current module, `module`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleExpr {
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ModuleExpr);

/// The literal `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullLiteral {
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(NullLiteral);

/// A boolean literal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolLiteral {
    pub value: bool,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(BoolLiteral);

/// An integer literal.
///
/// `value` is the lexeme as written, with `_` separators stripped and any
/// base prefix (`0x`, `0b`, `0o`) preserved. Interpreting the value is left
/// to downstream consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntLiteral {
    pub value: String,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(IntLiteral);

/// A floating point literal; `value` follows the same rules as
/// [`IntLiteral`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatLiteral {
    pub value: String,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(FloatLiteral);
