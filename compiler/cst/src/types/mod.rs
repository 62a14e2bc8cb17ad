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

use crate::{simple_node_impl, Expr, Node, NodeID, QualifiedIdent, StringConstant};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// A type as written in source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    /// The `unknown` type.
    Unknown(UnknownType),
    /// The `nothing` type.
    Nothing(NothingType),
    /// The `module` type.
    Module(ModuleType),
    /// A string-literal type, e.g. `"north"`.
    StringConstant(StringConstantType),
    /// A named type with optional type arguments, e.g. `Mapping<String, Int>`.
    Declared(DeclaredType),
    /// A parenthesized type.
    Parenthesized(ParenthesizedType),
    /// A nullable type, `T?`.
    Nullable(NullableType),
    /// A constrained type, `T(expr, ...)`.
    Constrained(ConstrainedType),
    /// A union alternative marked as the default, `*T`.
    DefaultUnion(DefaultUnionType),
    /// A union type, `A | B`.
    Union(UnionType),
    /// A function type, `(A, B) -> R`.
    Function(FunctionType),
}

impl Node for Type {
    fn span(&self) -> Span {
        use Type::*;
        match self {
            Unknown(n) => n.span(),
            Nothing(n) => n.span(),
            Module(n) => n.span(),
            StringConstant(n) => n.span(),
            Declared(n) => n.span(),
            Parenthesized(n) => n.span(),
            Nullable(n) => n.span(),
            Constrained(n) => n.span(),
            DefaultUnion(n) => n.span(),
            Union(n) => n.span(),
            Function(n) => n.span(),
        }
    }

    fn id(&self) -> NodeID {
        use Type::*;
        match self {
            Unknown(n) => n.id(),
            Nothing(n) => n.id(),
            Module(n) => n.id(),
            StringConstant(n) => n.id(),
            Declared(n) => n.id(),
            Parenthesized(n) => n.id(),
            Nullable(n) => n.id(),
            Constrained(n) => n.id(),
            DefaultUnion(n) => n.id(),
            Union(n) => n.id(),
            Function(n) => n.id(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownType {
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(UnknownType);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NothingType {
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(NothingType);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleType {
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ModuleType);

/// A type denoting one exact string value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringConstantType {
    pub literal: StringConstant,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(StringConstantType);

/// A reference to a declared type, optionally applied to type arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredType {
    pub name: QualifiedIdent,
    pub type_args: Vec<Type>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(DeclaredType);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParenthesizedType {
    pub type_: Box<Type>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ParenthesizedType);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullableType {
    pub base: Box<Type>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(NullableType);

/// A type further constrained by boolean expressions over `this`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstrainedType {
    pub base: Box<Type>,
    /// Never empty.
    pub constraints: Vec<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ConstrainedType);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultUnionType {
    pub base: Box<Type>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(DefaultUnionType);

/// A union of two types. Unions built from `A | B | C` lean left.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionType {
    pub left: Box<Type>,
    pub right: Box<Type>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(UnionType);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionType {
    pub parameters: Vec<Type>,
    pub return_type: Box<Type>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(FunctionType);
