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

use crate::{
    simple_node_impl, Annotation, DocComment, Expr, Ident, Modifier, Node, NodeID, ObjectBody,
    ParameterList, Type, TypeAnnotation, TypeParameterList,
};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// A class declaration.
///
/// Named `Clazz` to avoid the keyword clash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clazz {
    pub doc_comment: Option<DocComment>,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    pub name: Ident,
    pub type_params: Option<TypeParameterList>,
    /// The type after `extends`, if any.
    pub superclass: Option<Type>,
    pub body: Option<ClassBody>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(Clazz);

/// A `typealias` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAlias {
    pub doc_comment: Option<DocComment>,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    pub name: Ident,
    pub type_params: Option<TypeParameterList>,
    /// The aliased type, after `=`.
    pub body: Type,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(TypeAlias);

/// The braced body of a class: properties and methods.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassBody {
    pub properties: Vec<ClassPropertyEntry>,
    pub methods: Vec<ClassMethod>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ClassBody);

/// A property entry of a class or module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassPropertyEntry {
    /// `name: Type` -- a type annotation and nothing else.
    Property(ClassProperty),
    /// `name (: Type)? = expr`.
    PropertyExpr(ClassPropertyExpr),
    /// `name { ... } { ... }` -- one or more amending object bodies, no type.
    PropertyBody(ClassPropertyBody),
}

impl Node for ClassPropertyEntry {
    fn span(&self) -> Span {
        match self {
            Self::Property(n) => n.span(),
            Self::PropertyExpr(n) => n.span(),
            Self::PropertyBody(n) => n.span(),
        }
    }

    fn id(&self) -> NodeID {
        match self {
            Self::Property(n) => n.id(),
            Self::PropertyExpr(n) => n.id(),
            Self::PropertyBody(n) => n.id(),
        }
    }
}

/// A property declared with a type annotation only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassProperty {
    pub doc_comment: Option<DocComment>,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    pub name: Ident,
    pub type_annotation: TypeAnnotation,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ClassProperty);

/// A property defined by a value expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPropertyExpr {
    pub doc_comment: Option<DocComment>,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    pub name: Ident,
    pub type_annotation: Option<TypeAnnotation>,
    pub expr: Expr,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ClassPropertyExpr);

/// A property amended by one or more object bodies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPropertyBody {
    pub doc_comment: Option<DocComment>,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    pub name: Ident,
    /// The amending bodies, in source order. Never empty.
    pub bodies: Vec<ObjectBody>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ClassPropertyBody);

/// A method of a class or module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMethod {
    pub doc_comment: Option<DocComment>,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    pub name: Ident,
    pub type_params: Option<TypeParameterList>,
    pub parameters: ParameterList,
    pub return_type: Option<TypeAnnotation>,
    /// The body expression after `=`; absent on `abstract`/`external` methods.
    pub expr: Option<Expr>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ClassMethod);
