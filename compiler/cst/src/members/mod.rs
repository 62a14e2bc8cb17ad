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
    simple_node_impl, Expr, Ident, Modifier, Node, NodeID, Parameter, ParameterList,
    TypeAnnotation, TypeParameterList,
};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// The braced body of an object: an optional parameter list followed by
/// members.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectBody {
    /// The parameters before `->`, if any.
    pub parameters: Vec<Parameter>,
    pub members: Vec<ObjectMember>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ObjectBody);

/// A member of an object body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectMember {
    /// A bare expression member, e.g. the `1` in `{ 1 }`.
    Element(ObjectElement),
    /// `name (: Type)? = expr`.
    Property(ObjectProperty),
    /// `name { ... } { ... }`.
    BodyProperty(ObjectBodyProperty),
    /// `function name(...) = expr`.
    Method(ObjectMethod),
    /// `[key] = expr`.
    Entry(ObjectEntry),
    /// `[key] { ... } { ... }`.
    EntryBody(ObjectEntryBody),
    /// `[[cond]] = expr`.
    Predicate(MemberPredicate),
    /// `[[cond]] { ... } { ... }`.
    PredicateBody(MemberPredicateBody),
    /// `...expr` or `...?expr`.
    Spread(ObjectSpread),
    /// `when (cond) { ... } else { ... }`.
    WhenGenerator(WhenGenerator),
    /// `for (k, v in coll) { ... }`.
    ForGenerator(ForGenerator),
}

impl Node for ObjectMember {
    fn span(&self) -> Span {
        use ObjectMember::*;
        match self {
            Element(n) => n.span(),
            Property(n) => n.span(),
            BodyProperty(n) => n.span(),
            Method(n) => n.span(),
            Entry(n) => n.span(),
            EntryBody(n) => n.span(),
            Predicate(n) => n.span(),
            PredicateBody(n) => n.span(),
            Spread(n) => n.span(),
            WhenGenerator(n) => n.span(),
            ForGenerator(n) => n.span(),
        }
    }

    fn id(&self) -> NodeID {
        use ObjectMember::*;
        match self {
            Element(n) => n.id(),
            Property(n) => n.id(),
            BodyProperty(n) => n.id(),
            Method(n) => n.id(),
            Entry(n) => n.id(),
            EntryBody(n) => n.id(),
            Predicate(n) => n.id(),
            PredicateBody(n) => n.id(),
            Spread(n) => n.id(),
            WhenGenerator(n) => n.id(),
            ForGenerator(n) => n.id(),
        }
    }
}

/// An element member: a bare expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectElement {
    pub expr: Expr,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ObjectElement);

/// A property member assigned a value expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectProperty {
    pub modifiers: Vec<Modifier>,
    pub name: Ident,
    pub type_annotation: Option<TypeAnnotation>,
    pub expr: Expr,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ObjectProperty);

/// A property member amended by one or more object bodies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectBodyProperty {
    pub modifiers: Vec<Modifier>,
    pub name: Ident,
    /// Never empty.
    pub bodies: Vec<ObjectBody>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ObjectBodyProperty);

/// A method member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMethod {
    pub modifiers: Vec<Modifier>,
    pub name: Ident,
    pub type_params: Option<TypeParameterList>,
    pub parameters: ParameterList,
    pub return_type: Option<TypeAnnotation>,
    pub expr: Expr,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ObjectMethod);

/// An entry member keyed by an expression, assigned a value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEntry {
    pub key: Expr,
    pub value: Expr,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ObjectEntry);

/// An entry member keyed by an expression, amended by object bodies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEntryBody {
    pub key: Expr,
    /// Never empty.
    pub bodies: Vec<ObjectBody>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ObjectEntryBody);

/// A member predicate `[[cond]] = expr`, selecting elements by boolean test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPredicate {
    pub pred: Expr,
    pub value: Expr,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(MemberPredicate);

/// A member predicate amended by object bodies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPredicateBody {
    pub pred: Expr,
    /// Never empty.
    pub bodies: Vec<ObjectBody>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(MemberPredicateBody);

/// A spread member `...expr`; the nullable form `...?expr` tolerates a null
/// operand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSpread {
    pub expr: Expr,
    pub is_nullable: bool,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ObjectSpread);

/// A conditional member generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhenGenerator {
    pub condition: Expr,
    pub body: ObjectBody,
    pub else_body: Option<ObjectBody>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(WhenGenerator);

/// An iterating member generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForGenerator {
    pub key_parameter: Parameter,
    pub value_parameter: Option<Parameter>,
    pub iterable: Expr,
    pub body: ObjectBody,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ForGenerator);
