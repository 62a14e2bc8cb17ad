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

use crate::{simple_node_impl, Ident, Node, NodeID, Type};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// A type annotation, `: T`. The span covers the colon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAnnotation {
    pub type_: Type,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(TypeAnnotation);

/// A value parameter of a function literal, method, or generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parameter {
    /// The anonymous parameter `_`.
    Underscore { span: Span, id: NodeID },
    /// A named parameter with an optional type annotation.
    TypedIdent(TypedIdent),
}

impl Node for Parameter {
    fn span(&self) -> Span {
        match self {
            Self::Underscore { span, .. } => *span,
            Self::TypedIdent(n) => n.span(),
        }
    }

    fn id(&self) -> NodeID {
        match self {
            Self::Underscore { id, .. } => *id,
            Self::TypedIdent(n) => n.id(),
        }
    }
}

/// A named parameter, e.g. `name: String`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedIdent {
    pub ident: Ident,
    pub type_annotation: Option<TypeAnnotation>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(TypedIdent);

/// A parenthesized, comma-separated list of parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterList {
    pub parameters: Vec<Parameter>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ParameterList);

/// The declared variance of a type parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variance {
    #[default]
    None,
    /// Contravariant, `in T`.
    In,
    /// Covariant, `out T`.
    Out,
}

/// A single type parameter, e.g. `out E`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub variance: Variance,
    pub ident: Ident,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(TypeParameter);

/// An angle-bracketed list of type parameters, e.g. `<K, V>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameterList {
    pub parameters: Vec<TypeParameter>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(TypeParameterList);
