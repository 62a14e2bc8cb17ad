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
    simple_node_impl, Annotation, ClassMethod, ClassPropertyEntry, Clazz, DocComment, Ident,
    Modifier, NodeID, QualifiedIdent, StringConstant, TypeAlias,
};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

/// A parsed source module: the root of every CST.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// The `module`/`extends`/`amends` declaration, if any.
    pub decl: Option<ModuleDecl>,
    pub imports: Vec<Import>,
    pub classes: Vec<Clazz>,
    pub type_aliases: Vec<TypeAlias>,
    pub properties: Vec<ClassPropertyEntry>,
    pub methods: Vec<ClassMethod>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(Module);

/// The module declaration: header, optional qualified name, and an optional
/// `extends`/`amends` clause.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDecl {
    pub doc_comment: Option<DocComment>,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    /// The name after the `module` keyword, if the keyword is present.
    pub name: Option<QualifiedIdent>,
    pub extends_or_amends: Option<ExtendsOrAmendsDecl>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ModuleDecl);

/// Whether a module clause extends or amends its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtendsOrAmendsKind {
    Extends,
    Amends,
}

/// An `extends "uri"` or `amends "uri"` clause of a module declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendsOrAmendsDecl {
    pub url: StringConstant,
    pub kind: ExtendsOrAmendsKind,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(ExtendsOrAmendsDecl);

/// An `import "uri"` or `import* "glob-uri"` declaration, with an optional
/// `as` alias.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    pub url: StringConstant,
    pub is_glob: bool,
    pub alias: Option<Ident>,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(Import);
