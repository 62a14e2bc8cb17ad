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

//! Parent back-edges for the CST.
//!
//! Nodes own their children, so the child-to-parent direction lives outside
//! the tree: a [`ParentMap`] records, for every node id, the id of its unique
//! syntactic parent. The map is built once, right before a parse returns,
//! and never mutated afterwards.

use crate::{visitor::*, Node, NodeID};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Parent back-edges, keyed by child [`NodeID`]. The root module has no
/// entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentMap {
    edges: IndexMap<NodeID, NodeID>,
}

impl ParentMap {
    /// Builds the map for the tree rooted at `module`.
    pub fn build(module: &crate::Module) -> Self {
        let mut builder = ParentBuilder { map: ParentMap::default(), stack: Vec::new() };
        builder.visit_module(module);
        builder.map
    }

    /// Returns the parent of `id`, or [`None`] for the root.
    pub fn parent_of(&self, id: NodeID) -> Option<NodeID> {
        self.edges.get(&id).copied()
    }

    /// Iterates `(child, parent)` pairs in pre-order discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeID, NodeID)> + '_ {
        self.edges.iter().map(|(child, parent)| (*child, *parent))
    }

    /// The number of recorded edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Walks the tree keeping a stack of enclosing node ids.
struct ParentBuilder {
    map: ParentMap,
    stack: Vec<NodeID>,
}

impl ParentBuilder {
    fn enter(&mut self, id: NodeID, f: impl FnOnce(&mut Self)) {
        // An enum wrapper and its payload struct share one id; the second
        // dispatch for the same node must not re-link it.
        if self.stack.last() == Some(&id) {
            f(self);
            return;
        }
        if let Some(parent) = self.stack.last() {
            let prev = self.map.edges.insert(id, *parent);
            debug_assert!(prev.is_none(), "node {id} linked to two parents");
        }
        self.stack.push(id);
        f(self);
        self.stack.pop();
    }
}

macro_rules! parented {
    ($($method:ident($ty:ty) => $walk:expr;)*) => {
        impl CstVisitor for ParentBuilder {
            type Output = ();

            $(
                fn $method(&mut self, node: &$ty) {
                    self.enter(node.id(), |v| $walk(v, node));
                }
            )*
        }
    };
}

fn leaf(_: &mut ParentBuilder, _: &impl Node) {}

parented! {
    visit_module(crate::Module) => walk_module;
    visit_module_decl(crate::ModuleDecl) => walk_module_decl;
    visit_extends_or_amends(crate::ExtendsOrAmendsDecl) => walk_extends_or_amends;
    visit_import(crate::Import) => walk_import;
    visit_clazz(crate::Clazz) => walk_clazz;
    visit_type_alias(crate::TypeAlias) => walk_type_alias;
    visit_class_body(crate::ClassBody) => walk_class_body;
    visit_class_property(crate::ClassProperty) => walk_class_property;
    visit_class_property_expr(crate::ClassPropertyExpr) => walk_class_property_expr;
    visit_class_property_body(crate::ClassPropertyBody) => walk_class_property_body;
    visit_class_method(crate::ClassMethod) => walk_class_method;
    visit_object_body(crate::ObjectBody) => walk_object_body;
    visit_object_element(crate::ObjectElement) => walk_object_element;
    visit_object_property(crate::ObjectProperty) => walk_object_property;
    visit_object_body_property(crate::ObjectBodyProperty) => walk_object_body_property;
    visit_object_method(crate::ObjectMethod) => walk_object_method;
    visit_object_entry(crate::ObjectEntry) => walk_object_entry;
    visit_object_entry_body(crate::ObjectEntryBody) => walk_object_entry_body;
    visit_member_predicate(crate::MemberPredicate) => walk_member_predicate;
    visit_member_predicate_body(crate::MemberPredicateBody) => walk_member_predicate_body;
    visit_object_spread(crate::ObjectSpread) => walk_object_spread;
    visit_when_generator(crate::WhenGenerator) => walk_when_generator;
    visit_for_generator(crate::ForGenerator) => walk_for_generator;
    visit_expr(crate::Expr) => walk_expr;
    visit_string_constant(crate::StringConstant) => leaf;
    visit_interpolated_string(crate::InterpolatedString) => |v: &mut Self, n: &crate::InterpolatedString| walk_string_parts(v, &n.parts);
    visit_interpolated_multi_string(crate::InterpolatedMultiString) => |v: &mut Self, n: &crate::InterpolatedMultiString| walk_string_parts(v, &n.parts);
    visit_constant_parts(crate::ConstantParts) => leaf;
    visit_interpolation(crate::Interpolation) => |v: &mut Self, n: &crate::Interpolation| v.visit_expr(&n.expr);
    visit_type(crate::Type) => walk_type;
    visit_ident(crate::Ident) => leaf;
    visit_qualified_ident(crate::QualifiedIdent) => walk_qualified_ident;
    visit_modifier(crate::Modifier) => leaf;
    visit_doc_comment(crate::DocComment) => leaf;
    visit_annotation(crate::Annotation) => walk_annotation;
    visit_argument_list(crate::ArgumentList) => walk_argument_list;
    visit_parameter(crate::Parameter) => walk_parameter;
    visit_typed_ident(crate::TypedIdent) => walk_typed_ident;
    visit_parameter_list(crate::ParameterList) => walk_parameter_list;
    visit_type_annotation(crate::TypeAnnotation) => |v: &mut Self, n: &crate::TypeAnnotation| v.visit_type(&n.type_);
    visit_type_parameter(crate::TypeParameter) => |v: &mut Self, n: &crate::TypeParameter| v.visit_ident(&n.ident);
    visit_type_parameter_list(crate::TypeParameterList) => walk_type_parameter_list;
}
