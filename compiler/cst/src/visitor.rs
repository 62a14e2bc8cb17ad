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

//! A visitor over the CST.
//!
//! Each `visit_*` method defaults to the matching `walk_*` function, which
//! visits the node's children in source order and returns the last child's
//! result (or `Output::default()` for leaves). Implementations override the
//! methods they care about and let the defaults carry the traversal.

use crate::*;

/// A visitor over CST nodes.
pub trait CstVisitor: Sized {
    type Output: Default;

    fn visit_module(&mut self, node: &Module) -> Self::Output {
        walk_module(self, node)
    }

    fn visit_module_decl(&mut self, node: &ModuleDecl) -> Self::Output {
        walk_module_decl(self, node)
    }

    fn visit_extends_or_amends(&mut self, node: &ExtendsOrAmendsDecl) -> Self::Output {
        walk_extends_or_amends(self, node)
    }

    fn visit_import(&mut self, node: &Import) -> Self::Output {
        walk_import(self, node)
    }

    fn visit_clazz(&mut self, node: &Clazz) -> Self::Output {
        walk_clazz(self, node)
    }

    fn visit_type_alias(&mut self, node: &TypeAlias) -> Self::Output {
        walk_type_alias(self, node)
    }

    fn visit_class_body(&mut self, node: &ClassBody) -> Self::Output {
        walk_class_body(self, node)
    }

    fn visit_class_property_entry(&mut self, node: &ClassPropertyEntry) -> Self::Output {
        walk_class_property_entry(self, node)
    }

    fn visit_class_property(&mut self, node: &ClassProperty) -> Self::Output {
        walk_class_property(self, node)
    }

    fn visit_class_property_expr(&mut self, node: &ClassPropertyExpr) -> Self::Output {
        walk_class_property_expr(self, node)
    }

    fn visit_class_property_body(&mut self, node: &ClassPropertyBody) -> Self::Output {
        walk_class_property_body(self, node)
    }

    fn visit_class_method(&mut self, node: &ClassMethod) -> Self::Output {
        walk_class_method(self, node)
    }

    fn visit_object_body(&mut self, node: &ObjectBody) -> Self::Output {
        walk_object_body(self, node)
    }

    fn visit_object_member(&mut self, node: &ObjectMember) -> Self::Output {
        walk_object_member(self, node)
    }

    fn visit_object_element(&mut self, node: &ObjectElement) -> Self::Output {
        walk_object_element(self, node)
    }

    fn visit_object_property(&mut self, node: &ObjectProperty) -> Self::Output {
        walk_object_property(self, node)
    }

    fn visit_object_body_property(&mut self, node: &ObjectBodyProperty) -> Self::Output {
        walk_object_body_property(self, node)
    }

    fn visit_object_method(&mut self, node: &ObjectMethod) -> Self::Output {
        walk_object_method(self, node)
    }

    fn visit_object_entry(&mut self, node: &ObjectEntry) -> Self::Output {
        walk_object_entry(self, node)
    }

    fn visit_object_entry_body(&mut self, node: &ObjectEntryBody) -> Self::Output {
        walk_object_entry_body(self, node)
    }

    fn visit_member_predicate(&mut self, node: &MemberPredicate) -> Self::Output {
        walk_member_predicate(self, node)
    }

    fn visit_member_predicate_body(&mut self, node: &MemberPredicateBody) -> Self::Output {
        walk_member_predicate_body(self, node)
    }

    fn visit_object_spread(&mut self, node: &ObjectSpread) -> Self::Output {
        walk_object_spread(self, node)
    }

    fn visit_when_generator(&mut self, node: &WhenGenerator) -> Self::Output {
        walk_when_generator(self, node)
    }

    fn visit_for_generator(&mut self, node: &ForGenerator) -> Self::Output {
        walk_for_generator(self, node)
    }

    fn visit_expr(&mut self, node: &Expr) -> Self::Output {
        walk_expr(self, node)
    }

    fn visit_string_constant(&mut self, _node: &StringConstant) -> Self::Output {
        Self::Output::default()
    }

    fn visit_interpolated_string(&mut self, node: &InterpolatedString) -> Self::Output {
        walk_string_parts(self, &node.parts)
    }

    fn visit_interpolated_multi_string(&mut self, node: &InterpolatedMultiString) -> Self::Output {
        walk_string_parts(self, &node.parts)
    }

    fn visit_string_part(&mut self, node: &StringPart) -> Self::Output {
        walk_string_part(self, node)
    }

    fn visit_constant_parts(&mut self, _node: &ConstantParts) -> Self::Output {
        Self::Output::default()
    }

    fn visit_interpolation(&mut self, node: &Interpolation) -> Self::Output {
        self.visit_expr(&node.expr)
    }

    fn visit_type(&mut self, node: &Type) -> Self::Output {
        walk_type(self, node)
    }

    fn visit_ident(&mut self, _node: &Ident) -> Self::Output {
        Self::Output::default()
    }

    fn visit_qualified_ident(&mut self, node: &QualifiedIdent) -> Self::Output {
        walk_qualified_ident(self, node)
    }

    fn visit_modifier(&mut self, _node: &Modifier) -> Self::Output {
        Self::Output::default()
    }

    fn visit_doc_comment(&mut self, _node: &DocComment) -> Self::Output {
        Self::Output::default()
    }

    fn visit_annotation(&mut self, node: &Annotation) -> Self::Output {
        walk_annotation(self, node)
    }

    fn visit_argument_list(&mut self, node: &ArgumentList) -> Self::Output {
        walk_argument_list(self, node)
    }

    fn visit_parameter(&mut self, node: &Parameter) -> Self::Output {
        walk_parameter(self, node)
    }

    fn visit_typed_ident(&mut self, node: &TypedIdent) -> Self::Output {
        walk_typed_ident(self, node)
    }

    fn visit_parameter_list(&mut self, node: &ParameterList) -> Self::Output {
        walk_parameter_list(self, node)
    }

    fn visit_type_annotation(&mut self, node: &TypeAnnotation) -> Self::Output {
        self.visit_type(&node.type_)
    }

    fn visit_type_parameter(&mut self, node: &TypeParameter) -> Self::Output {
        self.visit_ident(&node.ident)
    }

    fn visit_type_parameter_list(&mut self, node: &TypeParameterList) -> Self::Output {
        walk_type_parameter_list(self, node)
    }
}

/// Visits the header shared by declarations and returns the last result.
fn walk_header<V: CstVisitor>(
    v: &mut V,
    doc: &Option<DocComment>,
    annotations: &[Annotation],
    modifiers: &[Modifier],
) -> V::Output {
    let mut out = V::Output::default();
    if let Some(doc) = doc {
        out = v.visit_doc_comment(doc);
    }
    for annotation in annotations {
        out = v.visit_annotation(annotation);
    }
    for modifier in modifiers {
        out = v.visit_modifier(modifier);
    }
    out
}

pub fn walk_module<V: CstVisitor>(v: &mut V, node: &Module) -> V::Output {
    let mut out = V::Output::default();
    if let Some(decl) = &node.decl {
        out = v.visit_module_decl(decl);
    }
    for import in &node.imports {
        out = v.visit_import(import);
    }
    for class in &node.classes {
        out = v.visit_clazz(class);
    }
    for alias in &node.type_aliases {
        out = v.visit_type_alias(alias);
    }
    for property in &node.properties {
        out = v.visit_class_property_entry(property);
    }
    for method in &node.methods {
        out = v.visit_class_method(method);
    }
    out
}

pub fn walk_module_decl<V: CstVisitor>(v: &mut V, node: &ModuleDecl) -> V::Output {
    let mut out = walk_header(v, &node.doc_comment, &node.annotations, &node.modifiers);
    if let Some(name) = &node.name {
        out = v.visit_qualified_ident(name);
    }
    if let Some(clause) = &node.extends_or_amends {
        out = v.visit_extends_or_amends(clause);
    }
    out
}

pub fn walk_extends_or_amends<V: CstVisitor>(v: &mut V, node: &ExtendsOrAmendsDecl) -> V::Output {
    v.visit_string_constant(&node.url)
}

pub fn walk_import<V: CstVisitor>(v: &mut V, node: &Import) -> V::Output {
    let mut out = v.visit_string_constant(&node.url);
    if let Some(alias) = &node.alias {
        out = v.visit_ident(alias);
    }
    out
}

pub fn walk_clazz<V: CstVisitor>(v: &mut V, node: &Clazz) -> V::Output {
    walk_header(v, &node.doc_comment, &node.annotations, &node.modifiers);
    let mut out = v.visit_ident(&node.name);
    if let Some(params) = &node.type_params {
        out = v.visit_type_parameter_list(params);
    }
    if let Some(superclass) = &node.superclass {
        out = v.visit_type(superclass);
    }
    if let Some(body) = &node.body {
        out = v.visit_class_body(body);
    }
    out
}

pub fn walk_type_alias<V: CstVisitor>(v: &mut V, node: &TypeAlias) -> V::Output {
    walk_header(v, &node.doc_comment, &node.annotations, &node.modifiers);
    v.visit_ident(&node.name);
    if let Some(params) = &node.type_params {
        v.visit_type_parameter_list(params);
    }
    v.visit_type(&node.body)
}

pub fn walk_class_body<V: CstVisitor>(v: &mut V, node: &ClassBody) -> V::Output {
    let mut out = V::Output::default();
    for property in &node.properties {
        out = v.visit_class_property_entry(property);
    }
    for method in &node.methods {
        out = v.visit_class_method(method);
    }
    out
}

pub fn walk_class_property_entry<V: CstVisitor>(v: &mut V, node: &ClassPropertyEntry) -> V::Output {
    match node {
        ClassPropertyEntry::Property(n) => v.visit_class_property(n),
        ClassPropertyEntry::PropertyExpr(n) => v.visit_class_property_expr(n),
        ClassPropertyEntry::PropertyBody(n) => v.visit_class_property_body(n),
    }
}

pub fn walk_class_property<V: CstVisitor>(v: &mut V, node: &ClassProperty) -> V::Output {
    walk_header(v, &node.doc_comment, &node.annotations, &node.modifiers);
    v.visit_ident(&node.name);
    v.visit_type_annotation(&node.type_annotation)
}

pub fn walk_class_property_expr<V: CstVisitor>(v: &mut V, node: &ClassPropertyExpr) -> V::Output {
    walk_header(v, &node.doc_comment, &node.annotations, &node.modifiers);
    v.visit_ident(&node.name);
    if let Some(annotation) = &node.type_annotation {
        v.visit_type_annotation(annotation);
    }
    v.visit_expr(&node.expr)
}

pub fn walk_class_property_body<V: CstVisitor>(v: &mut V, node: &ClassPropertyBody) -> V::Output {
    walk_header(v, &node.doc_comment, &node.annotations, &node.modifiers);
    let mut out = v.visit_ident(&node.name);
    for body in &node.bodies {
        out = v.visit_object_body(body);
    }
    out
}

pub fn walk_class_method<V: CstVisitor>(v: &mut V, node: &ClassMethod) -> V::Output {
    walk_header(v, &node.doc_comment, &node.annotations, &node.modifiers);
    let mut out = v.visit_ident(&node.name);
    if let Some(params) = &node.type_params {
        out = v.visit_type_parameter_list(params);
    }
    out = v.visit_parameter_list(&node.parameters);
    if let Some(annotation) = &node.return_type {
        out = v.visit_type_annotation(annotation);
    }
    if let Some(expr) = &node.expr {
        out = v.visit_expr(expr);
    }
    out
}

pub fn walk_object_body<V: CstVisitor>(v: &mut V, node: &ObjectBody) -> V::Output {
    let mut out = V::Output::default();
    for parameter in &node.parameters {
        out = v.visit_parameter(parameter);
    }
    for member in &node.members {
        out = v.visit_object_member(member);
    }
    out
}

pub fn walk_object_member<V: CstVisitor>(v: &mut V, node: &ObjectMember) -> V::Output {
    use ObjectMember::*;
    match node {
        Element(n) => v.visit_object_element(n),
        Property(n) => v.visit_object_property(n),
        BodyProperty(n) => v.visit_object_body_property(n),
        Method(n) => v.visit_object_method(n),
        Entry(n) => v.visit_object_entry(n),
        EntryBody(n) => v.visit_object_entry_body(n),
        Predicate(n) => v.visit_member_predicate(n),
        PredicateBody(n) => v.visit_member_predicate_body(n),
        Spread(n) => v.visit_object_spread(n),
        WhenGenerator(n) => v.visit_when_generator(n),
        ForGenerator(n) => v.visit_for_generator(n),
    }
}

pub fn walk_object_element<V: CstVisitor>(v: &mut V, node: &ObjectElement) -> V::Output {
    v.visit_expr(&node.expr)
}

pub fn walk_object_property<V: CstVisitor>(v: &mut V, node: &ObjectProperty) -> V::Output {
    for modifier in &node.modifiers {
        v.visit_modifier(modifier);
    }
    v.visit_ident(&node.name);
    if let Some(annotation) = &node.type_annotation {
        v.visit_type_annotation(annotation);
    }
    v.visit_expr(&node.expr)
}

pub fn walk_object_body_property<V: CstVisitor>(v: &mut V, node: &ObjectBodyProperty) -> V::Output {
    for modifier in &node.modifiers {
        v.visit_modifier(modifier);
    }
    let mut out = v.visit_ident(&node.name);
    for body in &node.bodies {
        out = v.visit_object_body(body);
    }
    out
}

pub fn walk_object_method<V: CstVisitor>(v: &mut V, node: &ObjectMethod) -> V::Output {
    for modifier in &node.modifiers {
        v.visit_modifier(modifier);
    }
    v.visit_ident(&node.name);
    if let Some(params) = &node.type_params {
        v.visit_type_parameter_list(params);
    }
    v.visit_parameter_list(&node.parameters);
    if let Some(annotation) = &node.return_type {
        v.visit_type_annotation(annotation);
    }
    v.visit_expr(&node.expr)
}

pub fn walk_object_entry<V: CstVisitor>(v: &mut V, node: &ObjectEntry) -> V::Output {
    v.visit_expr(&node.key);
    v.visit_expr(&node.value)
}

pub fn walk_object_entry_body<V: CstVisitor>(v: &mut V, node: &ObjectEntryBody) -> V::Output {
    let mut out = v.visit_expr(&node.key);
    for body in &node.bodies {
        out = v.visit_object_body(body);
    }
    out
}

pub fn walk_member_predicate<V: CstVisitor>(v: &mut V, node: &MemberPredicate) -> V::Output {
    v.visit_expr(&node.pred);
    v.visit_expr(&node.value)
}

pub fn walk_member_predicate_body<V: CstVisitor>(
    v: &mut V,
    node: &MemberPredicateBody,
) -> V::Output {
    let mut out = v.visit_expr(&node.pred);
    for body in &node.bodies {
        out = v.visit_object_body(body);
    }
    out
}

pub fn walk_object_spread<V: CstVisitor>(v: &mut V, node: &ObjectSpread) -> V::Output {
    v.visit_expr(&node.expr)
}

pub fn walk_when_generator<V: CstVisitor>(v: &mut V, node: &WhenGenerator) -> V::Output {
    v.visit_expr(&node.condition);
    let mut out = v.visit_object_body(&node.body);
    if let Some(else_body) = &node.else_body {
        out = v.visit_object_body(else_body);
    }
    out
}

pub fn walk_for_generator<V: CstVisitor>(v: &mut V, node: &ForGenerator) -> V::Output {
    v.visit_parameter(&node.key_parameter);
    if let Some(parameter) = &node.value_parameter {
        v.visit_parameter(parameter);
    }
    v.visit_expr(&node.iterable);
    v.visit_object_body(&node.body)
}

pub fn walk_expr<V: CstVisitor>(v: &mut V, node: &Expr) -> V::Output {
    use Expr::*;
    match node {
        This(_) | Outer(_) | Module(_) | Null(_) | Bool(_) | Int(_) | Float(_) => {
            V::Output::default()
        }
        StringConstant(n) => v.visit_string_constant(n),
        InterpolatedString(n) => v.visit_interpolated_string(n),
        InterpolatedMultiString(n) => v.visit_interpolated_multi_string(n),
        Throw(n) => v.visit_expr(&n.expr),
        Trace(n) => v.visit_expr(&n.expr),
        Import(n) => v.visit_string_constant(&n.url),
        Read(n) => v.visit_expr(&n.expr),
        UnqualifiedAccess(n) => {
            let mut out = v.visit_ident(&n.ident);
            if let Some(args) = &n.args {
                out = v.visit_argument_list(args);
            }
            out
        }
        QualifiedAccess(n) => {
            v.visit_expr(&n.receiver);
            let mut out = v.visit_ident(&n.ident);
            if let Some(args) = &n.args {
                out = v.visit_argument_list(args);
            }
            out
        }
        SuperAccess(n) => {
            let mut out = v.visit_ident(&n.ident);
            if let Some(args) = &n.args {
                out = v.visit_argument_list(args);
            }
            out
        }
        SuperSubscript(n) => v.visit_expr(&n.index),
        Subscript(n) => {
            v.visit_expr(&n.receiver);
            v.visit_expr(&n.index)
        }
        NonNull(n) => v.visit_expr(&n.expr),
        UnaryMinus(n) => v.visit_expr(&n.expr),
        LogicalNot(n) => v.visit_expr(&n.expr),
        Binary(n) => {
            v.visit_expr(&n.left);
            v.visit_expr(&n.right)
        }
        TypeCheck(n) => {
            v.visit_expr(&n.expr);
            v.visit_type(&n.type_)
        }
        TypeCast(n) => {
            v.visit_expr(&n.expr);
            v.visit_type(&n.type_)
        }
        If(n) => {
            v.visit_expr(&n.condition);
            v.visit_expr(&n.then);
            v.visit_expr(&n.otherwise)
        }
        Let(n) => {
            v.visit_parameter(&n.parameter);
            v.visit_expr(&n.value);
            v.visit_expr(&n.body)
        }
        FunctionLiteral(n) => {
            v.visit_parameter_list(&n.parameters);
            v.visit_expr(&n.body)
        }
        Parenthesized(n) => v.visit_expr(&n.expr),
        New(n) => {
            if let Some(type_) = &n.type_ {
                v.visit_type(type_);
            }
            v.visit_object_body(&n.body)
        }
        Amends(n) => {
            v.visit_expr(&n.base);
            v.visit_object_body(&n.body)
        }
    }
}

pub fn walk_string_parts<V: CstVisitor>(v: &mut V, parts: &[StringPart]) -> V::Output {
    let mut out = V::Output::default();
    for part in parts {
        out = v.visit_string_part(part);
    }
    out
}

pub fn walk_string_part<V: CstVisitor>(v: &mut V, node: &StringPart) -> V::Output {
    match node {
        StringPart::Constant(n) => v.visit_constant_parts(n),
        StringPart::Interpolation(n) => v.visit_interpolation(n),
    }
}

pub fn walk_type<V: CstVisitor>(v: &mut V, node: &Type) -> V::Output {
    use Type::*;
    match node {
        Unknown(_) | Nothing(_) | Module(_) => V::Output::default(),
        StringConstant(n) => v.visit_string_constant(&n.literal),
        Declared(n) => {
            let mut out = v.visit_qualified_ident(&n.name);
            for arg in &n.type_args {
                out = v.visit_type(arg);
            }
            out
        }
        Parenthesized(n) => v.visit_type(&n.type_),
        Nullable(n) => v.visit_type(&n.base),
        Constrained(n) => {
            let mut out = v.visit_type(&n.base);
            for constraint in &n.constraints {
                out = v.visit_expr(constraint);
            }
            out
        }
        DefaultUnion(n) => v.visit_type(&n.base),
        Union(n) => {
            v.visit_type(&n.left);
            v.visit_type(&n.right)
        }
        Function(n) => {
            for parameter in &n.parameters {
                v.visit_type(parameter);
            }
            v.visit_type(&n.return_type)
        }
    }
}

pub fn walk_qualified_ident<V: CstVisitor>(v: &mut V, node: &QualifiedIdent) -> V::Output {
    let mut out = V::Output::default();
    for part in &node.parts {
        out = v.visit_ident(part);
    }
    out
}

pub fn walk_annotation<V: CstVisitor>(v: &mut V, node: &Annotation) -> V::Output {
    let mut out = v.visit_qualified_ident(&node.name);
    if let Some(body) = &node.body {
        out = v.visit_object_body(body);
    }
    out
}

pub fn walk_argument_list<V: CstVisitor>(v: &mut V, node: &ArgumentList) -> V::Output {
    let mut out = V::Output::default();
    for argument in &node.arguments {
        out = v.visit_expr(argument);
    }
    out
}

pub fn walk_parameter<V: CstVisitor>(v: &mut V, node: &Parameter) -> V::Output {
    match node {
        Parameter::Underscore { .. } => V::Output::default(),
        Parameter::TypedIdent(n) => v.visit_typed_ident(n),
    }
}

pub fn walk_typed_ident<V: CstVisitor>(v: &mut V, node: &TypedIdent) -> V::Output {
    let mut out = v.visit_ident(&node.ident);
    if let Some(annotation) = &node.type_annotation {
        out = v.visit_type_annotation(annotation);
    }
    out
}

pub fn walk_parameter_list<V: CstVisitor>(v: &mut V, node: &ParameterList) -> V::Output {
    let mut out = V::Output::default();
    for parameter in &node.parameters {
        out = v.visit_parameter(parameter);
    }
    out
}

pub fn walk_type_parameter_list<V: CstVisitor>(v: &mut V, node: &TypeParameterList) -> V::Output {
    let mut out = V::Output::default();
    for parameter in &node.parameters {
        out = v.visit_type_parameter(parameter);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkl_span::{BytePos, Span};

    fn span(lo: u32, hi: u32) -> Span {
        Span::new(BytePos(lo), BytePos(hi))
    }

    /// Collects every identifier name in traversal order.
    struct NameCollector {
        names: Vec<String>,
    }

    impl CstVisitor for NameCollector {
        type Output = ();

        fn visit_ident(&mut self, node: &Ident) {
            self.names.push(node.name.clone());
        }
    }

    #[test]
    fn default_traversal_reaches_nested_idents() {
        // x + y.z
        let expr = Expr::Binary(BinaryExpr {
            op: BinaryOperation::Plus,
            left: Box::new(Expr::UnqualifiedAccess(UnqualifiedAccessExpr {
                ident: Ident::new("x", span(0, 1), 0),
                args: None,
                span: span(0, 1),
                id: 1,
            })),
            right: Box::new(Expr::QualifiedAccess(QualifiedAccessExpr {
                receiver: Box::new(Expr::UnqualifiedAccess(UnqualifiedAccessExpr {
                    ident: Ident::new("y", span(4, 5), 2),
                    args: None,
                    span: span(4, 5),
                    id: 3,
                })),
                ident: Ident::new("z", span(6, 7), 4),
                is_nullable: false,
                args: None,
                span: span(4, 7),
                id: 5,
            })),
            span: span(0, 7),
            id: 6,
        });

        let mut collector = NameCollector { names: Vec::new() };
        collector.visit_expr(&expr);
        assert_eq!(collector.names, ["x", "y", "z"]);
    }
}
