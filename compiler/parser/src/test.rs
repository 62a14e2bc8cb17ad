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

use crate::parse_module;

use pkl_cst::*;
use pkl_errors::PklError;
use pkl_span::{BytePos, Span};

use std::collections::HashMap;

fn parse(source: &str) -> Module {
    parse_module(source).unwrap().0
}

fn parse_err(source: &str) -> PklError {
    parse_module(source).unwrap_err()
}

/// The value expression of the module's `index`th property.
fn property_expr(module: &Module, index: usize) -> &Expr {
    match &module.properties[index] {
        ClassPropertyEntry::PropertyExpr(p) => &p.expr,
        other => panic!("expected a value property, got {other:?}"),
    }
}

fn ident_name(expr: &Expr) -> &str {
    match expr {
        Expr::UnqualifiedAccess(access) => &access.ident.name,
        other => panic!("expected an identifier access, got {other:?}"),
    }
}

fn int_value(expr: &Expr) -> &str {
    match expr {
        Expr::Int(int) => &int.value,
        other => panic!("expected an int literal, got {other:?}"),
    }
}

#[test]
fn empty_module() {
    let module = parse("");
    assert!(module.decl.is_none());
    assert!(module.imports.is_empty());
    assert!(module.properties.is_empty());
    assert_eq!(module.span, Span::new(BytePos(0), BytePos(0)));
}

#[test]
fn precedence_mul_over_add() {
    let module = parse("x = 1 + 2 * 3");
    let Expr::Binary(plus) = property_expr(&module, 0) else { panic!("expected +") };
    assert_eq!(plus.op, BinaryOperation::Plus);
    assert_eq!(int_value(&plus.left), "1");
    let Expr::Binary(mult) = plus.right.as_ref() else { panic!("expected *") };
    assert_eq!(mult.op, BinaryOperation::Mult);
    assert_eq!(int_value(&mult.left), "2");
    assert_eq!(int_value(&mult.right), "3");
}

#[test]
fn power_is_right_associative() {
    let module = parse("x = 2 ** 3 ** 2");
    let Expr::Binary(outer) = property_expr(&module, 0) else { panic!("expected **") };
    assert_eq!(outer.op, BinaryOperation::Pow);
    assert_eq!(int_value(&outer.left), "2");
    let Expr::Binary(inner) = outer.right.as_ref() else { panic!("expected nested **") };
    assert_eq!(int_value(&inner.left), "3");
    assert_eq!(int_value(&inner.right), "2");
}

#[test]
fn coalesce_is_right_associative() {
    let module = parse("x = a ?? b ?? c");
    let Expr::Binary(outer) = property_expr(&module, 0) else { panic!("expected ??") };
    assert_eq!(outer.op, BinaryOperation::NullCoalesce);
    assert_eq!(ident_name(&outer.left), "a");
    let Expr::Binary(_) = outer.right.as_ref() else { panic!("expected right-leaning ??") };
}

#[test]
fn subtraction_is_left_associative() {
    let module = parse("x = 9 - 4 - 2");
    let Expr::Binary(outer) = property_expr(&module, 0) else { panic!("expected -") };
    assert_eq!(outer.op, BinaryOperation::Minus);
    let Expr::Binary(_) = outer.left.as_ref() else { panic!("expected left-leaning -") };
    assert_eq!(int_value(&outer.right), "2");
}

#[test]
fn type_test_binds_tighter_than_and() {
    let module = parse("x = a is List && b");
    let Expr::Binary(and) = property_expr(&module, 0) else { panic!("expected &&") };
    assert_eq!(and.op, BinaryOperation::And);
    let Expr::TypeCheck(check) = and.left.as_ref() else { panic!("expected is") };
    assert_eq!(ident_name(&check.expr), "a");
    let Type::Declared(declared) = &check.type_ else { panic!("expected List") };
    assert_eq!(declared.name.parts[0].name, "List");
    assert_eq!(ident_name(&and.right), "b");
}

#[test]
fn type_cast_folds_additive_left_side() {
    // `+` binds tighter than `as`, so the cast applies to the whole sum.
    let module = parse("x = a + b as Int");
    let Expr::TypeCast(cast) = property_expr(&module, 0) else { panic!("expected as") };
    let Expr::Binary(plus) = cast.expr.as_ref() else { panic!("expected +") };
    assert_eq!(plus.op, BinaryOperation::Plus);
}

#[test]
fn access_after_cast_lands_on_the_cast() {
    let module = parse("x = a as (List).first");
    let Expr::QualifiedAccess(access) = property_expr(&module, 0) else {
        panic!("expected access")
    };
    assert_eq!(access.ident.name, "first");
    let Expr::TypeCast(cast) = access.receiver.as_ref() else { panic!("expected as") };
    let Type::Parenthesized(_) = &cast.type_ else { panic!("expected (List)") };
}

#[test]
fn interpolated_string_parts() {
    let module = parse(r#"x = "hi \(name)!""#);
    let Expr::InterpolatedString(string) = property_expr(&module, 0) else {
        panic!("expected interpolated string")
    };
    assert_eq!(string.parts.len(), 3);
    let StringPart::Constant(head) = &string.parts[0] else { panic!("expected constant") };
    assert_eq!(head.parts, [StringConstantPart::Constant("hi ".into())]);
    let StringPart::Interpolation(interpolation) = &string.parts[1] else {
        panic!("expected interpolation")
    };
    assert_eq!(ident_name(&interpolation.expr), "name");
    let StringPart::Constant(tail) = &string.parts[2] else { panic!("expected constant") };
    assert_eq!(tail.parts, [StringConstantPart::Constant("!".into())]);
}

#[test]
fn pound_string_keeps_backslash_verbatim() {
    let module = parse(r##"x = #"a\nb"#"##);
    let Expr::StringConstant(constant) = property_expr(&module, 0) else {
        panic!("expected string constant")
    };
    assert_eq!(constant.value, "a\\nb");
}

#[test]
fn escapes_stay_opaque() {
    let module = parse(r#"x = "a\nb""#);
    let Expr::InterpolatedString(string) = property_expr(&module, 0) else {
        panic!("expected part structure for an escaped string")
    };
    let StringPart::Constant(run) = &string.parts[0] else { panic!("expected constant") };
    assert_eq!(
        run.parts,
        [
            StringConstantPart::Constant("a".into()),
            StringConstantPart::Escape(EscapeKind::Newline),
            StringConstantPart::Constant("b".into()),
        ]
    );
}

#[test]
fn multiline_string_records_newlines() {
    let module = parse("x = \"\"\"\nfoo\nbar\n\"\"\"");
    let Expr::InterpolatedMultiString(string) = property_expr(&module, 0) else {
        panic!("expected multiline string")
    };
    let StringPart::Constant(run) = &string.parts[0] else { panic!("expected constant") };
    assert_eq!(
        run.parts,
        [
            StringConstantPart::Newline,
            StringConstantPart::Constant("foo".into()),
            StringConstantPart::Newline,
            StringConstantPart::Constant("bar".into()),
            StringConstantPart::Newline,
        ]
    );
}

#[test]
fn subscript_requires_same_line() {
    let module = parse("x = a[0]");
    let Expr::Subscript(subscript) = property_expr(&module, 0) else {
        panic!("expected subscript")
    };
    assert_eq!(ident_name(&subscript.receiver), "a");
    assert_eq!(int_value(&subscript.index), "0");

    // On a fresh line the bracket cannot continue the expression, and a
    // bracket cannot open a module member either.
    assert!(parse_err("x = a\n[0]").message().contains("module member"));
}

#[test]
fn argument_list_requires_same_line() {
    let module = parse("y { a.b\n(c) }");
    let ClassPropertyEntry::PropertyBody(body) = &module.properties[0] else {
        panic!("expected property body")
    };
    let members = &body.bodies[0].members;
    assert_eq!(members.len(), 2, "the call must split into two elements");
    let ObjectMember::Element(first) = &members[0] else { panic!("expected element") };
    let Expr::QualifiedAccess(access) = &first.expr else { panic!("expected access") };
    assert!(access.args.is_none());
    let ObjectMember::Element(second) = &members[1] else { panic!("expected element") };
    let Expr::Parenthesized(_) = &second.expr else { panic!("expected parenthesized") };
}

#[test]
fn chained_access_may_cross_lines() {
    let module = parse("x = a\n  .b\n  .c()");
    let Expr::QualifiedAccess(outer) = property_expr(&module, 0) else {
        panic!("expected access")
    };
    assert_eq!(outer.ident.name, "c");
    assert!(outer.args.is_some());
    let Expr::QualifiedAccess(inner) = outer.receiver.as_ref() else {
        panic!("expected chained access")
    };
    assert_eq!(inner.ident.name, "b");
}

#[test]
fn member_predicate_brackets_must_abut() {
    let module = parse("obj { [[cond]] = value }");
    let ClassPropertyEntry::PropertyBody(body) = &module.properties[0] else {
        panic!("expected property body")
    };
    let ObjectMember::Predicate(predicate) = &body.bodies[0].members[0] else {
        panic!("expected member predicate")
    };
    assert_eq!(ident_name(&predicate.pred), "cond");
    assert_eq!(ident_name(&predicate.value), "value");

    let err = parse_err("obj { [[cond] ] = value }");
    assert!(err.message().contains("delimiter"), "{err:?}");
}

#[test]
fn amends_chain_in_order() {
    let module = parse("x { y = 1 } { y = 2 }");
    let ClassPropertyEntry::PropertyBody(body) = &module.properties[0] else {
        panic!("expected property body")
    };
    assert_eq!(body.bodies.len(), 2);
    let value = |object: &ObjectBody| match &object.members[0] {
        ObjectMember::Property(p) => int_value(&p.expr).to_string(),
        other => panic!("expected property, got {other:?}"),
    };
    assert_eq!(value(&body.bodies[0]), "1");
    assert_eq!(value(&body.bodies[1]), "2");
}

#[test]
fn module_declaration_and_imports() {
    let module = parse(concat!(
        "/// The doc.\n",
        "@Deprecated\n",
        "open module com.example.config\n",
        "extends \"base.pkl\"\n",
        "import \"foo.pkl\"\n",
        "import* \"bar/*.pkl\" as bars\n",
        "x = 1\n",
    ));
    let decl = module.decl.as_ref().unwrap();
    assert!(decl.doc_comment.is_some());
    assert_eq!(decl.annotations[0].name.parts[0].name, "Deprecated");
    assert_eq!(decl.modifiers[0].kind, ModifierKind::Open);
    let name = decl.name.as_ref().unwrap();
    assert_eq!(
        name.parts.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        ["com", "example", "config"]
    );
    let clause = decl.extends_or_amends.as_ref().unwrap();
    assert_eq!(clause.kind, ExtendsOrAmendsKind::Extends);
    assert_eq!(clause.url.value, "base.pkl");

    assert_eq!(module.imports.len(), 2);
    assert!(!module.imports[0].is_glob);
    assert!(module.imports[1].is_glob);
    assert_eq!(module.imports[1].alias.as_ref().unwrap().name, "bars");
    assert_eq!(module.properties.len(), 1);
}

#[test]
fn import_misplacement_errors() {
    assert!(parse_err("x = 1\nimport \"foo.pkl\"").message().contains("before the first"));
    assert!(parse_err("/// doc\nimport \"foo.pkl\"").message().contains("imports cannot"));
    assert!(parse_err("import \"a\\(x)b\"").message().contains("constant string"));
}

#[test]
fn dangling_doc_comment_is_an_error() {
    let err = parse_err("/// lonely\n");
    assert!(err.message().contains("end of file"));
}

#[test]
fn class_declaration() {
    let module = parse(concat!(
        "abstract class Pair<A, out B> extends Base<A> {\n",
        "  first: A\n",
        "  hidden second: B = default\n",
        "  function swap(): Pair<B, A> = something\n",
        "}\n",
    ));
    let class = &module.classes[0];
    assert_eq!(class.modifiers[0].kind, ModifierKind::Abstract);
    assert_eq!(class.name.name, "Pair");
    let params = class.type_params.as_ref().unwrap();
    assert_eq!(params.parameters[0].variance, Variance::None);
    assert_eq!(params.parameters[1].variance, Variance::Out);
    let Type::Declared(superclass) = class.superclass.as_ref().unwrap() else {
        panic!("expected declared supertype")
    };
    assert_eq!(superclass.name.parts[0].name, "Base");
    assert_eq!(superclass.type_args.len(), 1);

    let body = class.body.as_ref().unwrap();
    assert_eq!(body.properties.len(), 2);
    assert_eq!(body.methods.len(), 1);
    let ClassPropertyEntry::Property(first) = &body.properties[0] else {
        panic!("expected typed property")
    };
    assert_eq!(first.name.name, "first");
    let method = &body.methods[0];
    assert!(method.return_type.is_some());
    assert!(method.expr.is_some());
}

#[test]
fn external_method_has_no_body() {
    let module = parse("external function now(): Timestamp");
    let method = &module.methods[0];
    assert_eq!(method.modifiers[0].kind, ModifierKind::External);
    assert!(method.expr.is_none());
}

#[test]
fn typealias_with_default_union() {
    let module = parse(r#"typealias Direction = "north" | *"south" | Mapping<String, Int>"#);
    let alias = &module.type_aliases[0];
    // `A | B | C` leans left.
    let Type::Union(outer) = &alias.body else { panic!("expected union") };
    let Type::Union(inner) = outer.left.as_ref() else { panic!("expected nested union") };
    let Type::StringConstant(north) = inner.left.as_ref() else { panic!("expected literal") };
    assert_eq!(north.literal.value, "north");
    let Type::DefaultUnion(default) = inner.right.as_ref() else { panic!("expected default") };
    let Type::StringConstant(south) = default.base.as_ref() else { panic!("expected literal") };
    assert_eq!(south.literal.value, "south");
    let Type::Declared(mapping) = outer.right.as_ref() else { panic!("expected declared") };
    assert_eq!(mapping.type_args.len(), 2);
}

#[test]
fn nullable_and_constrained_types() {
    let module = parse("x: String(length > 3)? = y");
    let ClassPropertyEntry::PropertyExpr(property) = &module.properties[0] else {
        panic!("expected property")
    };
    let annotation = property.type_annotation.as_ref().unwrap();
    let Type::Nullable(nullable) = &annotation.type_ else { panic!("expected nullable") };
    let Type::Constrained(constrained) = nullable.base.as_ref() else {
        panic!("expected constrained")
    };
    assert_eq!(constrained.constraints.len(), 1);

    // The constraint list must open on the line of the type; on a fresh
    // line the property ends and the paren cannot open a module member.
    let err = parse_err("x: String\n(length > 3) = y");
    assert!(err.message().contains("module member"), "{err:?}");
}

#[test]
fn function_types() {
    let module = parse("x: (Int, String) -> Boolean = y\nz: () -> Int = w");
    let annotation = |index: usize| match &module.properties[index] {
        ClassPropertyEntry::PropertyExpr(p) => &p.type_annotation.as_ref().unwrap().type_,
        _ => panic!("expected property"),
    };
    let Type::Function(binary) = annotation(0) else { panic!("expected function type") };
    assert_eq!(binary.parameters.len(), 2);
    let Type::Function(nullary) = annotation(1) else { panic!("expected function type") };
    assert!(nullary.parameters.is_empty());
}

#[test]
fn function_literal_versus_parenthesized() {
    let module = parse("a = (x) -> x + 1\nb = (x)\nc = () -> 0\nd = (x, y) -> x\ne = (x: Int) -> x");
    assert!(matches!(property_expr(&module, 0), Expr::FunctionLiteral(_)));
    assert!(matches!(property_expr(&module, 1), Expr::Parenthesized(_)));
    let Expr::FunctionLiteral(nullary) = property_expr(&module, 2) else { panic!() };
    assert!(nullary.parameters.parameters.is_empty());
    let Expr::FunctionLiteral(binary) = property_expr(&module, 3) else { panic!() };
    assert_eq!(binary.parameters.parameters.len(), 2);
    let Expr::FunctionLiteral(typed) = property_expr(&module, 4) else { panic!() };
    let Parameter::TypedIdent(param) = &typed.parameters.parameters[0] else { panic!() };
    assert!(param.type_annotation.is_some());
}

#[test]
fn object_body_parameters() {
    let module = parse("x { a, b -> a }\ny { _ -> 1 }\nz { a: Int -> a }");
    let params = |index: usize| match &module.properties[index] {
        ClassPropertyEntry::PropertyBody(p) => &p.bodies[0].parameters,
        _ => panic!("expected property body"),
    };
    assert_eq!(params(0).len(), 2);
    assert!(matches!(params(1)[0], Parameter::Underscore { .. }));
    let Parameter::TypedIdent(typed) = &params(2)[0] else { panic!("expected typed") };
    assert!(typed.type_annotation.is_some());
}

#[test]
fn object_member_kinds() {
    let module = parse(concat!(
        "x {\n",
        "  1 + 2\n",
        "  name = \"value\"\n",
        "  typed: Int = 3\n",
        "  local function helper(p) = p\n",
        "  [\"key\"] = 4\n",
        "  [\"other\"] { inner = 5 }\n",
        "  ...rest\n",
        "  ...?maybe\n",
        "  when (cond) { a = 1 } else { a = 2 }\n",
        "  for (k, v in map) { [k] = v }\n",
        "}\n",
    ));
    let ClassPropertyEntry::PropertyBody(property) = &module.properties[0] else {
        panic!("expected property body")
    };
    let members = &property.bodies[0].members;
    assert!(matches!(members[0], ObjectMember::Element(_)));
    assert!(matches!(members[1], ObjectMember::Property(_)));
    let ObjectMember::Property(typed) = &members[2] else { panic!() };
    assert!(typed.type_annotation.is_some());
    let ObjectMember::Method(method) = &members[3] else { panic!() };
    assert_eq!(method.modifiers[0].kind, ModifierKind::Local);
    assert!(matches!(members[4], ObjectMember::Entry(_)));
    assert!(matches!(members[5], ObjectMember::EntryBody(_)));
    let ObjectMember::Spread(spread) = &members[6] else { panic!() };
    assert!(!spread.is_nullable);
    let ObjectMember::Spread(nullable_spread) = &members[7] else { panic!() };
    assert!(nullable_spread.is_nullable);
    let ObjectMember::WhenGenerator(when) = &members[8] else { panic!() };
    assert!(when.else_body.is_some());
    let ObjectMember::ForGenerator(for_) = &members[9] else { panic!() };
    assert!(for_.value_parameter.is_some());
}

#[test]
fn amends_only_on_amendable_receivers() {
    let module = parse("x = (base) { a = 1 }\ny = new Foo { b = 2 } { c = 3 }");
    let Expr::Amends(parenthesized) = property_expr(&module, 0) else { panic!() };
    assert!(matches!(parenthesized.base.as_ref(), Expr::Parenthesized(_)));
    let Expr::Amends(chained) = property_expr(&module, 1) else { panic!() };
    assert!(matches!(chained.base.as_ref(), Expr::Amends(_)));

    let err = parse_err("x = base { a = 1 }");
    assert!(err.message().contains("amended"), "{err:?}");
}

#[test]
fn keyword_expressions() {
    let module = parse(concat!(
        "a = throw (\"boom\")\n",
        "b = trace (value)\n",
        "c = import (\"dep.pkl\")\n",
        "d = import* (\"deps/*.pkl\")\n",
        "e = read (\"env:HOME\")\n",
        "f = read? (\"env:MISSING\")\n",
        "g = read* (\"env:*\")\n",
        "h = if (cond) 1 else 2\n",
        "i = let (tmp = 1) tmp + 1\n",
        "j = new Listing { 1 }\n",
        "k = this\n",
        "l = outer\n",
        "m = module\n",
        "n = super.name\n",
        "o = super[0]\n",
        "p = x!!\n",
        "q = -x\n",
        "r = !x\n",
    ));
    assert!(matches!(property_expr(&module, 0), Expr::Throw(_)));
    assert!(matches!(property_expr(&module, 1), Expr::Trace(_)));
    let Expr::Import(import) = property_expr(&module, 2) else { panic!() };
    assert!(!import.is_glob);
    let Expr::Import(glob_import) = property_expr(&module, 3) else { panic!() };
    assert!(glob_import.is_glob);
    let Expr::Read(read) = property_expr(&module, 4) else { panic!() };
    assert_eq!(read.kind, ReadKind::Read);
    let Expr::Read(read_null) = property_expr(&module, 5) else { panic!() };
    assert_eq!(read_null.kind, ReadKind::ReadNull);
    let Expr::Read(read_glob) = property_expr(&module, 6) else { panic!() };
    assert_eq!(read_glob.kind, ReadKind::ReadGlob);
    assert!(matches!(property_expr(&module, 7), Expr::If(_)));
    assert!(matches!(property_expr(&module, 8), Expr::Let(_)));
    let Expr::New(new) = property_expr(&module, 9) else { panic!() };
    assert!(new.type_.is_some());
    assert!(matches!(property_expr(&module, 10), Expr::This(_)));
    assert!(matches!(property_expr(&module, 11), Expr::Outer(_)));
    assert!(matches!(property_expr(&module, 12), Expr::Module(_)));
    assert!(matches!(property_expr(&module, 13), Expr::SuperAccess(_)));
    assert!(matches!(property_expr(&module, 14), Expr::SuperSubscript(_)));
    assert!(matches!(property_expr(&module, 15), Expr::NonNull(_)));
    assert!(matches!(property_expr(&module, 16), Expr::UnaryMinus(_)));
    assert!(matches!(property_expr(&module, 17), Expr::LogicalNot(_)));
}

#[test]
fn minus_on_new_line_starts_a_new_expression() {
    // One line: a single subtraction.
    let module = parse("x = a - b");
    assert!(matches!(property_expr(&module, 0), Expr::Binary(_)));

    // Across lines the minus cannot continue `a`, and a minus cannot open
    // a module member.
    assert!(parse_err("x = a\n- b").message().contains("module member"));
}

#[test]
fn reserved_keywords_are_rejected() {
    let err = parse_err("x = record");
    assert!(err.message().contains("reserved"), "{err:?}");
    assert_eq!(err.error_code(), "EPAR2004");
}

#[test]
fn incomplete_property_errors() {
    assert!(parse_err("x").message().contains("needs a type annotation"));
    let err = parse_err("x: Int { a = 1 }");
    assert!(err.message().contains("both a type annotation"), "{err:?}");
}

#[test]
fn numeric_literals_keep_text_without_separators() {
    let module = parse("a = 1_000\nb = 0xFF_EC\nc = 1.5e-3\nd = 0b1_01\ne = 0o7_5");
    assert_eq!(int_value(property_expr(&module, 0)), "1000");
    assert_eq!(int_value(property_expr(&module, 1)), "0xFFEC");
    let Expr::Float(float) = property_expr(&module, 2) else { panic!() };
    assert_eq!(float.value, "1.5e-3");
    assert_eq!(int_value(property_expr(&module, 3)), "0b101");
    assert_eq!(int_value(property_expr(&module, 4)), "0o75");

    // Separator stripping is idempotent: the stored lexeme re-parses to the
    // same literal.
    let stripped = parse("a = 1000");
    assert_eq!(
        int_value(property_expr(&stripped, 0)),
        int_value(property_expr(&module, 0))
    );
}

#[test]
fn comments_are_collected_in_order() {
    let (module, comments) = parse_module(concat!(
        "// first\n",
        "/* second */\n",
        "/// third\n",
        "x = 1 // fourth\n",
    ))
    .unwrap();
    assert_eq!(comments.len(), 4);
    assert_eq!(comments[0].kind, CommentKind::Line);
    assert_eq!(comments[0].text, "// first");
    assert_eq!(comments[1].kind, CommentKind::Block);
    assert_eq!(comments[2].kind, CommentKind::Doc);
    assert_eq!(comments[3].kind, CommentKind::Line);

    // The doc comment also reaches the tree.
    let ClassPropertyEntry::PropertyExpr(property) = &module.properties[0] else { panic!() };
    assert!(property.doc_comment.is_some());
}

#[test]
fn newline_inside_comment_separates_postfix() {
    // The comment swallows no newline; the bracket still sits on a new line.
    let err = parse_err("x = a // trailing\n[0]");
    assert!(err.message().contains("module member"), "{err:?}");
    // A block comment containing a newline separates just the same.
    let err = parse_err("x = a /* spans\nlines */ [0]");
    assert!(err.message().contains("module member"), "{err:?}");
}

#[test]
fn semicolons_separate_like_newlines() {
    let module = parse("x = a; y = b");
    assert_eq!(module.properties.len(), 2);
    // A semicolon suppresses the subscript exactly like a newline would.
    assert!(parse_err("x = a; [0]").message().contains("module member"));
}

/// Collects the span of every node the traversal reaches.
struct SpanCollector {
    spans: HashMap<NodeID, Span>,
}

impl SpanCollector {
    fn record(&mut self, id: NodeID, span: Span) {
        self.spans.insert(id, span);
    }
}

impl CstVisitor for SpanCollector {
    type Output = ();

    fn visit_module(&mut self, node: &Module) {
        self.record(node.id, node.span);
        walk_module(self, node);
    }

    fn visit_module_decl(&mut self, node: &ModuleDecl) {
        self.record(node.id, node.span);
        walk_module_decl(self, node);
    }

    fn visit_import(&mut self, node: &Import) {
        self.record(node.id, node.span);
        walk_import(self, node);
    }

    fn visit_clazz(&mut self, node: &Clazz) {
        self.record(node.id, node.span);
        walk_clazz(self, node);
    }

    fn visit_class_property_expr(&mut self, node: &ClassPropertyExpr) {
        self.record(node.id, node.span);
        walk_class_property_expr(self, node);
    }

    fn visit_class_property_body(&mut self, node: &ClassPropertyBody) {
        self.record(node.id, node.span);
        walk_class_property_body(self, node);
    }

    fn visit_class_method(&mut self, node: &ClassMethod) {
        self.record(node.id, node.span);
        walk_class_method(self, node);
    }

    fn visit_object_body(&mut self, node: &ObjectBody) {
        self.record(node.id, node.span);
        walk_object_body(self, node);
    }

    fn visit_object_member(&mut self, node: &ObjectMember) {
        self.record(node.id(), node.span());
        walk_object_member(self, node);
    }

    fn visit_expr(&mut self, node: &Expr) {
        self.record(node.id(), node.span());
        walk_expr(self, node);
    }

    fn visit_type(&mut self, node: &Type) {
        self.record(node.id(), node.span());
        walk_type(self, node);
    }

    fn visit_ident(&mut self, node: &Ident) {
        self.record(node.id, node.span);
    }

    fn visit_argument_list(&mut self, node: &ArgumentList) {
        self.record(node.id, node.span);
        walk_argument_list(self, node);
    }

    fn visit_type_annotation(&mut self, node: &TypeAnnotation) {
        self.record(node.id, node.span);
        self.visit_type(&node.type_);
    }

    fn visit_parameter_list(&mut self, node: &ParameterList) {
        self.record(node.id, node.span);
        walk_parameter_list(self, node);
    }
}

#[test]
fn parent_spans_contain_child_spans() {
    let module = parse(concat!(
        "module com.example.demo\n",
        "import \"base.pkl\"\n",
        "class Point { x: Int\n  y: Int }\n",
        "origin = new Point { x = 0; y = 1 + 2 * 3 }\n",
        "function shift(p, d) = p + d\n",
    ));
    let parents = ParentMap::build(&module);
    assert!(!parents.is_empty());

    let mut collector = SpanCollector { spans: HashMap::new() };
    collector.visit_module(&module);

    let mut checked = 0;
    for (child, parent) in parents.iter() {
        let (Some(child_span), Some(parent_span)) =
            (collector.spans.get(&child), collector.spans.get(&parent))
        else {
            continue;
        };
        assert!(
            parent_span.contains(*child_span),
            "parent {parent_span} does not contain child {child_span}"
        );
        checked += 1;
    }
    assert!(checked > 10, "expected to check a real number of edges, got {checked}");
}

#[test]
fn sibling_spans_do_not_overlap() {
    let module = parse("a = 1\nb = 2\nc = 3\n");
    let spans: Vec<Span> = module.properties.iter().map(|p| p.span()).collect();
    for pair in spans.windows(2) {
        assert!(pair[0].hi <= pair[1].lo);
    }
}

#[test]
fn trees_serialize_to_json_and_back() {
    let module = parse("x = 1 + 2\nclass Foo { bar: String }\n");
    let json = serde_json::to_string(&module).unwrap();
    let back: Module = serde_json::from_str(&json).unwrap();
    assert_eq!(module, back);
}

#[test]
fn reparsing_yields_an_equal_shape() {
    // Node ids differ between parses; spans and structure must not.
    let source = "x = 1 + 2 * 3\ny { [[a]] = b }\n";
    let first = parse(source);
    let second = parse(source);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}
