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

use crate::{Node, NodeID};
use pkl_span::Span;

use serde::{Deserialize, Serialize};

mod access;
pub use access::*;

mod binary;
pub use binary::*;

mod control;
pub use control::*;

mod literal;
pub use literal::*;

mod object;
pub use object::*;

mod string;
pub use string::*;

mod type_ops;
pub use type_ops::*;

mod unary;
pub use unary::*;

/// An expression.
///
/// Operator sequences are already resolved: a tree returned by the parser
/// contains binary nodes honouring precedence and associativity, never a
/// flat operator list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// The receiver `this`.
    This(ThisExpr),
    /// The enclosing-scope receiver `outer`.
    Outer(OuterExpr),
    /// The current module, `module`.
    Module(ModuleExpr),
    /// The literal `null`.
    Null(NullLiteral),
    /// `true` or `false`.
    Bool(BoolLiteral),
    /// An integer literal in any base, e.g. `0x10`.
    Int(IntLiteral),
    /// A floating point literal, e.g. `1.2e-3`.
    Float(FloatLiteral),
    /// A string literal made of a single constant run, e.g. `"abc"`.
    StringConstant(StringConstant),
    /// A single-line string with escapes and/or interpolation.
    InterpolatedString(InterpolatedString),
    /// A multi-line string.
    InterpolatedMultiString(InterpolatedMultiString),
    /// `throw (expr)`.
    Throw(ThrowExpr),
    /// `trace (expr)`.
    Trace(TraceExpr),
    /// `import ("uri")` / `import* ("glob")` in expression position.
    Import(ImportExpr),
    /// `read (expr)`, `read? (expr)`, or `read* (expr)`.
    Read(ReadExpr),
    /// A plain identifier reference, optionally a call: `x` or `f(args)`.
    UnqualifiedAccess(UnqualifiedAccessExpr),
    /// `recv.name`, `recv?.name`, optionally a call.
    QualifiedAccess(QualifiedAccessExpr),
    /// `super.name`, optionally a call.
    SuperAccess(SuperAccessExpr),
    /// `super[expr]`.
    SuperSubscript(SuperSubscriptExpr),
    /// `recv[expr]`.
    Subscript(SubscriptExpr),
    /// `expr!!`.
    NonNull(NonNullExpr),
    /// `-expr`.
    UnaryMinus(UnaryMinusExpr),
    /// `!expr`.
    LogicalNot(LogicalNotExpr),
    /// A binary operation, e.g. `1 + 2`.
    Binary(BinaryExpr),
    /// `expr is Type`.
    TypeCheck(TypeCheckExpr),
    /// `expr as Type`.
    TypeCast(TypeCastExpr),
    /// `if (cond) then else other`.
    If(IfExpr),
    /// `let (x = v) body`.
    Let(LetExpr),
    /// `(args) -> body`.
    FunctionLiteral(FunctionLiteralExpr),
    /// `(expr)`.
    Parenthesized(ParenthesizedExpr),
    /// `new Type? { ... }`.
    New(NewExpr),
    /// `base { ... }` applied to a parenthesized, `new`, or amends receiver.
    Amends(AmendsExpr),
}

impl Node for Expr {
    fn span(&self) -> Span {
        use Expr::*;
        match self {
            This(n) => n.span(),
            Outer(n) => n.span(),
            Module(n) => n.span(),
            Null(n) => n.span(),
            Bool(n) => n.span(),
            Int(n) => n.span(),
            Float(n) => n.span(),
            StringConstant(n) => n.span(),
            InterpolatedString(n) => n.span(),
            InterpolatedMultiString(n) => n.span(),
            Throw(n) => n.span(),
            Trace(n) => n.span(),
            Import(n) => n.span(),
            Read(n) => n.span(),
            UnqualifiedAccess(n) => n.span(),
            QualifiedAccess(n) => n.span(),
            SuperAccess(n) => n.span(),
            SuperSubscript(n) => n.span(),
            Subscript(n) => n.span(),
            NonNull(n) => n.span(),
            UnaryMinus(n) => n.span(),
            LogicalNot(n) => n.span(),
            Binary(n) => n.span(),
            TypeCheck(n) => n.span(),
            TypeCast(n) => n.span(),
            If(n) => n.span(),
            Let(n) => n.span(),
            FunctionLiteral(n) => n.span(),
            Parenthesized(n) => n.span(),
            New(n) => n.span(),
            Amends(n) => n.span(),
        }
    }

    fn id(&self) -> NodeID {
        use Expr::*;
        match self {
            This(n) => n.id(),
            Outer(n) => n.id(),
            Module(n) => n.id(),
            Null(n) => n.id(),
            Bool(n) => n.id(),
            Int(n) => n.id(),
            Float(n) => n.id(),
            StringConstant(n) => n.id(),
            InterpolatedString(n) => n.id(),
            InterpolatedMultiString(n) => n.id(),
            Throw(n) => n.id(),
            Trace(n) => n.id(),
            Import(n) => n.id(),
            Read(n) => n.id(),
            UnqualifiedAccess(n) => n.id(),
            QualifiedAccess(n) => n.id(),
            SuperAccess(n) => n.id(),
            SuperSubscript(n) => n.id(),
            Subscript(n) => n.id(),
            NonNull(n) => n.id(),
            UnaryMinus(n) => n.id(),
            LogicalNot(n) => n.id(),
            Binary(n) => n.id(),
            TypeCheck(n) => n.id(),
            TypeCast(n) => n.id(),
            If(n) => n.id(),
            Let(n) => n.id(),
            FunctionLiteral(n) => n.id(),
            Parenthesized(n) => n.id(),
            New(n) => n.id(),
            Amends(n) => n.id(),
        }
    }
}
