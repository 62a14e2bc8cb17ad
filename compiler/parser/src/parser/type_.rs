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

use super::*;

use pkl_cst::*;
use pkl_errors::{ParseError, Result};

impl ParserContext<'_> {
    /// Returns a [`Type`] CST node.
    ///
    /// Unions lean left: the right operand of each `|` is a single
    /// alternative, never another union, so `A | B | C` folds as
    /// `(A | B) | C`.
    pub(crate) fn parse_type(&mut self) -> Result<Type> {
        let mut left = self.parse_union_alternative()?;
        while self.eat(&Token::Union) {
            let right = self.parse_union_alternative()?;
            let span = left.span() + right.span();
            left = Type::Union(UnionType {
                left: Box::new(left),
                right: Box::new(right),
                span,
                id: self.next_id(),
            });
        }
        Ok(left)
    }

    /// One union alternative, with an optional `*` default marker.
    fn parse_union_alternative(&mut self) -> Result<Type> {
        if self.eat(&Token::Star) {
            let star = self.prev_token.span;
            let base = self.parse_type_atom_with_postfix()?;
            let span = star + base.span();
            return Ok(Type::DefaultUnion(DefaultUnionType {
                base: Box::new(base),
                span,
                id: self.next_id(),
            }));
        }
        self.parse_type_atom_with_postfix()
    }

    fn parse_type_atom_with_postfix(&mut self) -> Result<Type> {
        let atom = self.parse_type_atom()?;
        self.parse_type_postfix(atom)
    }

    /// The type postfix loop: `?` and same-line constraint lists.
    fn parse_type_postfix(&mut self, mut type_: Type) -> Result<Type> {
        loop {
            if self.eat(&Token::Question) {
                let span = type_.span() + self.prev_token.span;
                type_ = Type::Nullable(NullableType {
                    base: Box::new(type_),
                    span,
                    id: self.next_id(),
                });
                continue;
            }
            // A constraint list only applies when its paren opens on the
            // same line as the type it constrains.
            if self.check(&Token::LeftParen)
                && !self.token.newline_before
                && !self.token.after_semicolon
            {
                let (constraints, _, list_span) =
                    self.parse_paren_comma_list(|p| p.parse_expr().map(Some))?;
                if constraints.is_empty() {
                    return Err(ParseError::unexpected(
                        "()",
                        "at least one constraint expression",
                        list_span,
                    )
                    .into());
                }
                let span = type_.span() + list_span;
                type_ = Type::Constrained(ConstrainedType {
                    base: Box::new(type_),
                    constraints,
                    span,
                    id: self.next_id(),
                });
                continue;
            }
            return Ok(type_);
        }
    }

    fn parse_type_atom(&mut self) -> Result<Type> {
        let span = self.token.span;
        match self.token.token {
            Token::Unknown => {
                self.bump();
                Ok(Type::Unknown(UnknownType { span, id: self.next_id() }))
            }
            Token::Nothing => {
                self.bump();
                Ok(Type::Nothing(NothingType { span, id: self.next_id() }))
            }
            Token::Module => {
                self.bump();
                Ok(Type::Module(ModuleType { span, id: self.next_id() }))
            }
            Token::StringStart | Token::StringMultiStart => {
                let literal = self.parse_string_constant()?;
                let span = literal.span;
                Ok(Type::StringConstant(StringConstantType {
                    literal,
                    span,
                    id: self.next_id(),
                }))
            }
            Token::LeftParen => self.parse_function_or_parenthesized_type(),
            Token::Ident(_) => {
                let name = self.parse_qualified_ident()?;
                let mut span = name.span;
                let mut type_args = Vec::new();
                if self.eat(&Token::Lt) {
                    loop {
                        type_args.push(self.parse_type()?);
                        if !self.eat(&Token::Comma) {
                            break;
                        }
                    }
                    span = span + self.expect(&Token::Gt)?;
                }
                Ok(Type::Declared(DeclaredType {
                    name,
                    type_args,
                    span,
                    id: self.next_id(),
                }))
            }
            _ => self.unexpected("a type"),
        }
    }

    /// Disambiguates `(` in type position: a function type when an arrow
    /// follows the closing paren or the parens hold zero or several
    /// elements, a parenthesized type otherwise.
    fn parse_function_or_parenthesized_type(&mut self) -> Result<Type> {
        let start = self.expect(&Token::LeftParen)?;

        let mut elements = Vec::new();
        if !self.check(&Token::RightParen) {
            loop {
                elements.push(self.parse_type()?);
                if !self.eat(&Token::Comma) {
                    break;
                }
            }
        }
        let close = self.expect(&Token::RightParen)?;

        if self.check(&Token::Arrow) || elements.len() != 1 {
            self.expect(&Token::Arrow)?;
            let return_type = self.parse_type()?;
            let span = start + return_type.span();
            return Ok(Type::Function(FunctionType {
                parameters: elements,
                return_type: Box::new(return_type),
                span,
                id: self.next_id(),
            }));
        }

        let span = start + close;
        Ok(Type::Parenthesized(ParenthesizedType {
            type_: Box::new(elements.pop().expect("exactly one element")),
            span,
            id: self.next_id(),
        }))
    }

    /// Parses a dot-separated identifier chain, e.g. `pkl.base.Int`.
    pub(crate) fn parse_qualified_ident(&mut self) -> Result<QualifiedIdent> {
        let first = self.expect_ident()?;
        let mut span = first.span;
        let mut parts = vec![first];
        while self.check(&Token::Dot) && self.look_ahead(1, |t| matches!(t.token, Token::Ident(_)))
        {
            self.bump();
            let part = self.expect_ident()?;
            span = span + part.span;
            parts.push(part);
        }
        Ok(QualifiedIdent { parts, span, id: self.next_id() })
    }

    /// Parses `: Type`; the annotation's span covers the colon.
    pub(crate) fn parse_type_annotation(&mut self) -> Result<TypeAnnotation> {
        let colon = self.expect(&Token::Colon)?;
        let type_ = self.parse_type()?;
        let span = colon + type_.span();
        Ok(TypeAnnotation { type_, span, id: self.next_id() })
    }

    /// Parses `<in K, out V, T>` style type parameter lists.
    pub(crate) fn parse_type_parameter_list(&mut self) -> Result<TypeParameterList> {
        let start = self.expect(&Token::Lt)?;
        let mut parameters = Vec::new();
        loop {
            let variance_span = self.token.span;
            let variance = if self.eat(&Token::In) {
                Variance::In
            } else if self.eat(&Token::Out) {
                Variance::Out
            } else {
                Variance::None
            };
            let ident = self.expect_ident()?;
            let span = match variance {
                Variance::None => ident.span,
                _ => variance_span + ident.span,
            };
            parameters.push(TypeParameter { variance, ident, span, id: self.next_id() });
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        let end = self.expect(&Token::Gt)?;
        Ok(TypeParameterList { parameters, span: start + end, id: self.next_id() })
    }
}
