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
use pkl_span::Span;

impl ParserContext<'_> {
    /// Returns an [`ObjectBody`] CST node; the cursor sits on `{`.
    ///
    /// The head of the body is ambiguous: `{ x ->` opens a parameter list
    /// while `{ x =` opens a member list, and `{ x: T` could still be
    /// either. One token of lookahead plus a single backtrack decides; the
    /// typed case is parsed committed and dispatched on what follows the
    /// annotation.
    pub(crate) fn parse_object_body(&mut self) -> Result<ObjectBody> {
        let start = self.expect(&Token::LeftBrace)?;
        let mut parameters = Vec::new();
        let mut members = Vec::new();

        match self.token.token {
            Token::Underscore => {
                parameters = self.parse_object_parameters()?;
            }
            Token::Ident(_) => {
                self.bump();
                match self.token.token {
                    // `{ x ->` and `{ x,` are parameter lists.
                    Token::Arrow | Token::Comma => {
                        self.backtrack();
                        parameters = self.parse_object_parameters()?;
                    }
                    // `{ x: T` commits to the annotation, then dispatches.
                    Token::Colon => {
                        let ident = self.ident_from_prev();
                        let annotation = self.parse_type_annotation()?;
                        match self.token.token {
                            Token::Comma | Token::Arrow => {
                                let span = ident.span + annotation.span;
                                let first = Parameter::TypedIdent(TypedIdent {
                                    ident,
                                    type_annotation: Some(annotation),
                                    span,
                                    id: self.next_id(),
                                });
                                parameters = self.finish_object_parameters(vec![first])?;
                            }
                            Token::Assign => {
                                self.bump();
                                let expr = self.parse_expr()?;
                                let span = ident.span + expr.span();
                                members.push(ObjectMember::Property(ObjectProperty {
                                    modifiers: Vec::new(),
                                    name: ident,
                                    type_annotation: Some(annotation),
                                    expr,
                                    span,
                                    id: self.next_id(),
                                }));
                            }
                            _ => return self.unexpected("',', '->', or '='"),
                        }
                    }
                    _ => self.backtrack(),
                }
            }
            _ => {}
        }

        while !self.check(&Token::RightBrace) {
            members.push(self.parse_object_member()?);
        }
        let end = self.expect(&Token::RightBrace)?;

        Ok(ObjectBody { parameters, members, span: start + end, id: self.next_id() })
    }

    /// Rebuilds the identifier node for the token behind the cursor.
    fn ident_from_prev(&self) -> Ident {
        let Token::Ident(name) = &self.prev_token.token else {
            panic!("previous token is not an identifier");
        };
        Ident::new(name.clone(), self.prev_token.span, self.node_builder.next_id())
    }

    fn parse_object_parameters(&mut self) -> Result<Vec<Parameter>> {
        let first = self.parse_parameter()?;
        self.finish_object_parameters(vec![first])
    }

    fn finish_object_parameters(
        &mut self,
        mut parameters: Vec<Parameter>,
    ) -> Result<Vec<Parameter>> {
        while self.eat(&Token::Comma) {
            parameters.push(self.parse_parameter()?);
        }
        self.expect(&Token::Arrow)?;
        Ok(parameters)
    }

    /// Returns an [`ObjectMember`] CST node.
    fn parse_object_member(&mut self) -> Result<ObjectMember> {
        match self.token.token {
            Token::LeftPred => self.parse_member_predicate(),
            Token::LeftBrack => self.parse_object_entry(),
            Token::Spread | Token::QSpread => self.parse_object_spread(),
            Token::When => self.parse_when_generator(),
            Token::For => self.parse_for_generator(),
            _ => self.parse_property_method_or_element(),
        }
    }

    /// `[[cond]] = value` or `[[cond]] { ... }`.
    ///
    /// The two closing brackets must abut; `]` `]` with anything in between
    /// is a different construct and gets a dedicated error.
    fn parse_member_predicate(&mut self) -> Result<ObjectMember> {
        let start = self.expect(&Token::LeftPred)?;
        let pred = self.parse_expr()?;
        let first = self.expect(&Token::RightBrack)?;
        if !self.check(&Token::RightBrack) {
            return self.unexpected("']]'");
        }
        if first.hi != self.token.span.lo {
            let gap = Span::new(first.lo, self.token.span.hi);
            return Err(ParseError::wrong_delimiter("]]", gap).into());
        }
        self.bump();

        if self.eat(&Token::Assign) {
            let value = self.parse_expr()?;
            let span = start + value.span();
            return Ok(ObjectMember::Predicate(MemberPredicate {
                pred,
                value,
                span,
                id: self.next_id(),
            }));
        }
        if self.check(&Token::LeftBrace) {
            let bodies = self.parse_body_chain()?;
            let span = start + bodies.last().expect("at least one body").span;
            return Ok(ObjectMember::PredicateBody(MemberPredicateBody {
                pred,
                bodies,
                span,
                id: self.next_id(),
            }));
        }
        self.unexpected("'=' or '{'")
    }

    /// `[key] = value` or `[key] { ... }`.
    fn parse_object_entry(&mut self) -> Result<ObjectMember> {
        let start = self.expect(&Token::LeftBrack)?;
        let key = self.parse_expr()?;
        self.expect(&Token::RightBrack)?;

        if self.eat(&Token::Assign) {
            let value = self.parse_expr()?;
            let span = start + value.span();
            return Ok(ObjectMember::Entry(ObjectEntry {
                key,
                value,
                span,
                id: self.next_id(),
            }));
        }
        if self.check(&Token::LeftBrace) {
            let bodies = self.parse_body_chain()?;
            let span = start + bodies.last().expect("at least one body").span;
            return Ok(ObjectMember::EntryBody(ObjectEntryBody {
                key,
                bodies,
                span,
                id: self.next_id(),
            }));
        }
        self.unexpected("'=' or '{'")
    }

    /// `...expr` or `...?expr`.
    fn parse_object_spread(&mut self) -> Result<ObjectMember> {
        let is_nullable = self.check(&Token::QSpread);
        let start = self.expect_any(&[Token::Spread, Token::QSpread])?;
        let expr = self.parse_expr()?;
        let span = start + expr.span();
        Ok(ObjectMember::Spread(ObjectSpread {
            expr,
            is_nullable,
            span,
            id: self.next_id(),
        }))
    }

    /// `when (cond) { ... } else { ... }`.
    fn parse_when_generator(&mut self) -> Result<ObjectMember> {
        let start = self.expect(&Token::When)?;
        self.expect(&Token::LeftParen)?;
        let condition = self.parse_expr()?;
        self.expect(&Token::RightParen)?;
        let body = self.parse_object_body()?;
        let else_body = if self.eat(&Token::Else) {
            Some(self.parse_object_body()?)
        } else {
            None
        };
        let span = start + else_body.as_ref().map(|b| b.span).unwrap_or(body.span);
        Ok(ObjectMember::WhenGenerator(WhenGenerator {
            condition,
            body,
            else_body,
            span,
            id: self.next_id(),
        }))
    }

    /// `for (key in coll) { ... }` or `for (key, value in coll) { ... }`.
    fn parse_for_generator(&mut self) -> Result<ObjectMember> {
        let start = self.expect(&Token::For)?;
        self.expect(&Token::LeftParen)?;
        let key_parameter = self.parse_parameter()?;
        let value_parameter = if self.eat(&Token::Comma) {
            Some(self.parse_parameter()?)
        } else {
            None
        };
        self.expect(&Token::In)?;
        let iterable = self.parse_expr()?;
        self.expect(&Token::RightParen)?;
        let body = self.parse_object_body()?;
        let span = start + body.span;
        Ok(ObjectMember::ForGenerator(ForGenerator {
            key_parameter,
            value_parameter,
            iterable,
            body,
            span,
            id: self.next_id(),
        }))
    }

    /// Modifiers followed by `function` open a method, modifiers followed by
    /// a name open a property; a bare name that continues as an expression
    /// is an element.
    fn parse_property_method_or_element(&mut self) -> Result<ObjectMember> {
        let modifiers = self.parse_modifiers();

        if self.check(&Token::Function) {
            return self.parse_object_method(modifiers);
        }

        if matches!(self.token.token, Token::Ident(_)) {
            if modifiers.is_empty() {
                // Ambiguous: `x = 1` is a property, `x + 1` an element.
                self.bump();
                match self.token.token {
                    Token::Assign | Token::Colon | Token::LeftBrace => self.backtrack(),
                    _ => {
                        self.backtrack();
                        let expr = self.parse_expr()?;
                        let span = expr.span();
                        return Ok(ObjectMember::Element(ObjectElement {
                            expr,
                            span,
                            id: self.next_id(),
                        }));
                    }
                }
            }
            return self.parse_object_property(modifiers);
        }

        if !modifiers.is_empty() {
            return self.unexpected("a property or method name");
        }

        let expr = self.parse_expr()?;
        let span = expr.span();
        Ok(ObjectMember::Element(ObjectElement { expr, span, id: self.next_id() }))
    }

    fn parse_object_property(&mut self, modifiers: Vec<Modifier>) -> Result<ObjectMember> {
        let start = modifiers.first().map(|m| m.span);
        let name = self.expect_ident()?;
        let start = start.unwrap_or(name.span);

        let type_annotation = if self.check(&Token::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };

        if self.eat(&Token::Assign) {
            let expr = self.parse_expr()?;
            let span = start + expr.span();
            return Ok(ObjectMember::Property(ObjectProperty {
                modifiers,
                name,
                type_annotation,
                expr,
                span,
                id: self.next_id(),
            }));
        }

        if self.check(&Token::LeftBrace) {
            if let Some(annotation) = &type_annotation {
                let span = annotation.span + self.token.span;
                return Err(ParseError::typed_property_with_body(&name.name, span).into());
            }
            let bodies = self.parse_body_chain()?;
            let span = start + bodies.last().expect("at least one body").span;
            return Ok(ObjectMember::BodyProperty(ObjectBodyProperty {
                modifiers,
                name,
                bodies,
                span,
                id: self.next_id(),
            }));
        }

        if type_annotation.is_some() {
            // `x: T` without a value is only meaningful for class
            // properties; inside an object it must be assigned or amended.
            return self.unexpected("'=' or '{'");
        }
        Err(ParseError::incomplete_property(&name.name, start + name.span).into())
    }

    fn parse_object_method(&mut self, modifiers: Vec<Modifier>) -> Result<ObjectMember> {
        let start = modifiers.first().map(|m| m.span).unwrap_or(self.token.span);
        self.expect(&Token::Function)?;
        let name = self.expect_ident()?;
        let type_params = if self.check(&Token::Lt) {
            Some(self.parse_type_parameter_list()?)
        } else {
            None
        };
        let parameters = self.parse_method_parameter_list()?;
        let return_type = if self.check(&Token::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        self.expect(&Token::Assign)?;
        let expr = self.parse_expr()?;
        let span = start + expr.span();
        Ok(ObjectMember::Method(ObjectMethod {
            modifiers,
            name,
            type_params,
            parameters,
            return_type,
            expr,
            span,
            id: self.next_id(),
        }))
    }

    /// One or more `{ ... }` bodies chained after a property or entry.
    pub(crate) fn parse_body_chain(&mut self) -> Result<Vec<ObjectBody>> {
        let mut bodies = vec![self.parse_object_body()?];
        while self.check(&Token::LeftBrace) {
            bodies.push(self.parse_object_body()?);
        }
        Ok(bodies)
    }

    /// `(p1, p2, ...)` of a method declaration.
    pub(crate) fn parse_method_parameter_list(&mut self) -> Result<ParameterList> {
        let (parameters, _, span) =
            self.parse_paren_comma_list(|p| p.parse_parameter().map(Some))?;
        Ok(ParameterList { parameters, span, id: self.next_id() })
    }

    /// Zero or more modifier keywords.
    pub(crate) fn parse_modifiers(&mut self) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        loop {
            let kind = match self.token.token {
                Token::External => ModifierKind::External,
                Token::Abstract => ModifierKind::Abstract,
                Token::Open => ModifierKind::Open,
                Token::Local => ModifierKind::Local,
                Token::Hidden => ModifierKind::Hidden,
                Token::Fixed => ModifierKind::Fixed,
                Token::Const => ModifierKind::Const,
                _ => return modifiers,
            };
            self.bump();
            modifiers.push(Modifier {
                kind,
                span: self.prev_token.span,
                id: self.node_builder.next_id(),
            });
        }
    }
}
