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

use super::resolver::{resolve_operators, resolve_operators_higher_than, FlatItem, FlatList, Operator};
use super::*;

use pkl_cst::*;
use pkl_errors::{ParseError, Result};

use smallvec::smallvec;

impl ParserContext<'_> {
    /// Returns an [`Expr`] CST node if the next tokens represent an
    /// expression.
    ///
    /// Builds a flat operand/operator sequence and hands it to the operator
    /// resolver. The type-test operators fold their high-precedence tail
    /// immediately so postfix access after `is`/`as` lands on the folded
    /// node, and `.`/`?.` are folded in place to keep access binding
    /// tighter than every other operator.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr> {
        let mut items: FlatList = smallvec![];
        items.push(FlatItem::Operand(self.parse_operand()?));

        while let Some(op) = self.peek_infix_operator() {
            self.bump();
            let op_span = self.prev_token.span;
            match op {
                Operator::Is | Operator::As => {
                    items.push(FlatItem::Op(op, op_span));
                    let type_ = self.parse_type()?;
                    items.push(FlatItem::TypeOperand(type_));
                    // Everything binding at least as tightly as the type
                    // test folds now, so trailing access applies to the
                    // whole test.
                    resolve_operators_higher_than(
                        &mut items,
                        op.precedence(),
                        self.node_builder,
                    )?;
                    self.parse_access_on_last(&mut items)?;
                }
                _ => {
                    items.push(FlatItem::Op(op, op_span));
                    items.push(FlatItem::Operand(self.parse_operand()?));
                }
            }
        }

        resolve_operators(items, self.node_builder)
    }

    /// The infix operator at the cursor, if the expression continues.
    ///
    /// A `-` preceded by a newline or a stripped semicolon does not
    /// continue the expression; it starts a new unary-minus expression for
    /// whoever parses next.
    fn peek_infix_operator(&self) -> Option<Operator> {
        Some(match &self.token.token {
            Token::Coalesce => Operator::Coalesce,
            Token::Pipe => Operator::Pipe,
            Token::Or => Operator::Or,
            Token::And => Operator::And,
            Token::Equal => Operator::Equal,
            Token::NotEqual => Operator::NotEqual,
            Token::Is => Operator::Is,
            Token::As => Operator::As,
            Token::Lt => Operator::Lt,
            Token::Gt => Operator::Gt,
            Token::Lte => Operator::Lte,
            Token::Gte => Operator::Gte,
            Token::Plus => Operator::Plus,
            Token::Star => Operator::Star,
            Token::Div => Operator::Div,
            Token::IntDiv => Operator::IntDiv,
            Token::Mod => Operator::Mod,
            Token::Pow => Operator::Pow,
            Token::Minus
                if !self.token.newline_before && !self.token.after_semicolon =>
            {
                Operator::Minus
            }
            _ => return None,
        })
    }

    /// Folds trailing `.`/`?.` access onto the last operand in place.
    fn parse_access_on_last(&mut self, items: &mut FlatList) -> Result<()> {
        while matches!(self.token.token, Token::Dot | Token::QDot) {
            let is_nullable = matches!(self.token.token, Token::QDot);
            self.bump();
            let ident = self.expect_ident()?;
            let args = self.parse_optional_argument_list()?;

            let Some(FlatItem::Operand(receiver)) = items.pop() else {
                return Err(
                    ParseError::malformed_expression(self.prev_token.span).into()
                );
            };
            let end = args.as_ref().map(|a| a.span).unwrap_or(ident.span);
            let span = receiver.span() + end;
            items.push(FlatItem::Operand(Expr::QualifiedAccess(QualifiedAccessExpr {
                receiver: Box::new(receiver),
                ident,
                is_nullable,
                args,
                span,
                id: self.next_id(),
            })));
        }
        Ok(())
    }

    /// An operand: an optional chain of prefix operators, an atom, and its
    /// postfix forms.
    fn parse_operand(&mut self) -> Result<Expr> {
        match self.token.token {
            Token::Minus => {
                self.bump();
                let start = self.prev_token.span;
                let inner = self.parse_operand()?;
                let span = start + inner.span();
                Ok(Expr::UnaryMinus(UnaryMinusExpr {
                    expr: Box::new(inner),
                    span,
                    id: self.next_id(),
                }))
            }
            Token::Not => {
                self.bump();
                let start = self.prev_token.span;
                let inner = self.parse_operand()?;
                let span = start + inner.span();
                Ok(Expr::LogicalNot(LogicalNotExpr {
                    expr: Box::new(inner),
                    span,
                    id: self.next_id(),
                }))
            }
            _ => {
                let atom = self.parse_atom()?;
                self.parse_postfix(atom)
            }
        }
    }

    /// Is the cursor at an argument list that may attach to the expression
    /// being built? The open paren must sit on the same line, with no
    /// semicolon in between.
    fn at_argument_list(&self) -> bool {
        self.check(&Token::LeftParen)
            && !self.token.newline_before
            && !self.token.after_semicolon
    }

    fn parse_optional_argument_list(&mut self) -> Result<Option<ArgumentList>> {
        if !self.at_argument_list() {
            return Ok(None);
        }
        self.parse_argument_list().map(Some)
    }

    fn parse_argument_list(&mut self) -> Result<ArgumentList> {
        let (arguments, _, span) = self.parse_paren_comma_list(|p| p.parse_expr().map(Some))?;
        Ok(ArgumentList { arguments, span, id: self.next_id() })
    }

    /// The postfix loop: `!!`, amending `{`, access, and same-line `[`.
    fn parse_postfix(&mut self, mut expr: Expr) -> Result<Expr> {
        loop {
            match self.token.token {
                Token::NonNull => {
                    self.bump();
                    let span = expr.span() + self.prev_token.span;
                    expr = Expr::NonNull(NonNullExpr {
                        expr: Box::new(expr),
                        span,
                        id: self.next_id(),
                    });
                }
                Token::LeftBrace => {
                    // Only values that visibly produce an object may be
                    // amended; a brace anywhere else is a stray block.
                    if !matches!(
                        expr,
                        Expr::Parenthesized(_) | Expr::Amends(_) | Expr::New(_)
                    ) {
                        return Err(ParseError::unexpected_curly_probably_amends_expression(
                            self.token.span,
                        )
                        .into());
                    }
                    let body = self.parse_object_body()?;
                    let span = expr.span() + body.span;
                    expr = Expr::Amends(AmendsExpr {
                        base: Box::new(expr),
                        body,
                        span,
                        id: self.next_id(),
                    });
                }
                Token::Dot | Token::QDot => {
                    let is_nullable = matches!(self.token.token, Token::QDot);
                    self.bump();
                    let ident = self.expect_ident()?;
                    let args = self.parse_optional_argument_list()?;
                    let end = args.as_ref().map(|a| a.span).unwrap_or(ident.span);
                    let span = expr.span() + end;
                    expr = Expr::QualifiedAccess(QualifiedAccessExpr {
                        receiver: Box::new(expr),
                        ident,
                        is_nullable,
                        args,
                        span,
                        id: self.next_id(),
                    });
                }
                Token::LeftBrack
                    if !self.token.newline_before && !self.token.after_semicolon =>
                {
                    self.bump();
                    let index = self.parse_expr()?;
                    let end = self.expect(&Token::RightBrack)?;
                    let span = expr.span() + end;
                    expr = Expr::Subscript(SubscriptExpr {
                        receiver: Box::new(expr),
                        index: Box::new(index),
                        span,
                        id: self.next_id(),
                    });
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Returns an [`Expr`] CST node for a primary expression.
    fn parse_atom(&mut self) -> Result<Expr> {
        let SpannedToken { token, span, .. } = self.token.clone();
        match token {
            Token::This => {
                self.bump();
                Ok(Expr::This(ThisExpr { span, id: self.next_id() }))
            }
            Token::Outer => {
                self.bump();
                Ok(Expr::Outer(OuterExpr { span, id: self.next_id() }))
            }
            Token::Module => {
                self.bump();
                Ok(Expr::Module(ModuleExpr { span, id: self.next_id() }))
            }
            Token::Null => {
                self.bump();
                Ok(Expr::Null(NullLiteral { span, id: self.next_id() }))
            }
            Token::True | Token::False => {
                self.bump();
                Ok(Expr::Bool(BoolLiteral {
                    value: token == Token::True,
                    span,
                    id: self.next_id(),
                }))
            }
            Token::Int(value)
            | Token::Hex(value)
            | Token::Bin(value)
            | Token::Oct(value) => {
                self.bump();
                Ok(Expr::Int(IntLiteral { value, span, id: self.next_id() }))
            }
            Token::Float(value) => {
                self.bump();
                Ok(Expr::Float(FloatLiteral { value, span, id: self.next_id() }))
            }
            Token::StringStart => self.parse_string(false),
            Token::StringMultiStart => self.parse_string(true),
            Token::Throw => {
                self.bump();
                let expr = self.parse_parenthesized_operand()?;
                let span = span + self.prev_token.span;
                Ok(Expr::Throw(ThrowExpr { expr: Box::new(expr), span, id: self.next_id() }))
            }
            Token::Trace => {
                self.bump();
                let expr = self.parse_parenthesized_operand()?;
                let span = span + self.prev_token.span;
                Ok(Expr::Trace(TraceExpr { expr: Box::new(expr), span, id: self.next_id() }))
            }
            Token::Import | Token::ImportStar => {
                self.bump();
                self.expect(&Token::LeftParen)?;
                let url = self.parse_string_constant()?;
                let end = self.expect(&Token::RightParen)?;
                Ok(Expr::Import(ImportExpr {
                    url,
                    is_glob: token == Token::ImportStar,
                    span: span + end,
                    id: self.next_id(),
                }))
            }
            Token::Read | Token::ReadStar | Token::ReadQuestion => {
                self.bump();
                let kind = match token {
                    Token::ReadStar => ReadKind::ReadGlob,
                    Token::ReadQuestion => ReadKind::ReadNull,
                    _ => ReadKind::Read,
                };
                let expr = self.parse_parenthesized_operand()?;
                let span = span + self.prev_token.span;
                Ok(Expr::Read(ReadExpr {
                    kind,
                    expr: Box::new(expr),
                    span,
                    id: self.next_id(),
                }))
            }
            Token::New => {
                self.bump();
                let type_ = if self.check(&Token::LeftBrace) {
                    None
                } else {
                    Some(self.parse_type()?)
                };
                let body = self.parse_object_body()?;
                let span = span + body.span;
                Ok(Expr::New(NewExpr { type_, body, span, id: self.next_id() }))
            }
            Token::Super => {
                self.bump();
                if self.eat(&Token::LeftBrack) {
                    let index = self.parse_expr()?;
                    let end = self.expect(&Token::RightBrack)?;
                    return Ok(Expr::SuperSubscript(SuperSubscriptExpr {
                        index: Box::new(index),
                        span: span + end,
                        id: self.next_id(),
                    }));
                }
                self.expect(&Token::Dot)?;
                let ident = self.expect_ident()?;
                let args = self.parse_optional_argument_list()?;
                let end = args.as_ref().map(|a| a.span).unwrap_or(ident.span);
                Ok(Expr::SuperAccess(SuperAccessExpr {
                    ident,
                    args,
                    span: span + end,
                    id: self.next_id(),
                }))
            }
            Token::If => {
                self.bump();
                self.expect(&Token::LeftParen)?;
                let condition = self.parse_expr()?;
                self.expect(&Token::RightParen)?;
                let then = self.parse_expr()?;
                self.expect(&Token::Else)?;
                let otherwise = self.parse_expr()?;
                let span = span + otherwise.span();
                Ok(Expr::If(IfExpr {
                    condition: Box::new(condition),
                    then: Box::new(then),
                    otherwise: Box::new(otherwise),
                    span,
                    id: self.next_id(),
                }))
            }
            Token::Let => {
                self.bump();
                self.expect(&Token::LeftParen)?;
                let parameter = self.parse_parameter()?;
                self.expect(&Token::Assign)?;
                let value = self.parse_expr()?;
                self.expect(&Token::RightParen)?;
                let body = self.parse_expr()?;
                let span = span + body.span();
                Ok(Expr::Let(LetExpr {
                    parameter,
                    value: Box::new(value),
                    body: Box::new(body),
                    span,
                    id: self.next_id(),
                }))
            }
            Token::LeftParen => self.parse_function_literal_or_parenthesized(),
            Token::Ident(_) => {
                let ident = self.expect_ident()?;
                let args = self.parse_optional_argument_list()?;
                let end = args.as_ref().map(|a| a.span).unwrap_or(ident.span);
                let span = ident.span + end;
                Ok(Expr::UnqualifiedAccess(UnqualifiedAccessExpr {
                    ident,
                    args,
                    span,
                    id: self.next_id(),
                }))
            }
            token if token.is_reserved_keyword() => {
                Err(ParseError::reserved_keyword(token, span).into())
            }
            _ => self.unexpected("an expression"),
        }
    }

    /// Parses `( expr )` and yields the inner expression; used by the
    /// keyword forms `throw`, `trace`, and `read`.
    fn parse_parenthesized_operand(&mut self) -> Result<Expr> {
        self.expect(&Token::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect(&Token::RightParen)?;
        Ok(expr)
    }

    /// Disambiguates `(` in expression position: a function literal
    /// (`() ->`, `(x) ->`, `(x, y) ->`, `(x: T) ->`), or a parenthesized
    /// expression.
    ///
    /// After an identifier, one saved-token backtrack plus a single token of
    /// lookahead decides; everything else re-parses from the atom.
    fn parse_function_literal_or_parenthesized(&mut self) -> Result<Expr> {
        let start = self.expect(&Token::LeftParen)?;

        match self.token.token {
            // `()` must continue as a nullary function literal.
            Token::RightParen => {
                self.bump();
                let params_span = start + self.prev_token.span;
                let parameters = ParameterList {
                    parameters: Vec::new(),
                    span: params_span,
                    id: self.next_id(),
                };
                self.parse_function_literal_tail(start, parameters)
            }
            Token::Underscore => self.parse_function_literal_params(start),
            Token::Ident(_) => {
                self.bump();
                match self.token.token {
                    // `(x,` or `(x:` commit to a parameter list.
                    Token::Comma | Token::Colon => {
                        self.backtrack();
                        self.parse_function_literal_params(start)
                    }
                    // `(x)` is a parameter list iff `->` follows.
                    Token::RightParen
                        if self.look_ahead(1, |t| t.token == Token::Arrow) =>
                    {
                        self.backtrack();
                        self.parse_function_literal_params(start)
                    }
                    _ => {
                        self.backtrack();
                        self.parse_parenthesized_tail(start)
                    }
                }
            }
            _ => self.parse_parenthesized_tail(start),
        }
    }

    fn parse_parenthesized_tail(&mut self, start: pkl_span::Span) -> Result<Expr> {
        let expr = self.parse_expr()?;
        let end = self.expect(&Token::RightParen)?;
        Ok(Expr::Parenthesized(ParenthesizedExpr {
            expr: Box::new(expr),
            span: start + end,
            id: self.next_id(),
        }))
    }

    /// Parses the parameters of a function literal; the cursor sits on the
    /// first parameter, right after the open paren.
    fn parse_function_literal_params(&mut self, start: pkl_span::Span) -> Result<Expr> {
        let mut parameters = Vec::new();
        loop {
            parameters.push(self.parse_parameter()?);
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        let end = self.expect(&Token::RightParen)?;
        let parameters = ParameterList {
            parameters,
            span: start + end,
            id: self.next_id(),
        };
        self.parse_function_literal_tail(start, parameters)
    }

    fn parse_function_literal_tail(
        &mut self,
        start: pkl_span::Span,
        parameters: ParameterList,
    ) -> Result<Expr> {
        self.expect(&Token::Arrow)?;
        let body = self.parse_expr()?;
        let span = start + body.span();
        Ok(Expr::FunctionLiteral(FunctionLiteralExpr {
            parameters,
            body: Box::new(body),
            span,
            id: self.next_id(),
        }))
    }

    /// Parses a value parameter: `_` or `name (: Type)?`.
    pub(crate) fn parse_parameter(&mut self) -> Result<Parameter> {
        if self.eat(&Token::Underscore) {
            return Ok(Parameter::Underscore {
                span: self.prev_token.span,
                id: self.next_id(),
            });
        }
        let ident = self.expect_ident()?;
        let type_annotation = if self.check(&Token::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        let span = match &type_annotation {
            Some(annotation) => ident.span + annotation.span,
            None => ident.span,
        };
        Ok(Parameter::TypedIdent(TypedIdent {
            ident,
            type_annotation,
            span,
            id: self.next_id(),
        }))
    }

    // -- strings ------------------------------------------------------------

    /// Parses a whole string literal; the cursor sits on its opening token.
    fn parse_string(&mut self, multiline: bool) -> Result<Expr> {
        let start = self.expect(if multiline {
            &Token::StringMultiStart
        } else {
            &Token::StringStart
        })?;

        let mut parts: Vec<StringPart> = Vec::new();
        let mut run: Vec<StringConstantPart> = Vec::new();
        let mut run_span: Option<pkl_span::Span> = None;

        // Grows the current constant run and widens its span to the token
        // just consumed.
        fn push_run(
            run: &mut Vec<StringConstantPart>,
            run_span: &mut Option<pkl_span::Span>,
            span: pkl_span::Span,
            part: StringConstantPart,
        ) {
            run.push(part);
            *run_span = Some(match *run_span {
                None => span,
                Some(s) => s + span,
            });
        }

        let end = loop {
            let SpannedToken { token, span, .. } = self.token.clone();
            let constant_part = match token {
                Token::StringPart(text) => Some(StringConstantPart::Constant(text)),
                Token::StringNewline => Some(StringConstantPart::Newline),
                Token::StringEscapeNewline => Some(StringConstantPart::Escape(EscapeKind::Newline)),
                Token::StringEscapeTab => Some(StringConstantPart::Escape(EscapeKind::Tab)),
                Token::StringEscapeReturn => Some(StringConstantPart::Escape(EscapeKind::Return)),
                Token::StringEscapeQuote => Some(StringConstantPart::Escape(EscapeKind::Quote)),
                Token::StringEscapeBackslash => {
                    Some(StringConstantPart::Escape(EscapeKind::Backslash))
                }
                Token::StringEscapeUnicode(digits) => {
                    Some(StringConstantPart::UnicodeEscape(digits))
                }
                _ => None,
            };
            if let Some(part) = constant_part {
                self.bump();
                push_run(&mut run, &mut run_span, self.prev_token.span, part);
                continue;
            }
            match self.token.token.clone() {
                Token::InterpolationStart => {
                    if let Some(span) = run_span.take() {
                        parts.push(StringPart::Constant(ConstantParts {
                            parts: std::mem::take(&mut run),
                            span,
                            id: self.next_id(),
                        }));
                    }
                    self.bump();
                    let expr = self.parse_expr()?;
                    let close = self.expect(&Token::RightParen)?;
                    parts.push(StringPart::Interpolation(Interpolation {
                        expr: Box::new(expr),
                        span: span + close,
                        id: self.next_id(),
                    }));
                }
                Token::StringEnd => {
                    self.bump();
                    break self.prev_token.span;
                }
                _ => return self.unexpected("a string fragment"),
            }
        };

        if let Some(span) = run_span.take() {
            parts.push(StringPart::Constant(ConstantParts {
                parts: std::mem::take(&mut run),
                span,
                id: self.next_id(),
            }));
        }

        let span = start + end;

        // A plain literal: at most one constant text run, nothing else.
        let is_constant = match parts.as_slice() {
            [] => true,
            [StringPart::Constant(run)] => {
                matches!(run.parts.as_slice(), [StringConstantPart::Constant(_)])
            }
            _ => false,
        };
        if is_constant {
            let value = match parts.into_iter().next() {
                Some(StringPart::Constant(run)) => match run.parts.into_iter().next() {
                    Some(StringConstantPart::Constant(text)) => text,
                    _ => String::new(),
                },
                _ => String::new(),
            };
            return Ok(Expr::StringConstant(StringConstant {
                value,
                span,
                id: self.next_id(),
            }));
        }

        if multiline {
            Ok(Expr::InterpolatedMultiString(InterpolatedMultiString {
                parts,
                span,
                id: self.next_id(),
            }))
        } else {
            Ok(Expr::InterpolatedString(InterpolatedString {
                parts,
                span,
                id: self.next_id(),
            }))
        }
    }

    /// Parses a string literal that must be a plain constant, as required
    /// for module uris.
    pub(crate) fn parse_string_constant(&mut self) -> Result<StringConstant> {
        let multiline = match self.token.token {
            Token::StringStart => false,
            Token::StringMultiStart => true,
            _ => return self.unexpected("a string literal"),
        };
        match self.parse_string(multiline)? {
            Expr::StringConstant(constant) => Ok(constant),
            other => Err(ParseError::string_constant_expected(other.span()).into()),
        }
    }
}
