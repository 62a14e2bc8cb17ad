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

use crate::tokenizer::*;

use pkl_cst::{Comment, CommentKind, DocComment, Ident, NodeBuilder, NodeID};
use pkl_errors::{ParseError, Result};
use pkl_span::Span;

use std::fmt::Display;
use std::mem;

/// Stores a module in tokenized format plus additional context.
/// May be converted into a [`Module`](pkl_cst::Module) CST by parsing all
/// tokens.
pub struct ParserContext<'a> {
    /// Allocates ids for the nodes this parse creates.
    pub(crate) node_builder: &'a NodeBuilder,
    /// All un-bumped tokens, reversed so `pop()` yields the next one.
    tokens: Vec<SpannedToken>,
    /// The current token, i.e., if `p.tokens = ['3', *, '4']`,
    /// then after a `p.bump()`, we'll have `p.token = '3'`.
    pub(crate) token: SpannedToken,
    /// The previous token, i.e., if `p.tokens = ['3', *, '4']`,
    /// then after two `p.bump()`s, we'll have `p.token = '*'` and `p.prev_token = '3'`.
    pub(crate) prev_token: SpannedToken,
    /// Comments stripped from the feed, in source order.
    comments: Vec<Comment>,
    /// Whether `backtrack()` may be called: exactly one step, directly after
    /// a `bump()`.
    can_backtrack: bool,
}

impl<'a> ParserContext<'a> {
    /// Returns a new [`ParserContext`] over the given raw token stream.
    ///
    /// Line and block comments are stripped into the comment list, and so
    /// are doc comments, which additionally stay in the stream for the
    /// header productions. Semicolons are stripped, marking the following
    /// token. Trivia that is removed carries its separator flags over to the
    /// next delivered token, so newline-sensitive productions see through
    /// comments.
    pub fn new(node_builder: &'a NodeBuilder, raw_tokens: Vec<SpannedToken>) -> Self {
        let mut tokens = Vec::with_capacity(raw_tokens.len());
        let mut comments = Vec::new();
        let mut newline_carry = false;
        let mut semicolon_carry = false;

        for mut tok in raw_tokens {
            tok.newline_before |= newline_carry;
            tok.after_semicolon |= semicolon_carry;
            newline_carry = false;
            semicolon_carry = false;

            match &tok.token {
                Token::LineComment(text) => {
                    comments.push(Comment {
                        kind: CommentKind::Line,
                        span: tok.span,
                        text: text.clone(),
                    });
                    newline_carry = tok.newline_before;
                    semicolon_carry = tok.after_semicolon;
                }
                Token::BlockComment(text) => {
                    comments.push(Comment {
                        kind: CommentKind::Block,
                        span: tok.span,
                        text: text.clone(),
                    });
                    newline_carry = tok.newline_before || text.contains('\n');
                    semicolon_carry = tok.after_semicolon;
                }
                Token::Semicolon => {
                    newline_carry = tok.newline_before;
                    semicolon_carry = true;
                }
                Token::DocComment(text) => {
                    comments.push(Comment {
                        kind: CommentKind::Doc,
                        span: tok.span,
                        text: text.clone(),
                    });
                    tokens.push(tok);
                }
                _ => tokens.push(tok),
            }
        }

        // For performance we reverse so that we get cheap `.pop()`s.
        tokens.reverse();

        let token = SpannedToken::dummy();
        let mut p = Self {
            node_builder,
            prev_token: token.clone(),
            token,
            tokens,
            comments,
            can_backtrack: false,
        };
        p.bump();
        p
    }

    /// Allocates the id for a node about to be built.
    pub(crate) fn next_id(&self) -> NodeID {
        self.node_builder.next_id()
    }

    /// The comments collected while feeding the parser, in source order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Consumes the context, yielding the collected comments.
    pub fn into_comments(self) -> Vec<Comment> {
        self.comments
    }

    /// Advances the parser cursor by one token.
    ///
    /// So e.g., if we had `previous = A`, `current = B`, and `tokens = [C, D, E]`,
    /// then after `p.bump()`, the state will be `previous = B`, `current = C`, and `tokens = [D, E]`.
    pub fn bump(&mut self) {
        // Probably a bug (infinite loop), as the previous token was already EOF.
        if let Token::Eof = self.prev_token.token {
            panic!("attempted to bump the parser past EOF (may be stuck in a loop)");
        }

        // Extract next token, or `Eof` if there was none. The synthesized
        // EOF token sits one past the last valid offset.
        let next_token = self.tokens.pop().unwrap_or_else(|| SpannedToken {
            token: Token::Eof,
            span: Span::new(self.token.span.hi, self.token.span.hi),
            newline_before: false,
            after_semicolon: false,
        });

        // Set the new token.
        self.prev_token = mem::replace(&mut self.token, next_token);
        self.can_backtrack = true;
    }

    /// Restores the most recently bumped token.
    ///
    /// Only a single step may be undone; calling this twice without a `bump`
    /// in between is a parser bug.
    pub fn backtrack(&mut self) {
        assert!(self.can_backtrack, "backtrack without a preceding bump");
        self.can_backtrack = false;
        let restored = mem::replace(&mut self.prev_token, SpannedToken::dummy());
        let pushed = mem::replace(&mut self.token, restored);
        self.tokens.push(pushed);
    }

    /// Checks whether the current token is `token`.
    pub fn check(&self, tok: &Token) -> bool {
        &self.token.token == tok
    }

    /// Removes the next token if it matches and returns `true`.
    pub fn eat(&mut self, token: &Token) -> bool {
        self.check(token).then(|| self.bump()).is_some()
    }

    /// Eats any of the given `tokens`, returning `true` if anything was eaten.
    pub fn eat_any(&mut self, tokens: &[Token]) -> bool {
        tokens.iter().any(|x| self.check(x)).then(|| self.bump()).is_some()
    }

    /// Look-ahead `dist` tokens of `self.token` and get access to that token there.
    /// When `dist == 0` then the current token is looked at.
    pub fn look_ahead<R>(&self, dist: usize, looker: impl FnOnce(&SpannedToken) -> R) -> R {
        if dist == 0 {
            return looker(&self.token);
        }

        let eof = SpannedToken {
            token: Token::Eof,
            span: Span::dummy(),
            newline_before: false,
            after_semicolon: false,
        };

        let idx = match self.tokens.len().checked_sub(dist) {
            None => return looker(&eof),
            Some(idx) => idx,
        };

        looker(self.tokens.get(idx).unwrap_or(&eof))
    }

    /// Returns true if the next token exists.
    pub fn has_next(&self) -> bool {
        !matches!(self.token.token, Token::Eof)
    }

    /// Returns an unexpected error at the current token.
    pub(crate) fn unexpected<T>(&self, expected: impl Display) -> Result<T> {
        if let Token::Eof = self.token.token {
            return Err(ParseError::unexpected_end_of_file(self.token.span).into());
        }
        Err(ParseError::unexpected(&self.token.token, expected, self.token.span).into())
    }

    /// Eats the expected `token`, or errors.
    pub fn expect(&mut self, token: &Token) -> Result<Span> {
        if self.eat(token) {
            Ok(self.prev_token.span)
        } else {
            self.unexpected(format!("'{token}'"))
        }
    }

    /// Eats one of the expected `tokens`, or errors.
    pub fn expect_any(&mut self, tokens: &[Token]) -> Result<Span> {
        if self.eat_any(tokens) {
            Ok(self.prev_token.span)
        } else {
            self.unexpected(
                tokens.iter().map(|x| format!("'{x}'")).collect::<Vec<_>>().join(", "),
            )
        }
    }

    /// Eats the next token if it is an identifier and returns it.
    pub fn eat_identifier(&mut self) -> Option<Ident> {
        if let Token::Ident(name) = &self.token.token {
            let name = name.clone();
            self.bump();
            return Some(Ident::new(name, self.prev_token.span, self.next_id()));
        }
        None
    }

    /// Expects an [`Ident`], or errors. Reserved keywords get their own
    /// message so the user learns the name is off limits rather than absent.
    pub fn expect_ident(&mut self) -> Result<Ident> {
        if let Some(ident) = self.eat_identifier() {
            return Ok(ident);
        }
        if self.token.token.is_reserved_keyword() {
            return Err(
                ParseError::reserved_keyword(&self.token.token, self.token.span).into()
            );
        }
        self.unexpected("an identifier")
    }

    /// Parses a list of `T`s using `inner`
    /// The opening and closing delimiters are `open` and `close`,
    /// and elements in the list are separated by `sep`.
    /// When `(list, true, _)` is returned, `sep` was a terminator.
    pub(crate) fn parse_list<T>(
        &mut self,
        open: Token,
        close: Token,
        sep: Token,
        mut inner: impl FnMut(&mut Self) -> Result<Option<T>>,
    ) -> Result<(Vec<T>, bool, Span)> {
        let mut list = Vec::new();
        let mut trailing = false;

        // Parse opening delimiter.
        let open_span = self.expect(&open)?;

        while !self.check(&close) {
            // Parse the element. We allow inner parser recovery through the `Option`.
            if let Some(elem) = inner(self)? {
                list.push(elem);
            }
            // Parse the separator.
            if !self.eat(&sep) {
                trailing = false;
                break;
            }

            trailing = true;
        }

        // Parse closing delimiter.
        let span = open_span + self.expect(&close)?;

        Ok((list, trailing, span))
    }

    /// Parse a list separated by `,` and delimited by parens.
    pub(crate) fn parse_paren_comma_list<T>(
        &mut self,
        f: impl FnMut(&mut Self) -> Result<Option<T>>,
    ) -> Result<(Vec<T>, bool, Span)> {
        self.parse_list(Token::LeftParen, Token::RightParen, Token::Comma, f)
    }

    /// Merges the run of doc-comment tokens at the cursor into one node.
    pub(crate) fn parse_doc_comment(&mut self) -> Option<DocComment> {
        let mut span: Option<Span> = None;
        while let Token::DocComment(_) = self.token.token {
            self.bump();
            span = Some(match span {
                None => self.prev_token.span,
                Some(s) => s + self.prev_token.span,
            });
        }
        span.map(|span| DocComment { span, id: self.next_id() })
    }
}
