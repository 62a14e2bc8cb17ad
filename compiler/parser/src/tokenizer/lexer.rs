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

use crate::tokenizer::Token;
use pkl_errors::{LexError, Result};
use pkl_span::{BytePos, Pos, Span};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Is `c` valid at the start of an identifier?
fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || unicode_xid::UnicodeXID::is_xid_start(c)
}

/// Is `c` valid after the first character of an identifier?
fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '$' || unicode_xid::UnicodeXID::is_xid_continue(c)
}

/// One string literal the lexer is currently inside of.
///
/// The stack of frames tracks nesting through interpolation: while lexing
/// `"a\(f("b"))c"` there are two frames at the innermost point. The top
/// frame exists iff the lexer is inside a string, even while it is
/// temporarily lexing an interpolation expression in [`Mode::Default`].
#[derive(Clone, Copy, Debug)]
struct StringFrame {
    /// 1 for `"`, 3 for `"""`.
    quotes: u8,
    /// Number of `#`s in the opening delimiter.
    pounds: usize,
    /// Open parentheses inside the current interpolation; 0 while lexing
    /// string content.
    parens: i32,
    /// The closing delimiter has been seen; the next string token is
    /// `StringEnd`.
    ended: bool,
    /// A `\` with the right number of pounds has been seen; the next string
    /// token is an escape or `InterpolationStart`.
    pending_escape: bool,
}

/// The two lexer states: ordinary code, or raw string content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Default,
    String,
}

/// A hand-written, context-sensitive lexer over a source buffer.
///
/// Call [`next()`](Lexer::next) to advance; afterwards
/// [`span()`](Lexer::span), [`text()`](Lexer::text), and
/// [`newline_before()`](Lexer::newline_before) describe the token just
/// produced. Errors are terminal: the lexer does not recover.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of the cursor.
    pos: usize,
    /// Byte offset where the current token started.
    token_start: usize,
    /// At least one line feed occurred in the whitespace skipped before the
    /// current token.
    newline_before: bool,
    mode: Mode,
    frames: Vec<StringFrame>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            token_start: 0,
            newline_before: false,
            mode: Mode::Default,
            frames: Vec::new(),
        }
    }

    /// The span of the most recently produced token.
    pub fn span(&self) -> Span {
        Span::new(BytePos::from_usize(self.token_start), BytePos::from_usize(self.pos))
    }

    /// The verbatim text of the most recently produced token.
    pub fn text(&self) -> &'a str {
        &self.source[self.token_start..self.pos]
    }

    /// Whether a line feed occurred in the whitespace before the most
    /// recently produced token.
    pub fn newline_before(&self) -> bool {
        self.newline_before
    }

    /// Random access to the source.
    pub fn text_for(&self, span: Span) -> &'a str {
        &self.source[span.lo.to_usize()..span.hi.to_usize()]
    }

    // -- cursor helpers -----------------------------------------------------

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Counts consecutive `c`s at the cursor without consuming them.
    fn run_length(&self, c: char) -> usize {
        self.rest().chars().take_while(|x| *x == c).count()
    }

    fn span_at_cursor(&self, len: usize) -> Span {
        Span::new(BytePos::from_usize(self.pos), BytePos::from_usize(self.pos + len))
    }

    // -- top level ----------------------------------------------------------

    /// Advances to the next token. At the end of input this keeps returning
    /// [`Token::Eof`].
    pub fn next(&mut self) -> Result<Token> {
        self.newline_before = false;
        match self.mode {
            Mode::Default => self.next_default(),
            Mode::String => self.next_string(),
        }
    }

    // -- DEFAULT state ------------------------------------------------------

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                '\n' => {
                    self.newline_before = true;
                    self.bump();
                }
                ' ' | '\t' | '\u{0C}' | '\r' => {
                    self.bump();
                }
                _ => break,
            }
        }
    }

    fn next_default(&mut self) -> Result<Token> {
        self.skip_whitespace();
        self.token_start = self.pos;

        let Some(c) = self.peek() else {
            return Ok(Token::Eof);
        };

        // Consumes a single character token.
        let single = |lexer: &mut Self, token| {
            lexer.bump();
            Ok(token)
        };

        match c {
            '(' => {
                self.bump();
                if let Some(frame) = self.frames.last_mut() {
                    frame.parens += 1;
                }
                Ok(Token::LeftParen)
            }
            ')' => {
                self.bump();
                if let Some(frame) = self.frames.last_mut() {
                    frame.parens -= 1;
                    if frame.parens == 0 {
                        self.mode = Mode::String;
                    }
                }
                Ok(Token::RightParen)
            }
            '"' | '#' => self.lex_string_start(),
            '`' => self.lex_backtick_identifier(),
            '/' => self.lex_slash(),
            x if x.is_ascii_digit() => self.lex_number(),
            '.' => self.lex_dot(),
            '{' => single(self, Token::LeftBrace),
            '}' => single(self, Token::RightBrace),
            '[' => {
                self.bump();
                if self.eat_char('[') {
                    Ok(Token::LeftPred)
                } else {
                    Ok(Token::LeftBrack)
                }
            }
            ']' => single(self, Token::RightBrack),
            ',' => single(self, Token::Comma),
            ';' => single(self, Token::Semicolon),
            '@' => single(self, Token::At),
            ':' => single(self, Token::Colon),
            '+' => single(self, Token::Plus),
            '%' => single(self, Token::Mod),
            '-' => {
                self.bump();
                if self.eat_char('>') {
                    Ok(Token::Arrow)
                } else {
                    Ok(Token::Minus)
                }
            }
            '*' => {
                self.bump();
                if self.eat_char('*') {
                    Ok(Token::Pow)
                } else {
                    Ok(Token::Star)
                }
            }
            '=' => {
                self.bump();
                if self.eat_char('=') {
                    Ok(Token::Equal)
                } else {
                    Ok(Token::Assign)
                }
            }
            '!' => {
                self.bump();
                if self.eat_char('=') {
                    Ok(Token::NotEqual)
                } else if self.eat_char('!') {
                    Ok(Token::NonNull)
                } else {
                    Ok(Token::Not)
                }
            }
            '<' => {
                self.bump();
                if self.eat_char('=') {
                    Ok(Token::Lte)
                } else {
                    Ok(Token::Lt)
                }
            }
            '>' => {
                self.bump();
                if self.eat_char('=') {
                    Ok(Token::Gte)
                } else {
                    Ok(Token::Gt)
                }
            }
            '|' => {
                self.bump();
                if self.eat_char('|') {
                    Ok(Token::Or)
                } else if self.eat_char('>') {
                    Ok(Token::Pipe)
                } else {
                    Ok(Token::Union)
                }
            }
            '?' => {
                self.bump();
                if self.eat_char('.') {
                    Ok(Token::QDot)
                } else if self.eat_char('?') {
                    Ok(Token::Coalesce)
                } else {
                    Ok(Token::Question)
                }
            }
            '&' => {
                self.bump();
                if self.eat_char('&') {
                    Ok(Token::And)
                } else {
                    Err(LexError::malformed_operator("&", "&&", self.span()).into())
                }
            }
            '~' => {
                self.bump();
                if self.eat_char('/') {
                    Ok(Token::IntDiv)
                } else {
                    Err(LexError::malformed_operator("~", "~/", self.span()).into())
                }
            }
            x if is_ident_start(x) => self.lex_identifier_or_keyword(),
            x => {
                self.bump();
                Err(LexError::unexpected_character(x, self.span()).into())
            }
        }
    }

    fn lex_dot(&mut self) -> Result<Token> {
        if self.rest().starts_with("...?") {
            self.pos += 4;
            return Ok(Token::QSpread);
        }
        if self.rest().starts_with("...") {
            self.pos += 3;
            return Ok(Token::Spread);
        }
        if self.rest().starts_with("..") {
            self.pos += 2;
            return Err(LexError::malformed_operator("..", "...", self.span()).into());
        }
        if self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            // A fraction with no integer part, e.g. `.5`.
            return self.lex_number();
        }
        self.bump();
        Ok(Token::Dot)
    }

    fn lex_identifier_or_keyword(&mut self) -> Result<Token> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.bump();
        }
        let text = &self.source[start..self.pos];

        if text == "_" {
            return Ok(Token::Underscore);
        }

        match Token::keyword_from_str(text) {
            // Postfix lookahead: `import*`, `read*`, `read?` fuse with the
            // keyword when the symbol is adjacent.
            Some(Token::Import) if self.eat_char('*') => Ok(Token::ImportStar),
            Some(Token::Read) if self.eat_char('*') => Ok(Token::ReadStar),
            Some(Token::Read) if self.eat_char('?') => Ok(Token::ReadQuestion),
            Some(keyword) => Ok(keyword),
            None => Ok(Token::Ident(text.to_string())),
        }
    }

    fn lex_backtick_identifier(&mut self) -> Result<Token> {
        self.bump(); // the opening backtick
        let start = self.pos;
        loop {
            match self.peek() {
                Some('`') => {
                    let name = self.source[start..self.pos].to_string();
                    self.bump();
                    return Ok(Token::Ident(name));
                }
                Some('\n') | Some('\r') | None => {
                    return Err(LexError::unterminated_backtick_identifier(self.span()).into());
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    // -- comments -----------------------------------------------------------

    fn lex_slash(&mut self) -> Result<Token> {
        if self.rest().starts_with("///") {
            let text = self.take_line();
            return Ok(Token::DocComment(text));
        }
        if self.rest().starts_with("//") {
            let text = self.take_line();
            return Ok(Token::LineComment(text));
        }
        if self.rest().starts_with("/*") {
            return self.lex_block_comment();
        }
        self.bump();
        Ok(Token::Div)
    }

    /// Consumes up to, but not including, the next line feed.
    fn take_line(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(|c| c != '\n') {
            self.bump();
        }
        self.source[start..self.pos].to_string()
    }

    /// Block comments nest: every `/*` needs its own `*/`.
    fn lex_block_comment(&mut self) -> Result<Token> {
        let start = self.pos;
        self.pos += 2;
        let mut depth = 1usize;
        while depth > 0 {
            if self.rest().starts_with("/*") {
                self.pos += 2;
                depth += 1;
            } else if self.rest().starts_with("*/") {
                self.pos += 2;
                depth -= 1;
            } else if self.bump().is_none() {
                return Err(LexError::unterminated_block_comment(self.span()).into());
            }
        }
        Ok(Token::BlockComment(self.source[start..self.pos].to_string()))
    }

    // -- numbers ------------------------------------------------------------

    /// Consumes digits and `_` separators; the first character may not be a
    /// separator. Returns whether at least one digit was consumed.
    fn eat_digits(&mut self, is_digit: impl Fn(char) -> bool, out: &mut String) -> Result<bool> {
        if self.peek() == Some('_') {
            return Err(LexError::invalid_separator_position(self.span_at_cursor(1)).into());
        }
        let mut any = false;
        while let Some(c) = self.peek() {
            if is_digit(c) {
                out.push(c);
                any = true;
            } else if c == '_' {
                // Group separator; dropped from the stored lexeme.
            } else {
                break;
            }
            self.bump();
        }
        Ok(any)
    }

    /// The error for a missing digit after a prefix, fraction, or exponent.
    fn bad_digit(&self) -> pkl_errors::PklError {
        match self.peek() {
            Some(c) => {
                LexError::unexpected_character(c, self.span_at_cursor(c.len_utf8())).into()
            }
            None => LexError::unexpected_character("<eof>", self.span_at_cursor(0)).into(),
        }
    }

    /// Numbers: decimal, `0x` hex, `0b` binary, `0o` octal, and floats with
    /// a fraction and/or an exponent. The stored lexeme has `_` separators
    /// stripped and everything else preserved.
    fn lex_number(&mut self) -> Result<Token> {
        let mut text = String::new();

        // Radix prefixes.
        if self.peek() == Some('0') {
            let (prefix, is_digit): (&str, fn(char) -> bool) = match self.peek_second() {
                Some('x') => ("0x", |c: char| c.is_ascii_hexdigit()),
                Some('b') => ("0b", |c: char| c == '0' || c == '1'),
                Some('o') => ("0o", |c: char| ('0'..='7').contains(&c)),
                _ => ("", |c: char| c.is_ascii_digit()),
            };
            if !prefix.is_empty() {
                self.pos += 2;
                text.push_str(prefix);
                if !self.eat_digits(is_digit, &mut text)? {
                    return Err(self.bad_digit());
                }
                return Ok(match prefix {
                    "0x" => Token::Hex(text),
                    "0b" => Token::Bin(text),
                    _ => Token::Oct(text),
                });
            }
        }

        // Integer part. Absent for a fraction like `.5`.
        let mut is_float = false;
        if self.peek() != Some('.') {
            self.eat_digits(|c| c.is_ascii_digit(), &mut text)?;
        }

        // Fraction. A trailing `.` with no digit after it is not part of the
        // number; it is left for the next token.
        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            text.push('.');
            self.eat_digits(|c| c.is_ascii_digit(), &mut text)?;
            is_float = true;
        }

        // Exponent.
        if matches!(self.peek(), Some('e') | Some('E')) {
            let exponent = self.bump().unwrap();
            text.push(exponent);
            if matches!(self.peek(), Some('+') | Some('-')) {
                text.push(self.bump().unwrap());
            }
            if !self.eat_digits(|c| c.is_ascii_digit(), &mut text)? {
                return Err(self.bad_digit());
            }
            is_float = true;
        }

        if is_float {
            Ok(Token::Float(text))
        } else {
            Ok(Token::Int(text))
        }
    }

    // -- STRING state -------------------------------------------------------

    /// Lexes `#*("|""")`: the opening delimiter of a string literal.
    fn lex_string_start(&mut self) -> Result<Token> {
        let pounds = self.run_length('#');
        self.pos += pounds;

        if self.rest().starts_with("\"\"\"") {
            self.pos += 3;
            self.frames.push(StringFrame {
                quotes: 3,
                pounds,
                parens: 0,
                ended: false,
                pending_escape: false,
            });
            self.mode = Mode::String;
            return Ok(Token::StringMultiStart);
        }
        if self.eat_char('"') {
            self.frames.push(StringFrame {
                quotes: 1,
                pounds,
                parens: 0,
                ended: false,
                pending_escape: false,
            });
            self.mode = Mode::String;
            return Ok(Token::StringStart);
        }

        // Pounds without a quote are not a token on their own.
        Err(LexError::unexpected_character('#', self.span()).into())
    }

    /// Does the cursor sit on the closing delimiter of the current frame?
    fn at_string_end(&self, frame: &StringFrame) -> bool {
        let rest = self.rest();
        let quotes: &str = if frame.quotes == 3 { "\"\"\"" } else { "\"" };
        if !rest.starts_with(quotes) {
            return false;
        }
        rest[quotes.len()..].chars().take_while(|c| *c == '#').count() >= frame.pounds
    }

    /// Does the cursor sit on `\` followed by the frame's pounds?
    ///
    /// With zero pounds this degenerates to "is the next character a
    /// backslash", for single- and multi-line strings alike.
    fn at_escape(&self, frame: &StringFrame) -> bool {
        let rest = self.rest();
        rest.starts_with('\\')
            && rest[1..].chars().take_while(|c| *c == '#').count() >= frame.pounds
    }

    fn next_string(&mut self) -> Result<Token> {
        self.token_start = self.pos;
        let frame = *self.frames.last().expect("string mode without a frame");

        // 1. Deliver the pending end-of-string.
        if frame.ended {
            let quote_len = frame.quotes as usize;
            self.pos += quote_len + frame.pounds;
            self.frames.pop();
            self.mode = Mode::Default;
            return Ok(Token::StringEnd);
        }

        // 2. A line break inside a multi-line string is its own token.
        if frame.quotes == 3 && self.peek() == Some('\n') {
            self.bump();
            return Ok(Token::StringNewline);
        }

        // 3. Deliver the pending escape.
        if frame.pending_escape {
            self.frames.last_mut().unwrap().pending_escape = false;
            return self.lex_escape(frame.pounds);
        }

        // 4. Consume raw content up to the next terminator.
        let mut text = String::new();
        loop {
            if self.at_string_end(&frame) {
                self.frames.last_mut().unwrap().ended = true;
                break;
            }
            if self.at_escape(&frame) {
                self.frames.last_mut().unwrap().pending_escape = true;
                break;
            }
            match self.peek() {
                None => {
                    return Err(LexError::unterminated_string(self.span()).into());
                }
                Some('\n') if frame.quotes == 3 => break,
                Some(c @ ('\n' | '\r')) if frame.quotes == 1 => {
                    let span = self.span_at_cursor(c.len_utf8());
                    return Err(LexError::single_quote_string_newline(span).into());
                }
                Some(c) => {
                    text.push(c);
                    self.bump();
                }
            }
        }

        if text.is_empty() {
            // The terminator sat right at the cursor; produce its token now.
            return self.next_string();
        }
        Ok(Token::StringPart(text))
    }

    /// Lexes `\#*X` where `X` selects the escape.
    fn lex_escape(&mut self, pounds: usize) -> Result<Token> {
        self.bump(); // the backslash
        self.pos += pounds;

        match self.bump() {
            Some('n') => Ok(Token::StringEscapeNewline),
            Some('t') => Ok(Token::StringEscapeTab),
            Some('r') => Ok(Token::StringEscapeReturn),
            Some('"') => Ok(Token::StringEscapeQuote),
            Some('\\') => Ok(Token::StringEscapeBackslash),
            Some('u') => self.lex_unicode_escape(),
            Some('(') => {
                let frame = self.frames.last_mut().unwrap();
                frame.parens += 1;
                self.mode = Mode::Default;
                Ok(Token::InterpolationStart)
            }
            Some(c) => Err(LexError::invalid_character_escape_sequence(c, self.span()).into()),
            None => Err(LexError::unterminated_string(self.span()).into()),
        }
    }

    /// Lexes the `{XXXX}` of `\u{XXXX}`; only hex digits may appear between
    /// the braces.
    fn lex_unicode_escape(&mut self) -> Result<Token> {
        if !self.eat_char('{') {
            return Err(LexError::invalid_character_escape_sequence('u', self.span()).into());
        }
        let mut digits = String::new();
        loop {
            match self.peek() {
                Some('}') => {
                    self.bump();
                    return Ok(Token::StringEscapeUnicode(digits));
                }
                Some(c) if c.is_ascii_hexdigit() => {
                    digits.push(c);
                    self.bump();
                }
                Some('\n') | None => {
                    return Err(
                        LexError::unterminated_unicode_escape_sequence(self.span()).into()
                    );
                }
                Some(c) => {
                    let span = self.span_at_cursor(c.len_utf8());
                    return Err(LexError::invalid_unicode_escape_digit(c, span).into());
                }
            }
        }
    }
}

impl fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("pos", &self.pos)
            .field("mode", &self.mode)
            .field("frames", &self.frames.len())
            .finish()
    }
}

/// A token paired with its span and the soft-separator flags the parser
/// consults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    /// At least one line feed occurred between the previous token and this
    /// one.
    pub newline_before: bool,
    /// A (stripped) semicolon sat between the previous token and this one.
    pub after_semicolon: bool,
}

impl SpannedToken {
    /// Returns a dummy token at a dummy span.
    pub const fn dummy() -> Self {
        Self {
            token: Token::Question,
            span: Span::dummy(),
            newline_before: false,
            after_semicolon: false,
        }
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' @ ", self.token.to_string().trim())?;
        self.span.fmt(f)
    }
}
