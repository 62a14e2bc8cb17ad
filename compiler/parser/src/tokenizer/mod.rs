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

//! The tokenizer to convert Pkl source text into tokens.
//!
//! This module contains the [`tokenize()`] function, which drives the
//! context-sensitive [`Lexer`] over a whole buffer.

pub(crate) mod token;

pub use self::token::KEYWORD_TOKENS;
pub(crate) use self::token::*;

pub(crate) mod lexer;
pub(crate) use self::lexer::*;

use pkl_errors::Result;
use std::iter;

/// Creates a new vector of spanned tokens from the given source code text.
///
/// Whitespace is skipped; comments and semicolons are still present, the
/// parser feed strips them.
pub(crate) fn tokenize(input: &str) -> Result<Vec<SpannedToken>> {
    tokenize_iter(input).collect()
}

/// Yields spanned tokens from the given source code text.
pub(crate) fn tokenize_iter(input: &str) -> impl Iterator<Item = Result<SpannedToken>> + '_ {
    let mut lexer = Lexer::new(input);
    let mut done = false;
    iter::from_fn(move || {
        if done {
            return None;
        }
        match lexer.next() {
            Err(e) => {
                done = true;
                Some(Err(e))
            }
            Ok(Token::Eof) => {
                done = true;
                None
            }
            Ok(token) => Some(Ok(SpannedToken {
                token,
                span: lexer.span(),
                newline_before: lexer.newline_before(),
                after_semicolon: false,
            })),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkl_span::Pos;

    fn tokens(raw: &str) -> Vec<SpannedToken> {
        tokenize(raw).unwrap()
    }

    fn kinds(raw: &str) -> Vec<Token> {
        tokens(raw).into_iter().map(|t| t.token).collect()
    }

    fn lex_err(raw: &str) -> pkl_errors::PklError {
        tokenize(raw).unwrap_err()
    }

    #[test]
    fn test_tokenizer() {
        let raw = r#"
    test_ident
    12345
    abstract
    amends
    as
    class
    const
    else
    extends
    external
    false
    fixed
    for
    function
    hidden
    if
    import
    import*
    in
    is
    let
    local
    module
    new
    nothing
    null
    open
    out
    outer
    read
    read*
    read?
    super
    this
    throw
    trace
    true
    typealias
    unknown
    when
    !
    !=
    !!
    &&
    (
    )
    *
    **
    +
    ,
    -
    ->
    _
    .
    ...
    ...?
    /
    ~/
    %
    :
    ;
    <
    <=
    =
    ==
    >
    >=
    [
    [[
    ]
    {
    }
    |
    ||
    |>
    ?
    ?.
    ??
    @
    // test
    /* test */
    /// doc
    "#;
        let mut output = String::new();
        for SpannedToken { token, .. } in tokens(raw) {
            output += &format!("{token} ");
        }

        assert_eq!(
            output,
            r#"test_ident 12345 abstract amends as class const else extends external false fixed for function hidden if import import* in is let local module new nothing null open out outer read read* read? super this throw trace true typealias unknown when ! != !! && ( ) * ** + , - -> _ . ... ...? / ~/ % : ; < <= = == > >= [ [[ ] { } | || |> ? ?. ?? @ // test /* test */ /// doc "#
        );
    }

    #[test]
    fn test_spans_cover_source() {
        let raw = "x = 1_000 // trailing\ny {\n  z = \"ab\"\n}\n";
        let toks = tokens(raw);
        // Spans ascend and never overlap.
        for pair in toks.windows(2) {
            assert!(pair[0].span.hi <= pair[1].span.lo, "{} / {}", pair[0], pair[1]);
        }
        // Concatenating token texts and the skipped whitespace reproduces
        // the source byte for byte.
        let mut rebuilt = String::new();
        let mut pos = 0;
        for tok in &toks {
            let lo = tok.span.lo.to_usize();
            rebuilt.push_str(&raw[pos..lo]);
            rebuilt.push_str(&raw[lo..tok.span.hi.to_usize()]);
            pos = tok.span.hi.to_usize();
        }
        rebuilt.push_str(&raw[pos..]);
        assert_eq!(rebuilt, raw);
    }

    #[test]
    fn test_newline_flags() {
        let raw = "a b\nc\n\nd";
        let toks = tokens(raw);
        let flags: Vec<bool> = toks.iter().map(|t| t.newline_before).collect();
        assert_eq!(flags, [false, false, true, true]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("1 1_000 0x1F 0xa_b 0b10_01 0o7_7 1.5 .5 1e3 1.5e-3 2E+4_0"),
            vec![
                Token::Int("1".into()),
                Token::Int("1000".into()),
                Token::Hex("0x1F".into()),
                Token::Hex("0xab".into()),
                Token::Bin("0b1001".into()),
                Token::Oct("0o77".into()),
                Token::Float("1.5".into()),
                Token::Float(".5".into()),
                Token::Float("1e3".into()),
                Token::Float("1.5e-3".into()),
                Token::Float("2E+40".into()),
            ]
        );
    }

    #[test]
    fn test_trailing_dot_is_not_a_fraction() {
        assert_eq!(
            kinds("1.toString"),
            vec![Token::Int("1".into()), Token::Dot, Token::Ident("toString".into())]
        );
    }

    #[test]
    fn test_separator_position_errors() {
        assert_eq!(lex_err("0x_1").error_code(), "ELEX1007");
        assert_eq!(lex_err("1e_5").error_code(), "ELEX1007");
        // `1._5` is not a malformed fraction; it is member access on `1`.
        assert_eq!(
            kinds("1._5"),
            vec![Token::Int("1".into()), Token::Dot, Token::Ident("_5".into())]
        );
    }

    #[test]
    fn test_malformed_operators() {
        assert!(lex_err("a & b").message().contains("&&"));
        assert!(lex_err("a ~ b").message().contains("~/"));
        assert!(lex_err("a .. b").message().contains("..."));
    }

    #[test]
    fn test_backtick_identifier() {
        assert_eq!(kinds("`for`"), vec![Token::Ident("for".into())]);
        assert!(lex_err("`broken\n`").message().contains("backtick"));
    }

    #[test]
    fn test_nested_block_comment() {
        assert_eq!(
            kinds("/* outer /* inner */ still outer */ x"),
            vec![
                Token::BlockComment("/* outer /* inner */ still outer */".into()),
                Token::Ident("x".into()),
            ]
        );
        assert!(lex_err("/* /* */").message().contains("never closed"));
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(
            kinds(r#""hello""#),
            vec![Token::StringStart, Token::StringPart("hello".into()), Token::StringEnd]
        );
        assert_eq!(kinds(r#""""#), vec![Token::StringStart, Token::StringEnd]);
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            kinds(r#""a\nb\u{1F600}c""#),
            vec![
                Token::StringStart,
                Token::StringPart("a".into()),
                Token::StringEscapeNewline,
                Token::StringPart("b".into()),
                Token::StringEscapeUnicode("1F600".into()),
                Token::StringPart("c".into()),
                Token::StringEnd,
            ]
        );
    }

    #[test]
    fn test_interpolation() {
        assert_eq!(
            kinds(r#""hi \(name)!""#),
            vec![
                Token::StringStart,
                Token::StringPart("hi ".into()),
                Token::InterpolationStart,
                Token::Ident("name".into()),
                Token::RightParen,
                Token::StringPart("!".into()),
                Token::StringEnd,
            ]
        );
    }

    #[test]
    fn test_nested_interpolation() {
        assert_eq!(
            kinds(r#""a\(f("b\(c)d"))e""#),
            vec![
                Token::StringStart,
                Token::StringPart("a".into()),
                Token::InterpolationStart,
                Token::Ident("f".into()),
                Token::LeftParen,
                Token::StringStart,
                Token::StringPart("b".into()),
                Token::InterpolationStart,
                Token::Ident("c".into()),
                Token::RightParen,
                Token::StringPart("d".into()),
                Token::StringEnd,
                Token::RightParen,
                Token::RightParen,
                Token::StringPart("e".into()),
                Token::StringEnd,
            ]
        );
    }

    #[test]
    fn test_pound_string_suppresses_escapes() {
        // One pound: `\n` is two raw characters, `\#n` is the escape.
        assert_eq!(
            kinds(r##"#"a\nb"#"##),
            vec![Token::StringStart, Token::StringPart("a\\nb".into()), Token::StringEnd]
        );
        assert_eq!(
            kinds(r##"#"a\#nb"#"##),
            vec![
                Token::StringStart,
                Token::StringPart("a".into()),
                Token::StringEscapeNewline,
                Token::StringPart("b".into()),
                Token::StringEnd,
            ]
        );
        // An unpounded quote is content in a pounded string.
        assert_eq!(
            kinds(r##"#"say "hi""#"##),
            vec![Token::StringStart, Token::StringPart("say \"hi\"".into()), Token::StringEnd]
        );
    }

    #[test]
    fn test_multiline_string() {
        assert_eq!(
            kinds("\"\"\"\nfoo\nbar\n\"\"\""),
            vec![
                Token::StringMultiStart,
                Token::StringNewline,
                Token::StringPart("foo".into()),
                Token::StringNewline,
                Token::StringPart("bar".into()),
                Token::StringNewline,
                Token::StringEnd,
            ]
        );
    }

    #[test]
    fn test_single_quote_string_newline_error() {
        let err = lex_err("\"abc\ndef\"");
        assert!(err.message().contains("multiple lines"));
        // The error points at the newline itself.
        assert_eq!(err.span().lo.to_usize(), 4);
    }

    #[test]
    fn test_unterminated_unicode_escape() {
        assert!(lex_err(r#""\u{12"#).message().contains("unterminated unicode"));
        assert!(lex_err(r#""\u{12Z}""#).message().contains("hexadecimal"));
    }

    #[test]
    fn test_unterminated_string() {
        assert!(lex_err(r#""abc"#).message().contains("never closed"));
    }

    #[test]
    fn test_read_and_import_postfix() {
        assert_eq!(
            kinds("read? read* read import* import x"),
            vec![
                Token::ReadQuestion,
                Token::ReadStar,
                Token::Read,
                Token::ImportStar,
                Token::Import,
                Token::Ident("x".into()),
            ]
        );
        // With whitespace the symbol stays its own token.
        assert_eq!(kinds("read ?"), vec![Token::Read, Token::Question]);
    }

    #[test]
    fn test_unicode_identifiers() {
        assert_eq!(
            kinds("größe $dollar _under π"),
            vec![
                Token::Ident("größe".into()),
                Token::Ident("$dollar".into()),
                Token::Ident("_under".into()),
                Token::Ident("π".into()),
            ]
        );
        assert_eq!(kinds("_"), vec![Token::Underscore]);
    }
}
