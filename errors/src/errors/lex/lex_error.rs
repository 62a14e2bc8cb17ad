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

use crate::create_messages;
use std::fmt::Display;

create_messages!(
    /// LexError enum that represents all the errors the lexer can raise.
    LexError,
    code_mask: 1000i32,
    code_prefix: "LEX",

    @formatted
    unexpected_character {
        args: (found: impl Display),
        msg: format!("unexpected character `{found}`"),
        help: None,
    }

    @formatted
    malformed_operator {
        args: (found: impl Display, expected: impl Display),
        msg: format!("`{found}` is not an operator; did you mean `{expected}`?"),
        help: None,
    }

    @formatted
    single_quote_string_newline {
        args: (),
        msg: "single-quoted strings cannot span multiple lines".to_string(),
        help: Some("use a multi-line string (`\"\"\"`) or the `\\n` escape".to_string()),
    }

    @formatted
    unterminated_string {
        args: (),
        msg: "this string is never closed".to_string(),
        help: None,
    }

    @formatted
    invalid_character_escape_sequence {
        args: (found: impl Display),
        msg: format!("invalid character escape sequence `\\{found}`"),
        help: Some("valid escapes are `\\n`, `\\t`, `\\r`, `\\\"`, `\\\\`, `\\u{{...}}`, and `\\(...)`".to_string()),
    }

    @formatted
    unterminated_unicode_escape_sequence {
        args: (),
        msg: "unterminated unicode escape sequence; expected `}`".to_string(),
        help: None,
    }

    @formatted
    invalid_unicode_escape_digit {
        args: (found: impl Display),
        msg: format!("`{found}` is not a hexadecimal digit"),
        help: None,
    }

    @formatted
    invalid_separator_position {
        args: (),
        msg: "`_` separators must follow a digit".to_string(),
        help: None,
    }

    @formatted
    unterminated_block_comment {
        args: (),
        msg: "this block comment is never closed".to_string(),
        help: None,
    }

    @formatted
    unterminated_backtick_identifier {
        args: (),
        msg: "backtick-quoted identifiers must be closed on the same line".to_string(),
        help: None,
    }
);
