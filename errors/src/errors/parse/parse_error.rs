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
    /// ParseError enum that represents all the errors the parser can raise.
    ParseError,
    code_mask: 2000i32,
    code_prefix: "PAR",

    @formatted
    unexpected {
        args: (found: impl Display, expected: impl Display),
        msg: format!("expected {expected} -- found `{found}`"),
        help: None,
    }

    @formatted
    unexpected_end_of_file {
        args: (),
        msg: "unexpected end of file".to_string(),
        help: None,
    }

    @formatted
    wrong_delimiter {
        args: (expected: impl Display),
        msg: format!("wrong delimiter; expected `{expected}` without whitespace in between"),
        help: None,
    }

    @formatted
    unexpected_curly_probably_amends_expression {
        args: (),
        msg: "unexpected `{`; this value cannot be amended directly".to_string(),
        help: Some("only `new` expressions, amend expressions, and parenthesized expressions can be amended".to_string()),
    }

    @formatted
    reserved_keyword {
        args: (keyword: impl Display),
        msg: format!("`{keyword}` is a reserved keyword and cannot be used here"),
        help: None,
    }

    @formatted
    incomplete_property {
        args: (name: impl Display),
        msg: format!("property `{name}` needs a type annotation, an `=` value, or an object body"),
        help: None,
    }

    @formatted
    typed_property_with_body {
        args: (name: impl Display),
        msg: format!("property `{name}` has both a type annotation and an object body"),
        help: Some("a property can be amended (`{ ... }`) or re-typed, not both".to_string()),
    }

    @formatted
    import_with_header {
        args: (),
        msg: "imports cannot carry doc comments, annotations, or modifiers".to_string(),
        help: None,
    }

    @formatted
    import_after_entry {
        args: (),
        msg: "imports must appear before the first member of the module".to_string(),
        help: None,
    }

    @formatted
    string_constant_expected {
        args: (),
        msg: "expected a constant string without interpolation or escapes".to_string(),
        help: None,
    }

    @formatted
    malformed_expression {
        args: (),
        msg: "malformed operator sequence".to_string(),
        help: None,
    }

    @formatted
    extends_and_amends {
        args: (),
        msg: "a module cannot both `extends` and `amends` another module".to_string(),
        help: None,
    }

    @formatted
    multiple_module_declarations {
        args: (),
        msg: "a module can only have one `module` declaration".to_string(),
        help: None,
    }
);
