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

/// Declares an error catalog.
///
/// Each `@formatted` entry becomes a constructor on the generated type; the
/// constructor takes the declared arguments followed by the `Span` of the
/// offending region. Message codes are assigned positionally on top of
/// `code_mask`, so new messages must be appended at the end to keep existing
/// codes stable.
#[macro_export]
macro_rules! create_messages {
    (
        $(#[$error_type_docs:meta])*
        $type_:ident,
        code_mask: $code_mask:expr,
        code_prefix: $code_prefix:expr,
        $(
            @formatted
            $name:ident {
                args: ($($arg_names:ident: $arg_types:ty),* $(,)?),
                msg: $message:expr,
                help: $help:expr,
            }
        )*
    ) => {
        $(#[$error_type_docs])*
        #[derive(Clone, Debug, PartialEq, Eq, ::thiserror::Error)]
        #[error(transparent)]
        pub struct $type_(#[from] $crate::common::formatted::Formatted);

        // The discriminants number the messages in declaration order.
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy)]
        enum Code {
            $($name,)*
        }

        impl $type_ {
            $(
                #[allow(clippy::too_many_arguments)]
                pub fn $name($($arg_names: $arg_types,)* span: ::pkl_span::Span) -> Self {
                    Self($crate::common::formatted::Formatted::new_from_span(
                        $message,
                        $help,
                        $code_mask + Code::$name as i32,
                        $code_prefix,
                        span,
                    ))
                }
            )*

            /// The stable code of this message, e.g. `EPAR0017`.
            pub fn error_code(&self) -> &str {
                &self.0.code
            }

            /// The rendered message text.
            pub fn message(&self) -> &str {
                &self.0.message
            }

            /// Where in the source the problem was detected.
            pub fn span(&self) -> ::pkl_span::Span {
                self.0.span
            }
        }
    };
}
