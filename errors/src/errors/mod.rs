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

use pkl_span::Span;

/// Contains the LexError definitions.
pub mod lex;
pub use self::lex::*;

/// Contains the ParseError definitions.
pub mod parse;
pub use self::parse::*;

/// The umbrella error type of the front-end. A failed parse produces exactly
/// one of these.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PklError {
    /// An error produced while lexing source text.
    #[error(transparent)]
    LexError(#[from] LexError),

    /// An error produced while parsing the token stream.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl PklError {
    /// The stable code of the underlying message.
    pub fn error_code(&self) -> &str {
        match self {
            Self::LexError(e) => e.error_code(),
            Self::ParseError(e) => e.error_code(),
        }
    }

    /// The rendered message text.
    pub fn message(&self) -> &str {
        match self {
            Self::LexError(e) => e.message(),
            Self::ParseError(e) => e.message(),
        }
    }

    /// Where in the source the problem was detected.
    pub fn span(&self) -> Span {
        match self {
            Self::LexError(e) => e.span(),
            Self::ParseError(e) => e.span(),
        }
    }
}

/// A result type for front-end operations.
pub type Result<T, E = PklError> = core::result::Result<T, E>;
