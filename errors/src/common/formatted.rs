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

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A formatted diagnostic: message text, stable code, optional help, and the
/// span of the offending source region.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Formatted {
    /// The stable code of the message, e.g. `EPAR0017`.
    pub code: String,
    /// The rendered message text.
    pub message: String,
    /// An optional hint on how to fix the problem.
    pub help: Option<String>,
    /// Where in the source the problem was detected.
    pub span: Span,
}

impl Formatted {
    /// Creates a formatted diagnostic at `span`.
    pub fn new_from_span(
        message: String,
        help: Option<String>,
        code: i32,
        code_prefix: &str,
        span: Span,
    ) -> Self {
        Self {
            code: format!("E{code_prefix}{code:04}"),
            message,
            help,
            span,
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("Error [{}]", self.code);
        write!(f, "{}: {}", header.bold().red(), self.message.bold())?;
        write!(f, "\n --> bytes {}", self.span)?;
        if let Some(help) = &self.help {
            write!(f, "\n  = {}: {help}", "help".bold().cyan())?;
        }
        Ok(())
    }
}

impl std::error::Error for Formatted {}
