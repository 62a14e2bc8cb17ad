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

//! The front-end of the pkl-rs compiler: lexer, parser, and operator
//! resolver, producing a concrete syntax tree with byte-accurate spans.
//!
//! A parse is a pure function of the source text. Nothing here blocks,
//! shares mutable state, or keeps globals; concurrent parses over disjoint
//! sources need no coordination.

#![forbid(unsafe_code)]

pub(crate) mod tokenizer;
pub use tokenizer::KEYWORD_TOKENS;
pub(crate) use tokenizer::*;

pub mod parser;
pub use parser::*;

use pkl_cst::{Comment, Module, NodeBuilder};
use pkl_errors::Result;

use tracing::trace;

#[cfg(test)]
mod test;

/// Parses a Pkl module from the given source code text.
///
/// Returns the module tree and the comments removed from the token stream,
/// in source order, or the single error that aborted the parse.
pub fn parse_module(source: &str) -> Result<(Module, Vec<Comment>)> {
    trace!(bytes = source.len(), "parsing module");
    let node_builder = NodeBuilder::default();
    parse(&node_builder, source)
}
