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

//! The parser to convert Pkl source text into a [`Module`] CST.
//!
//! This module contains the [`parse()`] function which feeds the tokenized
//! source through a recursive-descent parse.

use crate::tokenizer::*;

use pkl_cst::{Comment, Module, NodeBuilder};
use pkl_errors::Result;

mod context;
pub use context::*;

pub mod expression;
pub mod file;
pub mod member;
pub(crate) mod resolver;
pub mod type_;

/// Creates a new module CST from the given source code text.
///
/// On success the accumulated comments are returned alongside the tree, in
/// source order. The first lex or parse error aborts; no partial trees are
/// produced.
pub fn parse(node_builder: &NodeBuilder, source: &str) -> Result<(Module, Vec<Comment>)> {
    let tokens = crate::tokenize(source)?;
    let mut context = ParserContext::new(node_builder, tokens);
    let module = context.parse_module()?;
    Ok((module, context.into_comments()))
}
