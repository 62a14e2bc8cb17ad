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

//! The concrete syntax tree produced by the pkl-rs parser.
//!
//! Every node carries the byte span of the source region it covers and a
//! [`NodeID`] allocated by the parse's [`NodeBuilder`]. Nodes own their
//! children; parent back-edges live in a [`ParentMap`] built once when the
//! parse returns. The tree is immutable from the caller's point of view.

#![forbid(unsafe_code)]

pub mod common;
pub use common::*;

pub mod class;
pub use class::*;

pub mod expressions;
pub use expressions::*;

pub mod members;
pub use members::*;

pub mod module;
pub use module::*;

pub mod types;
pub use types::*;

pub mod parents;
pub use parents::*;

pub mod visitor;
pub use visitor::*;
