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

use crate::{simple_node_impl, NodeID};
use pkl_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a declaration modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    External,
    Abstract,
    Open,
    Local,
    Hidden,
    Fixed,
    Const,
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External => write!(f, "external"),
            Self::Abstract => write!(f, "abstract"),
            Self::Open => write!(f, "open"),
            Self::Local => write!(f, "local"),
            Self::Hidden => write!(f, "hidden"),
            Self::Fixed => write!(f, "fixed"),
            Self::Const => write!(f, "const"),
        }
    }
}

/// A single modifier keyword on a declaration, e.g. `local` or `hidden`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub kind: ModifierKind,
    pub span: Span,
    pub id: NodeID,
}

simple_node_impl!(Modifier);

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
