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

/// A node ID.
///
/// IDs are allocated sequentially by the parse's
/// [`NodeBuilder`](crate::NodeBuilder); they identify nodes in the
/// [`ParentMap`](crate::ParentMap).
pub type NodeID = usize;

/// A node in the CST.
pub trait Node: std::fmt::Debug + Clone + PartialEq + Eq + serde::Serialize {
    /// Returns the span of the node.
    fn span(&self) -> Span;

    /// Returns the ID of the node.
    fn id(&self) -> NodeID;
}

#[macro_export]
macro_rules! simple_node_impl {
    ($ty:ty) => {
        impl $crate::Node for $ty {
            fn span(&self) -> Span {
                self.span
            }

            fn id(&self) -> $crate::NodeID {
                self.id
            }
        }
    };
}
