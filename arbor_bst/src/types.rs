// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the engine: node identifiers, child sides, visit orders.

/// Identifier for a node in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Which side of a parent a child hangs from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The child holds a strictly smaller value than its parent.
    Left,
    /// The child holds a strictly greater value than its parent.
    Right,
}

/// A depth-first visit order over the tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields values in ascending order.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
}

impl Order {
    /// Human-readable name, capitalized as it appears in the operation log.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inorder => "Inorder",
            Self::Preorder => "Preorder",
            Self::Postorder => "Postorder",
        }
    }
}
