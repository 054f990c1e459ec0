// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: storage, mutations, queries.

use alloc::vec::Vec;
use core::cmp::Ordering;
use smallvec::SmallVec;

use crate::ops::OperationResult;
use crate::types::{NodeId, Order, Side};

/// A binary search tree over a totally ordered, copyable key type.
///
/// Nodes live in a slot arena addressed by generational [`NodeId`]s, so ids
/// handed out to derived structures (layouts, overlays) stay stable across
/// unrelated mutations and go stale rather than aliasing when a slot is
/// reused after a deletion.
///
/// Invariant: for every node, all values in its left subtree are strictly
/// less than the node's value and all values in its right subtree are
/// strictly greater. Duplicate inserts are reported and ignored. The
/// invariant holds before and after every public operation; no transient
/// violation is observable.
///
/// ## Example
///
/// ```rust
/// use arbor_bst::{Bst, OperationResult};
///
/// let mut tree = Bst::new();
/// tree.insert(50);
/// tree.insert(30);
/// assert!(matches!(
///     tree.insert(30),
///     OperationResult::DuplicateIgnored { value: 30 }
/// ));
/// assert_eq!(tree.len(), 2);
/// ```
pub struct Bst<T> {
    /// slots
    nodes: Vec<Option<Node<T>>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: Option<NodeId>,
    len: usize,
}

#[derive(Clone, Debug)]
struct Node<T> {
    generation: u32,
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(generation: u32, value: T) -> Self {
        Self {
            generation,
            value,
            left: None,
            right: None,
        }
    }
}

impl<T> core::fmt::Debug for Bst<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Bst")
            .field("len", &self.len)
            .field("slots_total", &total)
            .field("slots_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bst<T> {
    /// Create a new empty tree.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of values currently stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, or `None` for an empty tree.
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is live if its slot is occupied and its generation matches
    /// the slot's current generation. Ids of deleted nodes stay dead even
    /// after the slot is reused.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// The left child of a live node, or `None` for absent children and
    /// stale ids.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        self.node(id).left
    }

    /// The right child of a live node, or `None` for absent children and
    /// stale ids.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        self.node(id).right
    }

    /// Access a node; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn alloc(&mut self, value: T) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, value));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, value)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    fn free(&mut self, id: NodeId) {
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Height of the tree: 0 when empty, otherwise the number of nodes on
    /// the longest root-to-leaf path. Used by layout sizing.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: SmallVec<[(NodeId, usize); 16]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            let n = self.node(id);
            if let Some(l) = n.left {
                stack.push((l, depth + 1));
            }
            if let Some(r) = n.right {
                stack.push((r, depth + 1));
            }
        }
        max
    }
}

impl<T: Ord + Copy> Bst<T> {
    /// The value held by a live node, or `None` for stale ids.
    pub fn value(&self, id: NodeId) -> Option<T> {
        if !self.is_alive(id) {
            return None;
        }
        Some(self.node(id).value)
    }

    fn parts(&self, id: NodeId) -> (T, Option<NodeId>, Option<NodeId>) {
        let n = self.node(id);
        (n.value, n.left, n.right)
    }

    /// Insert a value, attaching a new node under the last visited node (or
    /// as the root of an empty tree).
    ///
    /// Descends left on smaller, right on greater; an equal value stops the
    /// walk and reports [`OperationResult::DuplicateIgnored`] with the tree
    /// untouched. Single deterministic code path, no rebalancing, O(height).
    pub fn insert(&mut self, value: T) -> OperationResult<T> {
        let Some(root) = self.root else {
            let id = self.alloc(value);
            self.root = Some(id);
            self.len += 1;
            return OperationResult::Inserted {
                value,
                parent: None,
            };
        };
        let mut current = root;
        loop {
            let (v, left, right) = self.parts(current);
            match value.cmp(&v) {
                Ordering::Less => match left {
                    Some(l) => current = l,
                    None => {
                        let id = self.alloc(value);
                        self.node_mut(current).left = Some(id);
                        self.len += 1;
                        return OperationResult::Inserted {
                            value,
                            parent: Some((v, Side::Left)),
                        };
                    }
                },
                Ordering::Greater => match right {
                    Some(r) => current = r,
                    None => {
                        let id = self.alloc(value);
                        self.node_mut(current).right = Some(id);
                        self.len += 1;
                        return OperationResult::Inserted {
                            value,
                            parent: Some((v, Side::Right)),
                        };
                    }
                },
                Ordering::Equal => return OperationResult::DuplicateIgnored { value },
            }
        }
    }

    /// Remove a value.
    ///
    /// - Absent value: [`OperationResult::NotFoundForDeletion`], tree
    ///   unchanged.
    /// - Leaf: the node is detached.
    /// - One child: the child is spliced into the deleted node's position.
    /// - Two children: the in-order successor's value (leftmost of the right
    ///   subtree) is copied into the node, whose identity is preserved, and
    ///   the successor's original node (which has at most a right child) is
    ///   unlinked from the right subtree.
    ///
    /// The successor rule is a fixed policy; it is never predecessor-based.
    pub fn remove(&mut self, value: T) -> OperationResult<T> {
        let mut parent: Option<(NodeId, Side)> = None;
        let mut current = self.root;
        while let Some(id) = current {
            let (v, left, right) = self.parts(id);
            match value.cmp(&v) {
                Ordering::Less => {
                    parent = Some((id, Side::Left));
                    current = left;
                }
                Ordering::Greater => {
                    parent = Some((id, Side::Right));
                    current = right;
                }
                Ordering::Equal => break,
            }
        }
        let Some(id) = current else {
            return OperationResult::NotFoundForDeletion { value };
        };

        let (_, left, right) = self.parts(id);
        match (left, right) {
            (None, None) => {
                self.relink(parent, None);
                self.free(id);
                self.len -= 1;
                OperationResult::DeletedLeaf { value }
            }
            (Some(child), None) | (None, Some(child)) => {
                let replaced_by = self.node(child).value;
                self.relink(parent, Some(child));
                self.free(id);
                self.len -= 1;
                OperationResult::DeletedWithOneChild { value, replaced_by }
            }
            (Some(_), Some(first_right)) => {
                // In-order successor: leftmost node of the right subtree.
                let mut succ_parent = (id, Side::Right);
                let mut succ = first_right;
                while let Some(l) = self.node(succ).left {
                    succ_parent = (succ, Side::Left);
                    succ = l;
                }
                let successor = self.node(succ).value;
                // The successor has no left child; its right child (if any)
                // takes its place.
                let succ_right = self.node(succ).right;
                self.relink(Some(succ_parent), succ_right);
                self.node_mut(id).value = successor;
                self.free(succ);
                self.len -= 1;
                OperationResult::DeletedWithSuccessor { value, successor }
            }
        }
    }

    /// Point the parent link (or the root) at `new_child`.
    fn relink(&mut self, parent: Option<(NodeId, Side)>, new_child: Option<NodeId>) {
        match parent {
            None => self.root = new_child,
            Some((p, Side::Left)) => self.node_mut(p).left = new_child,
            Some((p, Side::Right)) => self.node_mut(p).right = new_child,
        }
    }

    /// Search for a value, recording every visited node's value.
    ///
    /// The returned path runs root-to-result: inclusive of the target when
    /// found, inclusive of the last visited node when not.
    pub fn search(&self, value: T) -> OperationResult<T> {
        let mut path = Vec::new();
        let mut current = self.root;
        while let Some(id) = current {
            let (v, left, right) = self.parts(id);
            path.push(v);
            match value.cmp(&v) {
                Ordering::Equal => return OperationResult::SearchFound { value, path },
                Ordering::Less => current = left,
                Ordering::Greater => current = right,
            }
        }
        OperationResult::SearchNotFound {
            value,
            path_tried: path,
        }
    }

    /// Returns true if the value is present.
    pub fn contains(&self, value: T) -> bool {
        let mut current = self.root;
        while let Some(id) = current {
            let (v, left, right) = self.parts(id);
            match value.cmp(&v) {
                Ordering::Equal => return true,
                Ordering::Less => current = left,
                Ordering::Greater => current = right,
            }
        }
        false
    }

    /// In-order traversal (left, node, right): ascending value order.
    pub fn inorder(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: SmallVec<[NodeId; 16]> = SmallVec::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            let (v, _, right) = self.parts(id);
            out.push(v);
            current = right;
        }
        out
    }

    /// Pre-order traversal (node, left, right).
    pub fn preorder(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: SmallVec<[NodeId; 16]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        while let Some(id) = stack.pop() {
            let (v, left, right) = self.parts(id);
            out.push(v);
            if let Some(r) = right {
                stack.push(r);
            }
            if let Some(l) = left {
                stack.push(l);
            }
        }
        out
    }

    /// Post-order traversal (left, right, node).
    pub fn postorder(&self) -> Vec<T> {
        // Reverse of a mirrored pre-order (node, right, left), which keeps
        // the walk on an explicit stack.
        let mut out = Vec::with_capacity(self.len);
        let mut stack: SmallVec<[NodeId; 16]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        while let Some(id) = stack.pop() {
            let (v, left, right) = self.parts(id);
            out.push(v);
            if let Some(l) = left {
                stack.push(l);
            }
            if let Some(r) = right {
                stack.push(r);
            }
        }
        out.reverse();
        out
    }

    /// Traverse in the given [`Order`].
    pub fn traverse(&self, order: Order) -> Vec<T> {
        match order {
            Order::Inorder => self.inorder(),
            Order::Preorder => self.preorder(),
            Order::Postorder => self.postorder(),
        }
    }
}
