// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor BST: a binary search tree engine with structured operation results.
//!
//! This crate is the leaf layer of the Arbor stack. It owns the tree shape and
//! nothing else: no layout, no drawing, no event wiring. Every mutation and
//! query returns a plain [`OperationResult`] value describing exactly what
//! happened, so higher layers (a renderer, an operation log) can react without
//! the engine knowing they exist.
//!
//! - [`Bst::insert`]: iterative descent, duplicates are a successful no-op.
//! - [`Bst::remove`]: leaf detach, one-child splice, or two-children deletion
//!   by in-order successor promotion (the successor policy is fixed and
//!   observable; it is never predecessor-based).
//! - [`Bst::search`]: iterative descent that records the exact root-to-result
//!   visit path.
//! - [`Bst::inorder`] / [`Bst::preorder`] / [`Bst::postorder`]: pure reads
//!   using explicit stacks, so chain-shaped trees cannot overflow the call
//!   stack.
//!
//! Nodes live in a generational slot arena and are addressed by [`NodeId`],
//! so derived structures (for example a layout map) can key on node identity
//! and stale ids stay dead after slot reuse.
//!
//! There are no error conditions: invalid input is rejected by callers before
//! it reaches the engine, and every operation terminates with one of the
//! [`OperationResult`] variants.
//!
//! ## Minimal example
//!
//! ```rust
//! use arbor_bst::{Bst, OperationResult};
//!
//! let mut tree = Bst::new();
//! for v in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(v);
//! }
//! assert_eq!(tree.inorder(), vec![20, 30, 40, 50, 60, 70, 80]);
//!
//! match tree.search(60) {
//!     OperationResult::SearchFound { path, .. } => assert_eq!(path, vec![50, 70, 60]),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//!
//! // Deleting a two-children node promotes the in-order successor.
//! tree.remove(30);
//! assert_eq!(tree.inorder(), vec![20, 40, 50, 60, 70, 80]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod ops;
mod tree;
mod types;

pub use ops::OperationResult;
pub use tree::Bst;
pub use types::{NodeId, Order, Side};
