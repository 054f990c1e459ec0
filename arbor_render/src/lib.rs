// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Render: turn a BST snapshot into positions and draw commands.
//!
//! This crate is renderer-agnostic in the same way the Arbor engine is
//! UI-agnostic: it knows how to place nodes and which primitives to emit,
//! but nothing about any concrete drawing API. Hosts implement [`Surface`]
//! (clear, filled circle with stroke, centered text, line) over whatever
//! backend they have; [`DisplayList`] is a ready-made recording surface for
//! tests and headless use.
//!
//! - [`Layout::compute`] places the root horizontally centered at a fixed
//!   top margin and halves the child offset at each depth. The layout is
//!   geometrically balanced regardless of subtree sizes, so deep unbalanced
//!   trees will visually overlap; there is no collision avoidance.
//! - [`render`] clears the full frame and redraws every node; there is no
//!   incremental diffing.
//! - [`highlight_path`] re-renders the tree and then re-walks a search path
//!   from the root, re-deriving each step's direction by value comparison,
//!   and recolors the visited nodes.
//!
//! Layouts are derived data: recompute after every mutation, never store
//! one across tree changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use arbor_bst::Bst;
//! use arbor_render::{DisplayList, DrawCmd, Layout, RenderFlags, render};
//! use kurbo::{Point, Size};
//!
//! let mut tree = Bst::new();
//! for v in [50, 30, 70] {
//!     tree.insert(v);
//! }
//!
//! let layout = Layout::compute(&tree, 400.0);
//! let root = tree.root().unwrap();
//! assert_eq!(layout.slot(root).unwrap().center, Point::new(200.0, 40.0));
//!
//! let mut surface = DisplayList::new(Size::new(400.0, 170.0));
//! render(&tree, &layout, &mut surface, RenderFlags::default());
//! assert!(matches!(surface.cmds()[0], DrawCmd::Clear { .. }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod render;
mod surface;

pub use layout::{LEVEL_HEIGHT, Layout, NODE_RADIUS, Slot, TOP_MARGIN};
pub use render::{RenderFlags, highlight_path, palette, render};
pub use surface::{Color, DisplayList, DrawCmd, Surface};
