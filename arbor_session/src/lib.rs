// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Session: the single UI context that drives an engine instance.
//!
//! A [`Session`] owns one [`Bst`](arbor_bst::Bst), the canvas width, the
//! render flags, and a bounded, most-recent-first [`OpLog`]. Discrete UI
//! events go in, and each one performs at most one engine mutation followed
//! by one full re-render, with no debouncing, batching, or queuing.
//!
//! Everything is single-threaded, synchronous, and run-to-completion:
//! every operation is bounded by the tree height, there is no cancellation,
//! and a render-only [`Event::Resize`] is safe to interleave anywhere
//! between operation events.
//!
//! ## Minimal example
//!
//! ```rust
//! use arbor_render::DisplayList;
//! use arbor_session::{Event, Session};
//! use kurbo::Size;
//!
//! let mut session = Session::new(400.0);
//! let mut surface = DisplayList::new(Size::new(400.0, 230.0));
//!
//! session.handle(Event::Insert(50), &mut surface);
//! session.handle(Event::Insert(30), &mut surface);
//! session.handle(Event::Search(30), &mut surface);
//!
//! assert_eq!(session.log().latest(), Some("Found 30. Path: 50 -> 30"));
//! assert!(!surface.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod log;
mod session;

pub use log::OpLog;
pub use session::{Event, Reaction, Session};
