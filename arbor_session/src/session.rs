// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event handling: one engine operation, one full re-render, one log entry.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Write as _;

use arbor_bst::{Bst, OperationResult, Order};
use arbor_render::{Layout, RenderFlags, Surface, highlight_path, render};

use crate::log::OpLog;

/// A discrete UI-triggered event.
///
/// Each event performs at most one engine mutation. `Resize` is render-only
/// and may interleave anywhere between the (non-overlapping, synchronous)
/// operation events.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event<T> {
    /// Insert a value (already validated by the caller).
    Insert(T),
    /// Delete a value.
    Delete(T),
    /// Search for a value and trace the visited path.
    Search(T),
    /// Log a traversal of the current tree.
    Traverse(Order),
    /// The host surface changed width; recompute layout and redraw.
    Resize {
        /// The new canvas width.
        width: f64,
    },
}

/// What handling an event produced, beyond the side effects on the surface
/// and the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reaction<T> {
    /// An engine operation ran to completion.
    Op(OperationResult<T>),
    /// A traversal was taken of the current tree.
    Traversal(Order, Vec<T>),
    /// A render-only pass (resize) completed.
    Redrawn,
}

/// The single UI context driving one engine instance.
///
/// Owns the tree exclusively; there is no internal parallelism, suspension,
/// or background work, so no locking is needed.
pub struct Session<T> {
    tree: Bst<T>,
    canvas_width: f64,
    flags: RenderFlags,
    log: OpLog,
}

impl<T> fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("tree", &self.tree)
            .field("canvas_width", &self.canvas_width)
            .field("flags", &self.flags)
            .field("log_len", &self.log.len())
            .finish()
    }
}

impl<T: Ord + Copy + fmt::Display> Session<T> {
    /// Create a session for a surface of the given width.
    pub fn new(canvas_width: f64) -> Self {
        Self {
            tree: Bst::new(),
            canvas_width,
            flags: RenderFlags::default(),
            log: OpLog::new(),
        }
    }

    /// The tree as of the last handled event.
    pub fn tree(&self) -> &Bst<T> {
        &self.tree
    }

    /// The operation log, most recent entry first.
    pub fn log(&self) -> &OpLog {
        &self.log
    }

    /// The current canvas width used for layout.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Change which primitives render passes emit.
    pub fn set_flags(&mut self, flags: RenderFlags) {
        self.flags = flags;
    }

    /// Handle one event: run the operation, redraw, append the log entry.
    ///
    /// Runs to completion before returning; the caller must not hand the
    /// session another event until it does (single-threaded, synchronous,
    /// no queuing).
    pub fn handle<S>(&mut self, event: Event<T>, surface: &mut S) -> Reaction<T>
    where
        S: Surface + ?Sized,
    {
        match event {
            Event::Insert(value) => {
                let op = self.tree.insert(value);
                self.redraw(surface);
                self.log.push(op.to_string());
                Reaction::Op(op)
            }
            Event::Delete(value) => {
                let op = self.tree.remove(value);
                self.redraw(surface);
                self.log.push(op.to_string());
                Reaction::Op(op)
            }
            Event::Search(value) => {
                let op = self.tree.search(value);
                let layout = Layout::compute(&self.tree, self.canvas_width);
                if let OperationResult::SearchFound { path, .. } = &op {
                    highlight_path(&self.tree, &layout, surface, path, self.flags);
                } else {
                    render(&self.tree, &layout, surface, self.flags);
                }
                self.log.push(op.to_string());
                Reaction::Op(op)
            }
            Event::Traverse(order) => {
                let values = self.tree.traverse(order);
                self.log.push(format_traversal(order, &values));
                Reaction::Traversal(order, values)
            }
            Event::Resize { width } => {
                self.canvas_width = width;
                self.redraw(surface);
                Reaction::Redrawn
            }
        }
    }

    fn redraw<S>(&self, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        let layout = Layout::compute(&self.tree, self.canvas_width);
        render(&self.tree, &layout, surface, self.flags);
    }
}

fn format_traversal<T: fmt::Display>(order: Order, values: &[T]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{} traversal: ", order.label());
    let mut first = true;
    for v in values {
        if !first {
            out.push_str(" -> ");
        }
        first = false;
        let _ = write!(out, "{v}");
    }
    out
}
