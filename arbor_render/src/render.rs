// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-frame rendering and search-path highlighting.

use alloc::format;
use alloc::vec;
use core::fmt;

use arbor_bst::{Bst, NodeId};
use kurbo::{Circle, Line, Point};

use crate::layout::{Layout, NODE_RADIUS};
use crate::surface::Surface;

/// The fixed palette, matching the visualizer's canvas colors.
pub mod palette {
    use crate::surface::Color;

    /// Node fill.
    pub const NODE_FILL: Color = Color::rgb(0x4C, 0xAF, 0x50);
    /// Node outline.
    pub const NODE_STROKE: Color = Color::rgb(0x2E, 0x7D, 0x32);
    /// Parent-to-child connecting lines.
    pub const EDGE: Color = Color::rgb(0x66, 0x66, 0x66);
    /// Value labels on ordinary nodes.
    pub const LABEL: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Fill for nodes on a highlighted search path.
    pub const HIGHLIGHT_FILL: Color = Color::rgb(0xFF, 0xC1, 0x07);
    /// Outline for highlighted nodes.
    pub const HIGHLIGHT_STROKE: Color = Color::rgb(0xFF, 0xA0, 0x00);
    /// Value labels on highlighted nodes.
    pub const HIGHLIGHT_LABEL: Color = Color::rgb(0x00, 0x00, 0x00);
}

bitflags::bitflags! {
    /// Which primitives a render pass emits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u8 {
        /// Draw parent-to-child connecting lines.
        const EDGES  = 0b0000_0001;
        /// Draw value labels.
        const LABELS = 0b0000_0010;
    }
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self::EDGES | Self::LABELS
    }
}

/// Redraw the whole tree onto `surface`.
///
/// Clears the full frame first (no incremental diffing), then walks the tree
/// in pre-order drawing, per node: the filled circle, its centered value
/// label, and a connecting line from the parent circle's edge toward each
/// present child. A surface with zero or negative dimensions is skipped
/// entirely.
pub fn render<T, S>(tree: &Bst<T>, layout: &Layout, surface: &mut S, flags: RenderFlags)
where
    T: Ord + Copy + fmt::Display,
    S: Surface + ?Sized,
{
    let frame = surface.size();
    if frame.width <= 0.0 || frame.height <= 0.0 {
        return;
    }
    surface.clear_rect(frame.to_rect());

    let Some(root) = tree.root() else {
        return;
    };
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        draw_node(tree, layout, surface, id, flags);
        // Right first so the pop order visits the left subtree first.
        if let Some(right) = tree.right(id) {
            stack.push(right);
        }
        if let Some(left) = tree.left(id) {
            stack.push(left);
        }
    }
}

fn draw_node<T, S>(tree: &Bst<T>, layout: &Layout, surface: &mut S, id: NodeId, flags: RenderFlags)
where
    T: Ord + Copy + fmt::Display,
    S: Surface + ?Sized,
{
    let Some(slot) = layout.slot(id) else {
        return;
    };
    let Some(value) = tree.value(id) else {
        return;
    };
    surface.fill_circle(
        Circle::new(slot.center, NODE_RADIUS),
        palette::NODE_FILL,
        palette::NODE_STROKE,
    );
    if flags.contains(RenderFlags::LABELS) {
        surface.centered_text(&format!("{value}"), slot.center, palette::LABEL);
    }
    if flags.contains(RenderFlags::EDGES) {
        for (child, direction) in [(tree.left(id), -1.0), (tree.right(id), 1.0)] {
            let Some(child) = child else {
                continue;
            };
            let Some(child_slot) = layout.slot(child) else {
                continue;
            };
            let from = Point::new(
                slot.center.x + direction * NODE_RADIUS,
                slot.center.y + NODE_RADIUS,
            );
            let to = Point::new(child_slot.center.x, child_slot.center.y - NODE_RADIUS);
            surface.line(Line::new(from, to), palette::EDGE);
        }
    }
}

/// Re-render the tree, then trace a search path in the highlight palette.
///
/// `path` is the visited-value sequence of a prior search result. The walk
/// starts at the root and re-derives each step's direction by comparing the
/// next path value against the current node's value; no stored directions
/// are needed. Each visited node is redrawn with the highlight fill, stroke,
/// and label colors. A path that no longer matches the tree (for example
/// after an intervening mutation) stops at the first mismatch.
pub fn highlight_path<T, S>(
    tree: &Bst<T>,
    layout: &Layout,
    surface: &mut S,
    path: &[T],
    flags: RenderFlags,
) where
    T: Ord + Copy + fmt::Display,
    S: Surface + ?Sized,
{
    render(tree, layout, surface, flags);

    let frame = surface.size();
    if frame.width <= 0.0 || frame.height <= 0.0 {
        return;
    }
    let Some(mut id) = tree.root() else {
        return;
    };
    if path.is_empty() {
        return;
    }
    highlight_node(tree, layout, surface, id, flags);
    for &step in &path[1..] {
        let Some(value) = tree.value(id) else {
            return;
        };
        let next = if step < value {
            tree.left(id)
        } else {
            tree.right(id)
        };
        let Some(next) = next else {
            return;
        };
        id = next;
        highlight_node(tree, layout, surface, id, flags);
    }
}

fn highlight_node<T, S>(
    tree: &Bst<T>,
    layout: &Layout,
    surface: &mut S,
    id: NodeId,
    flags: RenderFlags,
) where
    T: Ord + Copy + fmt::Display,
    S: Surface + ?Sized,
{
    let Some(slot) = layout.slot(id) else {
        return;
    };
    let Some(value) = tree.value(id) else {
        return;
    };
    surface.fill_circle(
        Circle::new(slot.center, NODE_RADIUS),
        palette::HIGHLIGHT_FILL,
        palette::HIGHLIGHT_STROKE,
    );
    if flags.contains(RenderFlags::LABELS) {
        surface.centered_text(&format!("{value}"), slot.center, palette::HIGHLIGHT_LABEL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Color, DisplayList, DrawCmd};
    use alloc::vec::Vec;
    use kurbo::Size;

    fn sample() -> Bst<i64> {
        let mut tree = Bst::new();
        for v in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(v);
        }
        tree
    }

    fn circles(dl: &DisplayList, fill: Color) -> Vec<Point> {
        dl.cmds()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Circle { circle, fill: f, .. } if *f == fill => Some(circle.center),
                _ => None,
            })
            .collect()
    }

    fn count<F: Fn(&DrawCmd) -> bool>(dl: &DisplayList, pred: F) -> usize {
        dl.cmds().iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn clear_precedes_all_drawing() {
        let tree = sample();
        let layout = Layout::compute(&tree, 400.0);
        let mut dl = DisplayList::new(Size::new(400.0, 230.0));
        render(&tree, &layout, &mut dl, RenderFlags::default());
        assert_eq!(
            dl.cmds()[0],
            DrawCmd::Clear {
                rect: Size::new(400.0, 230.0).to_rect()
            }
        );
        assert_eq!(count(&dl, |c| matches!(c, DrawCmd::Clear { .. })), 1);
    }

    #[test]
    fn one_circle_one_label_per_node_one_edge_per_link() {
        let tree = sample();
        let layout = Layout::compute(&tree, 400.0);
        let mut dl = DisplayList::new(Size::new(400.0, 230.0));
        render(&tree, &layout, &mut dl, RenderFlags::default());
        assert_eq!(count(&dl, |c| matches!(c, DrawCmd::Circle { .. })), 7);
        assert_eq!(count(&dl, |c| matches!(c, DrawCmd::Text { .. })), 7);
        assert_eq!(count(&dl, |c| matches!(c, DrawCmd::Line { .. })), 6);
        // Pre-order: the root is drawn first.
        let nodes = circles(&dl, palette::NODE_FILL);
        assert_eq!(nodes[0], Point::new(200.0, 40.0));
    }

    #[test]
    fn edges_run_from_parent_rim_to_child_rim() {
        let mut tree = Bst::new();
        tree.insert(50);
        tree.insert(30);
        let layout = Layout::compute(&tree, 400.0);
        let mut dl = DisplayList::new(Size::new(400.0, 170.0));
        render(&tree, &layout, &mut dl, RenderFlags::default());
        let lines: Vec<Line> = dl
            .cmds()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Line { line, .. } => Some(*line),
                _ => None,
            })
            .collect();
        // Root at (200, 40), left child at (100, 100).
        assert_eq!(lines, vec![Line::new((175.0, 65.0), (100.0, 75.0))]);
    }

    #[test]
    fn degenerate_surface_draws_nothing() {
        let tree = sample();
        let layout = Layout::compute(&tree, 400.0);
        let mut dl = DisplayList::new(Size::ZERO);
        render(&tree, &layout, &mut dl, RenderFlags::default());
        assert!(dl.is_empty());
        highlight_path(&tree, &layout, &mut dl, &[50, 70, 60], RenderFlags::default());
        assert!(dl.is_empty());

        let mut negative = DisplayList::new(Size::new(400.0, -10.0));
        render(&tree, &layout, &mut negative, RenderFlags::default());
        assert!(negative.is_empty());
    }

    #[test]
    fn empty_tree_only_clears() {
        let tree: Bst<i64> = Bst::new();
        let layout = Layout::compute(&tree, 400.0);
        let mut dl = DisplayList::new(Size::new(400.0, 230.0));
        render(&tree, &layout, &mut dl, RenderFlags::default());
        assert_eq!(dl.len(), 1);
        assert!(matches!(dl.cmds()[0], DrawCmd::Clear { .. }));
    }

    #[test]
    fn flags_suppress_labels_and_edges() {
        let tree = sample();
        let layout = Layout::compute(&tree, 400.0);
        let mut dl = DisplayList::new(Size::new(400.0, 230.0));
        render(&tree, &layout, &mut dl, RenderFlags::EDGES);
        assert_eq!(count(&dl, |c| matches!(c, DrawCmd::Text { .. })), 0);
        assert_eq!(count(&dl, |c| matches!(c, DrawCmd::Line { .. })), 6);

        dl.reset();
        render(&tree, &layout, &mut dl, RenderFlags::LABELS);
        assert_eq!(count(&dl, |c| matches!(c, DrawCmd::Line { .. })), 0);
        assert_eq!(count(&dl, |c| matches!(c, DrawCmd::Text { .. })), 7);
    }

    #[test]
    fn highlight_recolors_exactly_the_path_nodes() {
        let tree = sample();
        let layout = Layout::compute(&tree, 400.0);
        let mut dl = DisplayList::new(Size::new(400.0, 230.0));
        highlight_path(&tree, &layout, &mut dl, &[50, 70, 60], RenderFlags::default());

        // Full render underneath, then one highlight circle per path node.
        assert_eq!(circles(&dl, palette::NODE_FILL).len(), 7);
        assert_eq!(
            circles(&dl, palette::HIGHLIGHT_FILL),
            vec![
                Point::new(200.0, 40.0),
                Point::new(300.0, 100.0),
                Point::new(250.0, 160.0),
            ]
        );
    }

    #[test]
    fn highlight_of_a_not_found_path_traces_the_tried_nodes() {
        let tree = sample();
        let layout = Layout::compute(&tree, 400.0);
        let mut dl = DisplayList::new(Size::new(400.0, 230.0));
        // Search for 99 visits 50, 70, 80 before hitting an absent child.
        highlight_path(&tree, &layout, &mut dl, &[50, 70, 80], RenderFlags::default());
        assert_eq!(circles(&dl, palette::HIGHLIGHT_FILL).len(), 3);
    }

    #[test]
    fn highlight_stops_at_a_stale_path() {
        let mut tree = sample();
        let layout_before = Layout::compute(&tree, 400.0);
        tree.remove(60);
        let layout = Layout::compute(&tree, 400.0);
        drop(layout_before);
        let mut dl = DisplayList::new(Size::new(400.0, 230.0));
        // The old path's tail no longer exists; the walk stops after 70.
        highlight_path(&tree, &layout, &mut dl, &[50, 70, 60], RenderFlags::default());
        assert_eq!(circles(&dl, palette::HIGHLIGHT_FILL).len(), 2);
    }

    #[test]
    fn empty_path_highlights_nothing() {
        let tree = sample();
        let layout = Layout::compute(&tree, 400.0);
        let mut dl = DisplayList::new(Size::new(400.0, 230.0));
        highlight_path(&tree, &layout, &mut dl, &[], RenderFlags::default());
        assert_eq!(circles(&dl, palette::HIGHLIGHT_FILL).len(), 0);
        assert_eq!(circles(&dl, palette::NODE_FILL).len(), 7);
    }
}
