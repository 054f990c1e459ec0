// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived node positions: the recursive halving layout.

use alloc::vec;
use arbor_bst::{Bst, NodeId};
use hashbrown::HashMap;
use kurbo::{Point, Size};

/// Radius of a drawn node circle.
pub const NODE_RADIUS: f64 = 25.0;
/// Vertical distance between consecutive tree levels.
pub const LEVEL_HEIGHT: f64 = 60.0;
/// Vertical position of the root's center.
pub const TOP_MARGIN: f64 = 40.0;

/// Horizontal room reserved per leaf position at the deepest level.
const WIDTH_STEP: f64 = 50.0;
/// Extra vertical room below the deepest level.
const HEIGHT_MARGIN: f64 = 50.0;

/// The position assigned to one node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slot {
    /// Center of the node's circle.
    pub center: Point,
    /// Horizontal offset applied to this node's children (halved per depth).
    pub offset: f64,
}

/// Screen positions for every node of one tree snapshot.
///
/// A layout is derived data, keyed by node identity ([`NodeId`]): recompute
/// it whenever the tree changes, never store it across mutations. Ids from
/// an older tree generation simply miss the map.
#[derive(Clone, Debug)]
pub struct Layout {
    slots: HashMap<NodeId, Slot>,
    surface: Size,
}

impl Layout {
    /// Compute positions for the current tree shape.
    ///
    /// The root is centered at `(canvas_width / 2, TOP_MARGIN)` with a child
    /// offset of `canvas_width / 4`; each level halves the offset and steps
    /// down by [`LEVEL_HEIGHT`]. The placement is geometrically balanced and
    /// ignores subtree sizes, so unbalanced trees may overlap visually.
    pub fn compute<T>(tree: &Bst<T>, canvas_width: f64) -> Self {
        let mut slots = HashMap::new();
        let height = tree.height();
        let Some(root) = tree.root() else {
            return Self {
                slots,
                surface: Size::ZERO,
            };
        };

        // Width doubles per level; the f64 product saturates to infinity for
        // degenerate chains, which callers already treat as unusable.
        let mut width = WIDTH_STEP;
        for _ in 0..height {
            width *= 2.0;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "Tree heights are far below f64's exact integer range."
        )]
        let surface = Size::new(width, height as f64 * LEVEL_HEIGHT + HEIGHT_MARGIN);

        let mut stack = vec![(
            root,
            Point::new(canvas_width / 2.0, TOP_MARGIN),
            canvas_width / 4.0,
        )];
        while let Some((id, center, offset)) = stack.pop() {
            slots.insert(id, Slot { center, offset });
            if let Some(left) = tree.left(id) {
                stack.push((
                    left,
                    Point::new(center.x - offset, center.y + LEVEL_HEIGHT),
                    offset / 2.0,
                ));
            }
            if let Some(right) = tree.right(id) {
                stack.push((
                    right,
                    Point::new(center.x + offset, center.y + LEVEL_HEIGHT),
                    offset / 2.0,
                ));
            }
        }
        Self { slots, surface }
    }

    /// The slot assigned to a node, or `None` for ids this layout never saw.
    pub fn slot(&self, id: NodeId) -> Option<Slot> {
        self.slots.get(&id).copied()
    }

    /// The surface size this tree wants: height grows linearly with tree
    /// height, width exponentially (an accepted limitation for chains).
    pub fn surface_size(&self) -> Size {
        self.surface
    }

    /// Number of placed nodes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the layout is for an empty tree.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bst<i64> {
        let mut tree = Bst::new();
        for v in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(v);
        }
        tree
    }

    fn slot_of(tree: &Bst<i64>, layout: &Layout, value: i64) -> Slot {
        let mut id = tree.root().unwrap();
        loop {
            let v = tree.value(id).unwrap();
            if v == value {
                return layout.slot(id).unwrap();
            }
            id = if value < v {
                tree.left(id).unwrap()
            } else {
                tree.right(id).unwrap()
            };
        }
    }

    #[test]
    fn halving_layout_positions() {
        let tree = sample();
        let layout = Layout::compute(&tree, 400.0);
        assert_eq!(layout.len(), 7);

        let root = slot_of(&tree, &layout, 50);
        assert_eq!(root.center, Point::new(200.0, 40.0));
        assert_eq!(root.offset, 100.0);

        assert_eq!(slot_of(&tree, &layout, 30).center, Point::new(100.0, 100.0));
        assert_eq!(slot_of(&tree, &layout, 70).center, Point::new(300.0, 100.0));
        assert_eq!(slot_of(&tree, &layout, 70).offset, 50.0);

        assert_eq!(slot_of(&tree, &layout, 20).center, Point::new(50.0, 160.0));
        assert_eq!(slot_of(&tree, &layout, 40).center, Point::new(150.0, 160.0));
        assert_eq!(slot_of(&tree, &layout, 60).center, Point::new(250.0, 160.0));
        assert_eq!(slot_of(&tree, &layout, 80).center, Point::new(350.0, 160.0));
    }

    #[test]
    fn surface_size_scales_with_height() {
        let tree = sample();
        let layout = Layout::compute(&tree, 400.0);
        // Height 3: width 2^3 * 50, height 3 * 60 + 50.
        assert_eq!(layout.surface_size(), Size::new(400.0, 230.0));

        let mut single = Bst::new();
        single.insert(1);
        let layout = Layout::compute(&single, 400.0);
        assert_eq!(layout.surface_size(), Size::new(100.0, 110.0));
    }

    #[test]
    fn empty_tree_yields_empty_layout() {
        let tree: Bst<i64> = Bst::new();
        let layout = Layout::compute(&tree, 400.0);
        assert!(layout.is_empty());
        assert_eq!(layout.surface_size(), Size::ZERO);
    }

    #[test]
    fn stale_ids_miss_the_map() {
        let mut tree = Bst::new();
        tree.insert(50);
        tree.insert(30);
        let root = tree.root().unwrap();
        let gone = tree.left(root).unwrap();
        tree.remove(30);
        let layout = Layout::compute(&tree, 400.0);
        assert!(layout.slot(gone).is_none());
        assert!(layout.slot(root).is_some());
    }

    #[test]
    fn layout_is_invalidated_by_recompute() {
        let mut tree = sample();
        let before = Layout::compute(&tree, 400.0);
        tree.remove(30);
        let after = Layout::compute(&tree, 400.0);
        assert_eq!(before.len(), 7);
        assert_eq!(after.len(), 6);
    }
}
