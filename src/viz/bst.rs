//! VizBst: binary search tree laid out by in-order rank.

use std::fmt::Display;

use petgraph::graph::NodeIndex;

use super::{Draw, draw_tree_layout};
use crate::error::Result;
use crate::layout::{Hierarchy, Slot};
use crate::layout::types::{Point, TreeLayout};
use crate::renderers::Surface;
use crate::structures::BstNode;

#[derive(Debug, Clone)]
pub struct VizBst {
    layout: TreeLayout,
    pub position: Point,
}

impl VizBst {
    /// Wrap the tree under `root` (`None` for an empty tree) anchored at
    /// `position`.
    pub fn new<K: Display>(root: Option<&BstNode<K>>, position: impl Into<Point>) -> Self {
        let mut h = Hierarchy::new();
        if let Some(node) = root {
            add_subtree(&mut h, node);
        }
        Self {
            layout: h.inorder_layout(),
            position: position.into(),
        }
    }

    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }

    pub fn height(&self) -> f64 {
        self.layout.height()
    }

    pub fn width(&self) -> f64 {
        self.layout.width()
    }
}

fn add_subtree<K: Display>(h: &mut Hierarchy, root: &BstNode<K>) {
    let mut pending: Vec<(NodeIndex, &BstNode<K>)> = vec![(h.add_root(root.key.to_string()), root)];
    while let Some((idx, node)) = pending.pop() {
        for (slot, child) in [(Slot::Left, &node.left), (Slot::Right, &node.right)] {
            if let Some(c) = child.as_deref() {
                let ci = h.add_child(idx, c.key.to_string(), slot);
                pending.push((ci, c));
            }
        }
    }
}

impl Draw for VizBst {
    fn draw(&self, surface: &mut Surface) -> Result<()> {
        draw_tree_layout(&self.layout, self.position, surface);
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
