//! VizTree: general ordered tree with tidy leaf packing.

use std::fmt::Display;

use petgraph::graph::NodeIndex;

use super::{Draw, draw_tree_layout};
use crate::error::Result;
use crate::layout::{Hierarchy, Slot};
use crate::layout::types::{Point, TreeLayout};
use crate::renderers::Surface;
use crate::structures::Tree;

#[derive(Debug, Clone)]
pub struct VizTree {
    layout: TreeLayout,
    /// Top-left corner of the drawing. Starts at the origin.
    pub position: Point,
}

impl VizTree {
    pub fn new<T: Display>(tree: &Tree<T>) -> Self {
        let mut h = Hierarchy::new();
        let root = h.add_root(tree.value.to_string());
        add_children(&mut h, root, tree);
        Self {
            layout: h.tidy_layout(),
            position: Point::default(),
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

fn add_children<T: Display>(h: &mut Hierarchy, idx: NodeIndex, tree: &Tree<T>) {
    for (i, child) in tree.children.iter().enumerate() {
        let ci = h.add_child(idx, child.value.to_string(), Slot::Nth(i));
        add_children(h, ci, child);
    }
}

impl Draw for VizTree {
    fn draw(&self, surface: &mut Surface) -> Result<()> {
        draw_tree_layout(&self.layout, self.position, surface);
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
