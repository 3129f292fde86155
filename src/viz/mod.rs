//! Visualization adapters.
//!
//! An adapter wraps a data structure without modifying it and knows how to
//! draw it onto a [`Surface`] at its current `position`.

pub mod bst;
pub mod list;
pub mod tree;

pub use bst::VizBst;
pub use list::VizList;
pub use tree::VizTree;

use crate::error::Result;
use crate::layout::types::{NODE_RADIUS, Point, TreeLayout};
use crate::renderers::Surface;

pub const LABEL_SIZE: f64 = 14.0;

/// Something that can be drawn onto a surface.
pub trait Draw {
    fn draw(&self, surface: &mut Surface) -> Result<()>;
}

impl<D: Draw + ?Sized> Draw for &D {
    fn draw(&self, surface: &mut Surface) -> Result<()> {
        (**self).draw(surface)
    }
}

/// Draw a placed tree with its top-left corner at `position`.
///
/// Edges go first so node circles paint over their endpoints.
pub(crate) fn draw_tree_layout(layout: &TreeLayout, position: Point, surface: &mut Surface) {
    let at = |p: Point| p.offset(position.x, position.y);
    for edge in &layout.edges {
        let parent = at(layout.nodes[edge.parent].center);
        let child = at(layout.nodes[edge.child].center);
        surface.line(parent, child);
    }
    for node in &layout.nodes {
        let c = at(node.center);
        surface.circle(c, NODE_RADIUS);
        surface.text(c, node.label.clone(), LABEL_SIZE);
    }
}
