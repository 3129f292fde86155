//! Layout types: Point, PlacedNode, PlacedEdge, TreeLayout.

// ─── Constants ────────────────────────────────────────────────────────────────

/// Radius of a tree node circle, in pixels.
pub const NODE_RADIUS: f64 = 15.0;
/// Vertical distance between the centres of consecutive tree levels.
pub const LEVEL_GAP: f64 = 50.0;
/// Horizontal distance between adjacent leaf / in-order slots.
pub const SLOT_WIDTH: f64 = 40.0;

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

// ─── PlacedNode ───────────────────────────────────────────────────────────────

/// A node centre relative to the layout's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub label: String,
    pub depth: usize,
    pub center: Point,
}

// ─── PlacedEdge ───────────────────────────────────────────────────────────────

/// Parent → child link, as indices into `TreeLayout::nodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedEdge {
    pub parent: usize,
    pub child: usize,
}

// ─── TreeLayout ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreeLayout {
    /// Nodes in pre-order; index 0 is the root when non-empty.
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<PlacedEdge>,
}

impl TreeLayout {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels (0 for an empty layout).
    pub fn levels(&self) -> usize {
        self.nodes.iter().map(|n| n.depth + 1).max().unwrap_or(0)
    }

    /// Height of the drawn tree in pixels, top of the root circle to the
    /// bottom of the deepest circle.
    pub fn height(&self) -> f64 {
        match self.levels() {
            0 => 0.0,
            l => 2.0 * NODE_RADIUS + (l - 1) as f64 * LEVEL_GAP,
        }
    }

    /// Width of the drawn tree in pixels.
    pub fn width(&self) -> f64 {
        let max_x = self
            .nodes
            .iter()
            .map(|n| n.center.x)
            .fold(f64::NEG_INFINITY, f64::max);
        if max_x.is_finite() {
            max_x + NODE_RADIUS
        } else {
            0.0
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
