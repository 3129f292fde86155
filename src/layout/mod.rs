//! Hierarchy: a rooted petgraph DiGraph with two placement strategies.
//!
//! General trees use tidy leaf packing: leaves take consecutive slots in
//! depth-first order and every parent is centred over its outermost
//! children. Binary search trees use in-order ranks so that keys read left
//! to right in sorted order.

pub mod types;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

pub use types::{Point, PlacedEdge, PlacedNode, TreeLayout};
use types::{LEVEL_GAP, NODE_RADIUS, SLOT_WIDTH};

/// Position of a child under its parent. Orders siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slot {
    Left,
    Right,
    Nth(usize),
}

#[derive(Debug, Clone)]
pub struct NodeData {
    pub label: String,
}

/// Rooted tree stored as a directed graph (edges point parent → child).
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    pub digraph: DiGraph<NodeData, Slot>,
    pub root: Option<NodeIndex>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the root node. Replaces the root reference if called twice.
    pub fn add_root(&mut self, label: impl Into<String>) -> NodeIndex {
        let idx = self.digraph.add_node(NodeData {
            label: label.into(),
        });
        self.root = Some(idx);
        idx
    }

    pub fn add_child(
        &mut self,
        parent: NodeIndex,
        label: impl Into<String>,
        slot: Slot,
    ) -> NodeIndex {
        let idx = self.digraph.add_node(NodeData {
            label: label.into(),
        });
        self.digraph.add_edge(parent, idx, slot);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn label(&self, idx: NodeIndex) -> &str {
        &self.digraph[idx].label
    }

    /// Children of `idx` sorted by slot.
    pub fn children(&self, idx: NodeIndex) -> Vec<(Slot, NodeIndex)> {
        let mut out: Vec<(Slot, NodeIndex)> = self
            .digraph
            .edges(idx)
            .map(|e| (*e.weight(), e.target()))
            .collect();
        out.sort_by_key(|(slot, _)| *slot);
        out
    }

    // ─── Placement ───────────────────────────────────────────────────────────

    /// Tidy leaf-packing layout for ordered trees of any arity.
    pub fn tidy_layout(&self) -> TreeLayout {
        let mut layout = TreeLayout::default();
        if let Some(root) = self.root {
            let mut next_slot = 0;
            self.place_tidy(root, 0, &mut next_slot, &mut layout);
        }
        layout
    }

    fn place_tidy(
        &self,
        idx: NodeIndex,
        depth: usize,
        next_slot: &mut usize,
        layout: &mut TreeLayout,
    ) -> usize {
        let me = self.push_node(idx, depth, layout);
        let children = self.children(idx);
        let x = if children.is_empty() {
            let x = slot_x(*next_slot);
            *next_slot += 1;
            x
        } else {
            let mut first = None;
            let mut last = 0.0;
            for (_, child) in children {
                let ci = self.place_tidy(child, depth + 1, next_slot, layout);
                layout.edges.push(PlacedEdge {
                    parent: me,
                    child: ci,
                });
                let cx = layout.nodes[ci].center.x;
                first.get_or_insert(cx);
                last = cx;
            }
            (first.unwrap_or(last) + last) / 2.0
        };
        layout.nodes[me].center.x = x;
        me
    }

    /// In-order rank layout for binary trees (children in `Left`/`Right` slots).
    ///
    /// Both walks use explicit stacks: a BST built from sorted keys is a
    /// chain as deep as it is long.
    pub fn inorder_layout(&self) -> TreeLayout {
        let mut layout = TreeLayout::default();
        let Some(root) = self.root else {
            return layout;
        };

        // Pre-order: nodes and edges, left subtree before right.
        let mut placed = vec![0; self.node_count()];
        let mut pending = vec![(root, 0, None)];
        while let Some((idx, depth, parent)) = pending.pop() {
            let me = self.push_node(idx, depth, &mut layout);
            placed[idx.index()] = me;
            if let Some(parent) = parent {
                layout.edges.push(PlacedEdge { parent, child: me });
            }
            for (_, child) in self.children(idx).into_iter().rev() {
                pending.push((child, depth + 1, Some(me)));
            }
        }

        // In-order: x follows rank.
        let mut rank = 0;
        let mut spine = Vec::new();
        let mut cur = Some(root);
        loop {
            while let Some(idx) = cur {
                spine.push(idx);
                cur = self.child_in(idx, |s| s == Slot::Left);
            }
            let Some(idx) = spine.pop() else {
                break;
            };
            layout.nodes[placed[idx.index()]].center.x = slot_x(rank);
            rank += 1;
            cur = self.child_in(idx, |s| s != Slot::Left);
        }
        layout
    }

    fn child_in(&self, idx: NodeIndex, wanted: impl Fn(Slot) -> bool) -> Option<NodeIndex> {
        self.children(idx)
            .into_iter()
            .find(|(slot, _)| wanted(*slot))
            .map(|(_, child)| child)
    }

    fn push_node(&self, idx: NodeIndex, depth: usize, layout: &mut TreeLayout) -> usize {
        layout.nodes.push(PlacedNode {
            label: self.label(idx).to_string(),
            depth,
            center: Point::new(0.0, NODE_RADIUS + depth as f64 * LEVEL_GAP),
        });
        layout.nodes.len() - 1
    }
}

fn slot_x(slot: usize) -> f64 {
    NODE_RADIUS + slot as f64 * SLOT_WIDTH
}

// ─── Tests ───────────────────────────────────────────────────────────────────
