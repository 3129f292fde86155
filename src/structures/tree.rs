//! Canonical general tree and its nested-literal form.

use crate::error::{FigureError, Result};

/// A value with an ordered list of subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    pub value: T,
    pub children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn new(value: T, children: Vec<Tree<T>>) -> Self {
        Self { value, children }
    }

    /// Number of levels, counting the root.
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(Tree::height).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        1 + self.children.iter().map(Tree::len).sum::<usize>()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: Clone> Tree<T> {
    /// Build a tree from `[value, child, child, ...]`.
    ///
    /// Each child is itself a tree literal. An empty sequence in a child
    /// position stands for "no subtree" and is skipped.
    pub fn from_nested(literal: &Nested<T>) -> Result<Self> {
        let Nested::Seq(items) = literal else {
            return Err(FigureError::Literal(
                "a tree literal must be a sequence".to_string(),
            ));
        };
        let mut iter = items.iter();
        let value = match iter.next() {
            Some(Nested::Value(v)) => v.clone(),
            Some(Nested::Seq(_)) => {
                return Err(FigureError::Literal(
                    "the first element of a tree literal must be a value".to_string(),
                ));
            }
            None => {
                return Err(FigureError::Literal(
                    "an empty sequence cannot be a tree".to_string(),
                ));
            }
        };
        let mut children = Vec::new();
        for child in iter {
            match child {
                Nested::Seq(inner) if inner.is_empty() => {}
                Nested::Seq(_) => children.push(Tree::from_nested(child)?),
                Nested::Value(_) => {
                    return Err(FigureError::Literal(
                        "subtrees must be sequences, found a bare value".to_string(),
                    ));
                }
            }
        }
        Ok(Tree { value, children })
    }
}

// ─── Nested literal ──────────────────────────────────────────────────────────

/// A nested-sequence literal such as `[1, [2, []], [3, []]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    Value(T),
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn seq(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::Seq(items.into_iter().collect())
    }

    pub fn empty() -> Self {
        Nested::Seq(Vec::new())
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Value(value)
    }
}

// ─── TreeSource ──────────────────────────────────────────────────────────────

/// Input accepted by the tree figure emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeSource<T> {
    Tree(Tree<T>),
    Nested(Nested<T>),
}

impl<T: Clone> TreeSource<T> {
    pub fn into_tree(self) -> Result<Tree<T>> {
        match self {
            TreeSource::Tree(t) => Ok(t),
            TreeSource::Nested(n) => Tree::from_nested(&n),
        }
    }
}

impl<T> From<Tree<T>> for TreeSource<T> {
    fn from(tree: Tree<T>) -> Self {
        TreeSource::Tree(tree)
    }
}

impl<T> From<Nested<T>> for TreeSource<T> {
    fn from(literal: Nested<T>) -> Self {
        TreeSource::Nested(literal)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
