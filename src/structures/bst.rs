//! Unbalanced binary search tree, just enough to build figure inputs.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BstNode<K> {
    pub key: K,
    pub left: Option<Box<BstNode<K>>>,
    pub right: Option<Box<BstNode<K>>>,
}

impl<K> BstNode<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bst<K> {
    root: Option<Box<BstNode<K>>>,
    len: usize,
}

impl<K> Default for Bst<K> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord> Bst<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`; duplicates are ignored. Returns whether it was added.
    pub fn insert(&mut self, key: K) -> bool {
        let added = insert_at(&mut self.root, key);
        if added {
            self.len += 1;
        }
        added
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }
}

fn insert_at<K: Ord>(mut slot: &mut Option<Box<BstNode<K>>>, key: K) -> bool {
    while let Some(node) = slot {
        slot = match key.cmp(&node.key) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => return false,
        };
    }
    *slot = Some(Box::new(BstNode::new(key)));
    true
}

// Sorted input degenerates into a chain; unlink nodes one at a time.
impl<K> Drop for Bst<K> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<BstNode<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> Bst<K> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Root node handed to visualization adapters.
    pub fn viz_root(&self) -> Option<&BstNode<K>> {
        self.root.as_deref()
    }
}

impl<K: Ord> FromIterator<K> for Bst<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut t = Bst::new();
        for k in iter {
            t.insert(k);
        }
        t
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
