//! Search pass state for clipped, memoized traversal.
//!
//! A [`SearchPass`] carries one "searched" flag per tree node. Clipped
//! queries mark leaves they scan, and internal nodes whose children are both
//! exhausted, so later queries in the same pass skip those subtrees. The
//! tree itself stays immutable and can be shared between threads; each
//! thread keeps its own pass.

use super::node::NodeId;
use super::tree::BspTree;
use crate::{BspError, Result};

/// Per-node memoization for [`BspTree::closest_intersection_clipped`].
///
/// Create one with [`BspTree::search_pass`] and call [`SearchPass::clear`]
/// before each fresh logical pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPass {
    searched: Vec<bool>,
}

impl SearchPass {
    /// Creates a pass for a tree with `node_count` nodes, all unsearched.
    pub fn new(node_count: usize) -> Self {
        Self {
            searched: vec![false; node_count],
        }
    }

    /// Returns the number of nodes this pass tracks.
    #[inline]
    pub fn len(&self) -> usize {
        self.searched.len()
    }

    /// Returns `true` if the pass tracks no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.searched.is_empty()
    }

    /// Returns `true` if the node's subtree is exhausted in this pass.
    #[inline]
    pub fn is_searched(&self, node: NodeId) -> bool {
        self.searched.get(node.index()).copied().unwrap_or(false)
    }

    /// Returns how many nodes are currently marked searched.
    pub fn searched_count(&self) -> usize {
        self.searched.iter().filter(|&&flag| flag).count()
    }

    #[inline]
    pub(crate) fn mark(&mut self, node: NodeId) {
        if let Some(flag) = self.searched.get_mut(node.index()) {
            *flag = true;
        }
    }

    /// Resets every flag, starting a fresh pass.
    pub fn clear(&mut self) {
        self.searched.fill(false);
    }

    /// Resets the flags of `node` and everything beneath it.
    pub fn clear_subtree<O>(&mut self, tree: &BspTree<O>, node: NodeId) {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(flag) = self.searched.get_mut(id.index()) {
                *flag = false;
            }
            if let Some((left, right)) = tree.node(id).and_then(|n| n.children()) {
                stack.push(right);
                stack.push(left);
            }
        }
    }

    /// Fails if this pass was sized for a tree with a different node count.
    pub(crate) fn check<O>(&self, tree: &BspTree<O>) -> Result<()> {
        if self.searched.len() != tree.node_count() {
            return Err(BspError::PassMismatch {
                expected: tree.node_count(),
                found: self.searched.len(),
            });
        }
        Ok(())
    }
}
