//! Structural statistics and a textual dump of a built tree.

use std::fmt;

use super::node::{BspNode, NodeId};
use super::tree::BspTree;

/// Summary of a tree's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Total number of nodes, internal and leaf.
    pub node_count: usize,
    /// Number of leaves.
    pub leaf_count: usize,
    /// Deepest node depth (0 when the root is a leaf).
    pub max_depth: usize,
    /// Object references summed over all leaves. Exceeds the object count
    /// when straddling objects are duplicated.
    pub object_references: usize,
    /// Largest leaf.
    pub max_leaf_size: usize,
    /// Leaves holding more objects than the leaf threshold because no axis
    /// separated them.
    pub oversized_leaves: usize,
}

impl TreeStats {
    /// Collects statistics from a built tree.
    pub fn collect<O>(tree: &BspTree<O>) -> Self {
        let threshold = tree.config().min_object_count;
        let mut stats = TreeStats {
            node_count: tree.node_count(),
            ..Default::default()
        };

        for node in tree.nodes() {
            stats.max_depth = stats.max_depth.max(node.depth());
            if node.is_leaf() {
                let size = node.objects().len();
                stats.leaf_count += 1;
                stats.object_references += size;
                stats.max_leaf_size = stats.max_leaf_size.max(size);
                if size > threshold {
                    stats.oversized_leaves += 1;
                }
            }
        }

        stats
    }
}

/// Pre-order dump of a tree, one tab-indented line per node:
///
/// ```text
/// <objects> | <min.x>, <min.y>, <min.z> || <max.x>, <max.y>, <max.z> % <axis> X <retries>
/// ```
pub struct TreeDump<'a, O> {
    tree: &'a BspTree<O>,
}

impl<'a, O> TreeDump<'a, O> {
    pub(crate) fn new(tree: &'a BspTree<O>) -> Self {
        Self { tree }
    }
}

impl<O> fmt::Display for TreeDump<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let Some(node) = self.tree.node(id) else {
                continue;
            };
            write_node_line(f, node)?;
            if let Some((left, right)) = node.children() {
                stack.push(right);
                stack.push(left);
            }
        }
        Ok(())
    }
}

fn write_node_line(f: &mut fmt::Formatter<'_>, node: &BspNode) -> fmt::Result {
    for _ in 0..node.depth() {
        f.write_str("\t")?;
    }
    let bounds = node.bounds();
    writeln!(
        f,
        "{} | {}, {}, {} || {}, {}, {} % {} X {}",
        node.object_count(),
        bounds.min.x,
        bounds.min.y,
        bounds.min.z,
        bounds.max.x,
        bounds.max.y,
        bounds.max.z,
        node.axis(),
        node.axis_retries()
    )
}
