//! BSP tree node implementation.

use std::fmt;

use crate::{Aabb, Axis, ObjectId};

/// Index of a node in its tree's node storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the node in [`BspTree::nodes`](crate::BspTree::nodes).
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Whether a node is a leaf or splits into two children.
///
/// There is no variant with a single child: a node either partitions its
/// objects into two subtrees or keeps all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Terminal node searched by a linear scan over its objects.
    Leaf {
        /// Objects owned by this leaf.
        objects: Vec<ObjectId>,
    },
    /// Node split into two exclusively owned children.
    Internal {
        /// Subtree holding objects that start below the split value.
        left: NodeId,
        /// Subtree holding objects that end above the split value.
        right: NodeId,
    },
}

/// A node in the BSP tree.
///
/// Every node records the bounds of all objects beneath it. Leaves keep
/// their object list; internal nodes only remember how many object
/// references they were built over. An object straddling a split appears
/// in both subtrees.
#[derive(Debug, Clone, PartialEq)]
pub struct BspNode {
    /// Nesting level, 0 at the root.
    depth: usize,

    /// Splitting axis this node ended up using.
    axis: Axis,

    /// How many times this node moved to another axis after a split that
    /// separated nothing.
    axis_retries: u8,

    /// Union of the bounds of this node's objects.
    bounds: Aabb,

    /// Number of object references this node was built over.
    object_count: usize,

    kind: NodeKind,
}

impl BspNode {
    /// Creates a leaf node.
    pub fn leaf(
        depth: usize,
        axis: Axis,
        axis_retries: u8,
        bounds: Aabb,
        objects: Vec<ObjectId>,
    ) -> Self {
        Self {
            depth,
            axis,
            axis_retries,
            bounds,
            object_count: objects.len(),
            kind: NodeKind::Leaf { objects },
        }
    }

    /// Creates an internal node over `object_count` object references.
    pub fn internal(
        depth: usize,
        axis: Axis,
        axis_retries: u8,
        bounds: Aabb,
        object_count: usize,
        left: NodeId,
        right: NodeId,
    ) -> Self {
        Self {
            depth,
            axis,
            axis_retries,
            bounds,
            object_count,
            kind: NodeKind::Internal { left, right },
        }
    }

    /// Returns the nesting level of this node.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the splitting axis of this node.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns how many axis retries this node used.
    #[inline]
    pub fn axis_retries(&self) -> u8 {
        self.axis_retries
    }

    /// Returns the bounds of everything beneath this node.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Returns the number of object references this node was built over.
    #[inline]
    pub fn object_count(&self) -> usize {
        self.object_count
    }

    /// Returns whether this node is a leaf or internal.
    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Checks if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Returns the `(left, right)` children of an internal node.
    #[inline]
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Internal { left, right } => Some((left, right)),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Returns the objects of a leaf; empty for internal nodes.
    #[inline]
    pub fn objects(&self) -> &[ObjectId] {
        match &self.kind {
            NodeKind::Leaf { objects } => objects,
            NodeKind::Internal { .. } => &[],
        }
    }
}
