//! Median-of-extents split selection.
//!
//! Deciding what to do with a node is a pure function of its object set and
//! splitting axis: [`attempt_split`] returns a [`SplitOutcome`] and the tree
//! builder acts on it. A node that fails to separate anything on one axis
//! is re-evaluated on the next axis, up to the configured retry limit,
//! before it is accepted as an oversized leaf.

use crate::{Aabb, Axis, BuildConfig, ObjectId};

/// The inputs that decide how a node is split.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    /// Objects the node is built over.
    pub objects: Vec<ObjectId>,
    /// Axis the split is evaluated on.
    pub axis: Axis,
    /// Axis retries used so far at this node.
    pub axis_retries: u8,
}

/// What to do with a node.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    /// Keep all objects in a leaf.
    Leaf,
    /// Create two children over the given object subsets.
    Split {
        /// Objects whose extent starts below the split value.
        left: Vec<ObjectId>,
        /// Objects whose extent ends above the split value.
        right: Vec<ObjectId>,
    },
    /// The split separated nothing; evaluate the node again on this axis.
    Retry(Axis),
}

/// Returns the upper median of all objects' min and max extents along `axis`.
///
/// `boxes` holds the bounds of every object in the tree, indexed by
/// [`ObjectId`]. Returns `None` for an empty object list.
pub fn split_value(objects: &[ObjectId], boxes: &[Aabb], axis: Axis) -> Option<f64> {
    let mut extents = Vec::with_capacity(objects.len() * 2);
    for id in objects {
        let (min, max) = boxes[id.index()].extent(axis);
        extents.push(min);
        extents.push(max);
    }
    extents.sort_by(f64::total_cmp);
    extents.get(extents.len() / 2).copied()
}

/// Partitions objects around `split` along `axis`.
///
/// An object goes left if it starts below the split and right if it ends
/// above it, so a straddling object goes to both sides. A zero-width object
/// sitting exactly on the split goes to neither.
pub fn partition(
    objects: &[ObjectId],
    boxes: &[Aabb],
    axis: Axis,
    split: f64,
) -> (Vec<ObjectId>, Vec<ObjectId>) {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for &id in objects {
        let (min, max) = boxes[id.index()].extent(axis);
        if min < split {
            left.push(id);
        }
        if max > split {
            right.push(id);
        }
    }

    (left, right)
}

/// Decides whether a node becomes a leaf, splits, or retries on another axis.
pub fn attempt_split(state: &NodeState, boxes: &[Aabb], config: &BuildConfig) -> SplitOutcome {
    let count = state.objects.len();
    if count <= config.min_object_count {
        return SplitOutcome::Leaf;
    }

    let Some(split) = split_value(&state.objects, boxes, state.axis) else {
        return SplitOutcome::Leaf;
    };
    let (left, right) = partition(&state.objects, boxes, state.axis, split);

    if left.len() != count && right.len() != count {
        SplitOutcome::Split { left, right }
    } else if state.axis_retries < config.max_axis_retries {
        SplitOutcome::Retry(state.axis.next())
    } else {
        SplitOutcome::Leaf
    }
}
