//! Binary Space Partitioning tree for closest-hit ray queries.
//!
//! This module provides a loose, object-list BSP tree. Construction
//! recursively splits the object set on alternating axes at the median of
//! the objects' extents; queries descend only into nodes whose bounds the
//! ray reaches and scan the objects of the leaves they arrive at.
//!
//! # Example
//!
//! ```ignore
//! use ray_bsp::{BspTree, Ray, Sphere};
//! use nalgebra::{Point3, Vector3};
//!
//! // Build a tree from objects
//! let spheres: Vec<Sphere> = /* create spheres */;
//! let tree = BspTree::from_objects(spheres)?;
//!
//! // Closest hit along a ray
//! let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0));
//! let hit = tree.closest_intersection(&ray);
//! if hit.did_intersect() {
//!     println!("hit {:?} at {}", hit.object_id(), hit.distance());
//! }
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: Owns the objects and the node arena
//! - [`BspNode`]: Bounds, axis and either a leaf object list or two children
//! - [`split`]: The pure split decision driving construction
//! - [`SearchPass`]: Per-pass memoization for clipped queries
//! - [`TreeStats`] / [`TreeDump`]: Diagnostics

mod node;
mod pass;
pub mod split;
mod stats;
mod tree;

// Re-export main types
pub use node::{BspNode, NodeId, NodeKind};
pub use pass::SearchPass;
pub use split::{attempt_split, NodeState, SplitOutcome};
pub use stats::{TreeDump, TreeStats};
pub use tree::BspTree;
