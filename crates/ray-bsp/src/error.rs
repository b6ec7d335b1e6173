//! Error types for tree construction and queries.

use thiserror::Error;

use crate::{Aabb, ObjectId};

/// Errors reported by the BSP tree.
///
/// A ray that hits nothing is not an error; queries return the sentinel
/// [`Intersection::none`](crate::Intersection::none) instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BspError {
    /// An object reported non-finite or inverted bounds.
    #[error("object {object} has invalid bounds {bounds}")]
    InvalidBounds {
        /// The offending object.
        object: ObjectId,
        /// The bounds it reported.
        bounds: Aabb,
    },

    /// The build configuration is out of range.
    #[error("invalid build config: {0}")]
    InvalidConfig(String),

    /// A search pass was used with a tree it was not created for.
    #[error("search pass covers {found} nodes but the tree has {expected}")]
    PassMismatch {
        /// Node count of the queried tree.
        expected: usize,
        /// Node count the pass was sized for.
        found: usize,
    },
}

/// Result type for BSP operations.
pub type Result<T> = std::result::Result<T, BspError>;
