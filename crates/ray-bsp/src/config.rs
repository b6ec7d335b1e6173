//! Tree construction settings.

use crate::{Axis, BspError, Result};

/// Nodes holding this many objects or fewer become leaves.
pub const MIN_OBJECT_COUNT: usize = 2;

/// Upper bound on axis retries at a single node. With three axes, two
/// retries means every axis has been tried once.
pub const MAX_AXIS_RETRIES: u8 = 2;

/// Settings for [`BspTree::build`](crate::BspTree::build).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildConfig {
    /// Leaf threshold: nodes with at most this many objects are not split.
    pub min_object_count: usize,
    /// How many other axes a node may try after a split that separates nothing.
    pub max_axis_retries: u8,
    /// Splitting axis of the root node.
    pub initial_axis: Axis,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            min_object_count: MIN_OBJECT_COUNT,
            max_axis_retries: MAX_AXIS_RETRIES,
            initial_axis: Axis::X,
        }
    }
}

impl BuildConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the leaf threshold.
    pub fn with_min_object_count(mut self, count: usize) -> Self {
        self.min_object_count = count;
        self
    }

    /// Sets the number of axis retries allowed per node.
    pub fn with_max_axis_retries(mut self, retries: u8) -> Self {
        self.max_axis_retries = retries;
        self
    }

    /// Sets the splitting axis of the root.
    pub fn with_initial_axis(mut self, axis: Axis) -> Self {
        self.initial_axis = axis;
        self
    }

    /// Checks that the settings are in range.
    pub fn validate(&self) -> Result<()> {
        if self.max_axis_retries > MAX_AXIS_RETRIES {
            return Err(BspError::InvalidConfig(format!(
                "max_axis_retries is {} but at most {} other axes exist",
                self.max_axis_retries, MAX_AXIS_RETRIES
            )));
        }
        Ok(())
    }
}
