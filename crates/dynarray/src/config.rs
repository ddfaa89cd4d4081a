//! Array configuration parameters.

use crate::error::ArrayError;
use crate::policy;

/// Construction-time configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// The policy constants are fixed; only the requested initial capacity
/// varies per array. The request is rounded up when the array is built,
/// see [`resolved_capacity`](ArrayConfig::resolved_capacity).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Requested initial capacity in elements.
    ///
    /// Default: 16. Any value at or below [`MIN_CAPACITY`](Self::MIN_CAPACITY),
    /// including 0, means "no minimum beyond the floor".
    pub initial_capacity: usize,
}

impl ArrayConfig {
    /// Capacity floor. An array never holds fewer slots than this.
    pub const MIN_CAPACITY: usize = 16;

    /// Initial capacity used by [`DynamicArray::new`](crate::DynamicArray::new).
    pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

    /// Multiplier applied to the capacity when a full array grows.
    pub const GROWTH_FACTOR: usize = 2;

    /// Occupancy divisor for the shrink trigger: the buffer halves once
    /// `len <= capacity / SHRINK_OCCUPANCY_DIVISOR`.
    pub const SHRINK_OCCUPANCY_DIVISOR: usize = 4;

    /// Create a config requesting the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// The capacity an array built from this config starts with.
    ///
    /// Smallest `16 * 2^k` that is at least `initial_capacity`. Returns
    /// [`ArrayError::CapacityOverflow`] when no such value fits in `usize`.
    pub fn resolved_capacity(&self) -> Result<usize, ArrayError> {
        policy::rounded_capacity(self.initial_capacity).ok_or(ArrayError::CapacityOverflow {
            requested: self.initial_capacity,
        })
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
