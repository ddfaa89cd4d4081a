//! Cumulative resize counters.

/// Counters describing how often an array has replaced its buffer.
///
/// Updated by every relocation attempt and returned by value from
/// [`DynamicArray::stats`](crate::DynamicArray::stats). Clones of an
/// array start with fresh counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeStats {
    /// Successful relocations into a larger buffer.
    pub grows: u64,
    /// Successful relocations into a smaller buffer.
    pub shrinks: u64,
    /// Total elements moved across all successful relocations.
    ///
    /// After `n` pushes into a fresh array this stays below `2 * n`, which
    /// is what makes tail insertion amortized O(1).
    pub relocated: u64,
    /// Shrinks abandoned because the smaller buffer could not be allocated.
    pub failed_shrinks: u64,
}

impl ResizeStats {
    /// Total successful relocations in either direction.
    pub fn relocations(&self) -> u64 {
        self.grows + self.shrinks
    }
}
