//! The resizable contiguous array.
//!
//! [`DynamicArray`] keeps its live elements at the front of one exclusively
//! owned heap buffer. The buffer is only ever replaced through a single
//! relocation path shared by growth and shrinking, so the capacity policy
//! in [`policy`](crate::policy) is the sole authority on buffer size.

use std::alloc::Layout;
use std::fmt;

use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::policy;
use crate::stats::ResizeStats;

/// A growable, shrinkable sequence backed by a single contiguous buffer.
///
/// Capacity starts at the smallest `16 * 2^k` covering the request,
/// doubles whenever an insertion finds the buffer full, and halves after
/// a removal that leaves the buffer at most a quarter occupied (never
/// below 16).
///
/// Elements leave the array only by value: [`at`](Self::at) and
/// [`find`](Self::find) return clones, and no method hands out references
/// into the buffer.
///
/// # Example
///
/// ```
/// use dynarray::{ArrayError, DynamicArray};
///
/// let mut array = DynamicArray::new();
/// for v in [1, 2, 3, 4] {
///     array.push(v)?;
/// }
/// assert_eq!(array.at(2)?, 3);
/// assert_eq!(array.remove(1)?, 2);
/// assert_eq!(array.to_vec(), vec![1, 3, 4]);
/// assert_eq!(array.find(&4), Some(4));
/// # Ok::<(), ArrayError>(())
/// ```
pub struct DynamicArray<T> {
    /// Live elements. Reserved to at least `capacity` slots and never
    /// filled past it, so the `Vec` never reallocates behind our back.
    buf: Vec<T>,
    /// Logical slot count; always in the `16 * 2^k` series.
    capacity: usize,
    stats: ResizeStats,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default capacity of 16.
    pub fn new() -> Self {
        Self::with_capacity(ArrayConfig::DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty array able to hold at least `requested` elements
    /// before its first growth.
    ///
    /// The capacity is rounded up to the smallest `16 * 2^k >= requested`.
    ///
    /// # Panics
    ///
    /// Panics if the rounded capacity overflows `usize`. Like the standard
    /// collections, aborts if the allocator fails; use
    /// [`try_with_capacity`](Self::try_with_capacity) to get an error instead.
    pub fn with_capacity(requested: usize) -> Self {
        let capacity = match policy::rounded_capacity(requested) {
            Some(capacity) => capacity,
            None => panic!("capacity overflow: cannot size an array for {requested} elements"),
        };
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
            stats: ResizeStats::default(),
        }
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(requested: usize) -> Result<Self, ArrayError> {
        Self::with_config(&ArrayConfig::new(requested))
    }

    /// Create an empty array from a configuration.
    pub fn with_config(config: &ArrayConfig) -> Result<Self, ArrayError> {
        let capacity = config.resolved_capacity()?;
        Ok(Self {
            buf: allocate(capacity)?,
            capacity,
            stats: ResizeStats::default(),
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Number of live elements. Alias of [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Current slot count of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Snapshot of the resize counters.
    pub fn stats(&self) -> ResizeStats {
        self.stats
    }

    /// Append `item` after the current last element.
    ///
    /// Grows the buffer first when it is full. On error the array is
    /// unchanged and `item` is dropped.
    pub fn push(&mut self, item: T) -> Result<(), ArrayError> {
        self.reserve_slot()?;
        self.buf.push(item);
        Ok(())
    }

    /// Insert `item` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends. Fails with [`ArrayError::OutOfRange`] for
    /// `index > len` before anything is touched.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ArrayError> {
        let len = self.buf.len();
        if index > len {
            return Err(ArrayError::OutOfRange { index, len });
        }
        self.reserve_slot()?;
        // Append, then rotate the new tail into place.
        self.buf.push(item);
        self.buf[index..].rotate_right(1);
        Ok(())
    }

    /// Insert `item` at the front. Same contract as `insert(0, item)`.
    pub fn prepend(&mut self, item: T) -> Result<(), ArrayError> {
        self.insert(0, item)
    }

    /// Remove and return the last element.
    ///
    /// Fails only with [`ArrayError::Empty`]. If the follow-up shrink
    /// cannot allocate, the element is still returned: the array keeps its
    /// larger buffer, logs a warning and counts the attempt in
    /// [`ResizeStats::failed_shrinks`].
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        let item = self.buf.pop().ok_or(ArrayError::Empty)?;
        self.shrink_if_sparse();
        Ok(item)
    }

    /// Remove and return the element at `index`, shifting `(index, len)`
    /// one slot left.
    ///
    /// Fails with [`ArrayError::Empty`] on an empty array and with
    /// [`ArrayError::OutOfRange`] for `index >= len`. A shrink that cannot
    /// allocate is handled as in [`pop`](Self::pop) and never becomes an
    /// `Err`.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        let len = self.buf.len();
        if len == 0 {
            return Err(ArrayError::Empty);
        }
        if index >= len {
            return Err(ArrayError::OutOfRange { index, len });
        }
        // In bounds: checked above.
        let item = self.buf.remove(index);
        self.shrink_if_sparse();
        Ok(item)
    }

    /// Drop every live element. Capacity is left as is.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Make room for one more element, doubling the buffer if it is full.
    fn reserve_slot(&mut self) -> Result<(), ArrayError> {
        if self.buf.len() < self.capacity {
            return Ok(());
        }
        let target = policy::grow_target(self.capacity).ok_or(ArrayError::CapacityOverflow {
            requested: self.capacity,
        })?;
        if let Err(err) = self.relocate(target) {
            log::debug!(
                "dynamic array grow {} -> {target} failed: {err}",
                self.capacity
            );
            return Err(err);
        }
        self.stats.grows += 1;
        Ok(())
    }

    /// Apply the post-removal shrink check.
    ///
    /// A failed shrink is not an error for the caller: the larger buffer
    /// is kept and every invariant still holds.
    fn shrink_if_sparse(&mut self) {
        let Some(target) = policy::shrink_target(self.buf.len(), self.capacity) else {
            return;
        };
        match self.relocate(target) {
            Ok(()) => self.stats.shrinks += 1,
            Err(err) => {
                log::warn!(
                    "dynamic array shrink {} -> {target} failed, keeping larger buffer: {err}",
                    self.capacity
                );
                self.stats.failed_shrinks += 1;
            }
        }
    }

    /// Replace the buffer with a fresh one of `new_capacity` slots.
    ///
    /// The new buffer is allocated before anything else happens, so an
    /// allocation failure leaves the array untouched. The first
    /// `min(len, new_capacity)` elements move across in order.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let mut fresh = allocate(new_capacity)?;
        let kept = self.buf.len().min(new_capacity);
        log::trace!(
            "relocating dynamic array: {} -> {new_capacity} slots, {kept} live",
            self.capacity
        );
        fresh.extend(self.buf.drain(..kept));
        self.buf = fresh;
        self.capacity = new_capacity;
        self.stats.relocated += kept as u64;
        Ok(())
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Copy of the element at `index`.
    ///
    /// Fails with [`ArrayError::OutOfRange`] for `index >= len`,
    /// including every index on an empty array.
    pub fn at(&self, index: usize) -> Result<T, ArrayError> {
        self.buf.get(index).cloned().ok_or(ArrayError::OutOfRange {
            index,
            len: self.buf.len(),
        })
    }

    /// Copies of the live elements in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.buf.to_vec()
    }

    /// Push a copy of each element of `items` in order.
    ///
    /// Stops at the first failure; elements appended before it stay.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<(), ArrayError> {
        for item in items {
            self.push(item.clone())?;
        }
        Ok(())
    }

    /// Build an array holding copies of `items`, sized so that no growth
    /// is needed while filling it.
    pub fn from_slice(items: &[T]) -> Result<Self, ArrayError> {
        let mut array = Self::try_with_capacity(items.len())?;
        array.extend_from_slice(items)?;
        Ok(array)
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Index of the first element equal to `item`.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.buf.iter().position(|candidate| candidate == item)
    }

    /// Whether any element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }
}

impl<T: Clone + PartialEq> DynamicArray<T> {
    /// Copy of the first (lowest index) element equal to `item`.
    pub fn find(&self, item: &T) -> Option<T> {
        self.position(item)
            .and_then(|index| self.buf.get(index))
            .cloned()
    }
}

/// Allocate an empty buffer with room for `capacity` elements.
///
/// A byte size past `isize::MAX` is a [`ArrayError::CapacityOverflow`];
/// only a refusal from the allocator itself is
/// [`ArrayError::AllocationFailed`].
fn allocate<T>(capacity: usize) -> Result<Vec<T>, ArrayError> {
    Layout::array::<T>(capacity).map_err(|_| ArrayError::CapacityOverflow {
        requested: capacity,
    })?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| ArrayError::AllocationFailed {
            requested: capacity,
        })?;
    Ok(buf)
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend_from_slice(&self.buf);
        Self {
            buf,
            capacity: self.capacity,
            stats: ResizeStats::default(),
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.buf).finish()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}
