//! Capacity arithmetic for construction, growth, and shrinking.
//!
//! Every capacity the array ever holds is of the form `16 * 2^k`: the
//! construction request is rounded up into that series, growth doubles,
//! and shrinking halves but never drops below the floor. Because 16 is
//! itself a power of two, the series is exactly the powers of two that
//! are at least 16.

use crate::config::ArrayConfig;

/// Smallest `16 * 2^k` that is `>= requested`.
///
/// Returns `None` when the result does not fit in `usize`.
pub fn rounded_capacity(requested: usize) -> Option<usize> {
    if requested <= ArrayConfig::MIN_CAPACITY {
        return Some(ArrayConfig::MIN_CAPACITY);
    }
    requested.checked_next_power_of_two()
}

/// Capacity a full array grows to.
///
/// Returns `None` on overflow.
pub fn grow_target(capacity: usize) -> Option<usize> {
    capacity.checked_mul(ArrayConfig::GROWTH_FACTOR)
}

/// Capacity to shrink to after a removal, if any.
///
/// Halves only when occupancy has fallen to a quarter and the halved
/// capacity still respects the floor. After a shrink the buffer is at
/// most half full, so the next growth is at least `capacity / 4` pushes away.
pub fn shrink_target(len: usize, capacity: usize) -> Option<usize> {
    let half = capacity / ArrayConfig::GROWTH_FACTOR;
    let threshold = capacity / ArrayConfig::SHRINK_OCCUPANCY_DIVISOR;
    (len <= threshold && half >= ArrayConfig::MIN_CAPACITY).then_some(half)
}

/// Whether `capacity` belongs to the `16 * 2^k` series.
pub fn is_valid_capacity(capacity: usize) -> bool {
    capacity >= ArrayConfig::MIN_CAPACITY && capacity.is_power_of_two()
}
