//! Error types for dynamic array operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during dynamic array operations.
///
/// Every variant is reported before the array is mutated: a call that
/// returns an `ArrayError` leaves length, capacity, and contents exactly
/// as they were.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The index lies outside the addressable range for the operation.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A removal was attempted on an array with no live elements.
    Empty,
    /// The allocator refused a buffer of the requested size.
    AllocationFailed {
        /// Number of element slots requested.
        requested: usize,
    },
    /// The target capacity cannot be represented, either as a slot count
    /// in `usize` or as a buffer size of at most `isize::MAX` bytes.
    CapacityOverflow {
        /// The capacity that was being rounded or doubled.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
            Self::Empty => write!(f, "array is empty"),
            Self::AllocationFailed { requested } => {
                write!(f, "allocation of {requested} slots failed")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow while sizing for {requested} slots")
            }
        }
    }
}

impl Error for ArrayError {}
