//! Test utilities for dynarray development.
//!
//! Provides a drop-counting element type ([`Tracked`], handed out by a
//! [`DropLedger`]) for ownership tests, and [`assert_invariants`] for
//! checking the capacity/length invariants after every step of a test.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{DropLedger, Tracked};

use dynarray::policy::is_valid_capacity;
use dynarray::DynamicArray;

/// Panic unless `array` satisfies the structural invariants:
/// `len <= capacity`, `capacity >= 16`, and `capacity` is a power of two.
pub fn assert_invariants<T>(array: &DynamicArray<T>) {
    assert!(
        array.len() <= array.capacity(),
        "len {} exceeds capacity {}",
        array.len(),
        array.capacity()
    );
    assert!(
        is_valid_capacity(array.capacity()),
        "capacity {} is not of the form 16 * 2^k",
        array.capacity()
    );
    assert_eq!(array.is_empty(), array.len() == 0);
    assert_eq!(array.size(), array.len());
}
