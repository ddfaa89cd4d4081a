//! Resizable contiguous array with an explicit capacity policy.
//!
//! [`DynamicArray`] stores its elements in one exclusively owned heap
//! buffer and decides on its own when to replace that buffer:
//!
//! ```text
//! construct(request) ── capacity = smallest 16·2^k >= request
//!        │
//!  push / insert ─── len == capacity? ── relocate(capacity * 2)
//!        │
//!  pop / remove ──── len <= capacity/4 and capacity/2 >= 16? ── relocate(capacity / 2)
//! ```
//!
//! Relocation allocates the new buffer before touching the old one, so a
//! failed allocation leaves the array exactly as it was. Buffer events are
//! reported through the [`log`] facade at `trace`/`debug`/`warn` level.
//!
//! # Modules
//!
//! - [`array`]: the container itself.
//! - [`policy`]: capacity arithmetic (rounding, doubling, halving).
//! - [`config`]: construction-time parameters and policy constants.
//! - [`error`]: [`ArrayError`].
//! - [`stats`]: [`ResizeStats`] relocation counters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod policy;
pub mod stats;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use stats::ResizeStats;
