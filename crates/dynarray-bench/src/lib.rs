//! Benchmark workloads for the dynarray crate.
//!
//! Provides deterministic operation sequences for benchmarks:
//!
//! - [`mixed_workload`]: seeded random push/insert/pop/remove mix
//! - [`sawtooth_workload`]: fill to a peak then drain, repeatedly, to
//!   exercise the grow/shrink boundary
//!
//! Every sequence is valid by construction: removals are only generated
//! when the simulated length is non-zero and indices are always in range.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::{ArrayError, DynamicArray};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One array mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Push(u64),
    Insert(usize, u64),
    Pop,
    Remove(usize),
}

/// Generate `count` random operations from `seed`.
///
/// Roughly 60% of operations add an element, so the array trends upward
/// while still crossing shrink thresholds. Same seed, same sequence.
pub fn mixed_workload(seed: u64, count: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut len = 0usize;
    let mut ops = Vec::with_capacity(count);
    for _ in 0..count {
        let roll = rng.next_u32() % 10;
        let value = rng.next_u64();
        let op = if len == 0 || roll < 4 {
            Op::Push(value)
        } else if roll < 6 {
            Op::Insert(rng.next_u32() as usize % (len + 1), value)
        } else if roll < 8 {
            Op::Pop
        } else {
            Op::Remove(rng.next_u32() as usize % len)
        };
        match op {
            Op::Push(_) | Op::Insert(..) => len += 1,
            Op::Pop | Op::Remove(_) => len -= 1,
        }
        ops.push(op);
    }
    ops
}

/// Push `0..peak` then pop everything, `cycles` times.
pub fn sawtooth_workload(peak: u64, cycles: usize) -> Vec<Op> {
    let mut ops = Vec::with_capacity(2 * peak as usize * cycles);
    for _ in 0..cycles {
        ops.extend((0..peak).map(Op::Push));
        ops.extend((0..peak).map(|_| Op::Pop));
    }
    ops
}

/// Run `ops` against `array`, stopping at the first error.
pub fn apply(array: &mut DynamicArray<u64>, ops: &[Op]) -> Result<(), ArrayError> {
    for op in ops {
        match *op {
            Op::Push(v) => array.push(v)?,
            Op::Insert(index, v) => array.insert(index, v)?,
            Op::Pop => {
                array.pop()?;
            }
            Op::Remove(index) => {
                array.remove(index)?;
            }
        }
    }
    Ok(())
}
