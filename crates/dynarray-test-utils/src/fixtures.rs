//! Drop-counting element fixtures.
//!
//! A [`DropLedger`] mints [`Tracked`] values and counts how many have
//! been created (including clones) and dropped. Tests use it to show that
//! the array neither leaks nor double-drops elements across shifts and
//! relocations.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    created: Cell<usize>,
    dropped: Cell<usize>,
}

/// Shared counter for [`Tracked`] values.
///
/// Cloning the ledger shares the same counters.
#[derive(Clone, Default)]
pub struct DropLedger {
    counts: Rc<Counts>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new tracked value carrying `id`.
    pub fn track(&self, id: u32) -> Tracked {
        self.counts.created.set(self.counts.created.get() + 1);
        Tracked {
            id,
            counts: Rc::clone(&self.counts),
        }
    }

    /// Values created so far, clones included.
    pub fn created(&self) -> usize {
        self.counts.created.get()
    }

    /// Values dropped so far.
    pub fn dropped(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Values currently alive.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// Element type that reports its creation and destruction to a
/// [`DropLedger`].
///
/// Equality compares `id` only, so a clone equals its original.
pub struct Tracked {
    id: u32,
    counts: Rc<Counts>,
}

impl Tracked {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counts.created.set(self.counts.created.get() + 1);
        Self {
            id: self.id,
            counts: Rc::clone(&self.counts),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counts.dropped.set(self.counts.dropped.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.id)
    }
}
