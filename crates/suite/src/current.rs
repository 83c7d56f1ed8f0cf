//! RAII guard for the "currently executing test" slot.
//!
//! Installing the guard records the test; dropping it always clears the
//! slot, so no exit path of a phase call can leave a stale entry behind.

use std::sync::{Arc, PoisonError, RwLock};

use storebench_core::BenchmarkTest;

pub(crate) type CurrentSlot = RwLock<Option<Arc<dyn BenchmarkTest>>>;

pub(crate) struct CurrentGuard<'a> {
    slot: &'a CurrentSlot,
}

impl<'a> CurrentGuard<'a> {
    /// Install `test` as the current one. Replaces whatever the slot held.
    pub(crate) fn install(slot: &'a CurrentSlot, test: Arc<dyn BenchmarkTest>) -> Self {
        *slot.write().unwrap_or_else(PoisonError::into_inner) = Some(test);
        Self { slot }
    }
}

impl Drop for CurrentGuard<'_> {
    fn drop(&mut self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Snapshot of the slot's occupant, if any.
pub(crate) fn occupant(slot: &CurrentSlot) -> Option<Arc<dyn BenchmarkTest>> {
    slot.read().unwrap_or_else(PoisonError::into_inner).clone()
}
