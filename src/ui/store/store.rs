//! Thread-safe state container.

use parking_lot::RwLock;
use std::sync::Arc;

use super::reducer::Reducer;

/// Shared store for one reducer tree.
///
/// All mutation goes through [`Store::dispatch`]; each dispatch applies the
/// reducer under the write lock, so readers never observe a half-applied
/// transition. Cloning is cheap and shares the underlying state.
pub struct Store<R: Reducer> {
    state: Arc<RwLock<R::State>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store seeded with `initial`.
    pub fn new(initial: R::State) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
        }
    }

    /// Apply one intent through the reducer.
    pub fn dispatch(&self, intent: R::Intent) {
        let mut state = self.state.write();
        *state = R::reduce(std::mem::take(&mut *state), intent);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state.read().clone()
    }
}
