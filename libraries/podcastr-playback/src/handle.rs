//! Shared store handle for UI trees
//!
//! Every control gets a clone of the same handle. Single-threaded: the
//! handle is `!Send`, matching the event loop that drives it.

use std::{cell::RefCell, rc::Rc};

use crate::{
    events::PlayerEvent,
    store::PlayerStore,
    types::{PlaybackSnapshot, PlayerCommand},
};

/// Cloneable handle to one [`PlayerStore`]
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    store: Rc<RefCell<PlayerStore>>,
}

impl PlayerHandle {
    /// Take ownership of a store
    pub fn new(store: PlayerStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    /// Apply a command and return the resulting snapshot
    pub fn dispatch(&self, command: PlayerCommand) -> PlaybackSnapshot {
        let mut store = self.store.borrow_mut();
        store.apply(command);
        store.snapshot()
    }

    /// Current snapshot
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.store.borrow().snapshot()
    }

    /// Read the store
    ///
    /// Do not dispatch from inside `f`; the store is borrowed for the call.
    pub fn read<R>(&self, f: impl FnOnce(&PlayerStore) -> R) -> R {
        f(&self.store.borrow())
    }

    /// Mutate the store directly (bridge notifications)
    pub fn update<R>(&self, f: impl FnOnce(&mut PlayerStore) -> R) -> R {
        f(&mut self.store.borrow_mut())
    }

    /// Drain pending store events
    pub fn drain_events(&self) -> Vec<PlayerEvent> {
        self.store.borrow_mut().drain_events()
    }

    /// Whether two handles point at the same store
    pub fn same_store(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl Default for PlayerHandle {
    fn default() -> Self {
        Self::new(PlayerStore::default())
    }
}
