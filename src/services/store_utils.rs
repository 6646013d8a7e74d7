use std::sync::{Arc, Mutex, MutexGuard};

use actix::{Actor, Addr, SyncArbiter, SyncContext};

use crate::services::store::MemStore;

// Worker actor for the shared in-memory store. Every worker holds a clone of
// the same handle; the mutex serializes all store access, so each identifier
// is issued at most once.
pub struct StoreActor(pub Arc<Mutex<MemStore>>);

pub struct AppState {
    pub store: Addr<StoreActor>,
}

impl Actor for StoreActor {
    type Context = SyncContext<Self>;
}

impl StoreActor {
    pub(crate) fn store(&self) -> MutexGuard<'_, MemStore> {
        self.0.lock().expect("store mutex poisoned")
    }
}

pub fn start_store() -> Addr<StoreActor> {
    let store = Arc::new(Mutex::new(MemStore::new()));

    SyncArbiter::start(4, move || StoreActor(store.clone()))
}
