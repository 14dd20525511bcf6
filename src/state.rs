use crate::storage::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The mutex serializes all store access the way a browser's UI thread
/// serializes event handlers; no finer locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
