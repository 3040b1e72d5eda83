use tracing::warn;

use crate::errors::CoreError;
use crate::models::watchlist::Watchlist;

use super::store::KeyValueStore;

/// The single key the whole watchlist document lives under.
pub const STORAGE_KEY: &str = "buy-rule-data";

/// High-level storage operations: the watchlist is one JSON document,
/// read once at startup and overwritten whole on every save.
pub struct StorageManager;

impl StorageManager {
    /// Load the watchlist from the store.
    ///
    /// An absent key is a first run and yields an empty watchlist. An
    /// unreadable store or an unparseable document is logged and also
    /// yields an empty watchlist; corrupt local state must never block
    /// startup, even at the cost of silently dropping it.
    pub fn load(store: &dyn KeyValueStore) -> Watchlist {
        let raw = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Watchlist::new(),
            Err(e) => {
                warn!("failed to read stored watchlist, starting empty: {e}");
                return Watchlist::new();
            }
        };

        match serde_json::from_str::<Watchlist>(&raw) {
            Ok(watchlist) => watchlist,
            Err(e) => {
                warn!("stored watchlist is not valid, starting empty: {e}");
                Watchlist::new()
            }
        }
    }

    /// Serialize the whole watchlist and overwrite the stored document
    /// unconditionally (last-writer-wins, single-writer assumption).
    pub fn save(store: &mut dyn KeyValueStore, watchlist: &Watchlist) -> Result<(), CoreError> {
        let json = serde_json::to_string(watchlist)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize watchlist: {e}")))?;
        store.set(STORAGE_KEY, &json)
    }
}
