use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item::Item;

/// The main data container and sole unit of persistence. Serialized as one
/// JSON document (`{"items": [...]}`) and overwritten whole on every save;
/// there is no per-item persistence.
///
/// Insertion order carries no meaning; views re-sort by recency or filter
/// by status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Watchlist {
    /// All logged items
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an item by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// True if the id is present in the collection.
    #[must_use]
    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
