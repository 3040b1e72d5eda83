pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::Utc;
use uuid::Uuid;

use models::{
    item::{Item, ItemAction, ItemSortOrder},
    preset::WaitPreset,
    summary::SavingsSummary,
    watchlist::Watchlist,
};
use services::{countdown, item_service::ItemService, summary_service::SummaryService};
use storage::{manager::StorageManager, store::KeyValueStore};

use errors::CoreError;

/// Main entry point for the Impulse Buy Blocker core library.
/// Holds the watchlist state and the services that operate on it.
///
/// The presentation layer owns rendering and the one-second refresh timer;
/// it calls back in through these methods and re-reads the derived views
/// on every tick.
#[must_use]
pub struct ImpulseBlocker {
    watchlist: Watchlist,
    item_service: ItemService,
    summary_service: SummaryService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for ImpulseBlocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImpulseBlocker")
            .field("items", &self.watchlist.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl ImpulseBlocker {
    /// Create a brand new empty watchlist.
    pub fn create_new() -> Self {
        Self::build(Watchlist::new())
    }

    /// Load the watchlist from a key-value store.
    ///
    /// Never fails: an absent or corrupt stored document yields an empty
    /// watchlist (logged by the storage layer), so startup always
    /// succeeds.
    pub fn load_from_store(store: &dyn KeyValueStore) -> Self {
        Self::build(StorageManager::load(store))
    }

    /// Save the watchlist to a key-value store as one whole document.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_store(&mut self, store: &mut dyn KeyValueStore) -> Result<(), CoreError> {
        StorageManager::save(store, &self.watchlist)?;
        self.dirty = false;
        Ok(())
    }

    // ── Item Management ─────────────────────────────────────────────

    /// Log a new prospective purchase; the cooldown starts now.
    /// Returns the new item's id.
    pub fn add_item(
        &mut self,
        name: &str,
        price: f64,
        preset: WaitPreset,
    ) -> Result<Uuid, CoreError> {
        self.add_item_with_image(name, price, None, preset)
    }

    /// Log a new prospective purchase with a product image attached.
    pub fn add_item_with_image(
        &mut self,
        name: &str,
        price: f64,
        image_url: Option<String>,
        preset: WaitPreset,
    ) -> Result<Uuid, CoreError> {
        let item = self
            .item_service
            .create(name, price, image_url, preset, Utc::now())?;
        let id = item.id;
        self.watchlist.items.push(item);
        self.dirty = true;
        Ok(id)
    }

    /// Apply a lifecycle action (reaffirm / decline / confirm purchase).
    ///
    /// Returns `true` if the item changed. Unknown ids and inapplicable
    /// actions (reaffirm before expiry, anything on a decided item) are
    /// silent no-ops.
    pub fn transition_item(&mut self, id: Uuid, action: ItemAction) -> bool {
        let changed = self
            .item_service
            .transition(&mut self.watchlist, id, action, Utc::now());
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Permanently delete an item. Unknown ids are a silent no-op.
    pub fn delete_item(&mut self, id: Uuid) -> bool {
        let removed = self.item_service.delete(&mut self.watchlist, id);
        if removed {
            self.dirty = true;
        }
        removed
    }

    // ── Views & Aggregation ─────────────────────────────────────────

    /// Get a single item by its id.
    #[must_use]
    pub fn get_item(&self, id: Uuid) -> Option<&Item> {
        self.watchlist.get(id)
    }

    /// All items in insertion order (views re-sort for display).
    #[must_use]
    pub fn get_items(&self) -> &[Item] {
        &self.watchlist.items
    }

    /// Total number of items, any status.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.watchlist.len()
    }

    /// Items still in their cooldown, newest first.
    #[must_use]
    pub fn waiting_items(&self) -> Vec<&Item> {
        self.summary_service.waiting_items(&self.watchlist)
    }

    /// Declined items ("saved"), newest first.
    #[must_use]
    pub fn skipped_items(&self) -> Vec<&Item> {
        self.summary_service.skipped_items(&self.watchlist)
    }

    /// Bought items, newest first.
    #[must_use]
    pub fn bought_items(&self) -> Vec<&Item> {
        self.summary_service.bought_items(&self.watchlist)
    }

    /// Every decided item, newest first.
    #[must_use]
    pub fn decided_items(&self) -> Vec<&Item> {
        self.summary_service.decided_items(&self.watchlist)
    }

    /// Savings snapshot as of now: totals, counts, avoidance percentage.
    #[must_use]
    pub fn get_summary(&self) -> SavingsSummary {
        self.summary_service.summarize(&self.watchlist, Utc::now())
    }

    // ── Countdown Helpers ───────────────────────────────────────────

    /// Countdown text for an item as of now (`"Time expired"` once the
    /// cooldown elapsed). `None` for unknown ids.
    #[must_use]
    pub fn countdown_label(&self, id: Uuid) -> Option<String> {
        let item = self.watchlist.get(id)?;
        Some(countdown::format_remaining(countdown::remaining_ms(
            item,
            Utc::now(),
        )))
    }

    /// Whole days since the item was decided ("Avoided N days ago").
    /// `None` for unknown ids and for items still waiting.
    #[must_use]
    pub fn days_since_decision(&self, id: Uuid) -> Option<i64> {
        let item = self.watchlist.get(id)?;
        item.decided_at
            .map(|decided| countdown::days_since(decided, Utc::now()))
    }

    // ── Search & Sorting ────────────────────────────────────────────

    /// Search items by name (case-insensitive substring match).
    #[must_use]
    pub fn search_items(&self, query: &str) -> Vec<&Item> {
        let q = query.to_lowercase();
        self.watchlist
            .items
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&q))
            .collect()
    }

    /// Get items sorted by a specific order.
    #[must_use]
    pub fn get_items_sorted(&self, order: &ItemSortOrder) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.watchlist.items.iter().collect();
        match order {
            ItemSortOrder::NewestFirst => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ItemSortOrder::OldestFirst => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            ItemSortOrder::PriceDesc => items.sort_by(|a, b| {
                b.price
                    .partial_cmp(&a.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            ItemSortOrder::PriceAsc => items.sort_by(|a, b| {
                a.price
                    .partial_cmp(&b.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            ItemSortOrder::NameAsc => items.sort_by(|a, b| a.name.cmp(&b.name)),
            ItemSortOrder::NameDesc => items.sort_by(|a, b| b.name.cmp(&a.name)),
        }
        items
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all items as a JSON string.
    pub fn export_items_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.watchlist.items)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize items to JSON: {e}")))
    }

    /// Export all items as a CSV string.
    /// Columns: id, name, price, status, createdAt, waitDuration, expiresAt, decidedAt
    #[must_use]
    pub fn export_items_to_csv(&self) -> String {
        let mut csv =
            String::from("id,name,price,status,createdAt,waitDuration,expiresAt,decidedAt\n");
        for item in &self.watchlist.items {
            // Escape CSV: quote names containing commas, quotes, or newlines
            let name = &item.name;
            let escaped_name = if name.contains(',') || name.contains('"') || name.contains('\n') {
                format!("\"{}\"", name.replace('"', "\"\""))
            } else {
                name.clone()
            };
            let decided_at = item
                .decided_at
                .map(|d| d.timestamp_millis().to_string())
                .unwrap_or_default();
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                item.id,
                escaped_name,
                item.price,
                item.status,
                item.created_at.timestamp_millis(),
                item.wait_duration_ms,
                item.expires_at.timestamp_millis(),
                decided_at,
            ));
        }
        csv
    }

    /// Import items from a JSON string. Every item is validated and ids
    /// must be unique (against the watchlist and within the batch); if
    /// anything fails, nothing is imported (all-or-nothing).
    /// Returns the number of items imported.
    pub fn import_items_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let items: Vec<Item> = serde_json::from_str(json)?;

        // Phase 1: validate everything before touching the watchlist
        let mut seen: std::collections::HashSet<Uuid> =
            self.watchlist.items.iter().map(|i| i.id).collect();
        for item in &items {
            self.item_service.validate_item(item)?;
            if !seen.insert(item.id) {
                return Err(CoreError::InvalidInput(format!(
                    "Duplicate item id: {}",
                    item.id
                )));
            }
        }

        // Phase 2: all valid, append
        let count = items.len();
        self.watchlist.items.extend(items);
        if count > 0 {
            self.dirty = true;
        }
        Ok(count)
    }

    /// Export the full watchlist document as JSON (debugging/display).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.watchlist)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize watchlist: {e}")))
    }

    // ── Dirty State ─────────────────────────────────────────────────

    /// Returns `true` if the watchlist has been modified since the last
    /// save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(watchlist: Watchlist) -> Self {
        Self {
            watchlist,
            item_service: ItemService::new(),
            summary_service: SummaryService::new(),
            dirty: false,
        }
    }
}
