use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::item::{Item, ItemAction, ItemStatus};
use crate::models::preset::WaitPreset;
use crate::models::watchlist::Watchlist;

/// Creates items and drives the lifecycle state machine.
///
/// Pure business logic: no I/O and no clock access, callers pass `now`.
pub struct ItemService;

impl ItemService {
    pub fn new() -> Self {
        Self
    }

    /// Validate creation input and produce a new waiting item.
    ///
    /// Rules:
    /// - `name` must be non-empty after trimming (the trimmed form is stored)
    /// - `price` must be finite and strictly positive
    ///
    /// The caller appends the item to the watchlist and persists; nothing
    /// is mutated here, and no malformed record is ever produced.
    pub fn create(
        &self,
        name: &str,
        price: f64,
        image_url: Option<String>,
        preset: WaitPreset,
        now: DateTime<Utc>,
    ) -> Result<Item, CoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidInput(
                "Item name must not be empty".into(),
            ));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "Item price must be a positive amount, got {price}"
            )));
        }
        Ok(Item::new(trimmed, price, image_url, preset, now))
    }

    /// Apply an action to a single item, producing the replacement value.
    ///
    /// Returns `None` when the action does not apply in the item's current
    /// state: a reaffirm before the cooldown elapsed, or any action on an
    /// already-decided item (decided states are terminal).
    pub fn apply_action(
        &self,
        item: &Item,
        action: ItemAction,
        now: DateTime<Utc>,
    ) -> Option<Item> {
        match (item.status, action) {
            (ItemStatus::Waiting, ItemAction::Reaffirm) => {
                if now < item.expires_at {
                    // Cooldown still running; reaffirm has no meaning yet
                    return None;
                }
                let mut next = item.clone();
                next.expires_at = now + Duration::milliseconds(item.wait_duration_ms);
                Some(next)
            }
            (ItemStatus::Waiting, ItemAction::Decline) => {
                // Early decline is allowed; deciding before expiry just
                // ends the wait sooner.
                let mut next = item.clone();
                next.status = ItemStatus::DecidedSkip;
                next.decided_at = Some(now);
                Some(next)
            }
            (ItemStatus::Waiting, ItemAction::ConfirmPurchase) => {
                let mut next = item.clone();
                next.status = ItemStatus::DecidedBought;
                next.decided_at = Some(now);
                Some(next)
            }
            (ItemStatus::DecidedSkip | ItemStatus::DecidedBought, _) => None,
        }
    }

    /// Apply an action to the item with the given id, replacing it in the
    /// watchlist. Returns `true` if anything changed.
    ///
    /// An unknown id leaves the watchlist untouched and returns `false`;
    /// a stale view racing a deletion is expected and benign.
    pub fn transition(
        &self,
        watchlist: &mut Watchlist,
        id: Uuid,
        action: ItemAction,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(idx) = watchlist.items.iter().position(|i| i.id == id) else {
            return false;
        };
        match self.apply_action(&watchlist.items[idx], action, now) {
            Some(next) => {
                watchlist.items[idx] = next;
                true
            }
            None => false,
        }
    }

    /// Permanently remove an item. There is no soft-delete or tombstone.
    /// Returns `true` if the item existed.
    pub fn delete(&self, watchlist: &mut Watchlist, id: Uuid) -> bool {
        let before = watchlist.items.len();
        watchlist.items.retain(|i| i.id != id);
        watchlist.items.len() != before
    }

    /// Validate an item that arrived from outside (bulk import).
    ///
    /// Checks the stored-record invariants rather than creation input:
    /// non-empty name, positive finite price, `expires_at >= created_at`,
    /// and status/decision-timestamp coherence.
    pub fn validate_item(&self, item: &Item) -> Result<(), CoreError> {
        if item.name.trim().is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "Item {} has an empty name",
                item.id
            )));
        }
        if !item.price.is_finite() || item.price <= 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "Item '{}' has a non-positive price: {}",
                item.name, item.price
            )));
        }
        if item.expires_at < item.created_at {
            return Err(CoreError::InvalidInput(format!(
                "Item '{}' expires before it was created",
                item.name
            )));
        }
        if item.is_waiting() != item.decided_at.is_none() {
            return Err(CoreError::InvalidInput(format!(
                "Item '{}' has status {} but decided_at {}",
                item.name,
                item.status,
                if item.decided_at.is_some() { "set" } else { "unset" }
            )));
        }
        Ok(())
    }
}

impl Default for ItemService {
    fn default() -> Self {
        Self::new()
    }
}
