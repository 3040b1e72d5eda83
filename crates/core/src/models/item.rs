use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::preset::WaitPreset;

/// Lifecycle state of a watched item.
///
/// `Waiting` is the only state with a live countdown. The two decided
/// states are terminal; the sole way a countdown restarts is a reaffirm,
/// which stays in `Waiting` and pushes `expires_at` forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    /// Cooldown running, no decision yet
    Waiting,
    /// Declined after the wait; counts as money saved
    DecidedSkip,
    /// Bought anyway; excluded from savings totals
    DecidedBought,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Waiting => write!(f, "waiting"),
            ItemStatus::DecidedSkip => write!(f, "decided-skip"),
            ItemStatus::DecidedBought => write!(f, "decided-bought"),
        }
    }
}

/// User decision applied to a waiting item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    /// "Still want it": restart the cooldown (only once it has elapsed)
    Reaffirm,
    /// Skip the purchase; the price becomes money saved
    Decline,
    /// Buy it after all
    ConfirmPurchase,
}

/// Sort order for item listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSortOrder {
    /// Most recently added first (default for display)
    NewestFirst,
    /// Oldest first
    OldestFirst,
    /// Most expensive first
    PriceDesc,
    /// Cheapest first
    PriceAsc,
    /// Alphabetical by name
    NameAsc,
    /// Reverse alphabetical by name
    NameDesc,
}

/// A single prospective purchase under consideration.
///
/// Countdown state is never stored: `expires_at` is the only timer field,
/// and remaining time is derived from the wall clock on every read (see
/// `services::countdown`).
///
/// Serializes with the persisted document's field names (`imageUrl`,
/// `createdAt`, `waitDuration`, ...) and millisecond timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Display label, trimmed and non-empty
    pub name: String,

    /// Price in decimal currency units (always positive)
    pub price: f64,

    /// Optional product image reference; absent means show a placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// When the item was logged
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    /// Cooldown length in milliseconds, fixed at creation
    #[serde(rename = "waitDuration")]
    pub wait_duration_ms: i64,

    /// When the cooldown runs out; moves forward again on reaffirm
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,

    /// Lifecycle state
    pub status: ItemStatus,

    /// Set the moment the status leaves `Waiting`, never cleared
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub decided_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Create a freshly logged item with its cooldown starting at `now`.
    ///
    /// Input validation lives in `ItemService::create`; this constructor
    /// only establishes the field invariants (`expires_at >= created_at`,
    /// waiting items have no decision timestamp).
    pub fn new(
        name: impl Into<String>,
        price: f64,
        image_url: Option<String>,
        preset: WaitPreset,
        now: DateTime<Utc>,
    ) -> Self {
        let wait_duration_ms = preset.duration_ms();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            image_url,
            created_at: now,
            wait_duration_ms,
            expires_at: now + Duration::milliseconds(wait_duration_ms),
            status: ItemStatus::Waiting,
            decided_at: None,
        }
    }

    /// True while the item is undecided.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.status == ItemStatus::Waiting
    }
}
