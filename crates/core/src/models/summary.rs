use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Savings snapshot across the whole watchlist at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsSummary {
    /// Instant this summary was computed for
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub as_of: DateTime<Utc>,

    /// Total number of items logged, any status
    pub total_items: usize,

    /// Items still inside their cooldown
    pub waiting_count: usize,

    /// Items bought after the wait
    pub bought_count: usize,

    /// Items declined (the "avoided" count)
    pub items_avoided: usize,

    /// Sum of prices over declined items
    pub total_saved: f64,

    /// items_avoided / total_items * 100; 0 for an empty watchlist
    pub percent_avoided: f64,
}
