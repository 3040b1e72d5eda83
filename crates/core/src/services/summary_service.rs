use chrono::{DateTime, Utc};

use crate::models::item::{Item, ItemStatus};
use crate::models::summary::SavingsSummary;
use crate::models::watchlist::Watchlist;

/// Derives display subsets and savings statistics from the watchlist.
///
/// Every function is a pure view over `(watchlist, now)`; the presentation
/// layer recomputes them on each tick, nothing is cached.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Items still waiting, newest first.
    pub fn waiting_items<'a>(&self, watchlist: &'a Watchlist) -> Vec<&'a Item> {
        self.filtered(watchlist, ItemStatus::Waiting)
    }

    /// Items declined after the wait ("saved"), newest first.
    pub fn skipped_items<'a>(&self, watchlist: &'a Watchlist) -> Vec<&'a Item> {
        self.filtered(watchlist, ItemStatus::DecidedSkip)
    }

    /// Items bought after the wait, newest first.
    pub fn bought_items<'a>(&self, watchlist: &'a Watchlist) -> Vec<&'a Item> {
        self.filtered(watchlist, ItemStatus::DecidedBought)
    }

    /// Every decided item, skipped or bought, newest first.
    pub fn decided_items<'a>(&self, watchlist: &'a Watchlist) -> Vec<&'a Item> {
        let mut items: Vec<&Item> = watchlist.items.iter().filter(|i| !i.is_waiting()).collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    /// Compute the savings snapshot for the whole watchlist.
    ///
    /// `total_saved` and `items_avoided` count only declined items; bought
    /// items contribute to neither. The avoidance percentage is 0 for an
    /// empty watchlist.
    pub fn summarize(&self, watchlist: &Watchlist, now: DateTime<Utc>) -> SavingsSummary {
        let total_items = watchlist.items.len();
        let mut waiting_count = 0;
        let mut bought_count = 0;
        let mut items_avoided = 0;
        let mut total_saved = 0.0;

        for item in &watchlist.items {
            match item.status {
                ItemStatus::Waiting => waiting_count += 1,
                ItemStatus::DecidedSkip => {
                    items_avoided += 1;
                    total_saved += item.price;
                }
                ItemStatus::DecidedBought => bought_count += 1,
            }
        }

        let percent_avoided = if total_items > 0 {
            (items_avoided as f64 / total_items as f64) * 100.0
        } else {
            0.0
        };

        SavingsSummary {
            as_of: now,
            total_items,
            waiting_count,
            bought_count,
            items_avoided,
            total_saved,
            percent_avoided,
        }
    }

    fn filtered<'a>(&self, watchlist: &'a Watchlist, status: ItemStatus) -> Vec<&'a Item> {
        let mut items: Vec<&Item> = watchlist
            .items
            .iter()
            .filter(|i| i.status == status)
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at)); // newest first
        items
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
