//! Countdown arithmetic and formatting.
//!
//! Remaining time is derived from `(expires_at, now)` on every call and
//! never stored; the one-second render tick just calls these again with a
//! fresh `now`.

use chrono::{DateTime, Utc};

use crate::models::item::Item;

/// Rendered once the cooldown has fully elapsed, in place of a zeroed-out
/// countdown.
pub const EXPIRED_LABEL: &str = "Time expired";

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// How urgently the remaining time should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownUrgency {
    /// A day or more left
    Calm,
    /// Under 24 hours
    Soon,
    /// Under an hour (or already expired)
    Critical,
}

/// Milliseconds until the item's cooldown elapses; negative once expired.
#[must_use]
pub fn remaining_ms(item: &Item, now: DateTime<Utc>) -> i64 {
    (item.expires_at - now).num_milliseconds()
}

/// True exactly when `now >= expires_at`.
#[must_use]
pub fn is_expired(item: &Item, now: DateTime<Utc>) -> bool {
    remaining_ms(item, now) <= 0
}

/// Format a remaining duration the way the countdown badge shows it.
///
/// Units decompose by floor division over days / hours / minutes / seconds.
/// Only the most significant run of units is rendered: the days form drops
/// seconds, and once under an hour only minutes and seconds remain.
#[must_use]
pub fn format_remaining(remaining_ms: i64) -> String {
    if remaining_ms <= 0 {
        return EXPIRED_LABEL.to_string();
    }

    let days = remaining_ms / MS_PER_DAY;
    let hours = (remaining_ms % MS_PER_DAY) / MS_PER_HOUR;
    let minutes = (remaining_ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (remaining_ms % MS_PER_MINUTE) / MS_PER_SECOND;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Classify remaining time into the display urgency bands.
#[must_use]
pub fn urgency(remaining_ms: i64) -> CountdownUrgency {
    if remaining_ms < MS_PER_HOUR {
        CountdownUrgency::Critical
    } else if remaining_ms < MS_PER_DAY {
        CountdownUrgency::Soon
    } else {
        CountdownUrgency::Calm
    }
}

/// Whole days elapsed since `then` ("Avoided N days ago").
#[must_use]
pub fn days_since(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_days()
}
