use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::errors::{AppError, AppResult};

// Fixed admission limit per calendar day. Not configurable.
pub const MAX_PICKUPS_PER_DAY: u32 = 5;

// Styling token for the date picker. Must never disagree with
// is_at_capacity for the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayHighlight {
    Full,
    Open,
}

impl DayHighlight {
    pub fn css_class(&self) -> &'static str {
        match self {
            DayHighlight::Full => "red-date",
            DayHighlight::Open => "",
        }
    }
}

// Local cache of per-day pickup counts. The backend is authoritative;
// this copy is refreshed wholesale on fetch and bumped optimistically
// after a confirmed schedule so a second attempt in the same session
// sees the new count without a re-fetch.
#[derive(Debug, Clone, Default)]
pub struct DailyPickupCounts {
    counts: HashMap<NaiveDate, u32>,
}

impl DailyPickupCounts {
    pub fn new() -> Self {
        Self::default()
    }

    // Dates the backend never mentioned have zero pickups.
    pub fn count_for(&self, date: NaiveDate) -> u32 {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    pub fn is_at_capacity(&self, date: NaiveDate) -> bool {
        self.count_for(date) >= MAX_PICKUPS_PER_DAY
    }

    // Same predicate as is_at_capacity, exposed separately because it
    // gates picker selectability rather than highlighting.
    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        self.is_at_capacity(date)
    }

    pub fn highlight_for(&self, date: NaiveDate) -> DayHighlight {
        if self.is_at_capacity(date) {
            DayHighlight::Full
        } else {
            DayHighlight::Open
        }
    }

    // Picker filter: no past dates, no Sundays, no full days.
    pub fn is_schedulable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= today && date.weekday() != Weekday::Sun && !self.is_at_capacity(date)
    }

    // Pre-submission gate. The backend re-checks at write time and
    // its rejection is authoritative even when this passes; two
    // clients can race for the last slot.
    pub fn check_date(&self, date: NaiveDate) -> AppResult<()> {
        if self.is_at_capacity(date) {
            tracing::debug!(%date, count = self.count_for(date), "date at capacity");
            return Err(AppError::DateFull(date));
        }
        Ok(())
    }

    // Optimistic local bump after a confirmed schedule.
    pub fn record_scheduled(&mut self, date: NaiveDate) {
        *self.counts.entry(date).or_insert(0) += 1;
    }

    // Replaces the cache with the backend's map. Never merges, so an
    // optimistic bump cannot double-count once the authoritative
    // figure arrives.
    pub fn reconcile(&mut self, authoritative: HashMap<NaiveDate, u32>) {
        self.counts = authoritative;
    }
}
