//! The set of dates the user has marked as unavailable.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unordered set of blocked calendar dates, unique by date value.
///
/// Owned and mutated by a single calling context; persistence always
/// receives the full set (see [`crate::store::BlockedDateStore`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockedDateSet {
    dates: HashSet<NaiveDate>,
}

impl BlockedDateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block a date. Returns false if it was already blocked.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Unblock a date. Returns false if it wasn't blocked.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.dates.remove(&date)
    }

    /// Flip a date between blocked and unblocked. Returns whether the date
    /// is blocked afterwards.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.dates.remove(&date) {
            false
        } else {
            self.dates.insert(date);
            true
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }

    /// All blocked dates in ascending order, for deterministic persistence
    /// and display.
    pub fn sorted(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<_> = self.dates.iter().copied().collect();
        dates.sort();
        dates
    }
}

impl FromIterator<NaiveDate> for BlockedDateSet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        BlockedDateSet {
            dates: iter.into_iter().collect(),
        }
    }
}
