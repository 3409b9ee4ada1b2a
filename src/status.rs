//! Save-status tracking for blocked-date mutations.
//!
//! Every mutation of the blocked-date set is written through to the store
//! immediately; the "saving…" indicator the UI shows afterwards is pure
//! feedback, cleared on a 300 ms timer. Rapid consecutive mutations are
//! debounced: only the timer belonging to the most recent mutation may
//! clear the flag.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::blocked::BlockedDateSet;
use crate::error::DayblockResult;
use crate::store::BlockedDateStore;

/// How long the "saving…" indicator stays up after a successful write.
pub const SAVED_INDICATOR_DELAY: Duration = Duration::from_millis(300);

/// Snapshot of the persistence-feedback state.
///
/// Starts at process startup as `{ is_saving: false, last_saved: None }`
/// and lives for the process lifetime, owned by a [`SaveStatusTracker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveStatus {
    pub is_saving: bool,
    pub last_saved: Option<DateTime<Utc>>,
}

impl SaveStatus {
    fn new() -> Self {
        SaveStatus {
            is_saving: false,
            last_saved: None,
        }
    }

    /// Elapsed time between the last save and `now`. `None` if nothing has
    /// been saved yet.
    pub fn time_since_save(&self, now: DateTime<Utc>) -> Option<Duration> {
        let last = self.last_saved?;
        let secs = now.signed_duration_since(last).num_seconds().max(0);
        Some(Duration::from_secs(secs as u64))
    }
}

struct Inner {
    status: SaveStatus,
    /// Bumped on every mutation; a pending clear only fires if its
    /// generation is still the latest, which cancels superseded timers.
    generation: u64,
}

/// Observes blocked-date mutations, persists them, and drives the
/// saving/saved indicator transitions.
pub struct SaveStatusTracker<S> {
    store: S,
    inner: Arc<Mutex<Inner>>,
}

impl<S: BlockedDateStore> SaveStatusTracker<S> {
    pub fn new(store: S) -> Self {
        SaveStatusTracker {
            store,
            inner: Arc::new(Mutex::new(Inner {
                status: SaveStatus::new(),
                generation: 0,
            })),
        }
    }

    /// React to a mutation of the blocked-date set.
    ///
    /// Writes the full current set through to the store synchronously,
    /// then raises `is_saving` and schedules it to clear after
    /// [`SAVED_INDICATOR_DELAY`], unless a newer mutation supersedes the
    /// timer first. Must be called from within a tokio runtime.
    ///
    /// If the write fails the error is returned and the status is left
    /// untouched: a failed save must never present as "saved".
    pub fn record_change(&self, dates: &BlockedDateSet) -> DayblockResult<()> {
        self.store.write(dates)?;

        let generation = {
            let mut inner = self.inner.lock().unwrap();
            inner.status.is_saving = true;
            inner.status.last_saved = Some(Utc::now());
            inner.generation += 1;
            inner.generation
        };
        log::debug!("blocked dates saved (generation {generation})");

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(SAVED_INDICATOR_DELAY).await;
            let mut inner = inner.lock().unwrap();
            if inner.generation == generation {
                inner.status.is_saving = false;
            }
        });

        Ok(())
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> SaveStatus {
        self.inner.lock().unwrap().status.clone()
    }

    pub fn is_saving(&self) -> bool {
        self.inner.lock().unwrap().status.is_saving
    }

    /// Human-readable time since the last successful save, e.g. "5m 12s".
    /// `None` before the first save.
    pub fn time_since_last_save(&self) -> Option<String> {
        let elapsed = self.status().time_since_save(Utc::now())?;
        Some(humantime::format_duration(elapsed).to_string())
    }
}
