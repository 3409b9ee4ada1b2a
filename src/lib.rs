//! Month-view calendar grid and blocked-date save tracking.
//!
//! Two independent pieces:
//! - `grid` builds the fixed 42-cell month view for any reference date.
//! - `blocked`/`store`/`status` hold the user's blocked dates, persist
//!   them on every mutation, and drive the saving/saved indicator.

pub mod blocked;
pub mod config;
pub mod error;
pub mod grid;
pub mod status;
pub mod store;

pub use blocked::BlockedDateSet;
pub use config::DayblockConfig;
pub use error::{DayblockError, DayblockResult};
pub use grid::{CalendarDay, GRID_LEN, MonthGrid};
pub use status::{SAVED_INDICATOR_DELAY, SaveStatus, SaveStatusTracker};
pub use store::{BlockedDateStore, FileStore};
