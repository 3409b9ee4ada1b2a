//! Month-view grid construction.
//!
//! A month view is always rendered as a fixed 6×7 matrix: the reference
//! month plus enough trailing days of the previous month and leading days
//! of the next month to fill 42 cells, weeks running Sunday through
//! Saturday. All arithmetic is done on `NaiveDate` so the grid is stable
//! across UTC offsets.

use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{DayblockError, DayblockResult};

/// Number of cells in a month grid (6 weeks × 7 days).
pub const GRID_LEN: usize = 42;

const DAYS_PER_WEEK: usize = 7;

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Whether this day belongs to the reference month (false for padding
    /// days from the adjacent months).
    pub is_current_month: bool,
    pub is_today: bool,
    /// Weekday index, 0 = Sunday through 6 = Saturday.
    pub day_of_week: u32,
}

/// An ordered run of exactly [`GRID_LEN`] consecutive calendar days,
/// starting on a Sunday and ending on a Saturday, containing the whole
/// reference month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Build the grid for the month containing `reference`.
    ///
    /// Only the year and month of `reference` affect the layout; the
    /// `is_today` flags come from the local wall clock.
    pub fn build(reference: NaiveDate) -> MonthGrid {
        Self::build_with_today(reference, Local::now().date_naive())
    }

    /// Build the grid with an explicit "today", making the result a pure
    /// function of its arguments.
    pub fn build_with_today(reference: NaiveDate, today: NaiveDate) -> MonthGrid {
        let month_start = reference.with_day(1).unwrap();
        let month_end = month_start
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap();

        let grid_start = sunday_on_or_before(month_start);
        let grid_end = saturday_on_or_after(month_end);

        let mut dates: Vec<NaiveDate> = grid_start
            .iter_days()
            .take_while(|d| *d <= grid_end)
            .collect();

        // Short months that start on a Sunday span fewer than 6 weeks;
        // keep appending days from the next month until the grid is full.
        while dates.len() < GRID_LEN {
            let next = dates.last().unwrap().succ_opt().unwrap();
            dates.push(next);
        }
        dates.truncate(GRID_LEN);

        let days = dates
            .into_iter()
            .map(|date| CalendarDay {
                date,
                is_current_month: date.month() == reference.month(),
                is_today: date == today,
                day_of_week: date.weekday().num_days_from_sunday(),
            })
            .collect();

        MonthGrid { days }
    }

    /// Build the grid from raw year/month/day components.
    ///
    /// Out-of-range components (month 13, February 30th, ...) are rejected
    /// with [`DayblockError::InvalidDate`] rather than coerced.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> DayblockResult<MonthGrid> {
        let reference = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(DayblockError::InvalidDate { year, month, day })?;
        Ok(Self::build(reference))
    }

    /// Build the grid for the month containing a zoned datetime.
    ///
    /// The time-of-day and offset are stripped before any computation so
    /// the grid cannot drift by a day across timezones.
    pub fn for_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> MonthGrid {
        Self::build(datetime.date_naive())
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// The grid as six Sunday-to-Saturday rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks_exact(DAYS_PER_WEEK)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDay> {
        self.days.iter()
    }
}

impl std::ops::Index<usize> for MonthGrid {
    type Output = CalendarDay;

    fn index(&self, index: usize) -> &CalendarDay {
        &self.days[index]
    }
}

/// The Sunday on or before `date` (identity if `date` is a Sunday).
fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// The Saturday on or after `date` (identity if `date` is a Saturday).
fn saturday_on_or_after(date: NaiveDate) -> NaiveDate {
    date + Duration::days((6 - date.weekday().num_days_from_sunday()) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn assert_contiguous(grid: &MonthGrid) {
        for pair in grid.days().windows(2) {
            assert_eq!(
                pair[0].date.succ_opt().unwrap(),
                pair[1].date,
                "grid days must be consecutive"
            );
        }
    }

    #[test]
    fn test_grid_january_2026() {
        let grid = MonthGrid::build_with_today(date(2026, 1, 15), date(2026, 1, 15));

        assert_eq!(grid.days().len(), GRID_LEN);
        assert_eq!(grid[0].date, date(2025, 12, 28));
        assert_eq!(grid[0].day_of_week, 0);
        assert_eq!(grid[4].date, date(2026, 1, 1));
        assert_eq!(grid[4].day_of_week, 4);
        assert_eq!(grid[41].date, date(2026, 2, 7));
        assert_eq!(grid[41].day_of_week, 6);
        assert_contiguous(&grid);
    }

    #[test]
    fn test_grid_non_leap_february() {
        // February 2026 starts on a Sunday, so the natural span is only
        // 4 weeks and the grid has to be padded out to 42 cells.
        let grid = MonthGrid::build_with_today(date(2026, 2, 1), date(2026, 2, 1));

        assert_eq!(grid.days().len(), GRID_LEN);
        assert_eq!(grid[0].date, date(2026, 2, 1));
        assert!(grid[0].is_current_month);
        assert_eq!(grid[27].date, date(2026, 2, 28));
        assert_eq!(grid[41].date, date(2026, 3, 14));
        assert_contiguous(&grid);
    }

    #[test]
    fn test_grid_leap_february() {
        let grid = MonthGrid::build_with_today(date(2024, 2, 10), date(2024, 2, 10));

        assert_eq!(grid.days().len(), GRID_LEN);
        let feb_days = grid.iter().filter(|d| d.is_current_month).count();
        assert_eq!(feb_days, 29);
        assert_contiguous(&grid);
    }

    #[test]
    fn test_grid_december_rollover() {
        let grid = MonthGrid::build_with_today(date(2026, 12, 15), date(2026, 12, 15));

        assert_eq!(grid[0].date, date(2026, 11, 29));
        assert_eq!(grid[41].date, date(2027, 1, 9));
        assert!(!grid[41].is_current_month);
        assert_contiguous(&grid);
    }

    #[test]
    fn test_grid_invariants_across_months() {
        let today = date(2025, 6, 1);
        for year in 2019..=2031 {
            for month in 1..=12 {
                let grid = MonthGrid::build_with_today(date(year, month, 15), today);

                assert_eq!(grid.days().len(), GRID_LEN, "{year}-{month}");
                assert_eq!(grid[0].day_of_week, 0, "{year}-{month} must start Sunday");
                assert_eq!(grid[41].day_of_week, 6, "{year}-{month} must end Saturday");
                assert_contiguous(&grid);

                let in_month = grid.iter().filter(|d| d.is_current_month).count();
                let month_len = date(year, month, 1)
                    .checked_add_months(Months::new(1))
                    .unwrap()
                    .signed_duration_since(date(year, month, 1))
                    .num_days();
                assert_eq!(in_month as i64, month_len, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_layout_independent_of_reference_day() {
        let today = date(2026, 1, 15);
        let mid = MonthGrid::build_with_today(date(2026, 1, 15), today);
        let first = MonthGrid::build_with_today(date(2026, 1, 1), today);
        let last = MonthGrid::build_with_today(date(2026, 1, 31), today);

        assert_eq!(mid, first);
        assert_eq!(mid, last);
    }

    #[test]
    fn test_is_today_flag() {
        let grid = MonthGrid::build_with_today(date(2026, 1, 15), date(2026, 1, 20));
        let today_cells: Vec<_> = grid.iter().filter(|d| d.is_today).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].date, date(2026, 1, 20));

        // "Today" outside the displayed window flags nothing.
        let grid = MonthGrid::build_with_today(date(2026, 1, 15), date(2026, 6, 1));
        assert!(grid.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_weeks_are_sunday_rows() {
        let grid = MonthGrid::build_with_today(date(2026, 1, 15), date(2026, 1, 15));
        let weeks: Vec<_> = grid.weeks().collect();
        assert_eq!(weeks.len(), 6);
        for week in weeks {
            assert_eq!(week[0].day_of_week, 0);
            assert_eq!(week[6].day_of_week, 6);
        }
    }

    #[test]
    fn test_from_ymd_rejects_invalid_dates() {
        assert!(matches!(
            MonthGrid::from_ymd(2026, 13, 1),
            Err(DayblockError::InvalidDate { month: 13, .. })
        ));
        assert!(matches!(
            MonthGrid::from_ymd(2026, 2, 30),
            Err(DayblockError::InvalidDate { day: 30, .. })
        ));
        assert!(MonthGrid::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_for_datetime_strips_time_and_offset() {
        use chrono::FixedOffset;

        // 23:30 on Jan 31 in UTC-10 is already Feb 1 in UTC; the grid must
        // follow the local calendar date, not the UTC one.
        let offset = FixedOffset::west_opt(10 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2026, 1, 31, 23, 30, 0).unwrap();

        let grid = MonthGrid::for_datetime(&dt);
        assert_eq!(grid[0].date, date(2025, 12, 28));
    }
}
