//! Half-open date ranges and calendar-year resolution.

use chrono::{Days, NaiveDate, Utc};

use crate::DateRangeError;

/// A half-open range of dates `[start, end)` for data retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (exclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start < end.
    ///
    /// # Errors
    ///
    /// Returns an error if start >= end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start >= end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Resolves a calendar year against the current UTC date.
    ///
    /// See [`DateRange::for_year_as_of`].
    #[must_use]
    pub fn for_year(year: i32) -> Option<Self> {
        Self::for_year_as_of(year, Utc::now().date_naive())
    }

    /// Resolves a calendar year into the range `[Jan 1 year, Jan 1 year+1)`,
    /// clamped so it never reaches past `today + 1 day`.
    ///
    /// Returns `None` when the year starts after `today`, since no data can
    /// exist for it. Years outside the representable calendar also resolve
    /// to `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use quoteline_types::DateRange;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    /// let range = DateRange::for_year_as_of(2024, today).unwrap();
    /// assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    /// assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    ///
    /// assert!(DateRange::for_year_as_of(2025, today).is_none());
    /// ```
    #[must_use]
    pub fn for_year_as_of(year: i32, today: NaiveDate) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        if start > today {
            return None;
        }

        let horizon = today.checked_add_days(Days::new(1))?;
        let end = year
            .checked_add(1)
            .and_then(|next| NaiveDate::from_ymd_opt(next, 1, 1))
            .map_or(horizon, |end| end.min(horizon));

        Some(Self { start, end })
    }

    /// Returns the number of days covered by the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        (self.end - self.start).num_days() as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_new() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 2, 1)).unwrap();
        assert_eq!(range.total_days(), 31);
        assert!(range.contains(date(2024, 1, 31)));
        assert!(!range.contains(date(2024, 2, 1)));
    }

    #[test]
    fn test_date_range_invalid() {
        assert!(DateRange::new(date(2024, 1, 31), date(2024, 1, 1)).is_err());
        assert!(DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_past_year_unclamped() {
        let today = date(2024, 6, 15);
        let range = DateRange::for_year_as_of(2023, today).unwrap();
        assert_eq!(range.start, date(2023, 1, 1));
        assert_eq!(range.end, date(2024, 1, 1));
    }

    #[test]
    fn test_current_year_clamped_to_tomorrow() {
        let today = date(2024, 6, 15);
        let range = DateRange::for_year_as_of(2024, today).unwrap();
        assert_eq!(range.start, date(2024, 1, 1));
        assert_eq!(range.end, date(2024, 6, 16));
    }

    #[test]
    fn test_last_day_of_year_not_clamped() {
        let today = date(2024, 12, 31);
        let range = DateRange::for_year_as_of(2024, today).unwrap();
        assert_eq!(range.end, date(2025, 1, 1));
    }

    #[test]
    fn test_first_day_of_year() {
        let today = date(2024, 1, 1);
        let range = DateRange::for_year_as_of(2024, today).unwrap();
        assert_eq!(range.start, today);
        assert_eq!(range.end, date(2024, 1, 2));
    }

    #[test]
    fn test_future_year_is_none() {
        let today = date(2024, 6, 15);
        assert!(DateRange::for_year_as_of(2025, today).is_none());
        assert!(DateRange::for_year_as_of(10_000, today).is_none());
    }

    #[test]
    fn test_unrepresentable_years_are_none() {
        let today = date(2024, 6, 15);
        assert!(DateRange::for_year_as_of(i32::MAX, today).is_none());
        assert!(DateRange::for_year_as_of(i32::MIN, today).is_none());
    }

    #[test]
    fn test_against_current_date() {
        let today = Utc::now().date_naive();
        let current = today.year();

        assert!(DateRange::for_year(current + 1).is_none());

        let past = DateRange::for_year(current - 1).unwrap();
        assert_eq!(past.start, date(current - 1, 1, 1));
        assert_eq!(past.end, date(current, 1, 1));

        let this_year = DateRange::for_year(current).unwrap();
        assert!(this_year.end <= today + Days::new(1));
        assert!(this_year.start < this_year.end);
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2023, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(range.to_string(), "[2023-01-01, 2024-01-01)");
    }
}
