//! Week calendar computation.
//!
//! Pure date arithmetic: Monday-aligned 7-day windows, week navigation, and
//! the canonical `YYYY-MM-DD` string form. Everything here works on
//! `chrono::NaiveDate`, which is a plain (year, month, day) value. No
//! timestamp, epoch, or timezone-aware type is involved at any point in
//! parsing or formatting; dates therefore never shift with the host
//! timezone.

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use super::error::ScheduleError;

/// Canonical date shape. Stricter than chrono's `%Y-%m-%d`, which accepts
/// unpadded month/day digits.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());

/// Parses a canonical `YYYY-MM-DD` string into a calendar date.
///
/// The string is first checked against the canonical shape, then the
/// year/month/day components are read directly. Out-of-range components
/// (month 13, Feb 30, ...) are rejected.
///
/// # Returns
/// * `Ok(NaiveDate)` - the parsed date
/// * `Err(ScheduleError::MalformedDate)` - if the string is not a canonical
///   date
pub fn parse_date(input: &str) -> Result<NaiveDate, ScheduleError> {
    let malformed = || ScheduleError::MalformedDate {
        input: input.to_string(),
    };

    let caps = DATE_SHAPE.captures(input).ok_or_else(malformed)?;
    let year: i32 = caps[1].parse().map_err(|_| malformed())?;
    let month: u32 = caps[2].parse().map_err(|_| malformed())?;
    let day: u32 = caps[3].parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Formats a calendar date in the canonical zero-padded `YYYY-MM-DD` form.
///
/// Round-trip stable with [`parse_date`]: `parse_date(&format_date(d)) == d`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Returns the Monday of the ISO week containing `date`.
///
/// A Sunday belongs to the week that started six days earlier, not the week
/// beginning the next day. Idempotent: `monday_of(monday_of(d)) ==
/// monday_of(d)`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Returns the seven consecutive dates Monday..Sunday starting at `monday`.
///
/// Callers obtain `monday` via [`monday_of`].
pub fn week_dates(monday: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Shifts a Monday by whole weeks. Used for previous (-1) and next (+1)
/// week navigation.
pub fn shift_week(monday: NaiveDate, delta_weeks: i64) -> NaiveDate {
    monday + Duration::days(delta_weeks * 7)
}

/// A Monday-aligned window of exactly seven calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    dates: [NaiveDate; 7],
}

impl WeekWindow {
    /// Builds the window of the week containing `date` (any weekday).
    pub fn containing(date: NaiveDate) -> Self {
        Self::from_monday(monday_of(date))
    }

    /// Builds the window starting at `monday`.
    pub fn from_monday(monday: NaiveDate) -> Self {
        debug_assert_eq!(monday, monday_of(monday), "window start must be a Monday");
        Self {
            dates: week_dates(monday),
        }
    }

    /// The Monday this window starts on.
    pub fn monday(&self) -> NaiveDate {
        self.dates[0]
    }

    /// All seven dates, Monday through Sunday.
    pub fn dates(&self) -> &[NaiveDate; 7] {
        &self.dates
    }

    /// Index 0..=6 of `date` within the window, by exact date equality.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.dates.iter().position(|d| *d == date)
    }

    /// The window `delta_weeks` whole weeks away.
    pub fn shifted(&self, delta_weeks: i64) -> Self {
        Self::from_monday(shift_week(self.monday(), delta_weeks))
    }

    /// The seven dates in canonical string form, for wire responses.
    pub fn date_strings(&self) -> Vec<String> {
        self.dates.iter().copied().map(format_date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_parse_format_round_trip() {
        for s in ["2024-06-03", "2024-01-01", "2000-02-29", "1999-12-31"] {
            let date = d(s);
            assert_eq!(format_date(date), s);
            assert_eq!(parse_date(&format_date(date)).unwrap(), date);
        }
    }

    #[test]
    fn test_parse_rejects_non_canonical_shapes() {
        for s in [
            "2024-6-3",
            "2024/06/03",
            "24-06-03",
            "2024-06-03T00:00:00",
            "2024-06-03 ",
            "",
            "not-a-date",
        ] {
            assert!(
                matches!(parse_date(s), Err(ScheduleError::MalformedDate { .. })),
                "accepted {s:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_components() {
        for s in ["2024-13-01", "2024-00-10", "2024-02-30", "2023-02-29", "2024-04-31"] {
            assert!(
                matches!(parse_date(s), Err(ScheduleError::MalformedDate { .. })),
                "accepted {s:?}"
            );
        }
    }

    #[test]
    fn test_monday_of_sunday_goes_back_six_days() {
        // 2024-06-09 is a Sunday; its week started on 2024-06-03.
        assert_eq!(monday_of(d("2024-06-09")), d("2024-06-03"));
    }

    #[test]
    fn test_monday_of_midweek() {
        // 2024-06-05 is a Wednesday, same week as the Sunday above.
        assert_eq!(monday_of(d("2024-06-05")), d("2024-06-03"));
    }

    #[test]
    fn test_monday_of_is_monday_never_after_and_idempotent() {
        let mut date = d("2024-01-01");
        for _ in 0..400 {
            let monday = monday_of(date);
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert!(monday <= date);
            assert!(date - monday <= Duration::days(6));
            assert_eq!(monday_of(monday), monday);
            date = date + Duration::days(1);
        }
    }

    #[test]
    fn test_week_dates_shape() {
        let week = week_dates(d("2024-06-03"));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], d("2024-06-03"));
        assert_eq!(week[6], d("2024-06-09"));
        assert_eq!(week[0].weekday(), Weekday::Mon);
        assert_eq!(week[6].weekday(), Weekday::Sun);
        for pair in week.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_week_dates_across_month_boundary() {
        let week = week_dates(d("2024-05-27"));
        assert_eq!(week[6], d("2024-06-02"));
    }

    #[test]
    fn test_shift_week_navigation() {
        let monday = d("2024-06-03");
        assert_eq!(shift_week(monday, -1), d("2024-05-27"));
        assert_eq!(shift_week(monday, 1), d("2024-06-10"));
        assert_eq!(shift_week(shift_week(monday, 1), -1), monday);
        assert_eq!(shift_week(monday, 0), monday);
    }

    #[test]
    fn test_window_index_of_exact_equality() {
        let window = WeekWindow::containing(d("2024-06-09"));
        assert_eq!(window.monday(), d("2024-06-03"));
        assert_eq!(window.index_of(d("2024-06-04")), Some(1));
        assert_eq!(window.index_of(d("2024-06-09")), Some(6));
        assert_eq!(window.index_of(d("2024-06-10")), None);
        assert_eq!(window.index_of(d("2024-06-02")), None);
    }

    #[test]
    fn test_window_date_strings() {
        let window = WeekWindow::from_monday(d("2024-06-03"));
        let strings = window.date_strings();
        assert_eq!(strings.first().map(String::as_str), Some("2024-06-03"));
        assert_eq!(strings.last().map(String::as_str), Some("2024-06-09"));
    }
}
