//! Bucketing of schedule entries into a week's (day x slot) matrix.

use tracing::{debug, warn};

use super::types::{ScheduleEntry, ScheduleMatrix, WeekdayTag};
use super::week::WeekWindow;

/// Places `entries` into the cells of `window`'s matrix.
///
/// Placement goes by exact calendar-date equality against one of the seven
/// window dates, plus exact time-slot equality. The weekday tag carried by
/// an entry is never used for placement; the API supplies tag and date
/// independently and the two are only cross-checked, not assumed
/// consistent.
///
/// Entries dated outside the window are dropped (the backend sometimes
/// over-returns adjacent weeks) and counted in `dropped`. A tag that
/// disagrees with the weekday implied by the entry's own date is a
/// data-quality issue upstream: the entry is still placed by its date, and
/// the disagreement is logged and counted in `mismatched_tags`.
pub fn bucket(entries: Vec<ScheduleEntry>, window: &WeekWindow) -> ScheduleMatrix {
    let mut matrix = ScheduleMatrix::empty();

    for entry in entries {
        let Some(day) = window.index_of(entry.date) else {
            debug!(
                class_code = %entry.class_code,
                date = %entry.date,
                week_start = %window.monday(),
                "entry dated outside requested week, dropping"
            );
            matrix.dropped += 1;
            continue;
        };

        let implied = WeekdayTag::for_date(entry.date);
        if entry.weekday != implied {
            warn!(
                class_code = %entry.class_code,
                date = %entry.date,
                supplied_tag = ?entry.weekday,
                implied_tag = ?implied,
                "weekday tag disagrees with entry date; placing by date"
            );
            matrix.mismatched_tags += 1;
        }

        matrix.push(day, entry.slot, entry);
    }

    matrix
}
