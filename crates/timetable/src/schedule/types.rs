/// Types for weekly schedule data
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Weekday tag as supplied by the schedule API.
///
/// Supplied independently of the entry's date, so the two can disagree;
/// placement always goes by the date (see `matrix::bucket`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeekdayTag {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekdayTag {
    /// The tag implied by a concrete date.
    pub fn for_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Mon => WeekdayTag::Monday,
            Weekday::Tue => WeekdayTag::Tuesday,
            Weekday::Wed => WeekdayTag::Wednesday,
            Weekday::Thu => WeekdayTag::Thursday,
            Weekday::Fri => WeekdayTag::Friday,
            Weekday::Sat => WeekdayTag::Saturday,
            Weekday::Sun => WeekdayTag::Sunday,
        }
    }
}

/// Daily teaching slot. Six fixed slots per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "CA1")]
    Ca1,
    #[serde(rename = "CA2")]
    Ca2,
    #[serde(rename = "CA3")]
    Ca3,
    #[serde(rename = "CA4")]
    Ca4,
    #[serde(rename = "CA5")]
    Ca5,
    #[serde(rename = "CA6")]
    Ca6,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::Ca1,
        TimeSlot::Ca2,
        TimeSlot::Ca3,
        TimeSlot::Ca4,
        TimeSlot::Ca5,
        TimeSlot::Ca6,
    ];

    /// Row index of this slot within a day, 0..6.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Whether a session meets in a room or online.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    InPerson,
    Remote,
}

/// One scheduled class meeting, as returned by the schedule API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub class_id: i64,
    pub class_code: String,
    pub subject_code: String,
    pub subject_name: String,
    pub teacher_name: String,
    /// The concrete date this meeting occurs. Drives matrix placement.
    pub date: NaiveDate,
    /// Weekday tag supplied by the API; display only, may disagree with
    /// `date`.
    pub weekday: WeekdayTag,
    pub slot: TimeSlot,
    pub room_id: String,
    /// Sequence number of this session within the class.
    pub session_no: u32,
    pub session_kind: SessionKind,
    pub campus: String,
}

/// A (day x slot) grid of schedule entries for one week.
///
/// `cells[day][slot]` holds every entry on that day in that slot, in the
/// order they were encountered. Coinciding entries are all retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMatrix {
    cells: Vec<Vec<Vec<ScheduleEntry>>>,
    /// Entries whose date fell outside the requested week.
    pub dropped: usize,
    /// Entries whose supplied weekday tag disagreed with their date.
    pub mismatched_tags: usize,
}

impl ScheduleMatrix {
    /// An all-empty matrix. A week with no entries is a valid, displayable
    /// state, not an error.
    pub fn empty() -> Self {
        Self {
            cells: vec![vec![Vec::new(); TimeSlot::ALL.len()]; 7],
            dropped: 0,
            mismatched_tags: 0,
        }
    }

    /// Entries in the cell at (weekday index 0..6, slot).
    pub fn cell(&self, day: usize, slot: TimeSlot) -> &[ScheduleEntry] {
        &self.cells[day][slot.index()]
    }

    pub(crate) fn push(&mut self, day: usize, slot: TimeSlot, entry: ScheduleEntry) {
        self.cells[day][slot.index()].push(entry);
    }

    /// Total number of placed entries.
    pub fn entry_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|day| day.iter())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_tag_for_date() {
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(WeekdayTag::for_date(monday), WeekdayTag::Monday);
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(WeekdayTag::for_date(sunday), WeekdayTag::Sunday);
    }

    #[test]
    fn test_slot_wire_form_and_index() {
        assert_eq!(serde_json::to_string(&TimeSlot::Ca1).unwrap(), "\"CA1\"");
        assert_eq!(TimeSlot::Ca1.index(), 0);
        assert_eq!(TimeSlot::Ca6.index(), 5);
    }

    #[test]
    fn test_entry_wire_form() {
        let json = serde_json::json!({
            "classId": 42,
            "classCode": "SE104.O21",
            "subjectCode": "SE104",
            "subjectName": "Software Engineering",
            "teacherName": "T. Pham",
            "date": "2024-06-04",
            "weekday": "TUESDAY",
            "slot": "CA1",
            "roomId": "B4.14",
            "sessionNo": 8,
            "sessionKind": "in_person",
            "campus": "Main"
        });
        let entry: ScheduleEntry = serde_json::from_value(json).unwrap();
        assert_eq!(entry.class_id, 42);
        assert_eq!(entry.weekday, WeekdayTag::Tuesday);
        assert_eq!(entry.slot, TimeSlot::Ca1);
        assert_eq!(entry.session_kind, SessionKind::InPerson);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
    }

    #[test]
    fn test_empty_matrix_shape() {
        let matrix = ScheduleMatrix::empty();
        assert!(matrix.is_empty());
        assert_eq!(matrix.entry_count(), 0);
        for day in 0..7 {
            for slot in TimeSlot::ALL {
                assert!(matrix.cell(day, slot).is_empty());
            }
        }
    }
}
