//! # Reminder Record
//!
//! The persisted reminder entity and its due-date interpretation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format reminders are entered in (`2024-01-01 10:00`)
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Date-only fallback accepted by the due-date filter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// 8-digit identifier, unique within its store
    pub id: String,

    /// Free-form text, may be empty
    pub message: String,

    /// Stored verbatim; only interpreted by the due-date filter
    pub time: String,

    #[serde(default)]
    pub completed: bool,
}

impl Reminder {
    pub fn new(id: impl Into<String>, message: impl Into<String>, time: impl Into<String>) -> Self {
        Reminder {
            id: id.into(),
            message: message.into(),
            time: time.into(),
            completed: false,
        }
    }

    /// Calendar date of `time`, if it parses.
    ///
    /// Accepts the full `YYYY-MM-DD HH:mm` form and a bare `YYYY-MM-DD`.
    /// Anything else yields `None`.
    pub fn due_date(&self) -> Option<NaiveDate> {
        let time = self.time.trim();
        NaiveDateTime::parse_from_str(time, TIME_FORMAT)
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(time, DATE_FORMAT))
            .ok()
    }

    /// Whether this reminder falls on or before `date`.
    /// Unparsable times are never due.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date().is_some_and(|due| due <= date)
    }
}
