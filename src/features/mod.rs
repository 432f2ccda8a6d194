//! # Features Layer
//!
//! Domain features of the reminder tracker.

pub mod reminders;

pub use reminders::{Outcome, Reminder, ReminderStats, ReminderStore};
