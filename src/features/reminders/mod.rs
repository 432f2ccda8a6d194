//! # Reminders Feature
//!
//! Personal reminders persisted to a local JSON file: create, update,
//! delete, complete/un-complete, and query by status or due date.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: File-backed store with completion state and due-date queries
//! - 1.0.0: Initial release

pub mod reminder;
pub mod store;

pub use reminder::Reminder;
pub use store::{Outcome, ReminderStats, ReminderStore};
