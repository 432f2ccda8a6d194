//! # Core Module
//!
//! Configuration and shared rendering for the reminder tracker.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.7.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Replace chat chunking with reminder rendering
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod display;

pub use config::Config;
pub use display::{
    format_reminder, format_reminder_list, format_reminder_row, truncate_for_display,
};
