// Core layer - configuration and rendering
pub mod core;

// Features layer - reminder model and store
pub mod features;

// Application layer - interactive menu dispatch
pub mod commands;

pub use crate::core::Config;

pub use features::{Outcome, Reminder, ReminderStats, ReminderStore};

pub use commands::{MenuChoice, MenuHandler, Prompt};
