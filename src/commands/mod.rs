//! # Command System
//!
//! Interactive menu handling: maps a menu selection to one reminder store
//! operation and renders the result.
//!
//! - **Version**: 3.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 3.0.0: Numbered prompt menu over the reminder store
//! - 2.1.0: Add modular handler infrastructure (handler trait, context, registry)
//! - 1.0.0: Initial reorganization with modular command structure

pub mod handler;
pub mod menu;

pub use handler::{MenuHandler, Prompt};
pub use menu::MenuChoice;
