//! # Reminder Store
//!
//! Owns the reminder collection and its backing JSON file. The whole
//! collection is loaded on open and rewritten after every mutation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use rand::Rng;
use std::collections::HashSet;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::reminder::Reminder;

/// Smallest generated id (8 digits)
pub const MIN_ID: u32 = 10_000_000;

/// Largest generated id (8 digits)
pub const MAX_ID: u32 = 99_999_999;

/// Result of an operation addressed to a single reminder id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The reminder existed and the change was persisted
    Applied,
    /// No reminder with that id
    NotFound,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Counts shown in the menu header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// File-backed reminder collection
#[derive(Debug)]
pub struct ReminderStore {
    path: PathBuf,
    /// Insertion-ordered; ids are unique
    reminders: Vec<Reminder>,
    load_diagnostic: Option<String>,
}

impl ReminderStore {
    /// Open the store at `path`, loading any existing reminders.
    ///
    /// A missing file gives an empty store. A file that cannot be read or
    /// parsed also gives an empty store; the reason is logged and kept in
    /// [`ReminderStore::load_diagnostic`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (reminders, load_diagnostic) = match load_file(&path) {
            Ok(reminders) => (reminders, None),
            Err(e) => {
                let diagnostic = format!("Failed to load reminders from {}: {e:#}", path.display());
                warn!("{diagnostic}. Starting with an empty list.");
                (Vec::new(), Some(diagnostic))
            }
        };

        info!(
            "Opened reminder store at {} ({} reminders)",
            path.display(),
            reminders.len()
        );

        ReminderStore {
            path,
            reminders,
            load_diagnostic,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Why loading fell back to an empty store, if it did
    pub fn load_diagnostic(&self) -> Option<&str> {
        self.load_diagnostic.as_deref()
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    pub fn stats(&self) -> ReminderStats {
        let completed = self.reminders.iter().filter(|r| r.completed).count();
        ReminderStats {
            total: self.reminders.len(),
            completed,
            pending: self.reminders.len() - completed,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn exists(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    pub fn list_all(&self) -> Vec<&Reminder> {
        self.reminders.iter().collect()
    }

    pub fn list_completed(&self) -> Vec<&Reminder> {
        self.reminders.iter().filter(|r| r.completed).collect()
    }

    pub fn list_pending(&self) -> Vec<&Reminder> {
        self.reminders.iter().filter(|r| !r.completed).collect()
    }

    /// Reminders dated on or before `date`. Unparsable times are skipped.
    pub fn list_due_by(&self, date: NaiveDate) -> Vec<&Reminder> {
        self.reminders.iter().filter(|r| r.is_due_on(date)).collect()
    }

    /// Reminders dated on or before the current local date
    pub fn list_due_by_today(&self) -> Vec<&Reminder> {
        self.list_due_by(Local::now().date_naive())
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Create a pending reminder and return its new id
    pub fn create(&mut self, message: &str, time: &str) -> Result<String> {
        let mut rng = rand::rng();
        let id = self.next_free_id(|| rng.random_range(MIN_ID..=MAX_ID));

        self.commit(|reminders| reminders.push(Reminder::new(id.clone(), message, time)))?;

        info!("Created reminder {id} for {time}");
        Ok(id)
    }

    pub fn mark_completed(&mut self, id: &str) -> Result<Outcome> {
        self.set_completed(id, true)
    }

    pub fn unmark_completed(&mut self, id: &str) -> Result<Outcome> {
        self.set_completed(id, false)
    }

    /// Overwrite the supplied fields. `None` or an empty string leaves the
    /// field unchanged.
    pub fn update(&mut self, id: &str, message: Option<&str>, time: Option<&str>) -> Result<Outcome> {
        let Some(index) = self.position(id) else {
            debug!("Update skipped, reminder {id} not found");
            return Ok(Outcome::NotFound);
        };

        let message = message.filter(|m| !m.is_empty());
        let time = time.filter(|t| !t.is_empty());

        self.commit(|reminders| {
            let reminder = &mut reminders[index];
            if let Some(message) = message {
                reminder.message = message.to_string();
            }
            if let Some(time) = time {
                reminder.time = time.to_string();
            }
        })?;

        info!("Updated reminder {id}");
        Ok(Outcome::Applied)
    }

    pub fn remove(&mut self, id: &str) -> Result<Outcome> {
        let Some(index) = self.position(id) else {
            debug!("Delete skipped, reminder {id} not found");
            return Ok(Outcome::NotFound);
        };

        self.commit(|reminders| {
            reminders.remove(index);
        })?;

        info!("Deleted reminder {id}");
        Ok(Outcome::Applied)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn position(&self, id: &str) -> Option<usize> {
        self.reminders.iter().position(|r| r.id == id)
    }

    fn set_completed(&mut self, id: &str, completed: bool) -> Result<Outcome> {
        let Some(index) = self.position(id) else {
            debug!("Completion change skipped, reminder {id} not found");
            return Ok(Outcome::NotFound);
        };

        self.commit(|reminders| reminders[index].completed = completed)?;

        if completed {
            info!("Marked reminder {id} as completed");
        } else {
            info!("Marked reminder {id} as pending");
        }
        Ok(Outcome::Applied)
    }

    /// Draw ids from `draw` until one is not held by the store.
    fn next_free_id(&self, mut draw: impl FnMut() -> u32) -> String {
        loop {
            let candidate = draw().to_string();
            if !self.exists(&candidate) {
                return candidate;
            }
            debug!("Id {candidate} already taken, drawing again");
        }
    }

    /// Apply `change` and rewrite the file. If the write fails the
    /// in-memory collection is restored so it still matches disk.
    fn commit(&mut self, change: impl FnOnce(&mut Vec<Reminder>)) -> Result<()> {
        let snapshot = self.reminders.clone();
        change(&mut self.reminders);

        if let Err(e) = save_file(&self.path, &self.reminders) {
            self.reminders = snapshot;
            return Err(e);
        }
        Ok(())
    }
}

/// Read the `(id, reminder)` pairs at `path`. A missing file is empty.
fn load_file(path: &Path) -> Result<Vec<Reminder>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No reminder file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("reading {}", path.display()));
        }
    };
    let pairs: Vec<(String, Reminder)> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {}", path.display()))?;

    let mut seen = HashSet::new();
    let mut reminders = Vec::with_capacity(pairs.len());
    for (key, reminder) in pairs {
        if key != reminder.id {
            warn!(
                "Reminder key {key} does not match its id {}, using the id",
                reminder.id
            );
        }
        if !seen.insert(reminder.id.clone()) {
            warn!("Duplicate reminder id {} in file, keeping the first", reminder.id);
            continue;
        }
        reminders.push(reminder);
    }

    Ok(reminders)
}

/// Rewrite `path` with the full collection as `(id, reminder)` pairs.
fn save_file(path: &Path, reminders: &[Reminder]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let pairs: Vec<(&str, &Reminder)> = reminders.iter().map(|r| (r.id.as_str(), r)).collect();
    let json = serde_json::to_string_pretty(&pairs)?;
    // Write a sibling then rename over the target, so a failed write never
    // leaves a truncated file behind.
    let tmp = temp_path(path);
    std::fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("replacing {}", path.display()));
    }

    debug!("Saved {} reminders to {}", reminders.len(), path.display());
    Ok(())
}

/// `reminders.json` -> `reminders.json.tmp`, in the same directory
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
