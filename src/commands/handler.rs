//! Menu dispatch: one store operation per menu selection
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use log::debug;

use super::menu::MenuChoice;
use crate::core::display::{format_reminder, format_reminder_list};
use crate::features::reminders::{Outcome, ReminderStore};

/// Source of free-text answers, one line per call
///
/// The binary answers from the terminal; tests answer from a script.
pub trait Prompt {
    fn ask(&mut self, label: &str) -> Result<String>;
}

/// Runs a single menu selection against the store and returns the text to show
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuHandler;

impl MenuHandler {
    pub fn new() -> Self {
        MenuHandler
    }

    /// Handle one menu selection.
    ///
    /// Not-found ids produce a message, never an error. Errors come only from
    /// the prompt or from persisting a change.
    pub fn handle(
        &self,
        choice: MenuChoice,
        store: &mut ReminderStore,
        prompt: &mut dyn Prompt,
    ) -> Result<String> {
        debug!("Handling menu choice {choice}");

        match choice {
            MenuChoice::Create => {
                let message = prompt.ask("Reminder message")?;
                let time = prompt.ask("Reminder time (YYYY-MM-DD HH:mm)")?;
                let id = store.create(&message, &time)?;
                Ok(format!("Reminder created with ID {id}."))
            }
            MenuChoice::Retrieve => {
                let id = ask_id(prompt)?;
                Ok(match store.get(&id) {
                    Some(reminder) => format_reminder(reminder),
                    None => not_found(&id),
                })
            }
            MenuChoice::Update => {
                let id = ask_id(prompt)?;
                if !store.exists(&id) {
                    return Ok(not_found(&id));
                }
                let message = prompt.ask("New message (leave blank to keep)")?;
                let time = prompt.ask("New time (leave blank to keep)")?;
                let outcome = store.update(&id, non_blank(&message), non_blank(&time))?;
                Ok(describe(outcome, &id, "updated"))
            }
            MenuChoice::Delete => {
                let id = ask_id(prompt)?;
                let outcome = store.remove(&id)?;
                Ok(describe(outcome, &id, "deleted"))
            }
            MenuChoice::ListAll => Ok(format_reminder_list("All reminders", &store.list_all())),
            MenuChoice::MarkComplete => {
                let id = ask_id(prompt)?;
                let outcome = store.mark_completed(&id)?;
                Ok(describe(outcome, &id, "marked as completed"))
            }
            MenuChoice::UnmarkComplete => {
                let id = ask_id(prompt)?;
                let outcome = store.unmark_completed(&id)?;
                Ok(describe(outcome, &id, "marked as pending"))
            }
            MenuChoice::ListCompleted => Ok(format_reminder_list(
                "Completed reminders",
                &store.list_completed(),
            )),
            MenuChoice::ListPending => Ok(format_reminder_list(
                "Pending reminders",
                &store.list_pending(),
            )),
            MenuChoice::ListDue => Ok(format_reminder_list(
                "Reminders due by today",
                &store.list_due_by_today(),
            )),
            MenuChoice::Exit => Ok("Goodbye!".to_string()),
        }
    }
}

fn ask_id(prompt: &mut dyn Prompt) -> Result<String> {
    Ok(prompt.ask("Reminder ID")?.trim().to_string())
}

/// A whitespace-only answer means "keep the current value"
fn non_blank(answer: &str) -> Option<&str> {
    if answer.trim().is_empty() {
        None
    } else {
        Some(answer)
    }
}

fn not_found(id: &str) -> String {
    format!("Reminder with ID {id} not found.")
}

fn describe(outcome: Outcome, id: &str, action: &str) -> String {
    match outcome {
        Outcome::Applied => format!("Reminder {id} {action}."),
        Outcome::NotFound => not_found(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    /// Answers prompts from a fixed list, in order
    struct ScriptedPrompt {
        answers: VecDeque<String>,
        asked: Vec<String>,
    }

    impl ScriptedPrompt {
        fn new(answers: &[&str]) -> Self {
            ScriptedPrompt {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, label: &str) -> Result<String> {
            self.asked.push(label.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("No scripted answer for '{label}'"))
        }
    }

    fn temp_store() -> (TempDir, ReminderStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ReminderStore::open(dir.path().join("reminders.json"));
        (dir, store)
    }

    fn run(store: &mut ReminderStore, choice: MenuChoice, answers: &[&str]) -> String {
        let mut prompt = ScriptedPrompt::new(answers);
        let out = MenuHandler::new().handle(choice, store, &mut prompt).unwrap();
        assert!(prompt.answers.is_empty(), "unused answers for {choice}");
        out
    }

    fn only_id(store: &ReminderStore) -> String {
        store.list_all()[0].id.clone()
    }

    #[test]
    fn test_create_then_retrieve() {
        let (_dir, mut store) = temp_store();
        let out = run(&mut store, MenuChoice::Create, &["buy milk", "2024-01-01 10:00"]);
        let id = only_id(&store);
        assert_eq!(out, format!("Reminder created with ID {id}."));
        assert_eq!(store.get(&id).unwrap().time, "2024-01-01 10:00");

        let out = run(&mut store, MenuChoice::Retrieve, &[format!("  {id} ").as_str()]);
        assert!(out.contains("buy milk"));
        assert!(out.starts_with("[ ]"));
    }

    #[test]
    fn test_create_stores_time_verbatim() {
        let (_dir, mut store) = temp_store();
        run(&mut store, MenuChoice::Create, &["stretch", " 2024-01-01 10:00 "]);
        let id = only_id(&store);
        assert_eq!(store.get(&id).unwrap().time, " 2024-01-01 10:00 ");
    }

    #[test]
    fn test_retrieve_shows_full_message() {
        let (_dir, mut store) = temp_store();
        let message = "x".repeat(100);
        let id = store.create(&message, "2024-01-01 10:00").unwrap();

        let out = run(&mut store, MenuChoice::Retrieve, &[id.as_str()]);
        assert!(out.contains(&message));

        // List rows stay short
        let listed = run(&mut store, MenuChoice::ListAll, &[]);
        assert!(!listed.contains(&message));
    }

    #[test]
    fn test_update_whitespace_answers_keep_values() {
        let (_dir, mut store) = temp_store();
        let id = store.create("dentist", "2024-01-01 10:00").unwrap();

        run(&mut store, MenuChoice::Update, &[id.as_str(), "   ", " "]);
        let reminder = store.get(&id).unwrap();
        assert_eq!(reminder.message, "dentist");
        assert_eq!(reminder.time, "2024-01-01 10:00");
    }

    #[test]
    fn test_retrieve_missing() {
        let (_dir, mut store) = temp_store();
        let out = run(&mut store, MenuChoice::Retrieve, &["99999999"]);
        assert_eq!(out, "Reminder with ID 99999999 not found.");
    }

    #[test]
    fn test_update_with_blank_fields_keeps_values() {
        let (_dir, mut store) = temp_store();
        let id = store.create("dentist", "2024-01-01 10:00").unwrap();

        let out = run(&mut store, MenuChoice::Update, &[id.as_str(), "", "2030-01-01 00:00"]);
        assert_eq!(out, format!("Reminder {id} updated."));
        let reminder = store.get(&id).unwrap();
        assert_eq!(reminder.message, "dentist");
        assert_eq!(reminder.time, "2030-01-01 00:00");
    }

    #[test]
    fn test_update_missing_does_not_ask_for_fields() {
        let (_dir, mut store) = temp_store();
        let mut prompt = ScriptedPrompt::new(&["12345678"]);
        let out = MenuHandler::new()
            .handle(MenuChoice::Update, &mut store, &mut prompt)
            .unwrap();
        assert_eq!(out, "Reminder with ID 12345678 not found.");
        assert_eq!(prompt.asked.len(), 1);
    }

    #[test]
    fn test_delete_twice() {
        let (_dir, mut store) = temp_store();
        let id = store.create("pay rent", "").unwrap();

        assert_eq!(
            run(&mut store, MenuChoice::Delete, &[id.as_str()]),
            format!("Reminder {id} deleted.")
        );
        assert_eq!(
            run(&mut store, MenuChoice::Delete, &[id.as_str()]),
            format!("Reminder with ID {id} not found.")
        );
    }

    #[test]
    fn test_mark_and_list() {
        let (_dir, mut store) = temp_store();
        let done = store.create("done", "2000-01-01 00:00").unwrap();
        let todo = store.create("todo", "2999-01-01 00:00").unwrap();

        run(&mut store, MenuChoice::MarkComplete, &[done.as_str()]);

        let completed = run(&mut store, MenuChoice::ListCompleted, &[]);
        assert!(completed.contains(&done));
        assert!(!completed.contains(&todo));

        let pending = run(&mut store, MenuChoice::ListPending, &[]);
        assert!(pending.contains(&todo));
        assert!(!pending.contains(&done));

        let due = run(&mut store, MenuChoice::ListDue, &[]);
        assert!(due.contains(&done));
        assert!(!due.contains(&todo));

        let out = run(&mut store, MenuChoice::UnmarkComplete, &[done.as_str()]);
        assert_eq!(out, format!("Reminder {done} marked as pending."));
        assert_eq!(
            run(&mut store, MenuChoice::ListCompleted, &[]),
            "Completed reminders: no reminders."
        );
    }

    #[test]
    fn test_list_all_and_exit() {
        let (_dir, mut store) = temp_store();
        assert_eq!(
            run(&mut store, MenuChoice::ListAll, &[]),
            "All reminders: no reminders."
        );
        store.create("one", "").unwrap();
        assert!(run(&mut store, MenuChoice::ListAll, &[]).starts_with("All reminders (1):"));
        assert_eq!(run(&mut store, MenuChoice::Exit, &[]), "Goodbye!");
    }

    #[test]
    fn test_prompt_error_propagates() {
        let (_dir, mut store) = temp_store();
        let mut prompt = ScriptedPrompt::new(&[]);
        let result = MenuHandler::new().handle(MenuChoice::Create, &mut store, &mut prompt);
        assert!(result.is_err());
        assert!(store.is_empty());
    }
}
