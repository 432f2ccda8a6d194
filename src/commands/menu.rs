//! Numbered menu entries offered at the prompt
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;

/// One entry of the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Create,
    Retrieve,
    Update,
    Delete,
    ListAll,
    MarkComplete,
    UnmarkComplete,
    ListCompleted,
    ListPending,
    ListDue,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::Create,
        MenuChoice::Retrieve,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::ListAll,
        MenuChoice::MarkComplete,
        MenuChoice::UnmarkComplete,
        MenuChoice::ListCompleted,
        MenuChoice::ListPending,
        MenuChoice::ListDue,
        MenuChoice::Exit,
    ];

    /// 1-based menu number
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Create => "Create a reminder",
            MenuChoice::Retrieve => "Retrieve a reminder",
            MenuChoice::Update => "Update a reminder",
            MenuChoice::Delete => "Delete a reminder",
            MenuChoice::ListAll => "List all reminders",
            MenuChoice::MarkComplete => "Mark a reminder as completed",
            MenuChoice::UnmarkComplete => "Unmark a reminder as completed",
            MenuChoice::ListCompleted => "List completed reminders",
            MenuChoice::ListPending => "List pending reminders",
            MenuChoice::ListDue => "List reminders due by today",
            MenuChoice::Exit => "Exit",
        }
    }

    fn name(self) -> &'static str {
        match self {
            MenuChoice::Create => "create",
            MenuChoice::Retrieve => "retrieve",
            MenuChoice::Update => "update",
            MenuChoice::Delete => "delete",
            MenuChoice::ListAll => "list_all",
            MenuChoice::MarkComplete => "mark_complete",
            MenuChoice::UnmarkComplete => "unmark_complete",
            MenuChoice::ListCompleted => "list_completed",
            MenuChoice::ListPending => "list_pending",
            MenuChoice::ListDue => "list_due",
            MenuChoice::Exit => "exit",
        }
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl std::str::FromStr for MenuChoice {
    type Err = anyhow::Error;

    /// Accepts the menu number or the entry name (`list_due`, `list-due`)
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim().to_lowercase().replace('-', "_");

        if let Ok(number) = input.parse::<usize>() {
            return Self::from_number(number)
                .ok_or_else(|| anyhow::anyhow!("No menu entry numbered {}", number));
        }

        Self::ALL
            .into_iter()
            .find(|c| c.name() == input)
            .ok_or_else(|| anyhow::anyhow!("Invalid menu choice: {}", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers_are_sequential() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.number(), i + 1);
            assert_eq!(MenuChoice::from_number(i + 1), Some(*choice));
        }
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(12), None);
    }

    #[test]
    fn test_menu_display() {
        assert_eq!(MenuChoice::Create.to_string(), "1. Create a reminder");
        assert_eq!(MenuChoice::Exit.to_string(), "11. Exit");
    }

    #[test]
    fn test_menu_parse() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::Create);
        assert_eq!(" 10 ".parse::<MenuChoice>().unwrap(), MenuChoice::ListDue);
        assert_eq!("EXIT".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert_eq!(
            "mark-complete".parse::<MenuChoice>().unwrap(),
            MenuChoice::MarkComplete
        );
        assert_eq!(
            "list_pending".parse::<MenuChoice>().unwrap(),
            MenuChoice::ListPending
        );
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("42".parse::<MenuChoice>().is_err());
        assert!("snooze".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }
}
