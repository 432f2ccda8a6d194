//! Text rendering for reminders shown at the prompt
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::features::reminders::Reminder;

/// Longest message shown in a list row before truncation
pub const LIST_MESSAGE_LIMIT: usize = 60;

/// Render one reminder with its full message:
/// `[x] 12345678  2024-01-01 10:00  buy milk`
pub fn format_reminder(reminder: &Reminder) -> String {
    render_line(reminder, None)
}

/// Render one list row, cutting long messages at [`LIST_MESSAGE_LIMIT`]
pub fn format_reminder_row(reminder: &Reminder) -> String {
    render_line(reminder, Some(LIST_MESSAGE_LIMIT))
}

fn render_line(reminder: &Reminder, message_limit: Option<usize>) -> String {
    let marker = if reminder.completed { "[x]" } else { "[ ]" };
    let time = if reminder.time.is_empty() {
        "(no time)"
    } else {
        reminder.time.as_str()
    };
    let message = match message_limit {
        _ if reminder.message.is_empty() => "(no message)".to_string(),
        Some(max) => truncate_for_display(&reminder.message, max),
        None => reminder.message.clone(),
    };
    format!("{marker} {}  {time}  {message}", reminder.id)
}

/// Render a titled list, or a friendly line when it is empty
pub fn format_reminder_list(title: &str, reminders: &[&Reminder]) -> String {
    if reminders.is_empty() {
        return format!("{title}: no reminders.");
    }

    let mut out = format!("{title} ({}):\n", reminders.len());
    for reminder in reminders {
        out.push_str(&format_reminder_row(reminder));
        out.push('\n');
    }
    out.trim_end().to_string()
}

/// Truncate to at most `max` bytes on a char boundary, adding "..." when cut.
/// Below 4 bytes there is no room for text and the ellipsis, so the text is
/// cut without one.
pub fn truncate_for_display(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let (budget, suffix) = if max > 3 { (max - 3, "...") } else { (max, "") };
    let mut end = budget;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{suffix}", &text[..end])
}
