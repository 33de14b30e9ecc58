//! Output formatting utilities

use crate::domain::{initials, Category, Column, Contact, Task, PALETTE};

/// Format board columns for display
pub fn format_board(columns: &[Column<'_>]) -> String {
    let mut output = String::new();

    for column in columns {
        output.push_str(&format!(
            "== {} ({}) ==\n",
            column.status.label(),
            column.cards.len()
        ));

        if column.is_empty() {
            output.push_str("   (empty)\n");
        }

        for card in &column.cards {
            let task = card.task;
            output.push_str(&format!(
                "[{}] {:<3} {}  <{}>\n",
                card.index,
                task.priority.marker(),
                task.title,
                task.category
            ));
            output.push_str(&format!(
                "      {}  subtasks {}/{}  {}\n",
                card.card_id,
                task.done_subtasks(),
                task.subtasks.len(),
                format_initials(&task.assigned_to)
            ));
        }
        output.push('\n');
    }

    output
}

fn format_initials(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(|c| initials(&c.name))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a single task for the detail view
pub fn format_task(index: usize, task: &Task, label_color: Option<&str>) -> String {
    let mut output = String::new();

    output.push_str(&format!("[{}] {}\n", index, task.title));
    output.push_str(&format!(
        "Category:    {}{}\n",
        task.category,
        label_color.map(|c| format!(" ({})", c)).unwrap_or_default()
    ));
    if !task.description.is_empty() {
        output.push_str(&format!("Description: {}\n", task.description));
    }
    output.push_str(&format!("Status:      {}\n", task.status.label()));
    output.push_str(&format!("Priority:    {}\n", task.priority));
    match task.due_date {
        Some(date) => output.push_str(&format!("Due date:    {}\n", date.format("%d/%m/%Y"))),
        None => output.push_str("Due date:    -\n"),
    }

    output.push_str(&format!(
        "Subtasks:    {}/{} done ({:.0}%)\n",
        task.done_subtasks(),
        task.subtasks.len(),
        task.progress()
    ));
    for (n, subtask) in task.subtasks.iter().enumerate() {
        let mark = if subtask.is_done() { "x" } else { " " };
        output.push_str(&format!("  {}. [{}] {}\n", n, mark, subtask.name));
    }

    output.push_str("Assigned to:\n");
    if task.assigned_to.is_empty() {
        output.push_str("  -\n");
    }
    for contact in &task.assigned_to {
        output.push_str(&format!(
            "  {:<2} {}\n",
            initials(&contact.name),
            contact.name
        ));
    }

    output
}

/// Format the category list for display
pub fn format_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for (i, category) in categories.iter().enumerate() {
        output.push_str(&format!("[{}] {}  {}\n", i, category.color, category.name));
    }
    output
}

/// Format the category color palette, numbered for `category add`
pub fn format_palette() -> String {
    PALETTE
        .iter()
        .enumerate()
        .map(|(i, color)| format!("[{}] {}\n", i, color))
        .collect()
}

/// Format the contact list for display
pub fn format_contacts(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found".to_string();
    }

    let mut output = String::new();
    for contact in contacts {
        output.push_str(&format!(
            "{:<2} {:<10} {:<20} {}\n",
            initials(&contact.name),
            contact.name,
            contact.email,
            contact.phone
        ));
    }
    output
}
