//! Entry history formatting
//!
//! Renders the register view shown by `ledger list`: newest entries first,
//! with a cleared marker, the entry's short ID, and the accounts it touches.

use crate::models::{Entry, EntryKind};

/// Format one history row
pub fn format_entry_row(entry: &Entry) -> String {
    let cleared_icon = if entry.cleared { "✓" } else { " " };

    let movement = match entry.kind {
        EntryKind::Deposit { to } => format!("→ {}", to),
        EntryKind::Debit { from } => format!("{} →", from),
        EntryKind::Transfer { from, to } => format!("{} → {}", from, to),
    };

    format!(
        "{} {} {} {:<8} {:<18} {:>12}  {}",
        cleared_icon,
        entry.id,
        entry.date.format("%Y-%m-%d"),
        entry.kind.label(),
        movement,
        entry.amount.to_string(),
        truncate(&entry.note, 30)
    )
}

/// Format a list of entries as a register (expects history order)
pub fn format_history(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<12} {:<10} {:<8} {:<18} {:>12}  {}\n",
        "ID", "Date", "Type", "Movement", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_entry_row(entry));
        output.push('\n');
    }

    output
}

/// Truncate a string with an ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
