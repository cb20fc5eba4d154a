//! Output formatting utilities

use crate::domain::{Entry, ListKind, Mood, MoodEntry};

/// Format list rows for display
pub fn format_entries(kind: ListKind, entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries".to_string();
    }

    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if kind.supports_completion() {
            let mark = if entry.completed { 'x' } else { ' ' };
            output.push_str(&format!("{:>3}. [{}] {}\n", i + 1, mark, entry.text));
        } else {
            output.push_str(&format!("{:>3}. {}\n", i + 1, entry.text));
        }
    }
    output
}

/// One-line tally of logged moods, `None` when no entry parses as a mood
pub fn format_mood_summary(entries: &[MoodEntry]) -> Option<String> {
    let counts: Vec<String> = Mood::ALL
        .into_iter()
        .filter_map(|mood| {
            let n = entries.iter().filter(|e| e.mood == mood).count();
            (n > 0).then(|| format!("{} ({})", mood, n))
        })
        .collect();

    if counts.is_empty() {
        None
    } else {
        Some(format!("Moods: {}", counts.join(", ")))
    }
}
