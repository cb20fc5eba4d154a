//! UI event surface for the two list widgets

use crate::application::PersistedList;
use crate::domain::{Entry, ListKind, Mood, MoodEntry};
use crate::error::{QuickListError, Result};
use crate::infrastructure::KeyValueStore;
use chrono::NaiveDateTime;

/// Maps row events onto a [`PersistedList`] for one list kind
pub struct ListWidget<S: KeyValueStore> {
    kind: ListKind,
    list: PersistedList<S>,
}

impl<S: KeyValueStore> ListWidget<S> {
    pub fn new(kind: ListKind, store: S) -> Self {
        ListWidget {
            kind,
            list: PersistedList::new(kind.storage_key(), store),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Current rows, in insertion order
    pub fn rows(&self) -> Result<Vec<Entry>> {
        self.list.load()
    }

    /// Submit from the input field
    pub fn on_add(&mut self, text: &str) -> Result<()> {
        self.list.append_pending(text)
    }

    /// Row activated. Only the quick list tracks completion.
    pub fn on_toggle(&mut self, text: &str) -> Result<Option<bool>> {
        if !self.kind.supports_completion() {
            return Err(QuickListError::Unsupported(format!(
                "the {} list has no completion state",
                self.kind
            )));
        }
        self.list.toggle(text)
    }

    /// Explicitly mark a row done or not done
    pub fn on_set_completed(&mut self, text: &str, completed: bool) -> Result<bool> {
        if !self.kind.supports_completion() {
            return Err(QuickListError::Unsupported(format!(
                "the {} list has no completion state",
                self.kind
            )));
        }
        self.list.set_completed(text, completed)
    }

    /// Delete pressed
    pub fn on_delete(&mut self, text: &str) -> Result<usize> {
        self.list.remove(text)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.list.clear()
    }
}

/// Mood journal: composes timestamped mood labels and logs them
pub struct MoodJournal<S: KeyValueStore> {
    widget: ListWidget<S>,
}

impl<S: KeyValueStore> MoodJournal<S> {
    pub fn new(store: S) -> Self {
        MoodJournal {
            widget: ListWidget::new(ListKind::Mood, store),
        }
    }

    /// Record a mood at the given local time, returning the stored label
    pub fn record(&mut self, mood: Mood, at: NaiveDateTime) -> Result<String> {
        let text = MoodEntry::new(mood, at).to_text();
        self.widget.on_add(&text)?;
        Ok(text)
    }

    /// Stored moods that parse back into mood and timestamp, oldest first
    pub fn entries(&self) -> Result<Vec<MoodEntry>> {
        Ok(self
            .widget
            .rows()?
            .iter()
            .filter_map(|e| MoodEntry::parse(&e.text))
            .collect())
    }

    pub fn widget(&mut self) -> &mut ListWidget<S> {
        &mut self.widget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn test_quick_widget_events() {
        let mut widget = ListWidget::new(ListKind::Quick, MemoryStore::new());

        widget.on_add("Buy milk").unwrap();
        widget.on_add("Walk dog").unwrap();
        assert_eq!(widget.on_toggle("Buy milk").unwrap(), Some(true));

        let rows = widget.rows().unwrap();
        assert_eq!(
            rows,
            vec![Entry::new("Buy milk", true), Entry::pending("Walk dog")]
        );

        assert_eq!(widget.on_delete("Buy milk").unwrap(), 1);
        assert_eq!(widget.rows().unwrap(), vec![Entry::pending("Walk dog")]);
    }

    #[test]
    fn test_mood_widget_rejects_toggle() {
        let mut widget = ListWidget::new(ListKind::Mood, MemoryStore::new());
        widget.on_add("😊 Happy - 2024-01-01 09:00").unwrap();

        let err = widget.on_toggle("😊 Happy - 2024-01-01 09:00").unwrap_err();
        assert!(matches!(err, QuickListError::Unsupported(_)));
        assert!(widget.on_set_completed("x", true).is_err());
        assert!(!widget.rows().unwrap()[0].completed);
    }

    #[test]
    fn test_widgets_share_store_under_separate_keys() {
        let mut quick = ListWidget::new(ListKind::Quick, MemoryStore::new());
        quick.on_add("task").unwrap();

        let store = quick.list.into_store();
        assert!(store.get("quickListItems").unwrap().is_some());
        assert!(store.get("moodJournalEntries").unwrap().is_none());

        let mood = ListWidget::new(ListKind::Mood, store);
        assert!(mood.rows().unwrap().is_empty());
    }

    #[test]
    fn test_mood_journal_record() {
        let mut journal = MoodJournal::new(MemoryStore::new());
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let text = journal.record(Mood::Happy, at).unwrap();
        assert_eq!(text, "😊 Happy - 2024-01-01 09:00");

        journal.widget().on_add("free-form note").unwrap();

        let entries = journal.entries().unwrap();
        assert_eq!(entries, vec![MoodEntry::new(Mood::Happy, at)]);

        journal.widget().on_delete(&text).unwrap();
        assert!(journal.entries().unwrap().is_empty());
    }
}
