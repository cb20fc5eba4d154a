//! Persisted list synchronization
//!
//! `PersistedList` owns one named, insertion-ordered list of entries and keeps
//! it in step with a durable key-value store. Every mutation is a single
//! read-modify-write of the whole sequence under the list's storage key.
//!
//! Entries are identified by their text. Duplicates are allowed:
//! [`PersistedList::set_completed`] and [`PersistedList::toggle`] touch the
//! first match only, while [`PersistedList::remove`] drops every match.

use crate::domain::{codec, Entry};
use crate::error::{QuickListError, Result};
use crate::infrastructure::KeyValueStore;

pub struct PersistedList<S: KeyValueStore> {
    key: String,
    store: S,
}

impl<S: KeyValueStore> PersistedList<S> {
    pub fn new(key: impl Into<String>, store: S) -> Self {
        PersistedList {
            key: key.into(),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Read the current sequence.
    ///
    /// An absent key and unparseable stored data both read as an empty list;
    /// the latter is logged. Only a failing store read is an error.
    pub fn load(&self) -> Result<Vec<Entry>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match codec::decode(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored list is unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Append an entry at the tail.
    ///
    /// Text is trimmed; whitespace-only text is rejected before the store is touched.
    pub fn append(&mut self, text: &str, completed: bool) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QuickListError::Validation(
                "entry text is empty".to_string(),
            ));
        }

        let mut entries = self.load()?;
        entries.push(Entry::new(text, completed));
        self.save(&entries)?;

        tracing::debug!(key = %self.key, text, completed, len = entries.len(), "appended entry");
        Ok(())
    }

    /// Append an entry that is not completed
    pub fn append_pending(&mut self, text: &str) -> Result<()> {
        self.append(text, false)
    }

    /// Set the completion flag of the first entry whose text matches exactly.
    ///
    /// Returns `false` without writing when nothing matches.
    pub fn set_completed(&mut self, text: &str, completed: bool) -> Result<bool> {
        let mut entries = self.load()?;
        let Some(entry) = entries.iter_mut().find(|e| e.text == text) else {
            tracing::debug!(key = %self.key, text, "set_completed: no matching entry");
            return Ok(false);
        };

        entry.completed = completed;
        self.save(&entries)?;

        tracing::debug!(key = %self.key, text, completed, "updated entry");
        Ok(true)
    }

    /// Flip the completion flag of the first matching entry.
    ///
    /// Returns the new flag, or `None` when nothing matches.
    pub fn toggle(&mut self, text: &str) -> Result<Option<bool>> {
        let mut entries = self.load()?;
        let Some(entry) = entries.iter_mut().find(|e| e.text == text) else {
            tracing::debug!(key = %self.key, text, "toggle: no matching entry");
            return Ok(None);
        };

        entry.completed = !entry.completed;
        let completed = entry.completed;
        self.save(&entries)?;

        tracing::debug!(key = %self.key, text, completed, "toggled entry");
        Ok(Some(completed))
    }

    /// Remove every entry whose text matches exactly.
    ///
    /// Returns how many were removed; nothing is written when that is zero.
    pub fn remove(&mut self, text: &str) -> Result<usize> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|e| e.text != text);
        let removed = before - entries.len();

        if removed > 0 {
            self.save(&entries)?;
        }

        tracing::debug!(key = %self.key, text, removed, "removed entries");
        Ok(removed)
    }

    /// Drop the storage key entirely
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(&self.key)?;
        tracing::debug!(key = %self.key, "cleared list");
        Ok(())
    }

    // Encode before touching the store so a serialization failure leaves the old value intact.
    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let raw = codec::encode(entries)?;
        self.store.set(&self.key, &raw)
    }
}
