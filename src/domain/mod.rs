//! Domain layer - List entries, list kinds and mood labels

pub mod codec;
pub mod entry;
pub mod list_kind;
pub mod mood;

pub use entry::Entry;
pub use list_kind::ListKind;
pub use mood::{Mood, MoodEntry, MOOD_TIME_FORMAT};
