//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod persisted_list;
pub mod widget;

pub use manage_config::ConfigService;
pub use persisted_list::PersistedList;
pub use widget::{ListWidget, MoodJournal};
