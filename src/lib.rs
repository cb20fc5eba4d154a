//! quicklist - Quick list and mood journal
//!
//! Two small list widgets, a to-do style quick list and a timestamped mood
//! journal, each kept in sync with a durable key-value store on every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuickListError;
