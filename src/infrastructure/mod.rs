//! Infrastructure layer - Durable storage and workspace layout

pub mod config;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, WorkspaceRepository};
pub use store::{FileStore, KeyValueStore, MemoryStore};
