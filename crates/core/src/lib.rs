//! Core types for the backup organizer
//!
//! This crate provides the in-memory catalog the REST service is built on:
//!
//! - **Backup entries**: name/location/date records, no file contents
//! - **Data collections**: named containers of backup entries
//! - **Collection manager**: the registry of all collections
//! - **Configuration**: server configuration management
//! - **Error handling**: unified error types
//!

pub mod backup_entry;
pub mod clock;
pub mod collection_manager;
pub mod config;
pub mod data_collection;
pub mod edit;
pub mod error;
pub mod ids;

// Re-export main types for convenience
pub use backup_entry::BackupEntry;
pub use collection_manager::CollectionManager;
pub use config::{Config, ServerConfig};
pub use data_collection::DataCollection;
pub use edit::CollectionEdit;
pub use error::{Error, Result};
pub use ids::{BackupId, CollectionId};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
