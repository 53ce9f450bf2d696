//! API service layer for catalog operations
//!
//! This module contains the operations the REST handlers delegate to,
//! keeping request defaults and payload shaping out of the router.

mod backup_operations;
mod collection_operations;
pub mod models;

pub use backup_operations::{add_backup, list_backups, remove_backup};
pub use collection_operations::{
    collection_info, create_collection, edit_collection, search_collections,
};
pub use models::*;
