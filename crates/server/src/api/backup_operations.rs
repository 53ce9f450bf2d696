//! Backup entry operations behind the REST endpoints

use super::models::{AddBackupRequest, RemoveBackupRequest};
use backup_organizer_core::clock::current_datestring;
use backup_organizer_core::error::Result;
use backup_organizer_core::CollectionManager;
use serde_json::{Map, Value};

/// Adds a backup entry to a collection, defaulting an omitted date to now
pub fn add_backup(manager: &mut CollectionManager, request: AddBackupRequest) -> Result<()> {
    let date = request.backup_date.unwrap_or_else(current_datestring);
    manager
        .get_mut(&request.collection_name)?
        .add_backup(&request.backup_name, &date, &request.backup_location)?;
    Ok(())
}

/// Resolves the named entry and removes it by its handle
pub fn remove_backup(manager: &mut CollectionManager, request: RemoveBackupRequest) -> Result<()> {
    let collection = manager.get_mut(&request.collection_name)?;
    let id = collection.get_backup(&request.backup_name)?.id();
    collection.remove_backup(id)?;
    Ok(())
}

/// Entries of one collection keyed by name
pub fn list_backups(manager: &CollectionManager, name: &str) -> Result<Map<String, Value>> {
    Ok(manager.get(name)?.backups_json())
}
