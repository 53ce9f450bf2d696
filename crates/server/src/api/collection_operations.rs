//! Collection operations behind the REST endpoints
//!
//! Each function performs exactly one registry operation; locking is the
//! caller's concern.

use super::models::{CollectionInfo, CreateCollectionRequest, EditCollectionRequest};
use backup_organizer_core::clock::current_datestring;
use backup_organizer_core::collection_manager::merge_json;
use backup_organizer_core::error::Result;
use backup_organizer_core::CollectionManager;
use serde_json::{Map, Value};

/// Registers a collection, defaulting omitted dates to now and `updated` to true
pub fn create_collection(
    manager: &mut CollectionManager,
    request: CreateCollectionRequest,
) -> Result<()> {
    let creation_date = request.creation_date.unwrap_or_else(current_datestring);
    let modification_date = request
        .modification_date
        .unwrap_or_else(current_datestring);
    let updated = request.updated.unwrap_or(true);

    manager.add_collection(
        &request.name,
        &request.description,
        &creation_date,
        &modification_date,
        updated,
    )?;
    Ok(())
}

/// Applies the request's patch to the named collection
pub fn edit_collection(manager: &mut CollectionManager, request: EditCollectionRequest) -> Result<()> {
    manager.edit_collection(&request.collection_name, &request.patch)
}

/// Flat view of one collection
pub fn collection_info(manager: &CollectionManager, name: &str) -> Result<CollectionInfo> {
    manager.get(name).map(CollectionInfo::from)
}

/// Search hits merged into a name-keyed mapping
pub fn search_collections(
    manager: &CollectionManager,
    term: &str,
    case_sensitive: bool,
) -> Map<String, Value> {
    merge_json(manager.search(term, case_sensitive))
}
