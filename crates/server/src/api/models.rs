//! Request and response models for API operations

use backup_organizer_core::DataCollection;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

/// Error kind to message; empty on success
pub type ErrorMap = BTreeMap<String, String>;

/// Add collection request
#[derive(Debug, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(deny_unknown_fields)]
pub struct CreateCollectionRequest {
    /// The unique name of the collection
    pub name: String,
    /// The description of the collection
    pub description: String,
    /// Optional creation date. Set to current time if not set
    pub creation_date: Option<String>,
    /// Optional modification date. Set to current time if not set
    pub modification_date: Option<String>,
    /// Optional mark if the collection is up to date or not. Defaults to true
    pub updated: Option<bool>,
}

/// Add backup request
#[derive(Debug, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(deny_unknown_fields)]
pub struct AddBackupRequest {
    /// The unique name of the collection which the backup will be added to
    pub collection_name: String,
    /// The unique name of the backup to be created
    pub backup_name: String,
    /// Location where the backup is stored
    pub backup_location: String,
    /// Optional backup date. Set to current time if not set
    pub backup_date: Option<String>,
}

/// Remove backup request
#[derive(Debug, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(deny_unknown_fields)]
pub struct RemoveBackupRequest {
    /// The unique name of the collection holding the backup to be deleted
    pub collection_name: String,
    /// The unique name of the backup to delete
    pub backup_name: String,
}

/// Edit collection request
///
/// Every key besides `collection_name` is handed to the registry as the edit
/// patch, in request order.
#[derive(Debug, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct EditCollectionRequest {
    /// The unique name of the collection to be edited
    pub collection_name: String,
    /// Fields to change: `name`, `description`, `modification_date`, `updated`
    #[serde(flatten)]
    #[cfg_attr(feature = "openapi", schema(value_type = EditPatch))]
    pub patch: Map<String, Value>,
}

/// Documented shape of an edit patch. Any other key is rejected.
#[cfg(feature = "openapi")]
#[derive(ToSchema)]
pub struct EditPatch {
    /// New unique name of the collection
    pub name: Option<String>,
    /// New description of the collection
    pub description: Option<String>,
    /// New modification date
    pub modification_date: Option<String>,
    /// New up-to-date mark
    pub updated: Option<bool>,
}

/// `?name=` query parameter
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct NameQuery {
    /// Name of the collection
    pub name: Option<String>,
}

/// Search query parameters
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct SearchQuery {
    /// The search term to match collection names with
    pub name: Option<String>,
    /// `true` or `false`; defaults to `true`
    pub case_sensitive: Option<String>,
}

/// Response of endpoints that only perform an action
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ActionResponse {
    pub errors: ErrorMap,
    pub message: String,
}

/// Brief overview response
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct OverviewResponse {
    pub errors: ErrorMap,
    pub message: String,
    /// One `"{name} | {modification_date} | Updated: {updated}"` line per collection
    pub overview: Vec<String>,
}

/// Detailed overview response
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ListResponse {
    pub errors: ErrorMap,
    pub message: String,
    /// Collection name to `{description, creation_date, modification_date, updated}`
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub overview: Map<String, Value>,
}

/// Flat view of a single collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CollectionInfo {
    pub name: String,
    pub description: String,
    pub creation_date: String,
    pub modification_date: String,
    pub updated: bool,
}

impl From<&DataCollection> for CollectionInfo {
    fn from(collection: &DataCollection) -> Self {
        Self {
            name: collection.name().to_string(),
            description: collection.description().to_string(),
            creation_date: collection.creation_date().to_string(),
            modification_date: collection.modification_date().to_string(),
            updated: collection.updated(),
        }
    }
}

/// Single collection response
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct InfoResponse {
    pub errors: ErrorMap,
    pub message: String,
    pub info: CollectionInfo,
}

/// Search response
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SearchResponse {
    pub errors: ErrorMap,
    pub message: String,
    /// Matching collections keyed by name
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub search: Map<String, Value>,
}

/// Backup listing response
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ListBackupsResponse {
    pub errors: ErrorMap,
    pub message: String,
    /// Backup name to `{date, location}`
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub backup_entries: Map<String, Value>,
}

/// Failure envelope returned with status 400
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct FailureResponse {
    /// Error kind to message
    pub errors: ErrorMap,
    pub message: String,
}
