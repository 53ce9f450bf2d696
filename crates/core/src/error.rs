use thiserror::Error;

/// Result type for backup organizer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for backup organizer operations
///
/// Every registry variant is an expected, caller-recoverable condition. The
/// registry never logs or swallows these; the REST layer renders them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No collection with the given name
    #[error("Collection with name '{name}' not found")]
    CollectionNotFound { name: String },

    /// A collection with the given name is already registered
    #[error("Collection with name '{name}' already exists")]
    CollectionAlreadyExists { name: String },

    /// No backup entry matching the name or handle
    #[error("BackupEntry with {target} not found in backup_entries")]
    BackupNotFound { target: String },

    /// A backup entry with the given name already exists in the collection
    #[error("BackupEntry with name '{name}' already exists")]
    BackupAlreadyExists { name: String },

    /// Unrecognised key or mismatched value type in an edit patch
    #[error("Key '{key}' and associated value is not a valid edit")]
    InvalidCollectionEdit { key: String },

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a collection-not-found error
    pub fn collection_not_found(name: impl Into<String>) -> Self {
        Self::CollectionNotFound { name: name.into() }
    }

    /// Creates a collection-already-exists error
    pub fn collection_already_exists(name: impl Into<String>) -> Self {
        Self::CollectionAlreadyExists { name: name.into() }
    }

    /// Creates a backup-not-found error for a lookup by name
    pub fn backup_not_found(name: impl AsRef<str>) -> Self {
        Self::BackupNotFound {
            target: format!("name '{}'", name.as_ref()),
        }
    }

    /// Creates a backup-not-found error for a lookup by handle
    pub fn backup_handle_not_found(id: impl std::fmt::Display) -> Self {
        Self::BackupNotFound {
            target: format!("id '{id}'"),
        }
    }

    /// Creates a backup-already-exists error
    pub fn backup_already_exists(name: impl Into<String>) -> Self {
        Self::BackupAlreadyExists { name: name.into() }
    }

    /// Creates an invalid-edit error
    pub fn invalid_edit(key: impl Into<String>) -> Self {
        Self::InvalidCollectionEdit { key: key.into() }
    }

    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable name of the error kind, used as the key of REST failure envelopes
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CollectionNotFound { .. } => "CollectionNotFound",
            Self::CollectionAlreadyExists { .. } => "CollectionAlreadyExists",
            Self::BackupNotFound { .. } => "BackupNotFound",
            Self::BackupAlreadyExists { .. } => "BackupAlreadyExists",
            Self::InvalidCollectionEdit { .. } => "InvalidCollectionEdit",
            Self::Config(_) => "ConfigError",
        }
    }
}
