//! Backup entry records
//!
//! Only the location of a backup is tracked, never its contents.

use crate::ids::BackupId;

/// A named record of where a backup is stored and when it was made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    id: BackupId,
    name: String,
    location: String,
    date: String,
}

impl BackupEntry {
    /// Fields are stored verbatim; nothing is validated or normalised.
    pub(crate) fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: BackupId::new(),
            name: name.into(),
            location: location.into(),
            date: date.into(),
        }
    }

    pub fn id(&self) -> BackupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}
