//! Data collections and the backup entries they own

use crate::backup_entry::BackupEntry;
use crate::edit::CollectionEdit;
use crate::error::{Error, Result};
use crate::ids::{BackupId, CollectionId};
use serde_json::{json, Map, Value};

/// A named, described container of backup entries
#[derive(Debug, Clone)]
pub struct DataCollection {
    id: CollectionId,
    name: String,
    description: String,
    creation_date: String,
    modification_date: String,
    updated: bool,
    backup_entries: Vec<BackupEntry>,
}

/// Renders a flag the way the overview strings expect it
pub(crate) fn flag_str(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

impl DataCollection {
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        creation_date: impl Into<String>,
        modification_date: impl Into<String>,
        updated: bool,
    ) -> Self {
        Self {
            id: CollectionId::new(),
            name: name.into(),
            description: description.into(),
            creation_date: creation_date.into(),
            modification_date: modification_date.into(),
            updated,
            backup_entries: Vec::new(),
        }
    }

    pub fn id(&self) -> CollectionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn creation_date(&self) -> &str {
        &self.creation_date
    }

    pub fn modification_date(&self) -> &str {
        &self.modification_date
    }

    pub fn updated(&self) -> bool {
        self.updated
    }

    /// Entries in insertion order
    pub fn backup_entries(&self) -> &[BackupEntry] {
        &self.backup_entries
    }

    /// Appends a new backup entry to the end of the collection.
    ///
    /// Fails with [`Error::BackupAlreadyExists`] without touching the
    /// collection if an entry with `name` is already present.
    pub fn add_backup(&mut self, name: &str, date: &str, location: &str) -> Result<&BackupEntry> {
        if self.backup_entries.iter().any(|entry| entry.name() == name) {
            return Err(Error::backup_already_exists(name));
        }

        self.backup_entries
            .push(BackupEntry::new(name, location, date));
        let index = self.backup_entries.len() - 1;
        Ok(&self.backup_entries[index])
    }

    /// Removes the entry with the given identity and hands it back.
    pub fn remove_backup(&mut self, id: BackupId) -> Result<BackupEntry> {
        let index = self
            .backup_entries
            .iter()
            .position(|entry| entry.id() == id)
            .ok_or_else(|| Error::backup_handle_not_found(id))?;
        Ok(self.backup_entries.remove(index))
    }

    /// First entry (in insertion order) named `name`
    pub fn get_backup(&self, name: &str) -> Result<&BackupEntry> {
        self.backup_entries
            .iter()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| Error::backup_not_found(name))
    }

    /// `"{name} | {modification_date} | Updated: {updated}"`
    pub fn brief_str(&self) -> String {
        format!(
            "{} | {} | Updated: {}",
            self.name,
            self.modification_date,
            flag_str(self.updated)
        )
    }

    /// `[name, description, creation_date, modification_date, updated]`
    pub fn full_str(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.description.clone(),
            self.creation_date.clone(),
            self.modification_date.clone(),
            flag_str(self.updated).to_string(),
        ]
    }

    /// Single-key mapping from the collection name to its remaining fields.
    ///
    /// `updated` stays a JSON boolean.
    pub fn full_json(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            self.name.clone(),
            json!({
                "description": self.description,
                "creation_date": self.creation_date,
                "modification_date": self.modification_date,
                "updated": self.updated,
            }),
        );
        map
    }

    /// Mapping from each entry name to `{date, location}`, in insertion order
    pub fn backups_json(&self) -> Map<String, Value> {
        self.backup_entries
            .iter()
            .map(|entry| {
                (
                    entry.name().to_string(),
                    json!({ "date": entry.date(), "location": entry.location() }),
                )
            })
            .collect()
    }

    /// Applies one field edit in place. Uniqueness of a new name is the
    /// manager's concern.
    pub(crate) fn apply_edit(&mut self, edit: CollectionEdit) {
        match edit {
            CollectionEdit::Name(name) => self.name = name,
            CollectionEdit::Description(description) => self.description = description,
            CollectionEdit::ModificationDate(date) => self.modification_date = date,
            CollectionEdit::Updated(updated) => self.updated = updated,
        }
    }
}
