//! Registry of all data collections
//!
//! `CollectionManager` is the single entry point the REST layer calls
//! through. Collections are kept in insertion order and looked up by name with
//! a linear scan; there is no index to keep consistent across renames.

use crate::data_collection::DataCollection;
use crate::edit::CollectionEdit;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use tracing::debug;

/// Ordered registry of [`DataCollection`] records with unique names
#[derive(Debug, Default)]
pub struct CollectionManager {
    data_collections: Vec<DataCollection>,
}

impl CollectionManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            data_collections: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data_collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_collections.is_empty()
    }

    /// Collections in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &DataCollection> {
        self.data_collections.iter()
    }

    /// Registers a new collection at the end of the registry.
    ///
    /// Fails with [`Error::CollectionAlreadyExists`] and leaves the registry
    /// untouched if `name` is already taken.
    pub fn add_collection(
        &mut self,
        name: &str,
        description: &str,
        creation_date: &str,
        modification_date: &str,
        updated: bool,
    ) -> Result<&mut DataCollection> {
        if self.position(name).is_some() {
            return Err(Error::collection_already_exists(name));
        }

        debug!("Adding collection '{name}'");
        self.data_collections.push(DataCollection::new(
            name,
            description,
            creation_date,
            modification_date,
            updated,
        ));
        let index = self.data_collections.len() - 1;
        Ok(&mut self.data_collections[index])
    }

    /// First collection (in insertion order) named `name`
    pub fn get(&self, name: &str) -> Result<&DataCollection> {
        self.data_collections
            .iter()
            .find(|collection| collection.name() == name)
            .ok_or_else(|| Error::collection_not_found(name))
    }

    /// Mutable variant of [`CollectionManager::get`], used to reach a
    /// collection's backup operations
    pub fn get_mut(&mut self, name: &str) -> Result<&mut DataCollection> {
        self.data_collections
            .iter_mut()
            .find(|collection| collection.name() == name)
            .ok_or_else(|| Error::collection_not_found(name))
    }

    /// Removes the collection named `name` and hands it back
    pub fn delete_collection(&mut self, name: &str) -> Result<DataCollection> {
        let index = self
            .position(name)
            .ok_or_else(|| Error::collection_not_found(name))?;
        debug!("Deleting collection '{name}'");
        Ok(self.data_collections.remove(index))
    }

    /// Applies `patch` to the collection named `name`, key by key.
    ///
    /// Keys are processed in the order they appear in `patch`. The first key
    /// that fails to parse as a [`CollectionEdit`] aborts with
    /// [`Error::InvalidCollectionEdit`]; keys applied before it are kept.
    ///
    /// A rename to a name held by another collection fails with
    /// [`Error::CollectionAlreadyExists`] under the same no-rollback rule.
    pub fn edit_collection(&mut self, name: &str, patch: &Map<String, Value>) -> Result<()> {
        let index = self
            .position(name)
            .ok_or_else(|| Error::collection_not_found(name))?;

        for (key, value) in patch {
            let edit = CollectionEdit::parse(key, value)?;

            if let CollectionEdit::Name(new_name) = &edit {
                let taken = self
                    .data_collections
                    .iter()
                    .enumerate()
                    .any(|(i, other)| i != index && other.name() == new_name);
                if taken {
                    return Err(Error::collection_already_exists(new_name.as_str()));
                }
            }

            debug!("Editing collection '{name}': {key}");
            self.data_collections[index].apply_edit(edit);
        }

        Ok(())
    }

    /// One `brief_str` line per collection
    pub fn overview(&self) -> Vec<String> {
        self.data_collections
            .iter()
            .map(DataCollection::brief_str)
            .collect()
    }

    /// `full_str` of every collection
    pub fn detailed_overview(&self) -> Vec<[String; 5]> {
        self.data_collections
            .iter()
            .map(DataCollection::full_str)
            .collect()
    }

    /// All `full_json` mappings merged into one, keys in insertion order.
    ///
    /// Should two collections share a name, the later one wins.
    pub fn json_overview(&self) -> Map<String, Value> {
        merge_json(self.data_collections.iter())
    }

    /// `full_str` of the collection named `name`
    pub fn info(&self, name: &str) -> Result<[String; 5]> {
        self.get(name).map(DataCollection::full_str)
    }

    /// Every collection whose name contains `term`, in insertion order.
    ///
    /// With `case_sensitive` off, both sides are lowercased before matching.
    /// An empty term matches everything.
    pub fn search(&self, term: &str, case_sensitive: bool) -> Vec<&DataCollection> {
        let folded_term = term.to_lowercase();
        self.data_collections
            .iter()
            .filter(|collection| {
                if case_sensitive {
                    collection.name().contains(term)
                } else {
                    collection.name().to_lowercase().contains(&folded_term)
                }
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.data_collections
            .iter()
            .position(|collection| collection.name() == name)
    }
}

/// Merges the `full_json` mapping of each collection into one
pub fn merge_json<'a>(
    collections: impl IntoIterator<Item = &'a DataCollection>,
) -> Map<String, Value> {
    let mut output = Map::new();
    for collection in collections {
        output.extend(collection.full_json());
    }
    output
}
