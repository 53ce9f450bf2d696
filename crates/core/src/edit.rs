//! Field edits applied to a collection through the manager

use crate::error::{Error, Result};
use serde_json::Value;

/// A single recognised edit of a [`DataCollection`](crate::DataCollection) field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionEdit {
    Name(String),
    Description(String),
    ModificationDate(String),
    Updated(bool),
}

impl CollectionEdit {
    /// Parses one `key: value` pair of an edit patch.
    ///
    /// Only `name`, `description` and `modification_date` (strings) and
    /// `updated` (boolean) are accepted. Anything else, including a known key
    /// with a value of the wrong JSON type, is an
    /// [`Error::InvalidCollectionEdit`].
    pub fn parse(key: &str, value: &Value) -> Result<Self> {
        match (key, value) {
            ("name", Value::String(s)) => Ok(Self::Name(s.clone())),
            ("description", Value::String(s)) => Ok(Self::Description(s.clone())),
            ("modification_date", Value::String(s)) => Ok(Self::ModificationDate(s.clone())),
            ("updated", Value::Bool(b)) => Ok(Self::Updated(*b)),
            _ => Err(Error::invalid_edit(key)),
        }
    }
}
