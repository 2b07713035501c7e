//! Table identifiers for the persistence layer

use crate::StorageError;

/// Sanitized name of a user-defined table
///
/// Only word characters (Unicode alphanumerics and `_`) are kept, so the
/// name is always safe to embed in a file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableName(String);

impl TableName {
    /// Strip every non-word character from `raw`
    pub fn sanitize(raw: &str) -> Result<Self, StorageError> {
        let safe: String = raw
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        if safe.is_empty() {
            return Err(StorageError::InvalidTableName(raw.to_string()));
        }
        Ok(Self(safe))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name used by file-backed stores
    pub fn file_name(&self) -> String {
        format!("table_{}.json", self.0)
    }
}

impl std::fmt::Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A table known to the store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableId {
    /// The main fleet list
    Fleets,
    /// A custom table created from the web UI
    Custom(TableName),
}

impl TableId {
    /// Build a custom table id from an unsanitized name
    pub fn custom(raw: &str) -> Result<Self, StorageError> {
        TableName::sanitize(raw).map(TableId::Custom)
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableId::Fleets => write!(f, "fleets"),
            TableId::Custom(name) => write!(f, "table:{}", name),
        }
    }
}
