//! Repository trait definitions for data persistence

use fleetbook_types::{StorageError, TableId};
use serde_json::Value;

/// Storage for JSON-array tables
///
/// Rows are untyped JSON values; callers convert them to their own record
/// types. Identity of a row is its index in the array.
pub trait TableRepository: Send + Sync {
    /// Load every row of a table, empty if the table does not exist yet
    fn load(&self, table: &TableId) -> Result<Vec<Value>, StorageError>;

    /// Replace the full contents of a table
    fn save(&self, table: &TableId, rows: &[Value]) -> Result<(), StorageError>;
}
