//! In-memory table repository

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use fleetbook_domain::repository::TableRepository;
use fleetbook_types::{StorageError, TableId};

/// Volatile TableRepository, used for dry runs and tests
#[derive(Default)]
pub struct InMemoryTableRepository {
    tables: Mutex<HashMap<TableId, Vec<Value>>>,
}

impl InMemoryTableRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table
    pub fn with_table(self, table: TableId, rows: Vec<Value>) -> Self {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(table, rows);
        self
    }
}

impl TableRepository for InMemoryTableRepository {
    fn load(&self, table: &TableId) -> Result<Vec<Value>, StorageError> {
        let tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(tables.get(table).cloned().unwrap_or_default())
    }

    fn save(&self, table: &TableId, rows: &[Value]) -> Result<(), StorageError> {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(table.clone(), rows.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tables_are_independent() {
        let repo = InMemoryTableRepository::new().with_table(TableId::Fleets, vec![json!({ "reg": "A" })]);
        let custom = TableId::custom("wray").unwrap();

        repo.save(&custom, &[json!(1), json!(2)]).unwrap();

        assert_eq!(repo.load(&TableId::Fleets).unwrap().len(), 1);
        assert_eq!(repo.load(&custom).unwrap(), vec![json!(1), json!(2)]);
        assert!(repo.load(&TableId::custom("glcs").unwrap()).unwrap().is_empty());
    }
}
