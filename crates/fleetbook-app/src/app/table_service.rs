//! Custom table use cases

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tracing::info;

use fleetbook_domain::repository::TableRepository;
use fleetbook_types::{Error, Result, TableId};

use super::checked_index;

/// Free-form tables edited from the custom table page
pub struct TableService {
    repo: Arc<dyn TableRepository>,
    write_lock: Mutex<()>,
}

impl TableService {
    pub fn new(repo: Arc<dyn TableRepository>) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    pub fn rows(&self, name: &str) -> Result<Vec<Value>> {
        let table = TableId::custom(name)?;
        Ok(self.repo.load(&table)?)
    }

    /// Append a row; empty values (null, false, 0, "", [], {}) are refused
    pub fn add_row(&self, name: &str, row: Value) -> Result<usize> {
        if is_empty_value(&row) {
            return Err(Error::NoData);
        }
        let table = TableId::custom(name)?;

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut rows = self.repo.load(&table)?;
        rows.push(row);
        self.repo.save(&table, &rows)?;

        info!(table = %table, rows = rows.len(), "table row added");
        Ok(rows.len() - 1)
    }

    pub fn update_row(&self, name: &str, index: i64, row: Value) -> Result<()> {
        let table = TableId::custom(name)?;

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut rows = self.repo.load(&table)?;
        let position = checked_index(index, rows.len()).ok_or(Error::InvalidIndex)?;
        rows[position] = row;
        self.repo.save(&table, &rows)?;

        info!(table = %table, index = position, "table row updated");
        Ok(())
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
