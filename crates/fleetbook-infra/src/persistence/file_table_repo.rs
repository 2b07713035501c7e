//! File-based table repository implementation

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, warn};

use fleetbook_domain::repository::TableRepository;
use fleetbook_types::{StorageError, TableId};

const FLEETS_FILE: &str = "fleets.json";
const TABLES_DIR: &str = "data";

/// File-based implementation of TableRepository
///
/// Layout under the data directory:
///
/// ```text
/// fleets.json               main fleet list
/// data/table_<name>.json    custom tables
/// ```
///
/// Each file holds one JSON array, written with 4-space indentation.
pub struct FileTableRepository {
    data_dir: PathBuf,
}

impl FileTableRepository {
    /// Open a repository rooted at `data_dir`, creating the directory
    pub fn open(data_dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `table`
    pub fn table_path(&self, table: &TableId) -> PathBuf {
        match table {
            TableId::Fleets => self.data_dir.join(FLEETS_FILE),
            TableId::Custom(name) => self.data_dir.join(TABLES_DIR).join(name.file_name()),
        }
    }
}

impl TableRepository for FileTableRepository {
    fn load(&self, table: &TableId) -> Result<Vec<Value>, StorageError> {
        let path = self.table_path(table);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&path)?);
        match serde_json::from_reader(reader) {
            Ok(rows) => Ok(rows),
            Err(e) => {
                // Unreadable tables start over empty, the next save overwrites them.
                warn!(table = %table, path = %path.display(), error = %e, "table file is not a JSON array");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, table: &TableId, rows: &[Value]) -> Result<(), StorageError> {
        let path = self.table_path(table);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(File::create(&path)?);
        let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
        rows.serialize(&mut ser).map_err(|source| StorageError::Encode {
            table: table.to_string(),
            source,
        })?;
        ser.into_inner().flush()?;

        debug!(table = %table, rows = rows.len(), "table saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_missing_table_loads_empty() {
        let dir = tempdir().unwrap();
        let repo = FileTableRepository::open(dir.path().to_path_buf()).unwrap();
        assert!(repo.load(&TableId::Fleets).unwrap().is_empty());
        assert!(repo.load(&TableId::custom("wray").unwrap()).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_table_loads_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("fleets.json"), "{ not json").unwrap();
        let repo = FileTableRepository::open(dir.path().to_path_buf()).unwrap();
        assert!(repo.load(&TableId::Fleets).unwrap().is_empty());
    }

    #[test]
    fn test_table_paths() {
        let dir = tempdir().unwrap();
        let repo = FileTableRepository::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(repo.table_path(&TableId::Fleets), dir.path().join("fleets.json"));
        assert_eq!(
            repo.table_path(&TableId::custom("glcs!").unwrap()),
            dir.path().join("data").join("table_glcs.json")
        );
    }

    #[test]
    fn test_save_creates_tables_dir_and_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let repo = FileTableRepository::open(dir.path().to_path_buf()).unwrap();
        let table = TableId::custom("syrk").unwrap();

        repo.save(&table, &[json!({ "route": "X1" })]).unwrap();

        let written = fs::read_to_string(dir.path().join("data/table_syrk.json")).unwrap();
        assert_eq!(written, "[\n    {\n        \"route\": \"X1\"\n    }\n]");
        assert_eq!(repo.load(&table).unwrap(), vec![json!({ "route": "X1" })]);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let dir = tempdir().unwrap();
        let repo = FileTableRepository::open(dir.path().to_path_buf()).unwrap();

        repo.save(&TableId::Fleets, &[json!({ "reg": "A" }), json!({ "reg": "B" })]).unwrap();
        repo.save(&TableId::Fleets, &[json!({ "reg": "C" })]).unwrap();

        assert_eq!(repo.load(&TableId::Fleets).unwrap(), vec![json!({ "reg": "C" })]);
    }
}
