//! Fleet list use cases

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tracing::{info, warn};

use fleetbook_domain::model::BulkFleetInput;
use fleetbook_domain::repository::TableRepository;
use fleetbook_domain::service::BulkParseReport;
use fleetbook_types::{Error, FleetRecord, Result, TableId};

use super::checked_index;

/// Reads and edits the main fleet list
///
/// Each edit is a load-modify-save of the whole table, serialized by an
/// in-process lock.
pub struct FleetService {
    repo: Arc<dyn TableRepository>,
    write_lock: Mutex<()>,
}

impl FleetService {
    pub fn new(repo: Arc<dyn TableRepository>) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// Fleet rows exactly as stored
    pub fn raw_fleets(&self) -> Result<Vec<Value>> {
        Ok(self.repo.load(&TableId::Fleets)?)
    }

    /// Fleet rows as records; rows that are not objects are skipped
    ///
    /// Non-string values read as their JSON text, so every object row is
    /// listed. Callers that must return rows untouched use [`Self::raw_fleets`].
    pub fn list_fleets(&self) -> Result<Vec<FleetRecord>> {
        let fleets = self
            .raw_fleets()?
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(index, error = %e, "skipping unreadable fleet row");
                    None
                }
            })
            .collect();
        Ok(fleets)
    }

    /// Append a fleet submitted as a JSON object
    ///
    /// The object must carry every key in [`FleetRecord::REQUIRED_FIELDS`].
    /// It is stored as given, whatever the value types.
    pub fn add_fleet(&self, raw: Value) -> Result<()> {
        let fields = raw.as_object().ok_or(Error::MissingFields)?;
        let missing = FleetRecord::missing_fields(fields);
        if !missing.is_empty() {
            info!(?missing, "rejected fleet with missing fields");
            return Err(Error::MissingFields);
        }
        let fleet_number = display_field(fields.get("fleetNumber"));

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut rows = self.repo.load(&TableId::Fleets)?;
        rows.push(raw);
        self.repo.save(&TableId::Fleets, &rows)?;

        info!(fleet_number = %fleet_number, "fleet added");
        Ok(())
    }

    /// Replace the fleet at `index` with `raw`, stored as given
    pub fn update_fleet(&self, index: i64, raw: Value) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut rows = self.repo.load(&TableId::Fleets)?;
        let position = checked_index(index, rows.len()).ok_or(Error::FleetNotFound)?;
        let fleet_number = display_field(raw.get("fleetNumber"));
        rows[position] = raw;
        self.repo.save(&TableId::Fleets, &rows)?;

        info!(index = position, fleet_number = %fleet_number, "fleet updated");
        Ok(())
    }

    /// Remove the fleet at `index`, returning the removed row
    pub fn delete_fleet(&self, index: i64) -> Result<Value> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut rows = self.repo.load(&TableId::Fleets)?;
        let position = checked_index(index, rows.len()).ok_or(Error::FleetNotFound)?;
        let removed = rows.remove(position);
        self.repo.save(&TableId::Fleets, &rows)?;

        info!(index = position, "fleet deleted");
        Ok(removed)
    }

    /// Append a parsed batch in one save
    pub fn append_fleets(&self, fleets: &[FleetRecord]) -> Result<usize> {
        if fleets.is_empty() {
            return Ok(0);
        }

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut rows = self.repo.load(&TableId::Fleets)?;
        for fleet in fleets {
            rows.push(serde_json::to_value(fleet)?);
        }
        self.repo.save(&TableId::Fleets, &rows)?;

        info!(count = fleets.len(), "fleet batch appended");
        Ok(fleets.len())
    }

    /// Parse pasted fleet text; nothing is stored
    pub fn parse_bulk(&self, input: &BulkFleetInput) -> Result<BulkParseReport> {
        let report = input.parse()?;
        info!(
            parsed = report.fleets.len(),
            skipped = report.skipped_lines,
            livery = %input.livery,
            operator = %input.operator,
            "bulk fleet text parsed"
        );
        Ok(report)
    }
}

fn display_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
