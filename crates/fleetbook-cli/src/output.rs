//! Output formatting module

use std::collections::BTreeSet;
use std::io::{self, Write};

use serde_json::Value;

use fleetbook_types::{FleetRecord, OutputFormat, Result};

const FLEET_HEADERS: [&str; 7] = [
    "fleetNumber",
    "reg",
    "previousReg",
    "vehicleType",
    "livery",
    "operator",
    "isonbustimes",
];

pub fn output_fleets<W: Write>(out: &mut W, output_format: OutputFormat, fleets: &[FleetRecord]) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            let content = serde_json::to_string_pretty(fleets)?;
            writeln!(out, "{}", content)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(FLEET_HEADERS).map_err(io::Error::from)?;
            for fleet in fleets {
                writer
                    .write_record([
                        &fleet.fleet_number,
                        &fleet.reg,
                        &fleet.previous_reg,
                        &fleet.vehicle_type,
                        &fleet.livery,
                        &fleet.operator,
                        &fleet.isonbustimes,
                    ])
                    .map_err(io::Error::from)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            if fleets.is_empty() {
                writeln!(out, "No fleets")?;
                return Ok(());
            }
            writeln!(
                out,
                "{:>4}  {:<8} {:<10} {:<10} {:<14} {:<14} {}",
                "#", "Fleet", "Reg", "Prev reg", "Type", "Operator", "Livery"
            )?;
            writeln!(out, "{}", "-".repeat(80))?;
            for (index, fleet) in fleets.iter().enumerate() {
                writeln!(
                    out,
                    "{:>4}  {:<8} {:<10} {:<10} {:<14} {:<14} {}",
                    index,
                    truncate(&fleet.fleet_number, 8),
                    truncate(&fleet.reg, 10),
                    truncate(&fleet.previous_reg, 10),
                    truncate(&fleet.vehicle_type, 14),
                    truncate(&fleet.operator, 14),
                    fleet.livery
                )?;
            }
            writeln!(out, "\n{} fleets", fleets.len())?;
        }
    }
    Ok(())
}

/// Rows of a free-form table; CSV columns are the union of object keys
pub fn output_rows<W: Write>(out: &mut W, output_format: OutputFormat, rows: &[Value]) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            let content = serde_json::to_string_pretty(rows)?;
            writeln!(out, "{}", content)?;
        }
        OutputFormat::Csv => {
            let headers: BTreeSet<&str> = rows
                .iter()
                .filter_map(Value::as_object)
                .flat_map(|row| row.keys().map(String::as_str))
                .collect();

            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(&headers).map_err(io::Error::from)?;
            for row in rows {
                let record: Vec<String> = headers
                    .iter()
                    .map(|key| row.get(*key).map(cell_text).unwrap_or_default())
                    .collect();
                writer.write_record(&record).map_err(io::Error::from)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                writeln!(out, "No rows")?;
                return Ok(());
            }
            for (index, row) in rows.iter().enumerate() {
                writeln!(out, "{:>4}  {}", index, row)?;
            }
        }
    }
    Ok(())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}~", head)
    }
}
