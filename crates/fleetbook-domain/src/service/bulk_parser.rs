//! Bulk fleet text parser
//!
//! Extracts fleet records from text pasted out of fleet lists, one vehicle
//! per line. Fields are picked by token position:
//!
//! ```text
//! <make> <type> <reg> ... [Intended as <previous reg>] ... <fleet number>
//!   0      1      2                                          last
//! ```
//!
//! The positional layout is the only format contract the pasted lists
//! follow. A line whose tokens are shifted still yields a record, with the
//! wrong values in it; callers review the batch before saving it.

use std::sync::LazyLock;

use fleetbook_types::{FleetRecord, ParseError};
use regex::Regex;

use crate::model::BulkFleetInput;

/// Lines with fewer tokens than this are skipped
pub const MIN_TOKENS: usize = 8;

static INTENDED_AS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Intended as (\w+)").expect("valid regex"));

/// `\r\n`, lone `\r` or `\n`, and the other Unicode line boundaries
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").expect("valid regex")
});

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    Some(text)
        .filter(|t| !t.is_empty())
        .into_iter()
        .flat_map(|t| LINE_BREAK.split(t))
}

/// Parsed batch plus counts of the lines that produced nothing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkParseReport {
    pub fleets: Vec<FleetRecord>,
    /// Non-blank lines with fewer than [`MIN_TOKENS`] tokens
    pub skipped_lines: usize,
    pub blank_lines: usize,
}

/// Parse pasted fleet text into records
///
/// Fails only when `livery` or `operator` is empty; malformed lines are
/// dropped silently.
pub fn parse_bulk_fleet(
    text: &str,
    livery: &str,
    operator: &str,
    vehicle_type: Option<&str>,
) -> Result<Vec<FleetRecord>, ParseError> {
    parse_bulk_fleet_report(text, livery, operator, vehicle_type).map(|report| report.fleets)
}

/// Same as [`parse_bulk_fleet`], also reporting how many lines were dropped
pub fn parse_bulk_fleet_report(
    text: &str,
    livery: &str,
    operator: &str,
    vehicle_type: Option<&str>,
) -> Result<BulkParseReport, ParseError> {
    if livery.is_empty() || operator.is_empty() {
        return Err(ParseError::MissingMetadata);
    }
    let vehicle_type = vehicle_type.filter(|v| !v.is_empty());

    let mut report = BulkParseReport::default();
    for line in split_lines(text.trim()) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            report.blank_lines += 1;
            continue;
        }
        if tokens.len() < MIN_TOKENS {
            report.skipped_lines += 1;
            continue;
        }
        report
            .fleets
            .push(record_from_line(line, &tokens, livery, operator, vehicle_type));
    }

    Ok(report)
}

impl BulkFleetInput {
    /// Run the parser over this payload
    pub fn parse(&self) -> Result<BulkParseReport, ParseError> {
        parse_bulk_fleet_report(
            &self.bulk_text,
            &self.livery,
            &self.operator,
            self.vehicle_type_override(),
        )
    }
}

fn record_from_line(
    line: &str,
    tokens: &[&str],
    livery: &str,
    operator: &str,
    vehicle_type: Option<&str>,
) -> FleetRecord {
    let previous_reg = INTENDED_AS
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    FleetRecord {
        fleet_number: tokens[tokens.len() - 1].to_string(),
        reg: tokens[2].to_string(),
        previous_reg,
        vehicle_type: vehicle_type.unwrap_or(tokens[1]).to_string(),
        livery: livery.to_string(),
        operator: operator.to_string(),
        isonbustimes: String::new(),
        extra: Default::default(),
    }
}
