//! Domain services

pub mod bulk_parser;

pub use bulk_parser::{parse_bulk_fleet, parse_bulk_fleet_report, BulkParseReport, MIN_TOKENS};
