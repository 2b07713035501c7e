//! CLI definition using clap

use clap::{Parser, Subcommand};
use fleetbook_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleetbook")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Bus fleet list maintenance")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, csv). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Directory holding fleets.json and data/. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse pasted fleet text into records
    Parse {
        /// Text file with one vehicle per line ("-" reads stdin)
        input: PathBuf,

        /// Livery applied to every parsed record
        #[arg(long, short = 'l')]
        livery: String,

        /// Operator applied to every parsed record
        #[arg(long, short = 'o')]
        operator: String,

        /// Vehicle type for every record instead of the one read from each line
        #[arg(long, short = 't')]
        vehicle_type: Option<String>,

        /// Append the parsed records to the fleets table
        #[arg(long)]
        save: bool,
    },

    /// List the fleets table
    Fleets,

    /// Show the rows of a custom table
    Table {
        /// Table name (letters, digits and underscores)
        name: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the address the web server listens on
        #[arg(long)]
        set_bind: Option<String>,

        /// Set the data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set the templates directory
        #[arg(long)]
        set_templates_dir: Option<PathBuf>,

        /// Set the default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Emit JSON log lines from the server (true/false)
        #[arg(long)]
        set_log_json: Option<bool>,

        /// Set the admin session lifetime in hours
        #[arg(long)]
        set_session_ttl: Option<i64>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
