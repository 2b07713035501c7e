//! Command implementations

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fleetbook_app::app::{FleetService, TableService};
use fleetbook_app::config::Config;
use fleetbook_app::repository::open_table_repo_at;
use fleetbook_domain::model::BulkFleetInput;
use fleetbook_domain::TableRepository;
use fleetbook_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_fleets, output_rows};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    config.apply_env();

    // Override from CLI args
    if let Some(ref data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Parse {
            input,
            livery,
            operator,
            vehicle_type,
            save,
        } => {
            let mut request = BulkFleetInput::new(read_input(input)?, livery.as_str(), operator.as_str());
            request.vehicle_type = vehicle_type.clone();
            cmd_parse(&config, &request, *save, output_format)
        }

        Commands::Fleets => cmd_fleets(&config, output_format),

        Commands::Table { name } => cmd_table(&config, name, output_format),

        Commands::Config {
            show,
            set_bind,
            set_data_dir,
            set_templates_dir,
            set_output,
            set_log_json,
            set_session_ttl,
            reset,
        } => cmd_config(
            *show,
            set_bind.clone(),
            set_data_dir.clone(),
            set_templates_dir.clone(),
            *set_output,
            *set_log_json,
            *set_session_ttl,
            *reset,
        ),
    }
}

/// Read bulk text from a file, or stdin for "-"
fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    if !input.exists() {
        return Err(Error::FileNotFound(input.display().to_string()));
    }
    Ok(std::fs::read_to_string(input)?)
}

fn open_repo(config: &Config) -> Result<Arc<dyn TableRepository>> {
    Ok(Arc::new(open_table_repo_at(config.data_dir())?))
}

fn cmd_parse(config: &Config, request: &BulkFleetInput, save: bool, output_format: OutputFormat) -> Result<()> {
    let fleets = FleetService::new(open_repo(config)?);
    let report = fleets.parse_bulk(request)?;

    output_fleets(&mut io::stdout().lock(), output_format, &report.fleets)?;

    eprintln!(
        "Parsed {} fleets ({} lines skipped, {} blank)",
        report.fleets.len(),
        report.skipped_lines,
        report.blank_lines
    );

    if save {
        let count = fleets.append_fleets(&report.fleets)?;
        eprintln!("Saved {} fleets to {}", count, config.data_dir().join("fleets.json").display());
    }

    Ok(())
}

fn cmd_fleets(config: &Config, output_format: OutputFormat) -> Result<()> {
    let fleets = FleetService::new(open_repo(config)?).list_fleets()?;
    output_fleets(&mut io::stdout().lock(), output_format, &fleets)
}

fn cmd_table(config: &Config, name: &str, output_format: OutputFormat) -> Result<()> {
    let rows = TableService::new(open_repo(config)?).rows(name)?;
    output_rows(&mut io::stdout().lock(), output_format, &rows)
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_bind: Option<String>,
    set_data_dir: Option<PathBuf>,
    set_templates_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_log_json: Option<bool>,
    set_session_ttl: Option<i64>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(bind) = set_bind {
        config.bind_addr = bind;
        modified = true;
    }

    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        modified = true;
    }

    if let Some(templates_dir) = set_templates_dir {
        config.templates_dir = Some(templates_dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(log_json) = set_log_json {
        config.log_json = log_json;
        modified = true;
    }

    if let Some(hours) = set_session_ttl {
        config.session_ttl_hours = hours.max(1);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
