use crate::config::{Config, OutputFormat};
use clap::Parser;
use gmdls::{program_display_name, program_for_name, GmDlsError, ProgramFamily};
use serde::Serialize;
use std::io;

mod config;

fn main() {
    let result = main_result();
    std::process::exit(match result {
        Ok(()) => 0,
        Err(err) => {
            // use Display instead of Debug for user friendly error messages
            log::error!("{err}");
            1
        }
    });
}

pub fn main_result() -> Result<(), AppError> {
    // setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("gmdls=info"))
        .init();

    // args
    let args = CliArgs::parse();

    // read local config
    let mut local_config = Config::read_config()?;

    // persist a new preferred format and stop there
    if let Some(format) = args.set_default_format {
        local_config.set_output_format(Some(format))?;
        log::info!("Saved default output format {format:?}");
        return Ok(());
    }

    let format = output_format(&args, &local_config);
    log::debug!("Using output format {format:?}");

    if let Some(program) = args.program {
        let row = ProgramRow::new(program)?;
        return print_row(&row, format);
    }

    if let Some(name) = args.find.as_deref() {
        let program = program_for_name(name)?;
        let row = ProgramRow::new(program)?;
        return print_row(&row, format);
    }

    list_programs(format)
}

/// CLI flag wins over the persisted preference.
fn output_format(args: &CliArgs, config: &Config) -> OutputFormat {
    if args.json {
        OutputFormat::Json
    } else if args.plain {
        OutputFormat::Plain
    } else {
        config.get_output_format().unwrap_or(OutputFormat::Plain)
    }
}

fn list_programs(format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Plain => {
            for family in ProgramFamily::ALL {
                println!("{}", family.name());
                for program in family.programs() {
                    let name = program_display_name(program)?;
                    println!("  {program:>3}  {name}");
                }
            }
        }
        OutputFormat::Json => {
            let rows = (0..=127u8)
                .map(ProgramRow::new)
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

fn print_row(row: &ProgramRow, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Plain => println!("{:>3}  {}  [{}]", row.program, row.name, row.family),
        OutputFormat::Json => println!("{}", serde_json::to_string(row)?),
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ProgramRow {
    program: u8,
    name: &'static str,
    family: &'static str,
}

impl ProgramRow {
    fn new(program: u8) -> Result<Self, GmDlsError> {
        let name = program_display_name(program)?;
        let family = ProgramFamily::of(program)?.name();
        Ok(Self {
            program,
            name,
            family,
        })
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Optional program number to look up (0-127).
    #[arg(long)]
    program: Option<u8>,
    /// Optional program name to look up, e.g. "Violin".
    #[arg(long)]
    find: Option<String>,
    /// Force JSON output.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Force plain text output.
    #[arg(long, default_value_t = false)]
    plain: bool,
    /// Persist the preferred output format and exit.
    #[arg(long, value_enum)]
    set_default_format: Option<OutputFormat>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("lookup error: {0}")]
    LookupError(String),
    #[error("other error: {0}")]
    OtherError(String),
}

impl From<GmDlsError> for AppError {
    fn from(error: GmDlsError) -> Self {
        Self::LookupError(error.to_string())
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::OtherError(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::OtherError(error.to_string())
    }
}
