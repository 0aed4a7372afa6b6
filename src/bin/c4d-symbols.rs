//! Command-line interface for c4d-symbols
//!
//! Usage:
//!   c4d-symbols extract `<symbolsfile>` [--format `<format>`] [--config `<path>`]  - Print the symbol ids
//!   c4d-symbols list-formats                                                     - List output formats

use c4d_symbols::config::{Loader, SymbolsConfig, PROJECT_CONFIG};
use c4d_symbols::error::SymbolsError;
use c4d_symbols::extraction::extract_path;
use c4d_symbols::registry::FormatRegistry;
use clap::error::ErrorKind;
use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("c4d-symbols")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tool for operating on a c4d_symbols.h file")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Print the id of every symbol, sorted by id")
                .arg(
                    Arg::new("symbolsfile")
                        .help("The c4d_symbols.h file to operate on")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (default from configuration: python)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults and ./c4d-symbols.toml"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("c4d_symbols=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut command = cli();
    let matches = command.get_matches_mut();

    match matches.subcommand() {
        Some(("extract", extract_matches)) => {
            let path = extract_matches
                .get_one::<String>("symbolsfile")
                .expect("symbolsfile is required");
            let format = extract_matches.get_one::<String>("format");
            let config = extract_matches.get_one::<String>("config");

            if let Err(e) = handle_extract_command(path, format, config) {
                let kind = match e {
                    SymbolsError::Io { .. } => ErrorKind::Io,
                    _ => ErrorKind::InvalidValue,
                };
                command.error(kind, e).exit();
            }
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn load_config(
    format: Option<&String>,
    config: Option<&String>,
) -> Result<SymbolsConfig, SymbolsError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG);
    if let Some(path) = config {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    Ok(loader.build()?)
}

/// Handle the extract command
fn handle_extract_command(
    path: &str,
    format: Option<&String>,
    config: Option<&String>,
) -> Result<(), SymbolsError> {
    let config = load_config(format, config)?;
    let registry = FormatRegistry::with_defaults();
    // Unknown formats fail before the input is read.
    let serializer = registry.get(&config.output.format)?;

    let table = extract_path(path)?;
    let output = serializer.serialize(&table, &config.output)?;

    print!("{}", output);
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
