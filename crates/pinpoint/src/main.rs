//! pinpoint CLI - C# test names from the command line.
//!
//! Resolves the test under a cursor, or every test class in a file, to a
//! fully-qualified name, a `dotnet test` filter, or a complete command line.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use pinpoint::Config;
use tracing_subscriber::EnvFilter;

mod cli;

/// pinpoint: resolve C# test names for `dotnet test --filter`.
#[derive(Parser)]
#[command(name = "pinpoint")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to the nearest .pinpoint.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the test method enclosing a cursor position
    Method {
        /// C# source file
        file: PathBuf,

        /// Cursor line (1-indexed)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        line: u64,

        /// Cursor column (1-indexed, in bytes)
        #[arg(short = 'C', long, value_parser = clap::value_parser!(u64).range(1..), default_value = "1")]
        column: u64,

        #[command(flatten)]
        output: cli::OutputArgs,
    },

    /// Resolve every top-level test class in a file
    File {
        /// C# source file
        file: PathBuf,

        #[command(flatten)]
        output: cli::OutputArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref());
    let default_level = config
        .as_ref()
        .ok()
        .and_then(|c| c.log_level.clone())
        .unwrap_or_else(|| "warn".to_string());

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => default_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = config.and_then(|config| match cli.command {
        Commands::Method {
            file,
            line,
            column,
            output,
        } => cli::method::run(&file, line, column, &config, &output),
        Commands::File { file, output } => cli::file::run(&file, &config, &output),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}

/// Load the explicit config file, or discover one from the current directory.
fn load_config(explicit: Option<&Path>) -> pinpoint::Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => {
            let cwd = std::env::current_dir().map_err(|e| {
                pinpoint::Error::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to get current directory: {e}"),
                ))
            })?;
            Config::discover(&cwd)
        }
    }
}
