//! CLI command implementations.

mod display;

pub mod file;
pub mod method;

use clap::Args;

/// Output options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Print only the `dotnet test --filter` expression
    #[arg(long, conflicts_with_all = ["command", "json"])]
    pub filter: bool,

    /// Print only the full `dotnet test` command line
    #[arg(long, conflicts_with = "json")]
    pub command: bool,

    /// Make the test host wait for a debugger to attach
    #[arg(long)]
    pub debug: bool,

    /// Machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
