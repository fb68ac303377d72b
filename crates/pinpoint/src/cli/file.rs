//! `pinpoint file` command implementation.

use std::path::Path;

use pinpoint::{Config, SourceParser};
use tracing::debug;

use super::OutputArgs;
use super::display::{Report, emit};

/// Run the file command.
pub fn run(file: &Path, config: &Config, output: &OutputArgs) -> Result<(), pinpoint::Error> {
    debug!(file = %file.display(), "Enumerating top-level types");
    let mut parser = SourceParser::new()?;
    let parsed = parser.parse_file(file)?;

    let names = parsed.top_level_types();
    debug!(type_count = names.len(), "Resolved file");

    let report = Report::new(file, None, names, config, output)
        .with_empty_message("no top-level classes, structs or records in file");

    emit(&report, output)
}
