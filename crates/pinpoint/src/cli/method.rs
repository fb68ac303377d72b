//! `pinpoint method` command implementation.

use std::path::Path;

use pinpoint::{Config, Cursor, SourceParser};
use tracing::debug;

use super::OutputArgs;
use super::display::{Report, emit};

/// Run the method command.
pub fn run(
    file: &Path,
    line: u64,
    column: u64,
    config: &Config,
    output: &OutputArgs,
) -> Result<(), pinpoint::Error> {
    let cursor = to_usize(line)
        .zip(to_usize(column))
        .and_then(|(line, column)| Cursor::from_one_based(line, column))
        .ok_or_else(|| {
            pinpoint::Error::Config(format!("invalid cursor position {line}:{column}"))
        })?;

    debug!(file = %file.display(), %cursor, "Resolving method at cursor");
    let mut parser = SourceParser::new()?;
    let parsed = parser.parse_file(file)?;

    let report = match parsed.method_at(cursor) {
        Ok(name) => Report::new(file, Some(cursor), vec![name], config, output),
        Err(reason) => {
            debug!(%reason, "No test method at cursor");
            Report::new(file, Some(cursor), Vec::new(), config, output).with_not_found(reason)
        }
    };

    emit(&report, output)
}

fn to_usize(value: u64) -> Option<usize> {
    usize::try_from(value).ok()
}
