//! Common display utilities for CLI commands.

use std::path::Path;

use colored::Colorize;
use pinpoint::{Config, Cursor, NotFound, QualifiedName, TestCommand, TestFilter};
use serde::Serialize;

use super::OutputArgs;

/// Everything a command resolved, ready to print in any output mode.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    file: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<Cursor>,
    names: Vec<QualifiedName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    not_found: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<TestCommand>,
    #[serde(skip)]
    miss_message: Option<String>,
}

impl<'a> Report<'a> {
    /// Build a report from resolved names.
    ///
    /// The filter and command are only populated when there is at least one
    /// name: an empty filter would select every test in the project.
    pub fn new(
        file: &'a Path,
        cursor: Option<Cursor>,
        names: Vec<QualifiedName>,
        config: &Config,
        output: &OutputArgs,
    ) -> Self {
        let filter = TestFilter::from_names(config.filter_operator, names.iter().cloned());
        let command = (!filter.is_empty()).then(|| TestCommand::build(config, &filter, output.debug));

        Self {
            file,
            cursor,
            names,
            not_found: None,
            filter: (!filter.is_empty()).then(|| filter.expression()),
            command,
            miss_message: None,
        }
    }

    /// Record why a method lookup found nothing.
    pub fn with_not_found(mut self, reason: NotFound) -> Self {
        self.not_found = Some(reason.as_str());
        self.miss_message = Some(reason.to_string());
        self
    }

    /// Record that a file lookup found nothing.
    pub fn with_empty_message(mut self, message: &str) -> Self {
        if self.names.is_empty() {
            self.miss_message = Some(message.to_string());
        }
        self
    }
}

/// Print a report in the mode selected by `output`.
///
/// Misses go to stderr as warnings so stdout stays empty for scripts.
pub fn emit(report: &Report<'_>, output: &OutputArgs) -> Result<(), pinpoint::Error> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if let Some(message) = &report.miss_message {
        eprintln!("{}: {message}", "warning".yellow());
        return Ok(());
    }

    if output.filter {
        if let Some(filter) = &report.filter {
            println!("{filter}");
        }
        return Ok(());
    }

    if output.command {
        if let Some(command) = &report.command {
            println!("{command}");
        }
        return Ok(());
    }

    let location = match report.cursor {
        Some(cursor) => format!("{}:{cursor}", report.file.display()),
        None => report.file.display().to_string(),
    };
    println!(
        "Found {} test target(s) in {}:",
        report.names.len().to_string().green().bold(),
        location.cyan()
    );
    println!();
    for name in &report.names {
        println!("  {} {}", "•".dimmed(), name.to_string().white().bold());
    }
    if let Some(command) = &report.command {
        println!();
        println!("  {}", command.to_string().dimmed());
    }

    Ok(())
}
