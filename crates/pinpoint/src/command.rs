//! `dotnet test` invocation as data.
//!
//! pinpoint never spawns the test runner. It describes the invocation so an
//! editor, a script or a person can run it.

use std::fmt;

use serde::Serialize;

use crate::config::Config;
use crate::filter::TestFilter;

/// Environment variable that makes the test host wait for a debugger.
pub const DEBUG_ENV_VAR: &str = "VSTEST_HOST_DEBUG";

/// A `dotnet test` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCommand {
    /// Program to execute
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
    /// Extra environment variables
    pub env: Vec<(String, String)>,
}

impl TestCommand {
    /// Build the command that runs the tests matched by `filter`.
    ///
    /// The argument order is `test [project] --filter <expression>
    /// [extra args]`. An empty filter omits `--filter`, which runs every
    /// test in the project. With `debug` set, the test host pauses at
    /// startup until a debugger attaches.
    #[must_use]
    pub fn build(config: &Config, filter: &TestFilter, debug: bool) -> Self {
        let mut args = vec!["test".to_string()];

        if let Some(project) = &config.project {
            args.push(project.display().to_string());
        }
        if !filter.is_empty() {
            args.push("--filter".to_string());
            args.push(filter.expression());
        }
        args.extend(config.extra_args.iter().cloned());

        let env = if debug {
            vec![(DEBUG_ENV_VAR.to_string(), "1".to_string())]
        } else {
            Vec::new()
        };

        Self {
            program: config.dotnet.clone(),
            args,
            env,
        }
    }

    /// Render as a single POSIX shell line.
    #[must_use]
    pub fn to_shell(&self) -> String {
        let env = self
            .env
            .iter()
            .map(|(key, value)| format!("{key}={}", shell_quote(value)));
        let command = std::iter::once(shell_quote(&self.program))
            .chain(self.args.iter().map(|arg| shell_quote(arg)));

        env.chain(command).collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for TestCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell())
    }
}

/// Quote `arg` for a POSIX shell when it contains anything beyond a safe set.
fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
