use std::process::{Command, Output};

use lvsm_common::LOG_TARGET;
use tracing::{debug, error};

use crate::error::CommandError;

/// Runs an external program and hands back what it printed.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> Result<String, CommandError>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<String, CommandError> {
        run(argv)
    }
}

/// Executes `argv[0]` with the remaining elements as its arguments and returns its stdout.
///
/// No shell is involved. A non-zero exit status is an error carrying the
/// command's stderr, never an empty string.
pub fn run<S: AsRef<str>>(argv: &[S]) -> Result<String, CommandError> {
    execute(argv).inspect_err(|e| error!(target: LOG_TARGET, "{e}"))
}

fn execute<S: AsRef<str>>(argv: &[S]) -> Result<String, CommandError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(CommandError::EmptyCommand);
    };

    let command_line: String = argv.iter().map(|arg| arg.as_ref()).collect::<Vec<&str>>().join(" ");
    debug!(target: LOG_TARGET, "Running: {command_line}");

    let output: Output = Command::new(program.as_ref())
        .args(args.iter().map(|arg| arg.as_ref()))
        .output()
        .map_err(|source| CommandError::Spawn {
            program: program.as_ref().to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(CommandError::Failed {
            command: command_line,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
