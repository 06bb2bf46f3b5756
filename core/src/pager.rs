//! Screenful-at-a-time output through an external pager.

use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, Stdio};

use lvsm_common::LOG_TARGET;
use tracing::{debug, error};

use crate::error::PagerError;

/// Pager setting that disables paging.
pub const NO_PAGER: &str = "none";

/// Where paged output goes, as decided by the `pager` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pager {
    /// Print straight to standard output.
    Direct,
    /// Pipe through a program. The first element is the program.
    Program(Vec<String>),
}

impl Pager {
    /// Interprets a `pager` value. `none` in any case means [`Pager::Direct`];
    /// anything else is split on whitespace into a program and its arguments.
    pub fn from_setting(setting: &str) -> Result<Self, PagerError> {
        if setting.trim().eq_ignore_ascii_case(NO_PAGER) {
            return Ok(Pager::Direct);
        }

        let argv: Vec<String> = setting.split_whitespace().map(str::to_string).collect();
        if argv.is_empty() {
            return Err(PagerError::EmptyCommand);
        }
        Ok(Pager::Program(argv))
    }
}

/// Shows `lines` joined by newlines, through `pager` unless it is `none`.
///
/// Failures are logged with the configured pager name before being returned.
pub fn display<S: AsRef<str>>(pager: &str, lines: &[S]) -> Result<(), PagerError> {
    let text: String = join_lines(lines);
    let result = Pager::from_setting(pager).and_then(|target| match target {
        Pager::Direct => write_direct(&mut io::stdout().lock(), &text).map_err(|source| {
            PagerError::Io {
                program: "stdout".to_string(),
                source,
            }
        }),
        Pager::Program(argv) => page_through(&argv, &text),
    });

    result.inspect_err(|e| {
        error!(target: LOG_TARGET, "Problem with pager: {pager}");
        error!(target: LOG_TARGET, "{e}");
    })
}

pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(|line| line.as_ref()).collect::<Vec<&str>>().join("\n")
}

/// Unpaged output: the text followed by a newline.
pub fn write_direct<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")?;
    out.flush()
}

fn page_through(argv: &[String], text: &str) -> Result<(), PagerError> {
    let program: &str = &argv[0];
    debug!(target: LOG_TARGET, "paging through: {}", argv.join(" "));

    let mut child: Child = Command::new(program)
        .args(&argv[1..])
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|source| PagerError::Spawn {
            program: program.to_string(),
            source,
        })?;

    // stdin is dropped before waiting so the pager sees end of input.
    let written: io::Result<()> = match child.stdin.take() {
        Some(mut stdin) => feed(&mut stdin, text),
        None => Ok(()),
    };
    let waited: io::Result<()> = child.wait().map(|_status| ());

    written.and(waited).map_err(|source| PagerError::Io {
        program: program.to_string(),
        source,
    })
}

/// A pager quitting before reading everything is a normal way to finish.
fn feed(stdin: &mut ChildStdin, text: &str) -> io::Result<()> {
    match stdin.write_all(text.as_bytes()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
