use colored::*;
use lvsm_common::LOG_TARGET;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// One-line diagnostics: a severity symbol, then the message.
///
/// Debug and trace events also name their target, so `-v` output from
/// dependencies can be told apart from lvsm's own.
pub struct LvsmFormatter;

impl<S, N> FormatEvent<S, N> for LvsmFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level: Level = *meta.level();

        write!(writer, "{} ", level_symbol(level))?;
        if shows_target(level) {
            write!(writer, "{} ", format!("{}:", meta.target()).dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_symbol(level: Level) -> ColoredString {
    match level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

fn shows_target(level: Level) -> bool {
    level >= Level::DEBUG
}

/// Default directive for the given `-v` count, used when `RUST_LOG` is unset.
pub fn default_directive(verbosity: u8) -> String {
    let level: &str = match verbosity {
        0 => "error",
        _ => "debug",
    };
    format!("{LOG_TARGET}={level}")
}

/// Installs the process-wide subscriber. Diagnostics go to stderr so they
/// never end up inside paged output.
pub fn init_logging(verbosity: u8) {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .event_format(LvsmFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
