mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, director, resolve, show};
use lvsm_common::LOG_TARGET;
use lvsm_common::config::{self, Config};
use lvsm_common::error::ConfigError;
use lvsm_core::director::Query;
use lvsm_core::error::{CommandError, PagerError, ResolveError};
use tracing::{debug, error};

use crate::terminal::logging;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg: Config = match config::parse_config(&commands.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            report_config_error(&e);
            return ExitCode::from(1);
        }
    };

    let result: anyhow::Result<()> = match commands.command {
        Commands::Check => check::check(&cfg, &commands.config),
        Commands::Status => director::show_table(&cfg, Query::Services),
        Commands::Firewall => director::show_table(&cfg, Query::Firewall),
        Commands::Show { file } => show::show(&cfg, file),
        Commands::Port { token } => resolve::port(&token),
        Commands::Host { name } => resolve::host(&name),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if already_logged(&e) {
                debug!(target: LOG_TARGET, "{e:#}");
            } else {
                error!(target: LOG_TARGET, "{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn report_config_error(e: &ConfigError) {
    match e {
        ConfigError::InvalidVariable { .. } => error!(target: LOG_TARGET, "{e}"),
        ConfigError::MissingFile { line, path, source } => {
            error!(target: LOG_TARGET, "in lvsm configuration file line {line}");
            error!(target: LOG_TARGET, "{source}: '{}'", path.display());
        }
    }
}

/// Resolver, runner and pager failures are logged where they happen.
fn already_logged(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause.is::<CommandError>() || cause.is::<ResolveError>() || cause.is::<PagerError>()
    })
}
