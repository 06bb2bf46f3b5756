pub mod check;
pub mod director;
pub mod resolve;
pub mod show;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use lvsm_common::config::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "lvsm")]
#[command(about = "Linux Virtual Server manager.")]
pub struct CommandLine {
    /// Configuration file to read
    #[arg(short, long, global = true, env = "LVSM_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// Print debug diagnostics (-v)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the configuration and print the effective values
    #[command(alias = "c")]
    Check,
    /// Show the director's virtual services
    #[command(alias = "s")]
    Status,
    /// Show the director's firewall rules
    #[command(alias = "f")]
    Firewall,
    /// Page through one of the configured files
    Show {
        #[arg(value_enum)]
        file: ConfiguredFile,
    },
    /// Resolve a port number or service name
    #[command(alias = "p")]
    Port { token: String },
    /// Resolve a hostname to its IPv4 address
    #[command(alias = "h")]
    Host { name: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfiguredFile {
    /// The file named by `director_config`
    Director,
    /// The file named by `firewall_config`
    Firewall,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
