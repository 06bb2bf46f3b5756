//! # lvsm Configuration
//!
//! The configuration file is plain `key = value` text, one directive per line,
//! with optional trailing `# comments`. The set of keys is closed: anything
//! outside [`ConfigKey`] is rejected, as is any `*_config` key whose value
//! does not name a readable file.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::LOG_TARGET;
use crate::error::ConfigError;
use crate::file;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/lvsm.conf";

/// Every directive the configuration file may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Ipvsadm,
    Iptables,
    Pager,
    DirectorConfig,
    FirewallConfig,
    Director,
    MaintenanceDir,
    DirectorCmd,
    FirewallCmd,
    Nodes,
    VersionControl,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 11] = [
        ConfigKey::Ipvsadm,
        ConfigKey::Iptables,
        ConfigKey::Pager,
        ConfigKey::DirectorConfig,
        ConfigKey::FirewallConfig,
        ConfigKey::Director,
        ConfigKey::MaintenanceDir,
        ConfigKey::DirectorCmd,
        ConfigKey::FirewallCmd,
        ConfigKey::Nodes,
        ConfigKey::VersionControl,
    ];

    /// Name of the key as written in the configuration file.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Ipvsadm => "ipvsadm",
            ConfigKey::Iptables => "iptables",
            ConfigKey::Pager => "pager",
            ConfigKey::DirectorConfig => "director_config",
            ConfigKey::FirewallConfig => "firewall_config",
            ConfigKey::Director => "director",
            ConfigKey::MaintenanceDir => "maintenance_dir",
            ConfigKey::DirectorCmd => "director_cmd",
            ConfigKey::FirewallCmd => "firewall_cmd",
            ConfigKey::Nodes => "nodes",
            ConfigKey::VersionControl => "version_control",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            ConfigKey::Ipvsadm => "ipvsadm",
            ConfigKey::Iptables => "iptables",
            ConfigKey::Pager => "/bin/more",
            _ => "",
        }
    }

    /// Keys ending in `_config` name a file that must exist at parse time.
    pub fn names_file(self) -> bool {
        self.as_str().ends_with("_config")
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("invalid variable '{s}'"))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The effective configuration: schema defaults overridden by the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the `ipvsadm` binary.
    pub ipvsadm: String,
    /// Path of the `iptables` binary.
    pub iptables: String,
    /// Pager command line, or `none` to print directly.
    pub pager: String,
    /// File holding the director's virtual service configuration.
    pub director_config: String,
    /// File holding the firewall rules.
    pub firewall_config: String,
    /// Name of the director software.
    pub director: String,
    pub maintenance_dir: String,
    pub director_cmd: String,
    pub firewall_cmd: String,
    /// Cluster members, separated by whitespace or commas.
    pub nodes: String,
    pub version_control: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ipvsadm: ConfigKey::Ipvsadm.default_value().to_string(),
            iptables: ConfigKey::Iptables.default_value().to_string(),
            pager: ConfigKey::Pager.default_value().to_string(),
            director_config: ConfigKey::DirectorConfig.default_value().to_string(),
            firewall_config: ConfigKey::FirewallConfig.default_value().to_string(),
            director: ConfigKey::Director.default_value().to_string(),
            maintenance_dir: ConfigKey::MaintenanceDir.default_value().to_string(),
            director_cmd: ConfigKey::DirectorCmd.default_value().to_string(),
            firewall_cmd: ConfigKey::FirewallCmd.default_value().to_string(),
            nodes: ConfigKey::Nodes.default_value().to_string(),
            version_control: ConfigKey::VersionControl.default_value().to_string(),
        }
    }
}

impl Config {
    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::Ipvsadm => &self.ipvsadm,
            ConfigKey::Iptables => &self.iptables,
            ConfigKey::Pager => &self.pager,
            ConfigKey::DirectorConfig => &self.director_config,
            ConfigKey::FirewallConfig => &self.firewall_config,
            ConfigKey::Director => &self.director,
            ConfigKey::MaintenanceDir => &self.maintenance_dir,
            ConfigKey::DirectorCmd => &self.director_cmd,
            ConfigKey::FirewallCmd => &self.firewall_cmd,
            ConfigKey::Nodes => &self.nodes,
            ConfigKey::VersionControl => &self.version_control,
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        let slot: &mut String = match key {
            ConfigKey::Ipvsadm => &mut self.ipvsadm,
            ConfigKey::Iptables => &mut self.iptables,
            ConfigKey::Pager => &mut self.pager,
            ConfigKey::DirectorConfig => &mut self.director_config,
            ConfigKey::FirewallConfig => &mut self.firewall_config,
            ConfigKey::Director => &mut self.director,
            ConfigKey::MaintenanceDir => &mut self.maintenance_dir,
            ConfigKey::DirectorCmd => &mut self.director_cmd,
            ConfigKey::FirewallCmd => &mut self.firewall_cmd,
            ConfigKey::Nodes => &mut self.nodes,
            ConfigKey::VersionControl => &mut self.version_control,
        };
        *slot = value.into();
    }

    /// All keys with their effective values, in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (ConfigKey, &str)> {
        ConfigKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Individual entries of the `nodes` directive.
    pub fn nodes(&self) -> Vec<&str> {
        self.nodes
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|node| !node.is_empty())
            .collect()
    }
}

/// Reads and validates the configuration file at `path`.
///
/// An unreadable file is logged and treated as empty, which yields the defaults.
pub fn parse_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path: &Path = path.as_ref();
    debug!(target: LOG_TARGET, "reading configuration from {}", path.display());
    let lines: Vec<String> = file::read_lines_or_empty(path);
    parse_lines(&lines)
}

/// Builds a [`Config`] from already-read lines. Line numbers are 1-based.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    for (idx, line) in lines.iter().enumerate() {
        let line_num: usize = idx + 1;
        let Some((name, value)) = split_directive(line.as_ref()) else {
            continue;
        };

        let key: ConfigKey = name.parse().map_err(|_| ConfigError::InvalidVariable {
            line: line_num,
            key: name.to_string(),
        })?;

        if key.names_file() {
            check_readable(Path::new(value)).map_err(|source| ConfigError::MissingFile {
                line: line_num,
                path: value.into(),
                source,
            })?;
        }

        debug!(target: LOG_TARGET, "line {line_num}: {key} = '{value}'");
        config.set(key, value);
    }

    Ok(config)
}

/// Splits a raw line into a trimmed key and value, dropping any `#` comment.
///
/// Returns `None` for lines with nothing but whitespace or a comment. A line
/// without `=` is a key with an empty value.
fn split_directive(line: &str) -> Option<(&str, &str)> {
    let content: &str = line.split_once('#').map_or(line, |(content, _comment)| content);
    let content: &str = content.trim();
    if content.is_empty() {
        return None;
    }

    match content.split_once('=') {
        Some((key, value)) => Some((key.trim(), value.trim())),
        None => Some((content, "")),
    }
}

fn check_readable(path: &Path) -> io::Result<()> {
    let file: File = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::from(io::ErrorKind::IsADirectory));
    }
    Ok(())
}
