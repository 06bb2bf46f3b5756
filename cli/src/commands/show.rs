use anyhow::ensure;
use lvsm_common::config::{Config, ConfigKey};
use lvsm_common::file;
use lvsm_core::pager;

use super::ConfiguredFile;

/// Pages through the file a `*_config` directive points at.
pub fn show(config: &Config, which: ConfiguredFile) -> anyhow::Result<()> {
    let key: ConfigKey = match which {
        ConfiguredFile::Director => ConfigKey::DirectorConfig,
        ConfiguredFile::Firewall => ConfigKey::FirewallConfig,
    };
    let path: &str = config.get(key);
    ensure!(!path.is_empty(), "'{key}' is not set in the configuration");

    let lines: Vec<String> = file::read_lines(path)?
        .into_iter()
        .map(|line| line.trim_end_matches(['\n', '\r']).to_string())
        .collect();

    pager::display(&config.pager, &lines)?;
    Ok(())
}
