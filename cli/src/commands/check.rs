use std::path::Path;

use anyhow::ensure;
use colored::*;
use lvsm_common::config::{Config, ConfigKey};
use lvsm_common::validate;
use lvsm_core::resolver;

use crate::terminal::{colors, print};

pub fn check(config: &Config, path: &Path) -> anyhow::Result<()> {
    print::header("configuration");
    print::set_key_width(ConfigKey::ALL.iter().map(|key| key.as_str()));
    print::aligned_line("file", path.display().to_string());

    for (key, value) in config.entries() {
        if value.is_empty() {
            print::aligned_line(key.as_str(), "(unset)".color(colors::UNSET));
        } else {
            print::aligned_line(key.as_str(), value);
        }
    }

    warn_about_quotes(config);

    let nodes: Vec<&str> = config.nodes();
    if nodes.is_empty() {
        return Ok(());
    }

    print::header("nodes");
    print::set_key_width(nodes.iter().copied());
    let unresolved: usize = nodes.iter().filter(|node| !check_node(node)).count();
    print::end_of_program();

    ensure!(unresolved == 0, "{unresolved} node(s) could not be resolved");
    Ok(())
}

/// Values are taken literally, so surrounding quotes end up in commands and paths.
fn warn_about_quotes(config: &Config) {
    for (key, value) in config.entries() {
        if validate::is_quoted(value) {
            print::print_status(format!(
                "{} is wrapped in quotes; they are kept as part of the value",
                key.as_str().color(colors::ACCENT)
            ));
        }
    }
}

fn check_node(node: &str) -> bool {
    if validate::is_valid_ipv4(node) {
        print::aligned_line(node, "IPv4 address".green());
        return true;
    }

    match resolver::resolve_host(node) {
        Ok(addr) => {
            print::aligned_line(node, addr.to_string().green());
            true
        }
        Err(_) => {
            print::aligned_line(node, "unresolved".color(colors::FAILURE).bold());
            false
        }
    }
}
