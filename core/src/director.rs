//! Read-only queries against the director and its firewall.

use lvsm_common::config::Config;

use crate::error::CommandError;
use crate::runner::CommandRunner;

/// Which table of the director to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Virtual services and their real servers, from `ipvsadm`.
    Services,
    /// Packet filter rules, from `iptables`.
    Firewall,
}

impl Query {
    /// Argument vector for this query, using the binaries named in `config`.
    pub fn argv(self, config: &Config) -> Vec<String> {
        let program: &str = match self {
            Query::Services => &config.ipvsadm,
            Query::Firewall => &config.iptables,
        };
        [program, "-L", "-n"].into_iter().map(str::to_string).collect()
    }
}

pub struct DirectorQuery<'a, R: CommandRunner> {
    runner: &'a R,
    config: &'a Config,
}

impl<'a, R: CommandRunner> DirectorQuery<'a, R> {
    pub fn new(runner: &'a R, config: &'a Config) -> Self {
        Self { runner, config }
    }

    /// Runs `query` and returns its output split into lines.
    pub fn lines(&self, query: Query) -> Result<Vec<String>, CommandError> {
        let output: String = self.runner.run(&query.argv(self.config))?;
        Ok(output.lines().map(str::to_string).collect())
    }
}
