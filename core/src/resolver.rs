//! Port and host name resolution.
//!
//! Failures are logged here and handed back as [`ResolveError`], so an
//! interactive caller can report them and carry on.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use lvsm_common::{LOG_TARGET, file};
use tracing::{debug, error};

use crate::error::ResolveError;

/// The system service database.
pub const SERVICES_PATH: &str = "/etc/services";

/// One `name port/protocol aliases...` record of a services file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub name: String,
    pub port: u16,
    pub protocol: String,
    pub aliases: Vec<String>,
}

impl ServiceEntry {
    fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }
}

/// Service name to port lookup table in `/etc/services` format.
#[derive(Debug, Clone, Default)]
pub struct ServiceDatabase {
    entries: Vec<ServiceEntry>,
}

impl ServiceDatabase {
    pub fn system() -> Result<Self, ResolveError> {
        Self::load(SERVICES_PATH)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let path: &Path = path.as_ref();
        let lines: Vec<String> =
            file::read_lines(path).map_err(|source| ResolveError::ServiceDatabase {
                path: PathBuf::from(path),
                source,
            })?;
        Ok(Self::parse(&lines))
    }

    /// Builds the table from raw lines. Malformed records are skipped.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Self {
        let entries: Vec<ServiceEntry> = lines
            .iter()
            .filter_map(|line| parse_entry(line.as_ref()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    /// Port of the first record whose name or alias is `name`, for any protocol.
    pub fn lookup(&self, name: &str) -> Result<u16, ResolveError> {
        self.entries
            .iter()
            .find(|entry| entry.matches(name))
            .map(|entry| entry.port)
            .ok_or_else(|| ResolveError::UnknownService(name.to_string()))
    }
}

fn parse_entry(line: &str) -> Option<ServiceEntry> {
    let content: &str = line.split_once('#').map_or(line, |(content, _)| content);
    let mut fields = content.split_whitespace();

    let name: &str = fields.next()?;
    let (port, protocol) = fields.next()?.split_once('/')?;
    let port: u16 = port.parse().ok()?;

    Some(ServiceEntry {
        name: name.to_string(),
        port,
        protocol: protocol.to_string(),
        aliases: fields.map(str::to_string).collect(),
    })
}

/// Resolves a port number or service name against the system service database.
///
/// Names are looked up in [`SERVICES_PATH`] only. Other NSS sources that
/// `getservbyname` would consult (NIS, LDAP, sssd) are not queried.
pub fn resolve_port(token: &str) -> Result<u16, ResolveError> {
    let token: &str = token.trim();
    let result = match parse_port_number(token) {
        Some(parsed) => parsed,
        None => ServiceDatabase::system().and_then(|services| services.lookup(token)),
    };
    log_failure(result)
}

/// Same as [`resolve_port`] with an explicit service database.
pub fn resolve_port_with(token: &str, services: &ServiceDatabase) -> Result<u16, ResolveError> {
    let token: &str = token.trim();
    let result = match parse_port_number(token) {
        Some(parsed) => parsed,
        None => services.lookup(token),
    };
    log_failure(result)
}

/// `None` when the token is not numeric and should be looked up by name.
fn parse_port_number(token: &str) -> Option<Result<u16, ResolveError>> {
    let digits: &str = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let port: Result<u16, ResolveError> = token
        .parse::<i64>()
        .ok()
        .and_then(|n| u16::try_from(n).ok())
        .ok_or_else(|| ResolveError::PortOutOfRange(token.to_string()));
    Some(port)
}

/// Resolves `host` to its first IPv4 address using the system resolver.
pub fn resolve_host(host: &str) -> Result<Ipv4Addr, ResolveError> {
    let result = lookup_ipv4(host);
    if let Ok(addr) = &result {
        debug!(target: LOG_TARGET, "{host} resolved to {addr}");
    }
    log_failure(result)
}

fn lookup_ipv4(host: &str) -> Result<Ipv4Addr, ResolveError> {
    let addrs = (host, 0)
        .to_socket_addrs()
        .map_err(|source| ResolveError::HostLookup {
            host: host.to_string(),
            source,
        })?;

    addrs
        .map(|addr: SocketAddr| addr.ip())
        .find_map(|ip| match ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(|| ResolveError::NoAddress(host.to_string()))
}

fn log_failure<T>(result: Result<T, ResolveError>) -> Result<T, ResolveError> {
    result.inspect_err(|e| error!(target: LOG_TARGET, "{e}"))
}
