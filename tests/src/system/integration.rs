#![cfg(test)]
use lvsm_common::config::{Config, ConfigKey};
use lvsm_common::file;
use lvsm_core::director::{DirectorQuery, Query};
use lvsm_core::error::{CommandError, PagerError, ResolveError};
use lvsm_core::resolver::{self, ServiceDatabase};
use lvsm_core::runner::{self, CommandRunner, SystemRunner};
use lvsm_core::pager;

use crate::utils::{self, temp_file};

#[test]
fn port_resolution_properties() {
    assert_eq!(resolver::resolve_port("80").unwrap(), 80);
    assert!(matches!(resolver::resolve_port("-1"), Err(ResolveError::PortOutOfRange(_))));
    assert!(matches!(resolver::resolve_port("70000"), Err(ResolveError::PortOutOfRange(_))));
    // Depends on the host's service database; it only has to come back.
    let _ = resolver::resolve_port("http");
}

#[test]
fn service_database_from_file() {
    let services = temp_file("domain 53/udp\ndomain 53/tcp\nhttp-alt 8080/tcp webcache\n");
    let db = ServiceDatabase::load(services.path()).unwrap();

    assert_eq!(resolver::resolve_port_with("domain", &db).unwrap(), 53);
    assert_eq!(resolver::resolve_port_with("webcache", &db).unwrap(), 8080);
    assert!(resolver::resolve_port_with("http", &db).is_err());
}

#[cfg(unix)]
#[test]
fn system_runner_returns_stdout() {
    let argv: Vec<String> = vec!["sh".into(), "-c".into(), "printf 'a\\nb\\n'".into()];
    assert_eq!(SystemRunner.run(&argv).unwrap(), "a\nb\n");
}

#[cfg(unix)]
#[test]
fn failing_command_is_not_empty_output() {
    let result = runner::run(&["false"]);
    assert!(matches!(result, Err(CommandError::Failed { .. })));
}

#[cfg(unix)]
#[test]
fn director_query_through_real_process() {
    let mut cfg = Config::default();
    cfg.set(ConfigKey::Ipvsadm, "echo");

    let lines: Vec<String> = DirectorQuery::new(&SystemRunner, &cfg).lines(Query::Services).unwrap();
    assert_eq!(lines, vec!["-L -n"]);
}

#[test]
fn director_query_with_missing_binary() {
    let mut cfg = Config::default();
    cfg.set(ConfigKey::Iptables, "/nonexistent/iptables");

    let result = DirectorQuery::new(&SystemRunner, &cfg).lines(Query::Firewall);
    assert!(matches!(result, Err(CommandError::Spawn { .. })));
}

#[cfg(unix)]
#[test]
fn pager_runs_program_with_arguments() {
    assert!(pager::display("cat -u", &["one", "two"]).is_ok());
}

#[test]
fn pager_launch_failure_is_returned() {
    assert!(!utils::exists("/nonexistent/more"));
    let result = pager::display("/nonexistent/more", &["one"]);
    assert!(matches!(result, Err(PagerError::Spawn { .. })));
}

#[test]
fn file_lines_feed_the_pager() {
    let rules = temp_file("*filter\n:INPUT ACCEPT [0:0]\nCOMMIT\n");
    let lines: Vec<String> = file::read_lines(rules.path()).unwrap();

    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.ends_with('\n')));
    assert!(pager::display("NONE", &lines).is_ok());
}
