#![cfg(test)]
use lvsm_common::config::{self, Config, ConfigKey};
use lvsm_common::error::ConfigError;

use crate::utils::ConfigFixture;

#[test]
fn full_configuration_file() {
    let fixture = ConfigFixture::new();
    let director_cf = fixture.file("ldirectord.cf", "virtual=10.0.0.1:80\n");
    let firewall_cf = fixture.file("iptables.rules", "*filter\nCOMMIT\n");

    let path = fixture.config(&format!(
        "# lvsm configuration\n\
         \n\
         ipvsadm = /sbin/ipvsadm\n\
         iptables = /sbin/iptables   # packet filter\n\
         pager = none\n\
         director = ldirectord\n\
         director_config = {director_cf}\n\
         firewall_config = {firewall_cf}\n\
         nodes = lb1 lb2\n"
    ));

    let cfg: Config = config::parse_config(&path).unwrap();

    assert_eq!(cfg.ipvsadm, "/sbin/ipvsadm");
    assert_eq!(cfg.iptables, "/sbin/iptables");
    assert_eq!(cfg.pager, "none");
    assert_eq!(cfg.director, "ldirectord");
    assert_eq!(cfg.director_config, director_cf);
    assert_eq!(cfg.firewall_config, firewall_cf);
    assert_eq!(cfg.nodes(), vec!["lb1", "lb2"]);
    assert_eq!(cfg.maintenance_dir, "");
    assert_eq!(cfg.version_control, "");
}

#[test]
fn unset_keys_keep_defaults() {
    let fixture = ConfigFixture::new();
    let path = fixture.config("director = keepalived\n");

    let cfg: Config = config::parse_config(&path).unwrap();

    for (key, value) in cfg.entries() {
        if key == ConfigKey::Director {
            assert_eq!(value, "keepalived");
        } else {
            assert_eq!(value, key.default_value(), "{key} should be defaulted");
        }
    }
}

#[test]
fn comment_stripping() {
    let fixture = ConfigFixture::new();
    let path = fixture.config("director = foo.conf   # my comment\n");

    assert_eq!(config::parse_config(&path).unwrap().director, "foo.conf");
}

#[test]
fn first_unknown_key_is_reported_with_its_line() {
    let fixture = ConfigFixture::new();
    let path = fixture.config("# comment\n\npager = none\n   \nfoo = bar\nbaz = qux\n");

    match config::parse_config(&path) {
        Err(ConfigError::InvalidVariable { line, key }) => {
            assert_eq!(line, 5);
            assert_eq!(key, "foo");
        }
        other => panic!("expected invalid variable, got {other:?}"),
    }
}

#[test]
fn missing_referenced_file_is_fatal() {
    let fixture = ConfigFixture::new();
    let missing = fixture.path("missing.cf");
    let path = fixture.config(&format!("pager = none\nfirewall_config = {missing}\n"));

    match config::parse_config(&path) {
        Err(ConfigError::MissingFile { line, path, source }) => {
            assert_eq!(line, 2);
            assert_eq!(path.display().to_string(), missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected missing file, got {other:?}"),
    }
}

#[test]
fn unreadable_config_file_yields_defaults() {
    let fixture = ConfigFixture::new();
    let cfg: Config = config::parse_config(fixture.path("does-not-exist.conf")).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn empty_config_file_yields_defaults() {
    let fixture = ConfigFixture::new();
    let path = fixture.config("");
    assert_eq!(config::parse_config(&path).unwrap(), Config::default());
}
