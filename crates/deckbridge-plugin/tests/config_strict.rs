#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use deckbridge_plugin::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
connection:
  host: "127.0.0.1"
  conect_timeout_ms: 500 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.connection.host, "127.0.0.1");
    assert_eq!(cfg.connection.connect_timeout_ms, 10000);
    assert_eq!(cfg.log.filter, "info");
}

#[test]
fn timeout_out_of_range() {
    let bad = r#"
version: 1
connection:
  connect_timeout_ms: 5
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("connect_timeout_ms"));
}

#[test]
fn wrong_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("definitely/not/here.yaml").expect("defaults");
    assert_eq!(cfg.log.filter, "info");
}
