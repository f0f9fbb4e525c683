#![cfg(not(target_arch = "wasm32"))]

use folio_domain::config::HostConfig;
use folio_kernel::config::{ConfigError, load_config};
use std::fs;

#[test]
fn missing_file_falls_back_to_defaults() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let cfg: HostConfig =
        load_config(Some(tmp.path().join("absent"))).expect("defaults without a file");
    assert_eq!(cfg.server.port, 4173);
    assert!(cfg.server.ssl.is_none());
}

#[test]
fn file_values_override_defaults() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = tmp.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 9000
dist = "bundle"
request_logs = false
"#,
    )
    .expect("write config file");

    let cfg: HostConfig = load_config(Some(tmp.path().join("server"))).expect("layered config");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.server.dist, std::path::PathBuf::from("bundle"));
    assert!(!cfg.server.request_logs);
}

#[test]
fn malformed_file_reports_build_error() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = tmp.path().join("server.toml");
    fs::write(&path, "[server\nport = 9000").expect("write config file");

    let err = load_config::<HostConfig>(Some(tmp.path().join("server")))
        .expect_err("broken toml must fail");
    assert!(matches!(err, ConfigError::Build(_)));
}

#[test]
fn mismatched_shape_reports_deserialize_error() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = tmp.path().join("server.toml");
    fs::write(&path, "[server]\nport = \"not-a-number\"").expect("write config file");

    let err = load_config::<HostConfig>(Some(tmp.path().join("server")))
        .expect_err("wrong field type must fail");
    assert!(matches!(err, ConfigError::Deserialize(_)));
}
