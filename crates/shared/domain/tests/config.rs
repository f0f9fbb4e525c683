use folio_domain::config::{HostConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4173);
    assert_eq!(server.dist, std::path::PathBuf::from("dist"));
    assert!(server.request_logs);
    assert!(server.ssl.is_none());
}

#[test]
fn host_config_deserializes() {
    let raw = json!({
        "server": {
            "address": "::",
            "port": 8080,
            "dist": "/srv/folio/dist",
            "request_logs": false
        }
    });

    let cfg: HostConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.dist, std::path::PathBuf::from("/srv/folio/dist"));
    assert!(!cfg.server.request_logs);
    assert!(cfg.server.ssl.is_none());
}

#[test]
fn host_config_fills_missing_sections_with_defaults() {
    let cfg: HostConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.server.port, ServerConfig::default().port);
}
