use mhs_kernel::config::{config_path, load_config};
use mhs_kernel::domain::config::ApiConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let cfg: ApiConfig =
        load_config(Some(dir.path().join("absent.toml"))).expect("defaults should load");

    assert_eq!(cfg.server.port, 8000);
    assert_eq!(cfg.storage.static_dir, PathBuf::from("public"));
}

#[test]
fn toml_file_overrides_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 9100

[logging]
level = "debug"

[activities]
seed = "seed/activities.json"
"#,
    )
    .expect("write config");

    let cfg: ApiConfig = load_config(Some(&path)).expect("config should load");

    assert_eq!(cfg.server.port, 9100);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.activities.seed, Some(PathBuf::from("seed/activities.json")));
    assert_eq!(cfg.storage.static_dir, PathBuf::from("public"));
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server\nport = ").expect("write config");

    let err = load_config::<ApiConfig>(Some(&path)).expect_err("malformed toml must fail");
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn config_path_defaults_to_server() {
    assert_eq!(config_path(None::<&str>), PathBuf::from("server"));
    assert_eq!(config_path(Some("config/local")), PathBuf::from("config/local"));
}
