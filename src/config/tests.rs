// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigLoader, Settings};
use std::path::PathBuf;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.paths.env_file, PathBuf::from("backend/.env"));
    assert_eq!(settings.mongo.port, 27017);
    assert_eq!(settings.health.services.len(), 2);
    assert_eq!(settings.catalog().unwrap().len(), 17);
    settings.validate().unwrap();
}

#[test]
fn test_format_options_default() {
    let lines = Settings::default().format_options();
    insta::assert_snapshot!(lines.join("\n"), @r"
    catalog             = builtin
    health.services.0   = Backend API <http://localhost:5000/api/health>
    health.services.1   = Frontend (Local) <http://localhost:3000>
    health.timeout_secs = 3
    mongo.host          = localhost
    mongo.port          = 27017
    mongo.timeout_secs  = 3
    paths.env_file      = backend/.env
    paths.exports_dir   = tools/exports
    ");
}

#[test]
fn test_settings_parse_sections() {
    let toml = r#"
[paths]
env_file = "/srv/app/.env"

[health]
timeout_secs = 10

[[health.services]]
name = "API"
url = "http://api.internal/health"

[mongo]
port = 27018
"#;
    let settings = Settings::parse(toml).unwrap();
    assert_eq!(settings.paths.env_file, PathBuf::from("/srv/app/.env"));
    assert_eq!(settings.paths.exports_dir, PathBuf::from("tools/exports"));
    assert_eq!(settings.health.timeout_secs, 10);
    assert_eq!(settings.health.services.len(), 1);
    assert_eq!(settings.health.services[0].name, "API");
    assert_eq!(settings.mongo.host, "localhost");
    assert_eq!(settings.mongo.port, 27018);
}

#[test]
fn test_settings_rejects_unknown_keys() {
    assert!(Settings::parse("[paths]\nenv_fiel = \"x\"").is_err());
    assert!(Settings::parse("[bogus]\nkey = 1").is_err());
}

#[test]
fn test_settings_rejects_zero_timeout() {
    let err = Settings::parse("[mongo]\ntimeout_secs = 0").unwrap_err();
    assert!(err.to_string().contains("timeout_secs"), "{err}");
}

#[test]
fn test_catalog_override_replaces_builtin() {
    let toml = r#"
[[catalog]]
category = "Core"
service = "Server"
var = "PORT"

[[catalog]]
category = "Core"
service = "MongoDB"
var = "MONGODB_URI"
required = true
description = "Database"
"#;
    let settings = Settings::parse(toml).unwrap();
    let catalog = settings.catalog().unwrap();
    let vars: Vec<_> = catalog.iter().map(|s| (s.var.as_str(), s.required)).collect();
    assert_eq!(vars, [("PORT", false), ("MONGODB_URI", true)]);
}

#[test]
fn test_catalog_override_duplicate_fails_build() {
    let toml = r#"
[[catalog]]
category = "Core"
service = "Server"
var = "PORT"

[[catalog]]
category = "Other"
service = "Server"
var = "PORT"
"#;
    let err = Settings::parse(toml).unwrap_err();
    assert!(err.to_string().contains("PORT"), "{err}");
}

// --- ConfigLoader Tests ---

#[test]
fn test_config_loader_add_toml_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[paths]\nexports_dir = \"/tmp/reports\"").expect("failed to write temp file");

    let loader = ConfigLoader::new().add_toml_file(file.path());
    assert_eq!(loader.loaded_files().len(), 1);

    let settings = loader.build().expect("build should succeed");
    assert_eq!(settings.paths.exports_dir, PathBuf::from("/tmp/reports"));
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let loader = ConfigLoader::new().add_toml_file("/nonexistent/path/to/envdesk.toml");
    assert!(loader.build().is_err());
}

#[test]
fn test_config_loader_optional_file_missing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/envdesk.toml");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("ENVDESKTEST_MONGO__PORT", "27999");
        std::env::set_var("ENVDESKTEST_PATHS__ENV_FILE", "/env/from/var");
    }

    let settings = ConfigLoader::new()
        .add_toml_str("[mongo]\nport = 1000")
        .with_env_prefix("ENVDESKTEST")
        .build()
        .expect("build should succeed");

    assert_eq!(settings.mongo.port, 27999, "env var should override TOML");
    assert_eq!(settings.paths.env_file, PathBuf::from("/env/from/var"));

    // SAFETY: Same as above
    unsafe {
        std::env::remove_var("ENVDESKTEST_MONGO__PORT");
        std::env::remove_var("ENVDESKTEST_PATHS__ENV_FILE");
    }
}

#[test]
fn test_config_loader_set_override() {
    let settings = ConfigLoader::new()
        .add_toml_str("[paths]\nenv_file = \"a/.env\"")
        .set("paths.env_file", "b/.env")
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert_eq!(settings.paths.env_file, PathBuf::from("b/.env"));
}

#[test]
fn test_config_loader_set_assignment() {
    let settings = ConfigLoader::new()
        .set_assignment("mongo.host = db.internal")
        .expect("assignment should parse")
        .build()
        .expect("build should succeed");
    assert_eq!(settings.mongo.host, "db.internal");

    assert!(ConfigLoader::new().set_assignment("no-equals").is_err());
    assert!(ConfigLoader::new().set_assignment("=value").is_err());
}

#[test]
fn test_format_loaded_files() {
    let loader = ConfigLoader::new().add_toml_str("");
    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @"1. [string] <string>");
}

#[test]
fn test_format_options_keeps_service_order_past_ten() {
    let mut settings = Settings::default();
    settings.health.services = (0..11)
        .map(|i| crate::health::ServiceTarget::new(format!("svc{i}"), "http://localhost"))
        .collect();

    let services: Vec<String> = settings
        .format_options()
        .into_iter()
        .filter(|line| line.starts_with("health.services."))
        .collect();

    assert_eq!(services.len(), 11);
    assert!(services[0].starts_with("health.services.00"));
    assert!(services[2].starts_with("health.services.02"));
    assert!(services[10].starts_with("health.services.10"));
    assert!(services[2].contains("svc2 <"));
}
