// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for layered settings loading.
//!
//! Tests the `ConfigLoader` with realistic TOML files on disk.

use std::fs;

use envdesk::config::Settings;
use envdesk::config::loader::ConfigLoader;
use envdesk::store::{EnvStore, merge};
use tempfile::TempDir;

const BASE: &str = r#"
[paths]
env_file = "base/.env"

[health]
timeout_secs = 5

[[health.services]]
name = "API"
url = "http://localhost:8080/health"

[mongo]
host = "db.internal"
port = 27017
"#;

const OVERRIDE: &str = r#"
[mongo]
port = 27018

[[catalog]]
category = "Core"
service = "Server"
var = "PORT"

[[catalog]]
category = "Core"
service = "Database"
var = "MONGODB_URI"
required = true
description = "MongoDB connection"
"#;

fn write_layers(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let base = dir.path().join("base.toml");
    let over = dir.path().join("override.toml");
    fs::write(&base, BASE).unwrap();
    fs::write(&over, OVERRIDE).unwrap();
    (base, over)
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn test_layers_apply_in_order() {
    let dir = TempDir::new().unwrap();
    let (base, over) = write_layers(&dir);

    let settings = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file(&over)
        .set_assignment("paths.env_file=/srv/app/.env")
        .unwrap()
        .build()
        .unwrap();

    insta::assert_snapshot!(settings.format_options().join("\n"), @r"
    catalog             = 2 configured entries
    health.services.0   = API <http://localhost:8080/health>
    health.timeout_secs = 5
    mongo.host          = db.internal
    mongo.port          = 27018
    mongo.timeout_secs  = 3
    paths.env_file      = /srv/app/.env
    paths.exports_dir   = tools/exports
    ");
}

#[test]
fn test_loaded_files_are_listed_in_order() {
    let dir = TempDir::new().unwrap();
    let (base, over) = write_layers(&dir);

    let loader = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file_optional(&over)
        .add_toml_file_optional(dir.path().join("absent.toml"));

    let files = loader.loaded_files();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].1, base);
    assert_eq!(files[1].1, over);
}

#[test]
fn test_invalid_layer_fails() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[mongo]\ntimeout_secs = 0\n").unwrap();

    assert!(ConfigLoader::new().add_toml_file(&bad).build().is_err());
}

// =============================================================================
// Configured catalog drives the store
// =============================================================================

#[test]
fn test_configured_catalog_is_used_by_merge() {
    let dir = TempDir::new().unwrap();
    let env_file = dir.path().join(".env");
    fs::write(&env_file, "PORT=5000\nSTRIPE_SECRET_KEY=sk_test_abcdefgh\n").unwrap();

    let toml = format!("{OVERRIDE}\n[paths]\nenv_file = {:?}\n", env_file.display().to_string());
    let settings = Settings::parse(&toml).unwrap();
    let catalog = settings.catalog().unwrap();
    let entries = merge(&catalog, &EnvStore::new(&settings.paths.env_file).load().unwrap());

    let vars: Vec<&str> = entries.iter().map(|e| e.spec.var.as_str()).collect();
    assert_eq!(vars, ["PORT", "MONGODB_URI", "STRIPE_SECRET_KEY"]);
    assert!(entries[2].is_custom());
    assert_eq!(entries[2].masked_value, "sk_t***efgh");
}
