// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::env::{parse_assignment, parse_key};
use crate::cli::export::ExportTarget;
use crate::cli::{Cli, Command};
use crate::export::ExportFormat;
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envdesk", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_get() {
    let cli = Cli::try_parse_from(["envdesk", "get", "PORT"]).unwrap();
    insta::assert_debug_snapshot!(cli.command, @r#"
    Some(
        Get(
            GetArgs {
                key: "PORT",
            },
        ),
    )
    "#);
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envdesk",
        "-l",
        "4",
        "--config",
        "a.toml",
        "--config",
        "b.toml",
        "--set",
        "mongo.port=27018",
        "--env-file",
        "/srv/app/.env",
        "--log-json",
        "categories",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(cli.global.log_json);
    assert!(!cli.global.no_default_config);
    assert_eq!(
        cli.global.to_config_overrides(),
        vec!["mongo.port=27018", "paths.env_file=/srv/app/.env"]
    );
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["envdesk", "-l", "6", "show"]).is_err());
}

#[test]
fn test_parse_show_filters() {
    let cli = Cli::try_parse_from(["envdesk", "show", "--category", "AI", "-r", "--reveal"]).unwrap();
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show");
    };
    assert_eq!(args.category.as_deref(), Some("AI"));
    assert!(args.required_only);
    assert!(args.reveal);
}

#[test]
fn test_parse_set_assignments() {
    let cli = Cli::try_parse_from([
        "envdesk",
        "set",
        "PORT=5000",
        "MONGODB_URI=mongodb://h/db?a=b",
        "EMPTY=",
        "--force",
    ])
    .unwrap();
    let Some(Command::Set(args)) = cli.command else {
        panic!("expected set");
    };
    assert!(args.force);
    assert_eq!(
        args.assignments,
        vec![
            ("PORT".to_string(), "5000".to_string()),
            ("MONGODB_URI".to_string(), "mongodb://h/db?a=b".to_string()),
            ("EMPTY".to_string(), String::new()),
        ]
    );
}

#[test]
fn test_parse_set_requires_assignment() {
    assert!(Cli::try_parse_from(["envdesk", "set"]).is_err());
    assert!(Cli::try_parse_from(["envdesk", "set", "NOEQUALS"]).is_err());
    assert!(Cli::try_parse_from(["envdesk", "set", "1BAD=x"]).is_err());
}

#[test]
fn test_parse_key_rules() {
    assert!(parse_key("OPENAI_API_KEY").is_ok());
    assert!(parse_key("_private").is_ok());
    assert!(parse_key("app.name-v2").is_ok());
    assert!(parse_key("9LIVES").is_err());
    assert!(parse_key("HAS SPACE").is_err());
    assert!(parse_key("").is_err());
}

#[test]
fn test_parse_assignment_splits_on_first_equals() {
    assert_eq!(
        parse_assignment("URL=a=b").unwrap(),
        ("URL".to_string(), "a=b".to_string())
    );
    insta::assert_snapshot!(parse_assignment("PORT").unwrap_err(), @"expected KEY=VALUE, got 'PORT'");
}

#[test]
fn test_parse_assignment_rejects_line_breaks() {
    insta::assert_snapshot!(
        parse_assignment("A=x\nJWT_SECRET=pwned").unwrap_err(),
        @"value for 'A' must be a single line"
    );
    assert!(parse_assignment("A=x\r\ny").is_err());
    assert!(parse_assignment("A=x\ry").is_err());
    assert!(Cli::try_parse_from(["envdesk", "set", "A=x\nB=y"]).is_err());
}

#[test]
fn test_parse_export() {
    let cli = Cli::try_parse_from(["envdesk", "export", "pdf", "-o", "out/report.pdf"]).unwrap();
    let Some(Command::Export(args)) = cli.command else {
        panic!("expected export");
    };
    assert_eq!(args.format.format(), ExportFormat::Pdf);
    assert_eq!(args.format.output(), Some(&PathBuf::from("out/report.pdf")));

    let cli = Cli::try_parse_from(["envdesk", "export", "csv"]).unwrap();
    let Some(Command::Export(args)) = cli.command else {
        panic!("expected export");
    };
    assert!(matches!(args.format, ExportTarget::Csv(_)));
    assert_eq!(args.format.output(), None);
}

#[test]
fn test_parse_check() {
    let cli = Cli::try_parse_from(["envdesk", "check", "--skip-mongo"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check");
    };
    assert!(args.skip_mongo);
}

#[test]
fn test_no_command() {
    let cli = Cli::try_parse_from(["envdesk"]).unwrap();
    assert!(cli.command.is_none());
}
