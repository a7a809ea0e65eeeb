// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> Command Dispatch
//!   Show | Categories | Get | Set | Export | Check | Options | Sources
//! ```

use std::process::ExitCode;

use envdesk::cli::global::GlobalOptions;
use envdesk::cli::{self, Command};
use envdesk::cmd::check::run_check_command;
use envdesk::cmd::config::{run_options_command, run_sources_command};
use envdesk::cmd::env::{
    run_categories_command, run_get_command, run_set_command, run_show_command,
};
use envdesk::cmd::export::run_export_command;
use envdesk::config::Settings;
use envdesk::config::loader::ConfigLoader;
use envdesk::logging::init_logging;
use envdesk::logging::{LogConfig, LogFormat, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_CONFIG_FILE: &str = "envdesk.toml";
const ENV_PREFIX: &str = "ENVDESK";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    let file_level = if console_level > LogLevel::DEBUG {
        console_level
    } else {
        LogLevel::DEBUG
    };

    let format = if global.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_format(format)
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_settings(&cli.global).map(|settings| run_options_command(&settings))
        }
        Some(Command::Sources) => build_config_loader(&cli.global).map(|loader| {
            run_sources_command(&loader.format_loaded_files());
        }),
        Some(Command::Show(args)) => {
            load_settings(&cli.global).and_then(|settings| run_show_command(args, &settings))
        }
        Some(Command::Categories) => {
            load_settings(&cli.global).and_then(|settings| run_categories_command(&settings))
        }
        Some(Command::Get(args)) => {
            load_settings(&cli.global).and_then(|settings| run_get_command(args, &settings))
        }
        Some(Command::Set(args)) => {
            load_settings(&cli.global).and_then(|settings| run_set_command(args, &settings))
        }
        Some(Command::Export(args)) => load_settings(&cli.global)
            .and_then(|settings| run_export_command(args, &settings).map(|_| ())),
        Some(Command::Check(args)) => match load_settings(&cli.global) {
            Ok(settings) => run_check_command(args, &settings).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> envdesk::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    Ok(loader)
}

fn load_settings(global: &GlobalOptions) -> envdesk::error::Result<Settings> {
    build_config_loader(global)?
        .build()
        .inspect_err(|e| eprintln!("Failed to load settings: {e}"))
}
