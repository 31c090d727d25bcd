// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use bookcase_config::{Config, ConfigManager, LogLevel, MetadataConfig};
use bookcase_metadata::{GoogleBooksSettings, GoogleBooksSource};
use bookcase_session::{seed_requests, Controller, Session};
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;
use std::time::Duration;

mod commands;

use commands::Shell;

fn build_cli() -> Command {
    Command::new("bookcase")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Bookcase Contributors")
        .about("Track the books you own and have read")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to the config file (defaults to the platform config directory)"),
        )
        .arg(
            Arg::new("no-seed")
                .long("no-seed")
                .help("Start with an empty library instead of looking up the seed books")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .value_name("PATH")
                .help("Write the card markup to this file after every change"),
        )
}

fn config_manager(matches: &ArgMatches) -> Result<ConfigManager> {
    let manager = match matches.get_one::<String>("config") {
        Some(path) => ConfigManager::with_file(path),
        None => ConfigManager::new(),
    };
    manager.context("Failed to locate configuration")
}

fn init_logging(level: LogLevel) {
    // RUST_LOG takes precedence over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.to_string()))
        .init();
}

fn source_settings(config: &MetadataConfig) -> GoogleBooksSettings {
    GoogleBooksSettings {
        endpoint: config.endpoint.clone(),
        api_key: config.api_key.clone(),
        timeout: Duration::from_secs(config.timeout_secs),
        user_agent: config.user_agent.clone(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let manager = config_manager(&matches)?;

    // Logging depends on the config, so a load failure is reported after init
    let loaded = manager.load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(config.app.log_level);
    console::set_colors_enabled(config.app.color_output);

    match &loaded {
        Ok(_) => log::debug!("Loaded config from {}", manager.config_path().display()),
        Err(e) => log::warn!("Failed to load config: {}, using defaults", e),
    }

    let session = Session::from_config(&config.library).context("Failed to start session")?;
    let source = GoogleBooksSource::with_settings(source_settings(&config.metadata))
        .context("Failed to create metadata client")?;
    let controller = Controller::new(session, source);

    let html_path = matches.get_one::<String>("html").map(PathBuf::from);
    let mut shell = Shell::new(controller, html_path);
    let mut stdout = std::io::stdout();

    if should_seed(&config, matches.get_flag("no-seed")) {
        shell
            .seed(&seed_requests(&config.library.seeds), &mut stdout)
            .await?;
    }

    shell.run(std::io::stdin().lock(), &mut stdout).await
}

fn should_seed(config: &Config, no_seed: bool) -> bool {
    !no_seed && config.library.seed_on_startup && !config.library.seeds.is_empty()
}
