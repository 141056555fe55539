//! Command-line client: argument parsing, terminal output and page writing.
//! Everything else goes through [`newsdesk::api`].

mod commands;
mod print;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use newsdesk::api::{NewsdeskApi, NewsdeskPaths};
use newsdesk::config::NewsdeskConfig;
use newsdesk::error::{NewsdeskError, Result};
use newsdesk::store::fs::FileSlot;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use setup::{Cli, Commands};

/// Overrides the platform data directory.
const HOME_ENV: &str = "NEWSDESK_HOME";
/// Log filter directives, e.g. `NEWSDESK_LOG=newsdesk=debug`.
const LOG_ENV: &str = "NEWSDESK_LOG";

pub struct AppContext {
    pub api: NewsdeskApi<FileSlot>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Publish(args)) => commands::handle_publish(&mut ctx, args),
        Some(Commands::List) | None => commands::handle_list(&mut ctx),
        Some(Commands::Show { id }) => commands::handle_show(&ctx, id),
        Some(Commands::Home) => commands::handle_home(&mut ctx),
        Some(Commands::Build { out }) => commands::handle_build(&mut ctx, out),
        Some(Commands::Config { key, value }) => commands::handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    // Logs go to stderr so rendered HTML on stdout stays clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "newsdesk", "newsdesk").ok_or_else(|| {
        NewsdeskError::Config("Could not determine data dir".to_string())
    })?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context() -> Result<AppContext> {
    let paths = NewsdeskPaths::new(data_dir()?);
    let config = NewsdeskConfig::load(paths.config_dir()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        NewsdeskConfig::default()
    });
    tracing::debug!(data_dir = %paths.data_dir.display(), slot = %config.slot_key, "starting");

    let slot = FileSlot::new(paths.slots_dir()).with_quota(config.quota_bytes);
    let api = NewsdeskApi::new(slot, config, paths);

    Ok(AppContext { api })
}
