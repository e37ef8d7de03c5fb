//! placemap library root.
//! Exposes the CLI parser, the high-level run() function, and the session
//! building blocks (store, capture, map surface, view).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod map;
pub mod models;
pub mod repl;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Run) => cli::commands::run::handle(cfg),
        Some(cmd @ Commands::Tile { .. }) => cli::commands::tile::handle(cmd, cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg, cfg_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg_path = Config::resolve_path(cli.config.as_deref());
    // a broken file must not lock the user out of `config`
    let cfg = match Config::load(&cfg_path) {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Some(Commands::Config { .. })) => {
            ui::messages::warning(format!("{e}; using defaults"));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    ui::messages::set_color(cfg.color && !cli.no_color);

    dispatch(&cli, &cfg, &cfg_path)
}
