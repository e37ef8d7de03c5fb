use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        init,
        force,
        edit_config,
        editor,
    } = cmd
    {
        if !(*print_config || *check || *init || *edit_config) {
            info(format!("Configuration file: {}", path.display()));
            info("Use --print, --check, --init or --edit.");
            return Ok(());
        }

        // ---- INIT ----
        if *init {
            if Config::init_file(path, *force)? {
                success(format!("Config file written: {}", path.display()));
            } else {
                warning(format!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                ));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}; defaults are in use.",
                    path.display()
                ));
            } else {
                let missing = Config::missing_keys(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields (defaults used): {}",
                        missing.join(", ")
                    ));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.clone())?;
        }
    }

    Ok(())
}

fn edit(path: &Path, requested_editor: Option<String>) -> AppResult<()> {
    if !path.exists() {
        Config::init_file(path, false)?;
    }

    // Default editor based on the platform
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));
        }
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            Ok(())
        }
        Ok(_) | Err(_) => Err(AppError::Config(format!(
            "failed to edit configuration file using '{}'",
            default_editor
        ))),
    }
}
