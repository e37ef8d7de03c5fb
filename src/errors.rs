//! Unified application error type.
//! All modules (core, map, ui, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid zoom level {0} (allowed: 0..={1})")]
    InvalidZoom(i64, u8),

    #[error("Map cell {0},{1} is outside the visible map")]
    InvalidCell(i64, i64),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No marker #{0} on the map")]
    UnknownMarker(usize),

    #[error("'{action}' is not available in {mode} mode")]
    Unavailable { action: &'static str, mode: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
