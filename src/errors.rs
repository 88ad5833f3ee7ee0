//! Unified application error type.
//! All modules (store, core, cli, api, utils) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Storage-related
    // ---------------------------
    #[error("Table error: {0}")]
    Table(#[from] csv::Error),

    #[error("Schema mismatch: expected columns [{expected}], found [{found}]")]
    SchemaMismatch { expected: String, found: String },

    #[error("Invalid column name: {0}")]
    InvalidColumnName(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid length (must be a non-negative number of meters): {0}")]
    InvalidLength(String),

    #[error("Invalid ply count (must be a non-negative integer): {0}")]
    InvalidPlies(String),

    // ---------------------------
    // Auth errors
    // ---------------------------
    #[error("Invalid or missing API key")]
    InvalidApiKey,

    #[error("Role '{0}' is not allowed to {1}")]
    Forbidden(String, String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
