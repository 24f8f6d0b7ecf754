use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("Expected {expected} values: {usage}, got {got}")]
    ValueCount {
        expected: usize,
        got: usize,
        usage: &'static str,
    },

    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("{first} {second} is outside the block coordinate range")]
    OutOfRange { first: String, second: String },
}

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Row on line {line} has {got} fields, header has {expected}")]
    RowWidth {
        line: u64,
        got: usize,
        expected: usize,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
