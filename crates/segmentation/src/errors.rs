use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Invalid source: {0:?} (expected one of all, purchase, lux)")]
    InvalidMode(String),

    #[error("Failed to read users from {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be positive")]
    NonPositive { name: &'static str },

    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}
