use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowserError>;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Malformed metadata query: {0}")]
    MalformedQuery(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("No collection selected")]
    NoCollectionSelected,

    #[error("Record source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Record not found on the current page: {0}")]
    RecordNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<source::SourceError> for BrowserError {
    #[inline]
    fn from(err: source::SourceError) -> Self {
        Self::SourceUnavailable(err.to_string())
    }
}

impl From<config::ConfigError> for BrowserError {
    #[inline]
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

pub mod browser;
pub mod commands;
pub mod config;
pub mod model;
pub mod source;
pub mod terminal;
