// src/error.rs
use thiserror::Error;
use wapgate_markup::MarkupError;
use wapgate_wbxml::CompileError;

/// Everything that can go wrong between a request body and a WBXML payload.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Markup parsing failed: {0}")]
    Markup(#[from] MarkupError),

    #[error("Compilation failed: {0}")]
    Compile(#[from] CompileError),

    #[error("No converter for content type '{0}'")]
    UnsupportedContentType(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown log level '{0}'")]
    LogLevel(String),
}
