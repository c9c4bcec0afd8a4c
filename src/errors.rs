// src/errors.rs

//! Crate-wide error type for the fallible parts of `errset`.
//!
//! The error values themselves (`PlainError`, `ErrorKind`, `Errors`) never
//! fail; only catalogue loading and logging setup can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErrsetError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid catalogue name: {0}")]
    InvalidName(String),

    #[error("Duplicate catalogue name: {0}")]
    DuplicateName(String),

    #[error("Invalid pattern for kind '{name}': {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ErrsetError>;
