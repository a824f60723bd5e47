//! Error types shared across the crate.

use thiserror::Error;

/// Errors from the static content store and question bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("invalid difficulty tier: {0:?} (expected easy, medium or hard)")]
    InvalidDifficulty(String),
    #[error("unknown topic: {0:?}")]
    TopicNotFound(String),
}

/// Errors from the answer judge and the model behind it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum JudgeError {
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// Errors while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
}
