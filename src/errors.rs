// src/errors.rs
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum PracticeError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Execution service failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Minimum value {min} must be less than maximum value {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("List length must be at least 1")]
    EmptyList,

    #[error("List length {length} must be between 1 and {max}")]
    InvalidListLength { length: usize, max: usize },

    #[error("Unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("No problem has been started for this session")]
    ProblemNotStarted,

    #[error("A submission is already running for this session")]
    SubmissionInFlight,

    #[error("Session '{0}' not found")]
    SessionNotFound(Uuid),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PracticeError>;
