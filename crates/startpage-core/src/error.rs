//! Shared error categories for the start page.
//!
//! Component crates keep their own precise error enums and map them into
//! `AppError` for logging. Only the empty task submission ever reaches the
//! user, as the page's blocking alert.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Task error: {0}")]
    Task(#[from] TaskError),
}

impl AppError {
    /// Alert text for errors the page shows; `None` for those it only logs.
    pub fn alert(&self) -> Option<&'static str> {
        match self {
            AppError::Task(TaskError::EmptyInput) => Some("Введите текст задачи!"),
            _ => None,
        }
    }
}

/// HTTP and connectivity failures
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Undecodable response: {0}")]
    Decode(String),
}

/// Location and weather failures that are not transport errors
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("Town not found: {0}")]
    TownNotFound(String),

    #[error("Weather API error: {0}")]
    ApiError(String),
}

/// Task list errors.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task text is empty")]
    EmptyInput,

    #[error("No task at position {0}")]
    NotFound(usize),
}

/// Classify a reqwest failure.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() {
            NetworkError::Decode(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::Status {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
