use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::quiz::{QuizServiceError, SubmissionError};
use std::fmt;

/// Failure surfaced at the binary boundary. Everything deeper converts into
/// one of these before reaching `main`.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Quiz(QuizServiceError),
    Gateway(SubmissionError),
    Io(std::io::Error),
    Server(axum::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "invalid configuration: {err}"),
            AppError::Telemetry(err) => write!(f, "telemetry setup failed: {err}"),
            AppError::Quiz(err) => write!(f, "questionnaire flow failed: {err}"),
            AppError::Gateway(err) => write!(f, "forms delivery failed: {err}"),
            AppError::Io(err) => write!(f, "socket error: {err}"),
            AppError::Server(err) => write!(f, "http server error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Quiz(err) => Some(err),
            AppError::Gateway(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<TelemetryError> for AppError {
    fn from(err: TelemetryError) -> Self {
        AppError::Telemetry(err)
    }
}

impl From<QuizServiceError> for AppError {
    fn from(err: QuizServiceError) -> Self {
        AppError::Quiz(err)
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        AppError::Gateway(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<axum::Error> for AppError {
    fn from(err: axum::Error) -> Self {
        AppError::Server(err)
    }
}
