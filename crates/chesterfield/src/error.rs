use crate::config::ConfigError;
use crate::site::{AreaLookupError, SavingsError};
use crate::telemetry::TelemetryError;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    HttpClient(reqwest::Error),
    Area(AreaLookupError),
    Savings(SavingsError),
    InvalidQuery(QueryRejection),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::HttpClient(err) => write!(f, "http client error: {}", err),
            AppError::Area(err) => write!(f, "area lookup error: {}", err),
            AppError::Savings(err) => write!(f, "savings calculator error: {}", err),
            AppError::InvalidQuery(err) => write!(f, "invalid query: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::HttpClient(err) => Some(err),
            AppError::Area(err) => Some(err),
            AppError::Savings(err) => Some(err),
            AppError::InvalidQuery(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Savings(_) | AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::Area(_) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<QueryRejection> for AppError {
    fn from(value: QueryRejection) -> Self {
        Self::InvalidQuery(value)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::HttpClient(value)
    }
}

impl From<AreaLookupError> for AppError {
    fn from(value: AreaLookupError) -> Self {
        Self::Area(value)
    }
}

impl From<SavingsError> for AppError {
    fn from(value: SavingsError) -> Self {
        Self::Savings(value)
    }
}
