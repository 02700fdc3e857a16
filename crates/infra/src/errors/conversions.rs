//! Conversions from external infrastructure errors into domain errors.

use intrasync_domain::IntraSyncError;
use reqwest::{Error as HttpError, StatusCode};
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub IntraSyncError);

impl From<InfraError> for IntraSyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<IntraSyncError> for InfraError {
    fn from(value: IntraSyncError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoIntraSyncError {
    fn into_intrasync(self) -> IntraSyncError;
}

/// Maps an HTTP status class to a domain error carrying `message`.
pub fn status_error(status: StatusCode, message: &str) -> IntraSyncError {
    let message = format!(
        "HTTP {} {}: {message}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("unknown status")
    );
    match status.as_u16() {
        401 | 403 => IntraSyncError::Auth(message),
        404 => IntraSyncError::NotFound(message),
        429 => IntraSyncError::Network(message),
        400..=499 => IntraSyncError::InvalidInput(message),
        _ => IntraSyncError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → IntraSyncError */
/* -------------------------------------------------------------------------- */

impl IntoIntraSyncError for HttpError {
    fn into_intrasync(self) -> IntraSyncError {
        if self.is_timeout() {
            return IntraSyncError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return IntraSyncError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return IntraSyncError::Parse(format!("invalid HTTP response body: {self}"));
        }

        if let Some(status) = self.status() {
            return status_error(status, "request rejected");
        }

        IntraSyncError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_intrasync())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → IntraSyncError */
/* -------------------------------------------------------------------------- */

impl IntoIntraSyncError for JsonError {
    fn into_intrasync(self) -> IntraSyncError {
        IntraSyncError::Parse(format!(
            "invalid JSON at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_intrasync())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → IntraSyncError */
/* -------------------------------------------------------------------------- */

impl IntoIntraSyncError for std::io::Error {
    fn into_intrasync(self) -> IntraSyncError {
        match self.kind() {
            std::io::ErrorKind::NotFound => IntraSyncError::NotFound(self.to_string()),
            _ => IntraSyncError::Io(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_intrasync())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → IntraSyncError */
/* -------------------------------------------------------------------------- */

impl IntoIntraSyncError for toml::de::Error {
    fn into_intrasync(self) -> IntraSyncError {
        IntraSyncError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_intrasync())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
