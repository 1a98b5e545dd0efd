// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Time(String),
    Backend(BackendError),
}

/// Specific error types for registration backend failures.
/// Used to provide user-friendly, localized status messages.
#[derive(Debug, Clone)]
pub enum BackendError {
    /// No registration matches the submitted code
    NotFound,

    /// The backend answered but flagged the request as failed
    Rejected(String),

    /// Response body could not be decoded
    MalformedResponse(String),

    /// Network-level failure (DNS, connect, timeout)
    Network(String),
}

impl BackendError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            BackendError::NotFound => "error-registration-not-found",
            BackendError::Rejected(_) => "error-registration-rejected",
            BackendError::MalformedResponse(_) => "error-registration-malformed",
            BackendError::Network(_) => "error-registration-network",
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::NotFound => write!(f, "Registration not found"),
            BackendError::Rejected(msg) => write!(f, "Request rejected: {msg}"),
            BackendError::MalformedResponse(msg) => write!(f, "Malformed response: {msg}"),
            BackendError::Network(msg) => write!(f, "Network error: {msg}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {e}"),
            Error::Config(e) => write!(f, "Config Error: {e}"),
            Error::Http(e) => write!(f, "HTTP Error: {e}"),
            Error::Time(e) => write!(f, "Time Error: {e}"),
            Error::Backend(e) => write!(f, "Backend Error: {e}"),
        }
    }
}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        Error::Backend(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Time(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
