use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Server unreachable")]
    Network,
    #[error("Unexpected response status")]
    UnexpectedStatus,
    #[error("Malformed response")]
    Decode,
    #[error("Invalid input provided")]
    InvalidInput,
    #[error("Realtime protocol error")]
    Protocol,
    #[error("Local storage unavailable")]
    Storage,
    #[error("Internal system error")]
    SystemError,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn network(details: impl fmt::Display) -> Self {
        Self::with_details(ErrorCode::Network, "request failed", details.to_string())
    }

    pub fn status(status: u16) -> Self {
        Self::new(ErrorCode::UnexpectedStatus, format!("server answered {}", status))
    }

    pub fn decode(details: impl fmt::Display) -> Self {
        Self::with_details(ErrorCode::Decode, "could not read response", details.to_string())
    }

    pub fn is_network(&self) -> bool {
        self.code == ErrorCode::Network
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
