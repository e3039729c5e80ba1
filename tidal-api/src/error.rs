//! Error types for the TIDAL API client.

use std::fmt;
use thiserror::Error;

/// Errors that can occur when interacting with the TIDAL API.
#[derive(Debug, Error)]
pub enum TidalError {
    /// Credential input was not a JSON object.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A credential field is missing or has the wrong type.
    #[error("{0} invalid or missing")]
    InvalidCredential(CredentialField),

    /// A read was attempted before [`login`](crate::TidalClient::login).
    #[error("not logged in, call login() before using API calls")]
    NotLoggedIn,

    /// An endpoint call was given an empty resource identifier.
    #[error("resource identifier is empty")]
    EmptyId,

    /// HTTP transport error or non-2xx status, passed through unchanged.
    ///
    /// Use [`reqwest::Error::status`] to tell a remote rejection (e.g. `401`
    /// for an expired session) from a connection failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The credential field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Password,
    Token,
    Quality,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Token => "token",
            Self::Quality => "stream quality",
        })
    }
}

/// Convenience alias for `Result<T, TidalError>`.
pub type Result<T> = std::result::Result<T, TidalError>;
