//! Credentials and the login handshake.
//!
//! Login is a single form-encoded POST:
//!
//! ```text
//! POST /login/username
//! X-Tidal-Token: <application token>
//! Content-Type: application/x-www-form-urlencoded
//!
//! username=...&password=...&clientUniqueKey=<uuid v4>
//! ```
//!
//! Response:
//!
//! ```json
//! { "userId": 42, "sessionId": "3b0d...", "countryCode": "US" }
//! ```
//!
//! The `sessionId` is sent as `X-Tidal-SessionId` on every later read. The
//! API never tells the client when it expires; an expired session shows up as
//! an HTTP 401 on the next call.

use crate::client::ClientConfig;
use crate::error::{CredentialField, Result, TidalError};
use crate::types::Quality;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, error, info};

/// Static login input: account, application token and preferred quality.
///
/// Built once, never mutated. `Debug` output hides the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    token: String,
    quality: Quality,
}

impl Credentials {
    pub fn builder() -> CredentialsBuilder {
        CredentialsBuilder::default()
    }

    /// Read credentials from a JSON object with string fields `username`,
    /// `password`, `token` and `quality`.
    ///
    /// # Errors
    ///
    /// - [`TidalError::InvalidConfig`] if `value` is not an object
    /// - [`TidalError::InvalidCredential`] naming the first field that is
    ///   missing or not a string
    ///
    /// `quality` may be any code; unlisted ones become [`Quality::Other`].
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            TidalError::InvalidConfig("credentials must be a JSON object".into())
        })?;
        let field = |name: &str, kind: CredentialField| {
            obj.get(name)
                .and_then(Value::as_str)
                .ok_or(TidalError::InvalidCredential(kind))
        };

        let username = field("username", CredentialField::Username)?;
        let password = field("password", CredentialField::Password)?;
        let token = field("token", CredentialField::Token)?;
        let quality = Quality::from(field("quality", CredentialField::Quality)?);

        Ok(Self {
            username: username.to_owned(),
            password: password.to_owned(),
            token: token.to_owned(),
            quality,
        })
    }

    /// Parse credentials from a JSON string. See [`from_json`](Self::from_json).
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(&value)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The API application token sent as `X-Tidal-Token`.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Preferred stream quality; becomes the session default on login.
    pub fn quality(&self) -> &Quality {
        &self.quality
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("token", &self.token)
            .field("quality", &self.quality)
            .finish()
    }
}

/// Builder for [`Credentials`]. Every field is required.
#[derive(Debug, Default)]
pub struct CredentialsBuilder {
    username: Option<String>,
    password: Option<String>,
    token: Option<String>,
    quality: Option<Quality>,
}

impl CredentialsBuilder {
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn quality(mut self, quality: impl Into<Quality>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    /// Fails with [`TidalError::InvalidCredential`] for the first unset field.
    pub fn build(self) -> Result<Credentials> {
        Ok(Credentials {
            username: self
                .username
                .ok_or(TidalError::InvalidCredential(CredentialField::Username))?,
            password: self
                .password
                .ok_or(TidalError::InvalidCredential(CredentialField::Password))?,
            token: self
                .token
                .ok_or(TidalError::InvalidCredential(CredentialField::Token))?,
            quality: self
                .quality
                .ok_or(TidalError::InvalidCredential(CredentialField::Quality))?,
        })
    }
}

/// An authenticated session, created by a successful login.
///
/// Serializable so callers can keep it between runs and restore it with
/// [`TidalClient::with_session`](crate::TidalClient::with_session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque session token, sent as `X-Tidal-SessionId`.
    pub session_id: String,
    /// TIDAL user ID of the logged-in account.
    pub user_id: u64,
    /// Default `countryCode` for reads.
    pub country_code: String,
    /// Default `soundQuality` for stream URL requests.
    pub quality: Quality,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    session_id: String,
    user_id: u64,
    country_code: String,
}

impl Session {
    /// Perform the login handshake and return the new session.
    ///
    /// Errors are logged and returned unchanged; nothing is retried.
    pub(crate) async fn login(
        http: &Client,
        config: &ClientConfig,
        credentials: &Credentials,
        client_unique_key: &str,
    ) -> Result<Self> {
        let url = format!("{}/login/username", config.base_url);
        debug!(url = %url, username = %credentials.username, "logging in");

        let resp = match send_login(http, &url, credentials, client_unique_key).await {
            Ok(resp) => resp,
            Err(e) => {
                error!(username = %credentials.username, error = %e, "login failed");
                return Err(e.into());
            }
        };

        info!(
            user_id = resp.user_id,
            country_code = %resp.country_code,
            "logged in"
        );

        Ok(Self {
            session_id: resp.session_id,
            user_id: resp.user_id,
            country_code: resp.country_code,
            quality: credentials.quality.clone(),
        })
    }
}

async fn send_login(
    http: &Client,
    url: &str,
    credentials: &Credentials,
    client_unique_key: &str,
) -> reqwest::Result<LoginResponse> {
    let body = format!(
        "username={}&password={}&clientUniqueKey={}",
        urlencoding::encode(&credentials.username),
        urlencoding::encode(&credentials.password),
        urlencoding::encode(client_unique_key),
    );

    http.post(url)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header("X-Tidal-Token", &credentials.token)
        .body(body)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}
