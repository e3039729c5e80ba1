//! HTTP client and request gateway for the TIDAL API.
//!
//! Every read is a GET against `https://api.tidalhifi.com/v1{path}?{query}`
//! carrying two headers:
//!
//! - `Origin: http://listen.tidal.com`
//! - `X-Tidal-SessionId: <session id from login>`
//!
//! `countryCode` is appended from the session unless the call already set
//! one. When the query contains `types=a,b,...`, the response is narrowed to
//! those top-level keys:
//!
//! ```json
//! // GET /search?...&types=artists,tracks
//! { "artists": {...}, "albums": {...}, "tracks": {...} }
//! // returned as
//! { "artists": {...}, "tracks": {...} }
//! ```

use crate::auth::{Credentials, Session};
use crate::error::{Result, TidalError};
use reqwest::Client;
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};
use uuid::Uuid;

/// Production API root.
pub const BASE_URL: &str = "https://api.tidalhifi.com/v1";
const ORIGIN: &str = "http://listen.tidal.com";

/// Transport settings. The defaults target the production API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root without a trailing slash.
    pub base_url: String,
    /// Value of the `Origin` header sent with reads.
    pub origin: String,
    /// Whole-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            origin: ORIGIN.to_owned(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Default settings pointed at another API root (e.g. a mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Async client for the TIDAL API.
///
/// Holds the [`Credentials`], a per-instance client identity key and, after
/// [`login`](Self::login), the [`Session`]. Endpoint methods live in the
/// `search`, `artist`, `album`, `playlist`, `track` and `user` modules as
/// `impl TidalClient` blocks.
///
/// Reads take `&self` and may run concurrently. `login` and `logout` take
/// `&mut self`, so a session is never replaced while a read is using it.
pub struct TidalClient {
    http: Client,
    config: ClientConfig,
    credentials: Credentials,
    client_unique_key: String,
    session: Option<Session>,
}

impl TidalClient {
    /// Create a logged-out client for the production API.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a logged-out client with explicit transport settings.
    pub fn with_config(credentials: Credentials, mut config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        config.base_url = config.base_url.trim_end_matches('/').to_owned();

        Ok(Self {
            http,
            config,
            credentials,
            client_unique_key: Uuid::new_v4().to_string(),
            session: None,
        })
    }

    /// Create a client from a session obtained earlier (e.g. restored from
    /// disk by the caller). No login call is made.
    pub fn with_session(credentials: Credentials, session: Session) -> Result<Self> {
        Self::with_session_and_config(credentials, session, ClientConfig::default())
    }

    /// [`with_session`](Self::with_session) with explicit transport settings.
    pub fn with_session_and_config(
        credentials: Credentials,
        session: Session,
        config: ClientConfig,
    ) -> Result<Self> {
        let mut client = Self::with_config(credentials, config)?;
        client.session = Some(session);
        Ok(client)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The client identity key sent on login. Stable for this instance.
    pub fn client_unique_key(&self) -> &str {
        &self.client_unique_key
    }

    /// The current session, if logged in.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// User ID of the logged-in account.
    pub fn my_id(&self) -> Option<u64> {
        self.session.as_ref().map(|s| s.user_id)
    }

    /// Log in with the stored credentials.
    ///
    /// On success the new session replaces any previous one. On failure the
    /// error is returned unchanged and the client keeps its previous state.
    pub async fn login(&mut self) -> Result<&Session> {
        let session = Session::login(
            &self.http,
            &self.config,
            &self.credentials,
            &self.client_unique_key,
        )
        .await?;
        Ok(&*self.session.insert(session))
    }

    /// Forget the current session locally. Returns it, if there was one.
    pub fn logout(&mut self) -> Option<Session> {
        self.session.take()
    }

    pub(crate) fn require_session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(TidalError::NotLoggedIn)
    }

    /// Issue an authenticated GET to `path` (e.g. `/albums/123/tracks`).
    ///
    /// Fails with [`TidalError::NotLoggedIn`] before any network I/O when
    /// there is no session. Transport errors and non-2xx statuses are logged
    /// with the path and params, then returned as [`TidalError::Http`].
    pub async fn request(&self, path: &str, mut params: Params) -> Result<Value> {
        let session = self.require_session()?;
        if !params.contains("countryCode") {
            params.push("countryCode", &session.country_code);
        }

        let url = format!("{}{path}?{params}", self.config.base_url);
        debug!(path, query = %params, "GET");

        let body = match self.get_json(&url, session).await {
            Ok(body) => body,
            Err(e) => {
                error!(path, params = ?params, error = %e, "request failed");
                return Err(e.into());
            }
        };

        Ok(match params.get("types") {
            Some(types) => project(&body, types),
            None => body,
        })
    }

    async fn get_json(&self, url: &str, session: &Session) -> reqwest::Result<Value> {
        self.http
            .get(url)
            .header("Origin", &self.config.origin)
            .header("X-Tidal-SessionId", &session.session_id)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

/// Build `/{kind}/{id}{suffix}`, percent-encoding the identifier.
///
/// A blank identifier would address the collection root, so it is rejected.
pub(crate) fn resource_path(kind: &str, id: &str, suffix: &str) -> Result<String> {
    if id.trim().is_empty() {
        return Err(TidalError::EmptyId);
    }
    Ok(format!("/{kind}/{}{suffix}", urlencoding::encode(id)))
}

/// Narrow `body` to the comma-separated top-level keys in `types`.
///
/// Each requested key is present in the result; keys missing from `body`
/// map to `null`.
pub(crate) fn project(body: &Value, types: &str) -> Value {
    let mut out = Map::new();
    for key in types.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        out.insert(key.to_owned(), body.get(key).cloned().unwrap_or(Value::Null));
    }
    Value::Object(out)
}

/// Ordered query parameters. `Display` renders the percent-encoded query
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Existing keys are not replaced.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.push((key.into(), value.to_string()));
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", urlencoding::encode(k), urlencoding::encode(v))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_keep_insertion_order() {
        let params: Params = [("query", "abc"), ("limit", "999"), ("offset", "0")]
            .into_iter()
            .collect();
        assert_eq!(params.to_string(), "query=abc&limit=999&offset=0");
    }

    #[test]
    fn params_percent_encode_values() {
        let mut params = Params::new();
        params.push("query", "daft punk & co");
        params.push("types", "artists,tracks");
        assert_eq!(
            params.to_string(),
            "query=daft%20punk%20%26%20co&types=artists%2Ctracks"
        );
    }

    #[test]
    fn params_get_returns_first_match() {
        let mut params = Params::new();
        params.push("countryCode", "US");
        params.push("countryCode", "GB");
        assert_eq!(params.get("countryCode"), Some("US"));
        assert!(!params.contains("types"));
    }

    #[test]
    fn projection_keeps_requested_keys() {
        let body = json!({
            "artists": { "items": [1] },
            "albums": { "items": [2] },
            "tracks": { "items": [3] },
        });
        let projected = project(&body, "artists,tracks");
        assert_eq!(
            projected,
            json!({ "artists": { "items": [1] }, "tracks": { "items": [3] } })
        );
    }

    #[test]
    fn projection_maps_absent_keys_to_null() {
        let body = json!({ "artists": [] });
        assert_eq!(
            project(&body, "artists, videos,"),
            json!({ "artists": [], "videos": null })
        );
    }

    #[test]
    fn resource_path_encodes_id() {
        assert_eq!(
            resource_path("albums", "123", "/tracks").unwrap(),
            "/albums/123/tracks"
        );
        assert_eq!(
            resource_path("playlists", "a b", "").unwrap(),
            "/playlists/a%20b"
        );
    }

    #[test]
    fn resource_path_rejects_blank_id() {
        for id in ["", "  "] {
            assert!(matches!(
                resource_path("albums", id, ""),
                Err(TidalError::EmptyId)
            ));
        }
    }
}
