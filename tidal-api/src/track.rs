//! Track and video APIs.
//!
//! # Endpoints
//!
//! ## `track_info` — `GET /tracks/{id}`
//!
//! Sends `countryCode` only. Response:
//! ```json
//! {
//!   "id": 123, "title": "...", "duration": 240,
//!   "artist": { "id": 1, "name": "..." },
//!   "album": { "id": 2, "title": "...", "cover": "ab12cd34-..." }
//! }
//! ```
//!
//! ## `stream_url` — `GET /tracks/{id}/streamUrl`
//!
//! ## `offline_url` — `GET /tracks/{id}/offlineUrl`
//!
//! Both send `soundQuality` (session quality unless overridden) and
//! `countryCode`. Response:
//! ```json
//! { "url": "https://...", "trackId": 123, "soundQuality": "LOSSLESS", "encryptionKey": "" }
//! ```
//!
//! The server may answer with a lower `soundQuality` than requested when the
//! subscription does not cover it.
//!
//! ## `video_stream_url` — `GET /videos/{id}/streamUrl`
//!
//! Sends `countryCode` only.

use crate::client::{Params, TidalClient, resource_path};
use crate::error::Result;
use crate::types::Query;
use serde_json::Value;

impl TidalClient {
    /// Get track metadata.
    pub async fn track_info(&self, query: impl Into<Query>) -> Result<Value> {
        let query = query.into();
        let path = resource_path("tracks", &query.id, "")?;
        self.request(&path, query.country_params()).await
    }

    /// Get a playback URL for a track.
    ///
    /// The URL is a short-lived CDN link. Quality comes from the query or,
    /// failing that, the session.
    pub async fn stream_url(&self, query: impl Into<Query>) -> Result<Value> {
        self.track_url(query.into(), "/streamUrl").await
    }

    /// Get a URL intended for offline storage of a track.
    pub async fn offline_url(&self, query: impl Into<Query>) -> Result<Value> {
        self.track_url(query.into(), "/offlineUrl").await
    }

    pub async fn video_stream_url(&self, query: impl Into<Query>) -> Result<Value> {
        let query = query.into();
        let path = resource_path("videos", &query.id, "/streamUrl")?;
        self.request(&path, query.country_params()).await
    }

    async fn track_url(&self, query: Query, suffix: &str) -> Result<Value> {
        let quality = match &query.quality {
            Some(q) => q,
            None => &self.require_session()?.quality,
        };
        let mut params = Params::new();
        params.push("soundQuality", quality);
        query.push_country_code(&mut params);

        let path = resource_path("tracks", &query.id, suffix)?;
        self.request(&path, params).await
    }
}
