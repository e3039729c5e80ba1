//! Search API.
//!
//! Endpoint: `GET /search`
//!
//! Query parameters:
//! - `query` — search text
//! - `limit` — page size (default 999)
//! - `types` — comma-separated categories (default
//!   `artists,albums,tracks,videos,playlists`)
//! - `offset` — pagination offset (0-based)
//! - `countryCode` — defaults to the session country
//!
//! Response JSON, one paged block per requested category:
//! ```json
//! {
//!   "artists": { "limit": 999, "offset": 0, "totalNumberOfItems": 3, "items": [...] },
//!   "albums":  { ... },
//!   "tracks":  { ... },
//!   "videos":  { ... },
//!   "playlists": { ... }
//! }
//! ```
//!
//! Because `types` is always sent, the result is projected to exactly the
//! requested categories.

use crate::client::{Params, TidalClient};
use crate::error::Result;
use crate::types::{DEFAULT_LIMIT, Query};
use serde_json::Value;

impl TidalClient {
    /// Search the catalogue.
    ///
    /// `query` is either the bare search text or a [`Query`] whose `id` is the
    /// search text, with optional `limit`, `offset`, `types` and country code.
    ///
    /// # Errors
    ///
    /// - [`TidalError::NotLoggedIn`](crate::TidalError::NotLoggedIn) — no session
    /// - [`TidalError::Http`](crate::TidalError::Http) — network failure or non-2xx
    pub async fn search(&self, query: impl Into<Query>) -> Result<Value> {
        let query = query.into();
        let mut params = Params::new();
        params.push("query", &query.id);
        params.push("limit", query.limit.unwrap_or(DEFAULT_LIMIT));
        params.push("types", query.joined_types());
        params.push("offset", query.offset.unwrap_or(0));
        query.push_country_code(&mut params);
        self.request("/search", params).await
    }
}
