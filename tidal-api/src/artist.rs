//! Artist APIs.
//!
//! | Method                | Endpoint                      |
//! |-----------------------|-------------------------------|
//! | `artist`              | `GET /artists/{id}`           |
//! | `artist_top_tracks`   | `GET /artists/{id}/toptracks` |
//! | `artist_videos`       | `GET /artists/{id}/videos`    |
//! | `artist_bio`          | `GET /artists/{id}/bio`       |
//! | `similar_artists`     | `GET /artists/{id}/similar`   |
//! | `artist_albums`       | `GET /artists/{id}/albums`    |
//!
//! All but `artist_bio` send `limit`, `filter` and `offset`. Listing
//! responses are paged:
//!
//! ```json
//! { "limit": 999, "offset": 0, "totalNumberOfItems": 42, "items": [...] }
//! ```

use crate::client::{TidalClient, resource_path};
use crate::error::Result;
use crate::types::Query;
use serde_json::Value;

impl TidalClient {
    /// Artist metadata (name, picture, popularity).
    pub async fn artist(&self, query: impl Into<Query>) -> Result<Value> {
        self.artist_listing(query.into(), "").await
    }

    /// The artist's most popular tracks.
    pub async fn artist_top_tracks(&self, query: impl Into<Query>) -> Result<Value> {
        self.artist_listing(query.into(), "/toptracks").await
    }

    pub async fn artist_videos(&self, query: impl Into<Query>) -> Result<Value> {
        self.artist_listing(query.into(), "/videos").await
    }

    /// Biography text. Only the country code is sent.
    ///
    /// Artists without a biography answer with HTTP 404, surfaced as
    /// [`TidalError::Http`](crate::TidalError::Http).
    pub async fn artist_bio(&self, query: impl Into<Query>) -> Result<Value> {
        let query = query.into();
        let path = resource_path("artists", &query.id, "/bio")?;
        self.request(&path, query.country_params()).await
    }

    pub async fn similar_artists(&self, query: impl Into<Query>) -> Result<Value> {
        self.artist_listing(query.into(), "/similar").await
    }

    /// Albums by the artist. Use [`Filter`](crate::Filter) to select EPs and
    /// singles or compilations instead of studio albums.
    pub async fn artist_albums(&self, query: impl Into<Query>) -> Result<Value> {
        self.artist_listing(query.into(), "/albums").await
    }

    async fn artist_listing(&self, query: Query, suffix: &str) -> Result<Value> {
        let path = resource_path("artists", &query.id, suffix)?;
        self.request(&path, query.listing_params()).await
    }
}
