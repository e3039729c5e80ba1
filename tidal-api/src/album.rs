//! Album APIs.
//!
//! - `album` — `GET /albums/{id}`
//! - `album_tracks` — `GET /albums/{id}/tracks`
//!
//! Both send `limit`, `filter`, `offset` and `countryCode`.

use crate::client::{TidalClient, resource_path};
use crate::error::Result;
use crate::types::Query;
use serde_json::Value;

impl TidalClient {
    /// Album metadata (title, artists, cover id, release date).
    pub async fn album(&self, query: impl Into<Query>) -> Result<Value> {
        let query = query.into();
        let path = resource_path("albums", &query.id, "")?;
        self.request(&path, query.listing_params()).await
    }

    /// Paged track list of an album.
    pub async fn album_tracks(&self, query: impl Into<Query>) -> Result<Value> {
        let query = query.into();
        let path = resource_path("albums", &query.id, "/tracks")?;
        self.request(&path, query.listing_params()).await
    }
}
