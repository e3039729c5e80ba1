//! Playlist APIs.
//!
//! - `playlist` — `GET /playlists/{uuid}`
//! - `playlist_tracks` — `GET /playlists/{uuid}/tracks`
//!
//! Playlist identifiers are UUID strings, not numbers.
//!
//! Track list response:
//! ```json
//! {
//!   "limit": 999, "offset": 0, "totalNumberOfItems": 50,
//!   "items": [ { "id": 1, "title": "...", "artist": {...}, "album": {...} } ]
//! }
//! ```

use crate::client::{TidalClient, resource_path};
use crate::error::Result;
use crate::types::Query;
use serde_json::Value;

impl TidalClient {
    /// Playlist metadata (title, creator, track count).
    pub async fn playlist(&self, query: impl Into<Query>) -> Result<Value> {
        let query = query.into();
        let path = resource_path("playlists", &query.id, "")?;
        self.request(&path, query.listing_params()).await
    }

    pub async fn playlist_tracks(&self, query: impl Into<Query>) -> Result<Value> {
        let query = query.into();
        let path = resource_path("playlists", &query.id, "/tracks")?;
        self.request(&path, query.listing_params()).await
    }
}
