//! User profile API.
//!
//! Endpoint: `GET /users/{id}`
//!
//! Sends `limit` and `offset` only; the gateway adds `countryCode`. Reading
//! another account's profile usually answers HTTP 403. Use
//! [`TidalClient::my_id`] for the logged-in user's ID.

use crate::client::{Params, TidalClient, resource_path};
use crate::error::Result;
use crate::types::{DEFAULT_LIMIT, Query};
use serde_json::Value;

impl TidalClient {
    /// Get a user profile.
    pub async fn user(&self, query: impl Into<Query>) -> Result<Value> {
        let query = query.into();
        let mut params = Params::new();
        params.push("limit", query.limit.unwrap_or(DEFAULT_LIMIT));
        params.push("offset", query.offset.unwrap_or(0));
        query.push_country_code(&mut params);

        let path = resource_path("users", &query.id, "")?;
        self.request(&path, params).await
    }
}
