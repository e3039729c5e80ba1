//! Request-side types for the TIDAL API.
//!
//! Responses are returned as raw [`serde_json::Value`]; these types describe
//! what a call asks for, not what comes back.

use crate::client::Params;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Page size sent when the caller gives none ("no practical limit").
pub const DEFAULT_LIMIT: u32 = 999;

/// Audio quality requested from the stream URL endpoints.
///
/// | Variant    | Wire code  | Typical format     |
/// |------------|------------|--------------------|
/// | `Low`      | `LOW`      | 96 kbps AAC        |
/// | `High`     | `HIGH`     | 320 kbps AAC       |
/// | `Lossless` | `LOSSLESS` | 16-bit FLAC        |
/// | `HiRes`    | `HI_RES`   | MQA / 24-bit FLAC  |
///
/// Any other code (e.g. `HI_RES_LOSSLESS`) is kept verbatim in `Other` and
/// sent as-is; the server decides whether it understands it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Quality {
    Low,
    High,
    Lossless,
    HiRes,
    Other(String),
}

impl Quality {
    /// Return the value sent as the `soundQuality` parameter.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "LOW",
            Self::High => "HIGH",
            Self::Lossless => "LOSSLESS",
            Self::HiRes => "HI_RES",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Quality {
    fn from(code: &str) -> Self {
        match code {
            "LOW" => Self::Low,
            "HIGH" => Self::High,
            "LOSSLESS" => Self::Lossless,
            "HI_RES" => Self::HiRes,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Quality {
    fn from(code: String) -> Self {
        match Self::from(code.as_str()) {
            Self::Other(_) => Self::Other(code),
            known => known,
        }
    }
}

impl From<Quality> for String {
    fn from(quality: Quality) -> Self {
        match quality {
            Quality::Other(code) => code,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for Quality {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Release filter for artist and collection listings (`filter` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    EpsAndSingles,
    Compilations,
}

impl Filter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::EpsAndSingles => "EPSANDSINGLES",
            Self::Compilations => "COMPILATIONS",
        }
    }
}

/// Result category for [`TidalClient::search`](crate::TidalClient::search).
///
/// The wire names double as the top-level keys of the search response, so
/// the `types` parameter also drives response projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Artists,
    Albums,
    Tracks,
    Videos,
    Playlists,
}

impl SearchType {
    /// Every category, in the order sent when the caller picks none.
    pub const ALL: [Self; 5] = [
        Self::Artists,
        Self::Albums,
        Self::Tracks,
        Self::Videos,
        Self::Playlists,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artists => "artists",
            Self::Albums => "albums",
            Self::Tracks => "tracks",
            Self::Videos => "videos",
            Self::Playlists => "playlists",
        }
    }
}

/// Arguments for an endpoint call.
///
/// A bare identifier converts straight into a `Query` (`"1234"`, `1234u64`,
/// `String`), so `client.album("1234")` and
/// `client.album(Query::new("1234").limit(10))` are both valid. For
/// [`search`](crate::TidalClient::search) the `id` holds the search text.
///
/// Overrides left as `None` fall back to the defaults: `limit` 999,
/// `offset` 0, `filter` `ALL`, quality and country code from the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub id: String,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub filter: Option<Filter>,
    pub quality: Option<Quality>,
    pub country_code: Option<String>,
    pub types: Option<Vec<SearchType>>,
}

impl Query {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn quality(mut self, quality: impl Into<Quality>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    #[must_use]
    pub fn country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    #[must_use]
    pub fn types(mut self, types: impl IntoIterator<Item = SearchType>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    /// `limit`, `filter`, `offset` for paginated listings.
    pub(crate) fn listing_params(&self) -> Params {
        let mut params = Params::new();
        params.push("limit", self.limit.unwrap_or(DEFAULT_LIMIT));
        params.push("filter", self.filter.unwrap_or_default().as_str());
        params.push("offset", self.offset.unwrap_or(0));
        self.push_country_code(&mut params);
        params
    }

    /// Only the country code override, if any.
    pub(crate) fn country_params(&self) -> Params {
        let mut params = Params::new();
        self.push_country_code(&mut params);
        params
    }

    /// `types` joined with commas. An unset or empty selection means every
    /// category.
    pub(crate) fn joined_types(&self) -> String {
        let types: &[SearchType] = match self.types.as_deref() {
            Some(types) if !types.is_empty() => types,
            _ => &SearchType::ALL,
        };
        types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub(crate) fn push_country_code(&self, params: &mut Params) {
        if let Some(cc) = &self.country_code {
            params.push("countryCode", cc);
        }
    }
}

impl From<&str> for Query {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Query {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&String> for Query {
    fn from(id: &String) -> Self {
        Self::new(id.as_str())
    }
}

impl From<u64> for Query {
    fn from(id: u64) -> Self {
        Self::new(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_parses_wire_codes() {
        assert_eq!("HI_RES".parse::<Quality>(), Ok(Quality::HiRes));
        assert_eq!(Quality::from("LOSSLESS"), Quality::Lossless);
        assert_eq!(Quality::High.to_string(), "HIGH");
    }

    #[test]
    fn quality_keeps_unlisted_codes() {
        let q = Quality::from("HI_RES_LOSSLESS");
        assert_eq!(q, Quality::Other("HI_RES_LOSSLESS".into()));
        assert_eq!(q.as_str(), "HI_RES_LOSSLESS");
        assert_eq!(String::from(q), "HI_RES_LOSSLESS");
    }

    #[test]
    fn quality_serde_uses_wire_codes() {
        let json = serde_json::to_string(&Quality::HiRes).unwrap();
        assert_eq!(json, r#""HI_RES""#);
        let q: Quality = serde_json::from_str(r#""LOW""#).unwrap();
        assert_eq!(q, Quality::Low);
        let q: Quality = serde_json::from_str(r#""DOLBY_ATMOS""#).unwrap();
        assert_eq!(q, Quality::Other("DOLBY_ATMOS".into()));
        assert_eq!(serde_json::to_string(&q).unwrap(), r#""DOLBY_ATMOS""#);
    }

    #[test]
    fn bare_id_gets_listing_defaults() {
        let q = Query::from(1234u64);
        assert_eq!(q.id, "1234");
        assert_eq!(
            q.listing_params().to_string(),
            "limit=999&filter=ALL&offset=0"
        );
    }

    #[test]
    fn overrides_replace_defaults() {
        let q = Query::new("1")
            .limit(10)
            .offset(20)
            .filter(Filter::Compilations)
            .country_code("GB");
        assert_eq!(
            q.listing_params().to_string(),
            "limit=10&filter=COMPILATIONS&offset=20&countryCode=GB"
        );
    }

    #[test]
    fn search_types_default_to_all() {
        assert_eq!(
            Query::new("x").joined_types(),
            "artists,albums,tracks,videos,playlists"
        );
        let q = Query::new("x").types([SearchType::Tracks, SearchType::Albums]);
        assert_eq!(q.joined_types(), "tracks,albums");
    }

    #[test]
    fn empty_search_types_mean_all() {
        let q = Query::new("x").types([]);
        assert_eq!(q.joined_types(), "artists,albums,tracks,videos,playlists");
    }
}
