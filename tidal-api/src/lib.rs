//! TIDAL streaming API client library.
//!
//! Provides authenticated, async access to the TIDAL v1 API: search,
//! artist/album/playlist lookup, track metadata and stream URLs, and user
//! profiles. Responses are returned as raw [`serde_json::Value`].
//!
//! # Authentication
//!
//! Every read needs a session obtained with [`TidalClient::login`]. Calls made
//! before that fail with [`TidalError::NotLoggedIn`] without touching the
//! network.
//!
//! ```no_run
//! use tidal_api::{Credentials, Quality, TidalClient};
//!
//! # async fn run() -> tidal_api::Result<()> {
//! let credentials = Credentials::builder()
//!     .username("user@example.com")
//!     .password("secret")
//!     .token("APP_TOKEN")
//!     .quality(Quality::Lossless)
//!     .build()?;
//!
//! let mut client = TidalClient::new(credentials)?;
//! client.login().await?;
//!
//! let results = client.search("daft punk").await?;
//! println!("{}", results["artists"]["totalNumberOfItems"]);
//! # Ok(())
//! # }
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                                  | Endpoint                      |
//! |-----------------------------------------|-------------------------------|
//! | [`TidalClient::login`]                  | `POST /login/username`        |
//! | [`TidalClient::search`]                 | `/search`                     |
//! | [`TidalClient::artist`]                 | `/artists/{id}`               |
//! | [`TidalClient::artist_top_tracks`]      | `/artists/{id}/toptracks`     |
//! | [`TidalClient::artist_videos`]          | `/artists/{id}/videos`        |
//! | [`TidalClient::artist_bio`]             | `/artists/{id}/bio`           |
//! | [`TidalClient::similar_artists`]        | `/artists/{id}/similar`       |
//! | [`TidalClient::artist_albums`]          | `/artists/{id}/albums`        |
//! | [`TidalClient::album`]                  | `/albums/{id}`                |
//! | [`TidalClient::album_tracks`]           | `/albums/{id}/tracks`         |
//! | [`TidalClient::playlist`]               | `/playlists/{id}`             |
//! | [`TidalClient::playlist_tracks`]        | `/playlists/{id}/tracks`      |
//! | [`TidalClient::track_info`]             | `/tracks/{id}`                |
//! | [`TidalClient::stream_url`]             | `/tracks/{id}/streamUrl`      |
//! | [`TidalClient::offline_url`]            | `/tracks/{id}/offlineUrl`     |
//! | [`TidalClient::video_stream_url`]       | `/videos/{id}/streamUrl`      |
//! | [`TidalClient::user`]                   | `/users/{id}`                 |
//!
//! Anything else can be reached through [`TidalClient::request`].
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (request paths at `debug`, login at
//! `info`, failures at `error`) and installs no subscriber.

mod album;
pub mod art;
mod artist;
pub mod auth;
pub mod client;
pub mod error;
mod playlist;
mod search;
mod track;
pub mod types;
mod user;

pub use art::art_url;
pub use auth::{Credentials, CredentialsBuilder, Session};
pub use client::{ClientConfig, Params, TidalClient};
pub use error::{CredentialField, Result, TidalError};
pub use types::{Filter, Query, Quality, SearchType};
