//! Artwork URLs.
//!
//! Covers and pictures are referenced in API responses by an image id such
//! as `ab12cd34-5678-90ef-...`. The image itself is served from
//! `resources.tidal.com` under the id with every `-` turned into `/`.

use crate::client::TidalClient;

/// Resolution used when the caller gives none.
pub const DEFAULT_ART_RESOLUTION: u32 = 1280;

/// Build the square artwork URL for `image_id`.
///
/// ```
/// assert_eq!(
///     tidal_api::art_url("12345678-abcd", None),
///     "https://resources.tidal.com/images/12345678/abcd/1280x1280.jpg",
/// );
/// ```
pub fn art_url(image_id: &str, resolution: Option<u32>) -> String {
    let res = resolution.unwrap_or(DEFAULT_ART_RESOLUTION);
    format!(
        "https://resources.tidal.com/images/{}/{res}x{res}.jpg",
        image_id.replace('-', "/")
    )
}

impl TidalClient {
    /// Same as the free function [`art_url`]; needs no session.
    pub fn art_url(image_id: &str, resolution: Option<u32>) -> String {
        art_url(image_id, resolution)
    }
}
