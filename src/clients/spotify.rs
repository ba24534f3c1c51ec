use log::debug;
use reqwest::Client;

use crate::clients::{
    errors::Result,
    http,
    nested::{Key, require_text},
};

pub const DEFAULT_TOKEN_URL: &str =
    "https://open.spotify.com/get_access_token?reason=transport&productType=web_player";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

const ACCESS_TOKEN: &[Key] = &[Key::Name("accessToken")];
const FIRST_ARTIST_IMAGE: &[Key] = &[
    Key::Name("artists"),
    Key::Name("items"),
    Key::Index(0),
    Key::Name("images"),
    Key::Index(0),
    Key::Name("url"),
];

/// Looks up artist pictures on Spotify using the anonymous web player token.
/// Last.fm stopped serving real artist images, so this is the preferred
/// source for artist artwork.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(http: Client, token_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        SpotifyClient {
            http,
            token_url: token_url.into(),
            api_url: api_url.into(),
        }
    }

    /// Image URL of the best matching artist, or `None` when anything along
    /// the way fails. Absence is a normal outcome, callers fall back.
    pub async fn artist_artwork(&self, artist_name: &str) -> Option<String> {
        match self.try_artist_artwork(artist_name).await {
            Ok(url) if !url.trim().is_empty() => Some(url),
            Ok(_) => {
                debug!("Spotify returned a blank image for {artist_name}");
                None
            }
            Err(e) => {
                debug!("No Spotify artwork for {artist_name}: {e}");
                None
            }
        }
    }

    async fn try_artist_artwork(&self, artist_name: &str) -> Result<String> {
        let token = self.anonymous_token().await?;
        let url = format!(
            "{}/search?q={}&type=artist&limit=1",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(artist_name)
        );
        let response = http::get_json(&self.http, &url, Some(&token)).await?;
        require_text(&response, FIRST_ARTIST_IMAGE)
    }

    async fn anonymous_token(&self) -> Result<String> {
        let response = http::get_json(&self.http, &self.token_url, None).await?;
        require_text(&response, ACCESS_TOKEN)
    }
}
