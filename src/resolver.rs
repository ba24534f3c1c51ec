use log::{debug, info};

use crate::clients::{
    LastFmClient, SpotifyClient,
    entities::{ArtistSummary, Period, TrackSummary},
    errors::{Error, Result},
    lastfm::method,
    nested::{Key, display_path, require, require_text},
};

const TOP_ARTIST: &[Key] = &[Key::Name("topartists"), Key::Name("artist"), Key::Index(0)];
const TOP_TRACK: &[Key] = &[Key::Name("toptracks"), Key::Name("track"), Key::Index(0)];
const NAME: &[Key] = &[Key::Name("name")];
const PLAY_COUNT: &[Key] = &[Key::Name("playcount")];
const TRACK_ARTIST_NAME: &[Key] = &[Key::Name("artist"), Key::Name("name")];
// Index 3 is the "extralarge" image in Last.fm image lists
const ARTIST_IMAGE: &[Key] = &[Key::Name("image"), Key::Index(3), Key::Name("#text")];
const ALBUM_IMAGE: &[Key] = &[
    Key::Name("track"),
    Key::Name("album"),
    Key::Name("image"),
    Key::Index(3),
    Key::Name("#text"),
];

/// Resolves a user's top artist and top track, including artwork
pub struct Resolver {
    lastfm: LastFmClient,
    spotify: SpotifyClient,
}

impl Resolver {
    pub fn new(lastfm: LastFmClient, spotify: SpotifyClient) -> Self {
        Resolver { lastfm, spotify }
    }

    pub async fn top_artist(&self, username: &str, period: Period) -> Result<ArtistSummary> {
        let response = self
            .lastfm
            .query(
                method::TOP_ARTISTS,
                &[("user", username), ("period", period.as_str()), ("limit", "1")],
            )
            .await?;
        let artist = require(&response, TOP_ARTIST)?;
        let name = require_text(artist, NAME)?;
        let play_count = require_text(artist, PLAY_COUNT)?;

        let artwork_url = match self.spotify.artist_artwork(&name).await {
            Some(url) => url,
            None => {
                debug!("Falling back to Last.fm artwork for {name}");
                non_empty(require_text(artist, ARTIST_IMAGE)?, ARTIST_IMAGE)?
            }
        };

        info!("Top artist for {username} ({period}): {name}");
        Ok(ArtistSummary {
            name,
            play_count,
            artwork_url,
        })
    }

    pub async fn top_track(&self, username: &str, period: Period) -> Result<TrackSummary> {
        let response = self
            .lastfm
            .query(
                method::TOP_TRACKS,
                &[("user", username), ("period", period.as_str()), ("limit", "1")],
            )
            .await?;
        let track = require(&response, TOP_TRACK)?;
        let name = require_text(track, NAME)?;
        let play_count = require_text(track, PLAY_COUNT)?;
        let artist_name = require_text(track, TRACK_ARTIST_NAME)?;

        // Album art only comes with the track info
        let info = self
            .lastfm
            .query(
                method::TRACK_INFO,
                &[("track", name.as_str()), ("artist", artist_name.as_str())],
            )
            .await?;
        let artwork_url = non_empty(require_text(&info, ALBUM_IMAGE)?, ALBUM_IMAGE)?;

        info!("Top track for {username} ({period}): {name} by {artist_name}");
        Ok(TrackSummary {
            name,
            play_count,
            artwork_url,
        })
    }
}

// Last.fm reports missing images as empty strings
fn non_empty(url: String, path: &[Key<'_>]) -> Result<String> {
    if url.trim().is_empty() {
        return Err(Error::MissingField(display_path(path)));
    }
    Ok(url)
}
