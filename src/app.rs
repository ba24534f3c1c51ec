use std::path::PathBuf;

use log::{debug, info, warn};
use reqwest::Client;

use crate::{
    clients::{
        LastFmClient, SpotifyClient,
        entities::{ArtistSummary, Period, TopStats, TrackSummary},
        errors::Result,
        lastfm, spotify,
    },
    render::{self, Root},
    resolver::Resolver,
};

const DEMO_ARTIST_ARTWORK_URL: &str =
    "https://commons.wikimedia.org/wiki/Special:FilePath/The_Killers_Brandon_Flowers_2017.jpg";
const DEMO_TRACK_ARTWORK_URL: &str =
    "https://en.wikipedia.org/wiki/Special:FilePath/The_Killers_-_Hot_Fuss.png"; // Hot Fuss cover

/// Shown when no account is configured
pub const DEMO_PERIOD: Period = Period::Year;
pub const DEMO_ARTIST_NAME: &str = "The Killers";
pub const DEMO_ARTIST_PLAYS: &str = "123";
pub const DEMO_TRACK_NAME: &str = "Mr. Brightside";
pub const DEMO_TRACK_PLAYS: &str = "10";

const ARTIST_ERROR: &str = "Could not load top artist";
const TRACK_ERROR: &str = "Could not load top track";

/// Load `.env` from the working directory, then `<config dir>/rtopfm/.env`.
/// Variables already set win, missing files are ignored.
pub fn load_env_files() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }
    let path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".")) // Fallback to the working directory
        .join("rtopfm")
        .join(".env");
    if dotenvy::from_path(&path).is_ok() {
        debug!("Loaded environment from {}", path.display());
    }
}

/// Demo stats, with artwork taken from `endpoints`
#[must_use]
pub fn demo_stats(endpoints: &Endpoints) -> TopStats {
    TopStats {
        period: DEMO_PERIOD,
        artist: ArtistSummary {
            name: DEMO_ARTIST_NAME.to_string(),
            play_count: DEMO_ARTIST_PLAYS.to_string(),
            artwork_url: endpoints.demo_artist_artwork.clone(),
        },
        track: TrackSummary {
            name: DEMO_TRACK_NAME.to_string(),
            play_count: DEMO_TRACK_PLAYS.to_string(),
            artwork_url: endpoints.demo_track_artwork.clone(),
        },
    }
}

/// Where the remote services live. Overridable so tests can use a local server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub lastfm_api: String,
    pub spotify_token: String,
    pub spotify_api: String,
    pub demo_artist_artwork: String,
    pub demo_track_artwork: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            lastfm_api: lastfm::DEFAULT_API_URL.to_string(),
            spotify_token: spotify::DEFAULT_TOKEN_URL.to_string(),
            spotify_api: spotify::DEFAULT_API_URL.to_string(),
            demo_artist_artwork: DEMO_ARTIST_ARTWORK_URL.to_string(),
            demo_track_artwork: DEMO_TRACK_ARTWORK_URL.to_string(),
        }
    }
}

pub enum Mode {
    /// Something is not configured, show fixed sample data
    Demo(TopStats),
    Live {
        username: String,
        period: Period,
        resolver: Resolver,
    },
}

// Configuration for the App struct
pub struct Config {
    pub mode: Mode,
    pub http: Client,
}

#[derive(Default)]
pub struct ConfigBuilder {
    username: Option<String>,
    period: Option<String>,
    api_key: Option<String>,
    endpoints: Option<Endpoints>,
    http: Option<Client>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `LASTFM_USERNAME`, `LASTFM_PERIOD` and `LASTFM_API_KEY`
    #[must_use]
    pub fn from_env() -> Self {
        Self::new()
            .username(std::env::var("LASTFM_USERNAME").ok())
            .period(std::env::var("LASTFM_PERIOD").ok())
            .api_key(std::env::var("LASTFM_API_KEY").ok())
    }

    #[must_use]
    pub fn username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    #[must_use]
    pub fn period(mut self, period: Option<String>) -> Self {
        self.period = period;
        self
    }

    #[must_use]
    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    #[must_use]
    pub fn http(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Blank values count as missing and select demo mode. When all three are
    /// set, an unknown period is rejected here, before any request is made.
    pub fn build(self) -> Result<Config> {
        let http = self.http.unwrap_or_default();
        let endpoints = self.endpoints.unwrap_or_default();
        let username = self.username.filter(|v| !v.trim().is_empty());
        let period = self.period.filter(|v| !v.trim().is_empty());
        let api_key = self.api_key.filter(|v| !v.trim().is_empty());

        let mode = match (username, period, api_key) {
            (Some(username), Some(period), Some(api_key)) => {
                let period = period.parse::<Period>()?;
                let lastfm = LastFmClient::new(http.clone(), endpoints.lastfm_api, api_key);
                let spotify =
                    SpotifyClient::new(http.clone(), endpoints.spotify_token, endpoints.spotify_api);
                Mode::Live {
                    username,
                    period,
                    resolver: Resolver::new(lastfm, spotify),
                }
            }
            _ => Mode::Demo(demo_stats(&endpoints)),
        };
        Ok(Config { mode, http })
    }
}

/// Resolves the stats and turns them into slides
pub struct App {
    config: Config,
}

impl App {
    #[must_use]
    pub fn new(config: Config) -> Self {
        App { config }
    }

    /// Render the two slides, or an error screen if a lookup fails.
    /// Artwork is referenced by URL only, see [`App::render_with_artwork`].
    pub async fn render(&self) -> Root {
        let (username, period, resolver) = match &self.config.mode {
            Mode::Demo(stats) => {
                info!("Username, period or API key missing, showing demo data");
                return render::slides(stats);
            }
            Mode::Live {
                username,
                period,
                resolver,
            } => (username, *period, resolver),
        };

        info!("Fetching top artist and track for {username} ({period}) ...");
        // Sequential on purpose: a failed artist lookup skips the track lookup
        let artist = match resolver.top_artist(username, period).await {
            Ok(artist) => artist,
            Err(e) => {
                warn!("Failed to resolve top artist: {e}");
                return render::error_screen(ARTIST_ERROR);
            }
        };
        let track = match resolver.top_track(username, period).await {
            Ok(track) => track,
            Err(e) => {
                warn!("Failed to resolve top track: {e}");
                return render::error_screen(TRACK_ERROR);
            }
        };

        render::slides(&TopStats {
            period,
            artist,
            track,
        })
    }

    /// [`App::render`] with every artwork image downloaded and inlined
    pub async fn render_with_artwork(&self) -> Root {
        let mut root = self.render().await;
        render::embed_artwork(&mut root, &self.config.http).await;
        root
    }
}
