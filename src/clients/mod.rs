/// Data entities for resolved artists, tracks and periods
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Shared GET helpers
pub mod http;
/// Last.fm API client
pub mod lastfm;
/// Nested JSON path checks
pub mod nested;
/// Spotify artwork lookup
pub mod spotify;

pub use lastfm::LastFmClient;
pub use spotify::SpotifyClient;
