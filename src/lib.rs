//! Rtopfm - Show your top Last.fm artist and track on a pixel display
//!
//! This library resolves a user's top artist and top track for a period,
//! finds artwork for both and lays them out as two alternating slides.

/// Configuration, demo data and the render entry point
pub mod app;
/// Client modules for interacting with Last.fm and Spotify
pub mod clients;
/// Widget tree for the display
pub mod render;
/// Top artist and top track lookups
pub mod resolver;
