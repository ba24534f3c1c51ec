use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::clients::{errors::Result, http};

pub const DEFAULT_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Last.fm API method names used by the resolvers
pub mod method {
    pub const TOP_ARTISTS: &str = "user.gettopartists";
    pub const TOP_TRACKS: &str = "user.gettoptracks";
    pub const TRACK_INFO: &str = "track.getInfo";
}

/// Thin client for the Last.fm REST API. Every call is a single GET that
/// either yields the JSON body or fails.
#[derive(Clone)]
pub struct LastFmClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl LastFmClient {
    pub fn new(http: Client, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        LastFmClient {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Call `method` with extra query parameters and return the parsed body
    pub async fn query(&self, method: &str, params: &[(&str, &str)]) -> Result<Value> {
        debug!("Calling Last.fm method {method} with {params:?}");
        let url = build_url(&self.api_url, &self.api_key, method, params);
        http::get_json(&self.http, &url, None).await
    }
}

// base + method + extra params + format marker + api key
fn build_url(api_url: &str, api_key: &str, method: &str, params: &[(&str, &str)]) -> String {
    let extra: String = params
        .iter()
        .map(|(key, value)| format!("&{key}={}", urlencoding::encode(value)))
        .collect();
    format!(
        "{api_url}?method={method}{extra}&format=json&api_key={}",
        urlencoding::encode(api_key)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_without_params() {
        let url = build_url(DEFAULT_API_URL, "k3y", method::TOP_ARTISTS, &[]);
        assert_eq!(
            url,
            "https://ws.audioscrobbler.com/2.0/?method=user.gettopartists&format=json&api_key=k3y"
        );
    }

    #[test]
    fn test_build_url_encodes_params() {
        let url = build_url(
            DEFAULT_API_URL,
            "k3y",
            method::TRACK_INFO,
            &[("track", "Mr. Brightside"), ("artist", "Simon & Garfunkel")],
        );
        assert_eq!(
            url,
            "https://ws.audioscrobbler.com/2.0/?method=track.getInfo\
             &track=Mr.%20Brightside&artist=Simon%20%26%20Garfunkel&format=json&api_key=k3y"
        );
    }
}
