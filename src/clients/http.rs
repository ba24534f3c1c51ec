use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::clients::errors::{Error, Result};

// Strip the query string so credentials never end up in logs or errors
fn redact(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

async fn get(client: &Client, url: &str, bearer: Option<&str>) -> Result<reqwest::Response> {
    debug!("GET {}", redact(url));
    let mut request = client.get(url);
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }
    let response = request.send().await?;
    // Anything but 200 is a failure, no retries
    if response.status() != StatusCode::OK {
        return Err(Error::UnexpectedStatus {
            status: response.status().as_u16(),
            url: redact(url).to_string(),
        });
    }
    Ok(response)
}

/// GET `url` and parse the body as JSON
pub async fn get_json(client: &Client, url: &str, bearer: Option<&str>) -> Result<Value> {
    let response = get(client, url, bearer).await?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// GET `url` and return the raw body, used for artwork images
pub async fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = get(client, url, None).await?;
    Ok(response.bytes().await?.to_vec())
}
