// Local stand-in for the Last.fm and Spotify APIs
#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use reqwest::Client;
use rtopfm::{
    app::Endpoints,
    clients::{LastFmClient, SpotifyClient},
    resolver::Resolver,
};
use serde_json::{Value, json};

pub const TOKEN: &str = "anon-token";

#[derive(Debug, Clone)]
pub struct Request {
    pub route: String,
    pub params: HashMap<String, String>,
    pub bearer: Option<String>,
}

#[derive(Default)]
struct MockState {
    responses: Mutex<HashMap<String, (StatusCode, Value)>>,
    requests: Mutex<Vec<Request>>,
}

impl MockState {
    fn record(&self, route: String, params: HashMap<String, String>, headers: &HeaderMap) -> (StatusCode, Value) {
        let bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(ToString::to_string);
        self.requests.lock().unwrap().push(Request {
            route: route.clone(),
            params,
            bearer,
        });
        self.responses
            .lock()
            .unwrap()
            .get(&route)
            .cloned()
            .unwrap_or((StatusCode::NOT_FOUND, json!({"error": 6, "message": "not found"})))
    }
}

async fn lastfm(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let route = params.get("method").cloned().unwrap_or_default();
    let (status, body) = state.record(route, params, &headers);
    (status, Json(body))
}

async fn token(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let (status, body) = state.record("token".to_string(), params, &headers);
    (status, Json(body))
}

async fn search(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let (status, body) = state.record("search".to_string(), params, &headers);
    (status, Json(body))
}

async fn image(
    State(state): State<Arc<MockState>>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Response {
    let (status, body) = state.record(format!("img/{name}"), HashMap::new(), &headers);
    let bytes = body.as_str().unwrap_or_default().as_bytes().to_vec();
    (status, bytes).into_response()
}

pub struct MockApi {
    pub base: String,
    state: Arc<MockState>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let router = Router::new()
            .route("/2.0/", get(lastfm))
            .route("/get_access_token", get(token))
            .route("/v1/search", get(search))
            .route("/img/{name}", get(image))
            .with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        MockApi {
            base: format!("http://{addr}"),
            state,
        }
    }

    /// Answer `route` (a Last.fm method, "token", "search" or "img/<name>")
    pub fn respond(&self, route: &str, status: StatusCode, body: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(route.to_string(), (status, body));
    }

    pub fn ok(&self, route: &str, body: Value) {
        self.respond(route, StatusCode::OK, body);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, route: &str) -> Vec<Request> {
        self.requests().into_iter().filter(|r| r.route == route).collect()
    }

    pub fn image_url(&self, name: &str) -> String {
        format!("{}/img/{name}", self.base)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            lastfm_api: format!("{}/2.0/", self.base),
            spotify_token: format!(
                "{}/get_access_token?reason=transport&productType=web_player",
                self.base
            ),
            spotify_api: format!("{}/v1", self.base),
            demo_artist_artwork: self.image_url("demo-artist.jpg"),
            demo_track_artwork: self.image_url("demo-album.png"),
        }
    }

    pub fn lastfm(&self) -> LastFmClient {
        LastFmClient::new(Client::new(), self.endpoints().lastfm_api, "test-key")
    }

    pub fn resolver(&self) -> Resolver {
        let endpoints = self.endpoints();
        Resolver::new(
            self.lastfm(),
            SpotifyClient::new(Client::new(), endpoints.spotify_token, endpoints.spotify_api),
        )
    }

    /// Happy path for every endpoint, artwork served by this mock
    pub fn all_ok(&self) {
        self.ok(
            "user.gettopartists",
            top_artists("The Killers", "123", Some(&self.image_url("lastfm-artist.png"))),
        );
        self.ok("token", access_token());
        self.ok("search", spotify_search(Some(&self.image_url("artist.png"))));
        self.ok("user.gettoptracks", top_tracks("Mr. Brightside", "10", "The Killers"));
        self.ok("track.getInfo", track_info(&self.image_url("album.png")));
        self.ok("img/artist.png", json!("ARTIST"));
        self.ok("img/album.png", json!("ALBUM"));
    }
}

fn lastfm_images(url: &str) -> Value {
    json!([
        {"#text": "", "size": "small"},
        {"#text": "", "size": "medium"},
        {"#text": "", "size": "large"},
        {"#text": url, "size": "extralarge"}
    ])
}

pub fn top_artists(name: &str, playcount: &str, image: Option<&str>) -> Value {
    let mut artist = json!({
        "name": name,
        "playcount": playcount,
        "mbid": "",
        "url": "https://www.last.fm/music/x",
    });
    if let Some(url) = image {
        artist["image"] = lastfm_images(url);
    }
    json!({
        "topartists": {
            "artist": [artist],
            "@attr": {"user": "rj", "page": "1", "perPage": "1", "total": "1"}
        }
    })
}

pub fn top_tracks(name: &str, playcount: &str, artist: &str) -> Value {
    json!({
        "toptracks": {
            "track": [{
                "name": name,
                "playcount": playcount,
                "artist": {"name": artist, "mbid": ""},
                "image": lastfm_images("")
            }],
            "@attr": {"user": "rj", "page": "1", "perPage": "1", "total": "1"}
        }
    })
}

pub fn track_info(album_image: &str) -> Value {
    json!({
        "track": {
            "name": "Mr. Brightside",
            "album": {
                "artist": "The Killers",
                "title": "Hot Fuss",
                "image": lastfm_images(album_image)
            }
        }
    })
}

pub fn access_token() -> Value {
    json!({"accessToken": TOKEN, "isAnonymous": true})
}

pub fn spotify_search(image: Option<&str>) -> Value {
    let items = match image {
        Some(url) => json!([{
            "name": "The Killers",
            "images": [{"url": url, "height": 640, "width": 640}]
        }]),
        None => json!([]),
    };
    json!({"artists": {"items": items, "total": 0}})
}
