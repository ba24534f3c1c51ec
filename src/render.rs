//! Slide layout for a 64x32 pixel display.
//!
//! The output is a declarative widget tree serialized as JSON; the device
//! side draws it. Nothing here touches the network except
//! [`embed_artwork`].

use base64::{Engine as _, engine::general_purpose::STANDARD};
use futures::future::join_all;
use log::warn;
use reqwest::Client;
use serde::Serialize;

use crate::clients::{
    entities::{ArtistSummary, Period, TopStats, TrackSummary},
    http,
};

pub const DISPLAY_WIDTH: u32 = 64;
pub const ARTWORK_SIZE: u32 = 24;
/// Frames each slide stays on screen
pub const SLIDE_FRAMES: u32 = 150;
pub const FRAME_DELAY_MS: u32 = 50;
/// Horizontal advance of one glyph, including spacing
pub const GLYPH_ADVANCE: u32 = 4;
pub const FONT: &str = "tom-thumb";

const GAP: u32 = 1;
const TEXT_COLUMN_WIDTH: u32 = DISPLAY_WIDTH - ARTWORK_SIZE - GAP;
const LABEL_COLOR: &str = "#888";
const TITLE_COLOR: &str = "#d51007"; // Last.fm red
const TEXT_COLOR: &str = "#fff";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Root {
    pub delay_ms: u32,
    pub child: Widget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Base64 encoded image bytes, filled in by [`embed_artwork`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    /// Children shown one after another, looping
    Sequence { children: Vec<Widget> },
    /// Keep `child` on screen for `frames` frames
    Hold { frames: u32, child: Box<Widget> },
    Column { children: Vec<Widget> },
    Row { children: Vec<Widget> },
    Padding {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        child: Box<Widget>,
    },
    Text {
        content: String,
        font: &'static str,
        color: &'static str,
    },
    /// Scrolls `child` horizontally within `width` pixels
    Marquee { width: u32, child: Box<Widget> },
    WrappedText {
        content: String,
        width: u32,
        color: &'static str,
    },
    Image(Image),
}

impl Widget {
    fn text(content: impl Into<String>, color: &'static str) -> Self {
        Widget::Text {
            content: content.into(),
            font: FONT,
            color,
        }
    }

    fn images_mut<'a>(&'a mut self, out: &mut Vec<&'a mut Image>) {
        match self {
            Widget::Image(image) => out.push(image),
            Widget::Sequence { children } | Widget::Column { children } | Widget::Row { children } => {
                for child in children {
                    child.images_mut(out);
                }
            }
            Widget::Hold { child, .. } | Widget::Padding { child, .. } | Widget::Marquee { child, .. } => {
                child.images_mut(out);
            }
            Widget::Text { .. } | Widget::WrappedText { .. } => {}
        }
    }
}

impl Root {
    /// Every image in the tree, depth first
    pub fn images_mut(&mut self) -> Vec<&mut Image> {
        let mut images = Vec::new();
        self.child.images_mut(&mut images);
        images
    }
}

/// Pixel width of `text` in the display font
#[must_use]
pub fn text_width(text: &str) -> u32 {
    let glyphs = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    glyphs.saturating_mul(GLYPH_ADVANCE).saturating_sub(1)
}

/// Plain text when `content` fits the text column, a marquee otherwise
fn fitted(content: &str, color: &'static str) -> Widget {
    let text = Widget::text(content, color);
    if text_width(content) > TEXT_COLUMN_WIDTH {
        Widget::Marquee {
            width: TEXT_COLUMN_WIDTH,
            child: Box::new(text),
        }
    } else {
        text
    }
}

fn plays(play_count: &str) -> String {
    if play_count.trim() == "1" {
        "1 play".to_string()
    } else {
        format!("{} plays", play_count.trim())
    }
}

fn slide(period: Period, title: &str, name: &str, play_count: &str, artwork_url: &str) -> Widget {
    let artwork = Widget::Image(Image {
        url: artwork_url.to_string(),
        width: ARTWORK_SIZE,
        height: ARTWORK_SIZE,
        data: None,
    });
    let details = Widget::Column {
        children: vec![
            Widget::text(title, TITLE_COLOR),
            fitted(name, TEXT_COLOR),
            Widget::text(plays(play_count), TEXT_COLOR),
        ],
    };
    let body = Widget::Row {
        children: vec![
            artwork,
            Widget::Padding {
                left: GAP,
                top: 0,
                right: 0,
                bottom: 0,
                child: Box::new(details),
            },
        ],
    };
    Widget::Hold {
        frames: SLIDE_FRAMES,
        child: Box::new(Widget::Column {
            children: vec![Widget::text(period.label(), LABEL_COLOR), body],
        }),
    }
}

#[must_use]
pub fn artist_slide(period: Period, artist: &ArtistSummary) -> Widget {
    slide(period, "Top Artist", &artist.name, &artist.play_count, &artist.artwork_url)
}

#[must_use]
pub fn track_slide(period: Period, track: &TrackSummary) -> Widget {
    slide(period, "Top Track", &track.name, &track.play_count, &track.artwork_url)
}

/// Top artist slide followed by the top track slide
#[must_use]
pub fn slides(stats: &TopStats) -> Root {
    Root {
        delay_ms: FRAME_DELAY_MS,
        child: Widget::Sequence {
            children: vec![
                artist_slide(stats.period, &stats.artist),
                track_slide(stats.period, &stats.track),
            ],
        },
    }
}

/// Single screen carrying a human readable error message
#[must_use]
pub fn error_screen(message: &str) -> Root {
    Root {
        delay_ms: FRAME_DELAY_MS,
        child: Widget::WrappedText {
            content: message.to_string(),
            width: DISPLAY_WIDTH,
            color: TEXT_COLOR,
        },
    }
}

/// Download every image referenced by `root` and inline it.
/// Failed downloads are logged and leave the image without data.
pub async fn embed_artwork(root: &mut Root, client: &Client) {
    let mut images = root.images_mut();
    let downloads = images.iter().map(|image| http::get_bytes(client, &image.url));
    let results = join_all(downloads).await;
    for (image, result) in images.iter_mut().zip(results) {
        match result {
            Ok(bytes) => image.data = Some(STANDARD.encode(bytes)),
            Err(e) => warn!("Failed to download artwork {}: {e}", image.url),
        }
    }
}
