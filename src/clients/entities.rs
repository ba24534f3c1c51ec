use std::{fmt, str::FromStr};

use crate::clients::errors::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSummary {
    pub name: String,
    pub play_count: String,
    pub artwork_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSummary {
    pub name: String,
    pub play_count: String,
    pub artwork_url: String, // album artwork
}

/// Time window Last.fm aggregates top charts over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Overall,
    Week,
    Month,
    ThreeMonths,
    SixMonths,
    Year,
}

impl Period {
    pub const ALL: [Period; 6] = [
        Period::Overall,
        Period::Week,
        Period::Month,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::Year,
    ];

    /// Value expected by the `period` API parameter
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Overall => "overall",
            Period::Week => "7day",
            Period::Month => "1month",
            Period::ThreeMonths => "3month",
            Period::SixMonths => "6month",
            Period::Year => "12month",
        }
    }

    /// Human readable label shown on top of every slide
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Period::Overall => "All time",
            Period::Week => "Past week",
            Period::Month => "Past month",
            Period::ThreeMonths => "Past 3 months",
            Period::SixMonths => "Past 6 months",
            Period::Year => "Past year",
        }
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| Error::InvalidPeriod(s.to_string()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the slides need, resolved for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopStats {
    pub period: Period,
    pub artist: ArtistSummary,
    pub track: TrackSummary,
}
