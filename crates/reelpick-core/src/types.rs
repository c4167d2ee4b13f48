//! Data types for the reelpick core library.
//!
//! All types implement Serialize and Deserialize so a surrounding
//! application can pass them across an API or IPC boundary unchanged.

use serde::{Deserialize, Serialize};

/// Kind of media being recommended
///
/// Determines which discover endpoint is queried and which upstream
/// field names carry the year and date for that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    /// Feature film
    Movie,
    /// TV show
    Tv,
}

impl MediaKind {
    /// Discover endpoint path for this kind
    pub fn discover_path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "/discover/movie",
            MediaKind::Tv => "/discover/tv",
        }
    }

    /// Upstream query parameter carrying the release year for this kind
    pub fn year_param(&self) -> &'static str {
        match self {
            MediaKind::Movie => "primary_release_year",
            MediaKind::Tv => "first_air_date_year",
        }
    }
}

/// Filter preferences for one recommendation request
///
/// Immutable input: one instance per user submission. Every field is
/// optional; an all-`None` request degrades to unfiltered
/// popularity-sorted discovery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationParams {
    /// Key into the industry mapping table (e.g. "korean", "bollywood")
    pub industry: Option<String>,
    /// Four-digit release year
    pub year: Option<u16>,
    /// TMDB genre identifier (e.g. 18 for drama)
    pub genre: Option<u32>,
    /// Certification string (e.g. "PG-13"); applied to movie queries only
    pub content_rating: Option<String>,
}

/// Canonical media record after normalization
///
/// Serializes back to the upstream field names, so normalizing an
/// already-normalized item returns it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique TMDB identifier
    pub id: u64,
    /// Display title (upstream `title` for movies, `name` for TV)
    pub title: String,
    /// Plot overview, possibly empty
    #[serde(default)]
    pub overview: String,
    /// Poster image path; `None` when upstream has no poster
    pub poster_path: Option<String>,
    /// Release date (upstream `release_date` or `first_air_date`)
    pub release_date: String,
    /// Average user rating
    pub vote_average: f64,
    /// Originating country codes (TV only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<Vec<String>>,
}

/// Raw page envelope returned by the discover endpoints
///
/// Items stay as raw JSON values here; the normalizer decides which of
/// them become `MediaItem`s.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoverResponse {
    /// Raw media records on this page
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    /// Total number of result pages upstream reports for the query
    #[serde(default)]
    pub total_pages: u32,
}

/// Genre entry on a details record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// TMDB genre identifier
    pub id: u32,
    /// Display name
    pub name: String,
}

/// Full movie record from the per-id details endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    /// Unique TMDB identifier
    pub id: u64,
    /// Display title
    pub title: String,
    /// Plot overview, possibly empty
    #[serde(default)]
    pub overview: String,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Release date; absent for unreleased titles
    pub release_date: Option<String>,
    /// Average user rating
    #[serde(default)]
    pub vote_average: f64,
    /// Genres assigned upstream
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Runtime in minutes
    pub runtime: Option<u32>,
}

/// Full TV show record from the per-id details endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvDetails {
    /// Unique TMDB identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Plot overview, possibly empty
    #[serde(default)]
    pub overview: String,
    /// Poster image path
    pub poster_path: Option<String>,
    /// First air date; absent for unaired shows
    pub first_air_date: Option<String>,
    /// Average user rating
    #[serde(default)]
    pub vote_average: f64,
    /// Genres assigned upstream
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Originating country codes
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Season count
    pub number_of_seasons: Option<u32>,
}

/// Cast listing for a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    /// Cast members in billing order
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// One cast member in a credits listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    /// Performer name
    pub name: String,
    /// Character played, when credited
    pub character: Option<String>,
}

/// One video attached to a title (trailer, teaser, clip, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Hosting site (e.g. "YouTube")
    pub site: String,
    /// Video kind as reported upstream
    #[serde(rename = "type")]
    pub video_type: String,
    /// Site-specific video key
    pub key: String,
    /// Video title
    #[serde(default)]
    pub name: String,
}

/// Envelope of the per-id videos endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoList {
    /// Videos attached to the title
    #[serde(default)]
    pub results: Vec<Video>,
}

/// Combined result of one dual-kind recommendation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Recommended movies, at most 6
    pub movies: Vec<MediaItem>,
    /// Recommended TV shows, at most 6
    pub tv_shows: Vec<MediaItem>,
}
