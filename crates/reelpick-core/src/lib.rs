//! Reelpick Core Library
//!
//! This crate provides the recommendation retrieval core for a movie and
//! TV show recommender built on the TMDB discover API.
//!
//! # Features
//! - Filter-relaxation search: progressively drop filters in a fixed
//!   priority order until enough results are found
//! - Retrying, deduplicating page fetches with randomized page selection
//!   for variety across identical requests
//! - Normalization of raw upstream records into canonical media items
//! - Concurrent, independently supervised movie and TV retrieval
//! - Paced HTTP client with static bearer authentication

pub mod client;
pub mod error;
pub mod industry;
pub mod normalizer;
pub mod pager;
pub mod query;
pub mod recommender;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, RequestPacer, TmdbClient};
pub use error::{Result, TmdbError};
pub use industry::IndustryConfig;
pub use normalizer::normalize;
pub use query::{relaxation_chain, DiscoverQuery};
pub use recommender::{Recommender, MIN_SUFFICIENT, PAIR_LIMIT};
pub use types::{
    CastMember, Credits, DiscoverResponse, Genre, MediaItem, MediaKind, MovieDetails,
    RecommendationParams, Recommendations, TvDetails, Video, VideoList,
};
