//! Recommendation retrieval API.
//!
//! This module provides the high-level API of the library: walk the
//! filter-relaxation chain for a media kind, retry-fetching random pages
//! and deduplicating until a step yields enough unique items, then
//! truncate to the caller's cap. The external contract is "always
//! returns a sequence, never errors": an empty result means "no
//! recommendations found", not a fault.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::client::TmdbClient;
use crate::error::Result;
use crate::normalizer::normalize;
use crate::pager::random_page;
use crate::query::{relaxation_chain, DiscoverQuery};
use crate::types::{
    Credits, DiscoverResponse, MediaItem, MediaKind, MovieDetails, RecommendationParams,
    Recommendations, TvDetails, Video, VideoList,
};

/// A relaxation step is sufficient once it has this many unique items.
pub const MIN_SUFFICIENT: usize = 3;

/// Per-kind cap used by [`Recommender::recommend_pair`].
pub const PAIR_LIMIT: usize = 6;

/// Fetch attempts per candidate query.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// High-level recommendation API
///
/// # Example
/// ```no_run
/// use reelpick_core::{MediaKind, Recommender, RecommendationParams};
///
/// # async fn example() -> Result<(), reelpick_core::TmdbError> {
/// let recommender = Recommender::new("tmdb-bearer-token")?;
/// let params = RecommendationParams {
///     industry: Some("korean".to_string()),
///     genre: Some(18),
///     ..Default::default()
/// };
/// let movies = recommender.recommend(&params, MediaKind::Movie, 3).await;
/// println!("{} recommendations", movies.len());
/// # Ok(())
/// # }
/// ```
pub struct Recommender {
    client: TmdbClient,
    max_attempts: u32,
    min_sufficient: usize,
}

impl Recommender {
    /// Create a recommender for the public TMDB API.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created or the
    /// credential is invalid.
    pub fn new(bearer_token: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(TmdbClient::new(bearer_token)?))
    }

    /// Create a recommender around a pre-configured client.
    ///
    /// This is how tests point the recommender at a mock server.
    pub fn with_client(client: TmdbClient) -> Self {
        Self {
            client,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_sufficient: MIN_SUFFICIENT,
        }
    }

    /// Recommend media of one kind, relaxing filters as needed.
    ///
    /// Walks the relaxation chain for `params`: the first step yielding
    /// at least the sufficiency threshold of unique items wins and is
    /// truncated to `limit`. If no step is sufficient, the last step's
    /// (possibly empty) items are returned. Transport failures never
    /// escape: a hard failure mid-chain advances to the next step, and
    /// one at the final step degrades to an empty result.
    ///
    /// Results keep upstream's popularity-descending order; this method
    /// only filters, deduplicates and truncates.
    pub async fn recommend(
        &self,
        params: &RecommendationParams,
        kind: MediaKind,
        limit: usize,
    ) -> Vec<MediaItem> {
        let chain = relaxation_chain(params, kind);
        let last_step = chain.len() - 1;
        // A caller asking for fewer than the threshold still terminates
        // on the first step.
        let min_needed = self.min_sufficient.min(limit);
        let mut fallback = Vec::new();

        for (step, query) in chain.iter().enumerate() {
            match self.fetch_with_retry(query, min_needed, limit).await {
                Ok(items) if items.len() >= min_needed => {
                    debug!(?kind, step, count = items.len(), "relaxation step sufficient");
                    let mut items = items;
                    items.truncate(limit);
                    return items;
                }
                Ok(items) => {
                    debug!(?kind, step, count = items.len(), "insufficient results, relaxing");
                    fallback = items;
                }
                Err(error) if step == last_step => {
                    warn!(?kind, step, %error, "final relaxation step failed");
                    return Vec::new();
                }
                Err(error) => {
                    warn!(?kind, step, %error, "relaxation step failed, trying next");
                }
            }
        }

        fallback.truncate(limit);
        fallback
    }

    /// Recommend movies and TV shows concurrently for the same filters.
    ///
    /// The two kinds run as independent operations with their own error
    /// boundaries and accumulators; one kind failing or coming back
    /// empty never disturbs the other. Each side is capped at
    /// [`PAIR_LIMIT`] items.
    pub async fn recommend_pair(&self, params: &RecommendationParams) -> Recommendations {
        let (movies, tv_shows) = tokio::join!(
            self.recommend(params, MediaKind::Movie, PAIR_LIMIT),
            self.recommend(params, MediaKind::Tv, PAIR_LIMIT),
        );
        Recommendations { movies, tv_shows }
    }

    /// Fetch one candidate query across randomly selected pages.
    ///
    /// Accumulates normalized items unique by id (insertion order
    /// preserved, first occurrence wins) until `min_desired` is reached
    /// or attempts run out, capping the output at `cap`. A transport
    /// failure is retried unless it happens on the final attempt, in
    /// which case it propagates. Returning fewer than `min_desired`
    /// items is a success, not an error; the caller relaxes filters
    /// further.
    pub async fn fetch_with_retry(
        &self,
        query: &DiscoverQuery,
        min_desired: usize,
        cap: usize,
    ) -> Result<Vec<MediaItem>> {
        let mut seen = HashSet::new();
        let mut accumulated: Vec<MediaItem> = Vec::new();

        for attempt in 1..=self.max_attempts {
            if accumulated.len() >= min_desired {
                break;
            }

            let page = random_page(&self.client, query).await;
            match self.client.discover(query, Some(page)).await {
                Ok(response) => {
                    for item in normalize(&response.results) {
                        if accumulated.len() >= cap {
                            break;
                        }
                        if seen.insert(item.id) {
                            accumulated.push(item);
                        }
                    }
                }
                Err(error) if attempt == self.max_attempts => return Err(error),
                Err(error) => {
                    warn!(attempt, %error, "fetch attempt failed, retrying");
                }
            }
        }

        Ok(accumulated)
    }

    /// Movies trending this week, normalized.
    pub async fn trending_movies(&self) -> Result<Vec<MediaItem>> {
        self.fetch_list("/trending/movie/week?language=en-US").await
    }

    /// Currently popular movies, normalized.
    pub async fn popular_movies(&self) -> Result<Vec<MediaItem>> {
        self.fetch_list("/movie/popular?language=en-US").await
    }

    /// Top-rated titles for a kind, normalized.
    pub async fn top_rated(&self, kind: MediaKind) -> Result<Vec<MediaItem>> {
        let path = match kind {
            MediaKind::Movie => "/movie/top_rated?language=en-US",
            MediaKind::Tv => "/tv/top_rated?language=en-US",
        };
        self.fetch_list(path).await
    }

    /// Fetch a plain results-list endpoint and normalize it.
    ///
    /// Unlike `recommend`, these are single fetches and transport errors
    /// propagate to the caller.
    async fn fetch_list(&self, path_and_query: &str) -> Result<Vec<MediaItem>> {
        let page: DiscoverResponse = self.client.get_json(path_and_query).await?;
        Ok(normalize(&page.results))
    }

    /// Full details for one movie.
    ///
    /// Like the list fetchers this is a single fetch; transport errors
    /// propagate, and an unknown id surfaces as `TmdbError::NotFound`.
    pub async fn movie_details(&self, id: u64) -> Result<MovieDetails> {
        self.client
            .get_json(&format!("/movie/{id}?language=en-US"))
            .await
    }

    /// Full details for one TV show.
    pub async fn tv_details(&self, id: u64) -> Result<TvDetails> {
        self.client
            .get_json(&format!("/tv/{id}?language=en-US"))
            .await
    }

    /// Cast listing for one movie.
    pub async fn movie_credits(&self, id: u64) -> Result<Credits> {
        self.client
            .get_json(&format!("/movie/{id}/credits?language=en-US"))
            .await
    }

    /// First trailer attached to one movie, if any.
    pub async fn movie_trailer(&self, id: u64) -> Result<Option<Video>> {
        let videos: VideoList = self
            .client
            .get_json(&format!("/movie/{id}/videos?language=en-US"))
            .await?;
        Ok(videos
            .results
            .into_iter()
            .find(|video| video.video_type == "Trailer"))
    }
}
