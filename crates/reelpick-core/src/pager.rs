//! Random page selection for discover queries.
//!
//! Repeated identical-filter requests should plausibly surface different
//! items, so instead of always reading page 1 the recommender asks
//! upstream how many pages exist and picks one pseudo-randomly. The
//! choice itself is a pure function over an injected RNG so tests can
//! seed it deterministically.

use rand::Rng;
use tracing::warn;

use crate::client::TmdbClient;
use crate::query::DiscoverQuery;

/// Upstream refuses page numbers above this (TMDB API limit).
pub const MAX_PAGE: u32 = 500;

/// Pick a page uniformly in `[1, min(total_pages, MAX_PAGE)]`.
///
/// `total_pages <= 1` (including the 0 reported for empty result sets)
/// always yields page 1.
pub fn pick_page<R: Rng + ?Sized>(total_pages: u32, rng: &mut R) -> u32 {
    if total_pages <= 1 {
        return 1;
    }
    rng.random_range(1..=total_pages.min(MAX_PAGE))
}

/// Discover the query's page count and pick a random page.
///
/// Issues the query once without a page parameter to learn
/// `total_pages`. Fail-open: a failed discovery call, or one reporting
/// no pages, degrades to page 1 rather than failing the request.
pub(crate) async fn random_page(client: &TmdbClient, query: &DiscoverQuery) -> u32 {
    match client.discover(query, None).await {
        Ok(page) => pick_page(page.total_pages, &mut rand::rng()),
        Err(error) => {
            warn!(%error, "page-count discovery failed, falling back to page 1");
            1
        }
    }
}
