//! Candidate discover queries and the filter-relaxation chain.
//!
//! A [`DiscoverQuery`] is one filter-bearing request descriptor.
//! [`relaxation_chain`] turns one set of user parameters into the ordered
//! sequence of queries the recommender walks, each step dropping one
//! filter. The priority order lives here as data, not as branching.

use crate::industry;
use crate::types::{MediaKind, RecommendationParams};

/// One filter-bearing discover request descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverQuery {
    /// Media kind, determining endpoint and parameter names
    pub kind: MediaKind,
    /// `with_original_language` bias
    pub language: Option<String>,
    /// Region/origin-country bias
    pub region: Option<String>,
    /// Release year filter
    pub year: Option<u16>,
    /// Genre identifier filter
    pub genre: Option<u32>,
    /// Certification filter (movies only)
    pub certification: Option<String>,
}

impl DiscoverQuery {
    /// Render the query string for this descriptor, without a page number.
    ///
    /// Every query carries the fixed parameters: adult content excluded,
    /// popularity-descending order, and a minimum vote count so sparse
    /// entries do not surface.
    pub fn query_string(&self) -> String {
        let mut query =
            String::from("include_adult=false&sort_by=popularity.desc&vote_count.gte=100");

        if let Some(language) = &self.language {
            query.push_str(&format!(
                "&with_original_language={}",
                urlencoding::encode(language)
            ));
        }
        if let Some(region) = &self.region {
            let encoded = urlencoding::encode(region);
            match self.kind {
                MediaKind::Movie => {
                    query.push_str(&format!("&region={encoded}&with_origin_country={encoded}"));
                }
                MediaKind::Tv => {
                    query.push_str(&format!("&with_origin_country={encoded}"));
                }
            }
        }
        if let Some(year) = self.year {
            query.push_str(&format!("&{}={year}", self.kind.year_param()));
        }
        if let Some(genre) = self.genre {
            query.push_str(&format!("&with_genres={genre}"));
        }
        if let Some(certification) = &self.certification {
            let country = self.region.as_deref().unwrap_or("US");
            query.push_str(&format!(
                "&certification_country={}&certification={}",
                urlencoding::encode(country),
                urlencoding::encode(certification)
            ));
        }

        query
    }

    /// Endpoint path plus query string, without a page number.
    pub fn path_and_query(&self) -> String {
        format!("{}?{}", self.kind.discover_path(), self.query_string())
    }
}

/// Build the ordered relaxation chain for one request.
///
/// Steps, most specific first:
/// 1. Full filter set: industry bias + year + genre, plus certification
///    for movies.
/// 2. Year dropped.
/// 3. Certification dropped (movies; no-op for TV).
/// 4. Minimal: language bias + genre only. With no industry this degrades
///    to genre-only or fully unfiltered discovery.
///
/// Steps identical to their predecessor are collapsed, so the chain never
/// re-issues the same query. The chain is never empty.
pub fn relaxation_chain(params: &RecommendationParams, kind: MediaKind) -> Vec<DiscoverQuery> {
    let industry = params.industry.as_deref().and_then(industry::lookup);

    let full = DiscoverQuery {
        kind,
        language: industry.map(|config| config.language.to_string()),
        region: industry.and_then(|config| config.region).map(str::to_string),
        year: params.year,
        genre: params.genre,
        certification: match kind {
            MediaKind::Movie => params.content_rating.clone(),
            MediaKind::Tv => None,
        },
    };

    let mut without_year = full.clone();
    without_year.year = None;

    let mut without_certification = without_year.clone();
    without_certification.certification = None;

    let minimal = DiscoverQuery {
        kind,
        language: full.language.clone(),
        region: None,
        year: None,
        genre: params.genre,
        certification: None,
    };

    let mut chain = vec![full, without_year, without_certification, minimal];
    chain.dedup();
    chain
}
