//! End-to-end recommendation flow tests against a mock TMDB server.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use reelpick_core::{
    relaxation_chain, ClientConfig, MediaKind, RecommendationParams, Recommender, TmdbClient,
    TmdbError,
};

/// Matches requests that do NOT carry the given query parameter.
struct WithoutParam(&'static str);

impl Match for WithoutParam {
    fn matches(&self, request: &Request) -> bool {
        !request.url.query_pairs().any(|(key, _)| key == self.0)
    }
}

fn recommender_for(server: &MockServer) -> Recommender {
    let mut config = ClientConfig::new("test-token");
    config.base_url = server.uri();
    // Tests make many small requests; don't pace them.
    config.requests_per_second = 10_000.0;
    Recommender::with_client(TmdbClient::with_config(config).unwrap())
}

fn movie_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "overview": "overview",
        "poster_path": "/poster.jpg",
        "release_date": "2021-05-01",
        "vote_average": 7.2,
    })
}

fn tv_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "overview": "overview",
        "poster_path": null,
        "first_air_date": "2021-09-17",
        "vote_average": 7.8,
        "origin_country": ["KR"],
    })
}

fn page_json(results: Vec<Value>, total_pages: u32) -> Value {
    json!({
        "page": 1,
        "total_results": results.len(),
        "total_pages": total_pages,
        "results": results,
    })
}

fn korean_drama_2021() -> RecommendationParams {
    RecommendationParams {
        industry: Some("korean".to_string()),
        year: Some(2021),
        genre: Some(18),
        content_rating: None,
    }
}

#[tokio::test]
async fn scenario_a_insufficient_full_filters_fall_back_to_year_dropped() {
    let server = MockServer::start().await;

    // Full-filter queries (carrying the year) find only 2 titles.
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("primary_release_year", "2021"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![movie_json(1, "Movie A"), movie_json(2, "Movie B")],
            1,
        )))
        .mount(&server)
        .await;

    // Year-dropped queries find 5 valid titles plus one malformed record.
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(WithoutParam("primary_release_year"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![
                movie_json(10, "Movie C"),
                movie_json(11, "Movie D"),
                json!({"id": 12, "title": "No rating", "release_date": "2019-01-01"}),
                movie_json(13, "Movie E"),
                movie_json(14, "Movie F"),
                movie_json(15, "Movie G"),
            ],
            1,
        )))
        .mount(&server)
        .await;

    let items = recommender_for(&server)
        .recommend(&korean_drama_2021(), MediaKind::Movie, 6)
        .await;

    let ids: Vec<u64> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![10, 11, 13, 14, 15]);
}

#[tokio::test]
async fn relaxation_is_monotonic_sufficient_first_step_stops_the_chain() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("primary_release_year", "2021"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            (1..=6).map(|id| movie_json(id, "Movie")).collect(),
            1,
        )))
        .mount(&server)
        .await;

    // No relaxed (year-less) query may ever be issued.
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(WithoutParam("primary_release_year"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .expect(0)
        .mount(&server)
        .await;

    let items = recommender_for(&server)
        .recommend(&korean_drama_2021(), MediaKind::Movie, 3)
        .await;

    assert_eq!(items.len(), 3);
    server.verify().await;
}

#[tokio::test]
async fn sufficient_step_stops_after_one_paged_fetch() {
    let server = MockServer::start().await;

    // One discovery call plus one paged fetch, nothing more.
    Mock::given(method("GET"))
        .and(path("/discover/tv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            (1..=5).map(|id| tv_json(id, "Show")).collect(),
            1,
        )))
        .expect(2)
        .mount(&server)
        .await;

    let recommender = recommender_for(&server);
    let chain = relaxation_chain(&korean_drama_2021(), MediaKind::Tv);
    let items = recommender.fetch_with_retry(&chain[0], 3, 6).await.unwrap();

    assert_eq!(items.len(), 5);
    server.verify().await;
}

#[tokio::test]
async fn fetcher_never_returns_duplicate_ids() {
    let server = MockServer::start().await;

    // The same page keeps coming back, with an in-page duplicate for
    // good measure; only the 2 unique titles may survive.
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![
                movie_json(7, "Movie A"),
                movie_json(7, "Movie A"),
                movie_json(8, "Movie B"),
            ],
            1,
        )))
        .mount(&server)
        .await;

    let recommender = recommender_for(&server);
    let chain = relaxation_chain(&RecommendationParams::default(), MediaKind::Movie);
    let items = recommender.fetch_with_retry(&chain[0], 3, 6).await.unwrap();

    let ids: Vec<u64> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![7, 8]);
}

#[tokio::test]
async fn scenario_b_unfiltered_params_return_popular_titles_up_to_cap() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            (1..=8).map(|id| movie_json(id, "Popular")).collect(),
            1,
        )))
        .mount(&server)
        .await;

    let items = recommender_for(&server)
        .recommend(&RecommendationParams::default(), MediaKind::Movie, 6)
        .await;

    assert_eq!(items.len(), 6);
    let ids: Vec<u64> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn scenario_c_empty_upstream_yields_empty_result_without_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .mount(&server)
        .await;

    let items = recommender_for(&server)
        .recommend(&korean_drama_2021(), MediaKind::Movie, 6)
        .await;

    assert!(items.is_empty());
}

#[tokio::test]
async fn movie_failure_does_not_disturb_tv_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/discover/tv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            (1..=4).map(|id| tv_json(id, "Show")).collect(),
            1,
        )))
        .mount(&server)
        .await;

    let results = recommender_for(&server)
        .recommend_pair(&RecommendationParams::default())
        .await;

    assert!(results.movies.is_empty());
    assert_eq!(results.tv_shows.len(), 4);
}

#[tokio::test]
async fn recommend_pair_caps_each_kind_at_six() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            (1..=10).map(|id| movie_json(id, "Movie")).collect(),
            1,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/discover/tv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            (100..=110).map(|id| tv_json(id, "Show")).collect(),
            1,
        )))
        .mount(&server)
        .await;

    let results = recommender_for(&server)
        .recommend_pair(&RecommendationParams::default())
        .await;

    assert_eq!(results.movies.len(), 6);
    assert_eq!(results.tv_shows.len(), 6);
}

#[tokio::test]
async fn mid_chain_transport_failure_advances_to_relaxed_step() {
    let server = MockServer::start().await;

    // Every year-carrying query fails hard; the year-dropped step works.
    // The chain must move past the broken step instead of giving up.
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("primary_release_year", "2021"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(WithoutParam("primary_release_year"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            (20u64..=23).map(|id| movie_json(id, "Movie")).collect(),
            1,
        )))
        .mount(&server)
        .await;

    let items = recommender_for(&server)
        .recommend(&korean_drama_2021(), MediaKind::Movie, 6)
        .await;

    let ids: Vec<u64> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![20, 21, 22, 23]);
}

#[tokio::test]
async fn fetcher_propagates_failure_on_final_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/tv"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let recommender = recommender_for(&server);
    let chain = relaxation_chain(&RecommendationParams::default(), MediaKind::Tv);
    let result = recommender.fetch_with_retry(&chain[0], 3, 6).await;

    match result {
        Err(TmdbError::UnexpectedStatus { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn page_count_discovery_failure_degrades_to_page_one() {
    let server = MockServer::start().await;

    // Page-less discovery calls fail; paged fetches succeed. The
    // selector must fall back to page 1 instead of failing the request.
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(WithoutParam("page"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            (1..=4).map(|id| movie_json(id, "Movie")).collect(),
            1,
        )))
        .mount(&server)
        .await;

    let items = recommender_for(&server)
        .recommend(&RecommendationParams::default(), MediaKind::Movie, 3)
        .await;

    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn list_fetchers_normalize_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trending/movie/week"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![movie_json(1, "Trending"), json!({"id": 2})],
            1,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tv/top_rated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![tv_json(3, "Top Show")],
            1,
        )))
        .mount(&server)
        .await;

    let recommender = recommender_for(&server);

    let trending = recommender.trending_movies().await.unwrap();
    assert_eq!(trending.len(), 1);
    assert_eq!(trending[0].title, "Trending");

    let top_tv = recommender.top_rated(MediaKind::Tv).await.unwrap();
    assert_eq!(top_tv.len(), 1);
    assert_eq!(top_tv[0].title, "Top Show");
}

#[tokio::test]
async fn detail_fetchers_return_typed_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "title": "The Matrix",
            "overview": "A hacker learns the truth.",
            "poster_path": "/matrix.jpg",
            "release_date": "1999-03-31",
            "vote_average": 8.2,
            "genres": [{"id": 28, "name": "Action"}],
            "runtime": 136,
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/movie/603/credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "cast": [
                {"name": "Keanu Reeves", "character": "Neo"},
                {"name": "Carrie-Anne Moss", "character": "Trinity"},
            ],
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tv/94796"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 94796,
            "name": "Squid Game",
            "first_air_date": "2021-09-17",
            "vote_average": 7.8,
            "origin_country": ["KR"],
            "number_of_seasons": 2,
        })))
        .mount(&server)
        .await;

    let recommender = recommender_for(&server);

    let movie = recommender.movie_details(603).await.unwrap();
    assert_eq!(movie.title, "The Matrix");
    assert_eq!(movie.runtime, Some(136));
    assert_eq!(movie.genres[0].name, "Action");

    let credits = recommender.movie_credits(603).await.unwrap();
    assert_eq!(credits.cast.len(), 2);
    assert_eq!(credits.cast[0].character.as_deref(), Some("Neo"));

    let show = recommender.tv_details(94796).await.unwrap();
    assert_eq!(show.name, "Squid Game");
    assert_eq!(show.origin_country, vec!["KR".to_string()]);
}

#[tokio::test]
async fn movie_trailer_picks_first_trailer_typed_video() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/603/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "results": [
                {"site": "YouTube", "type": "Teaser", "key": "teaser-key", "name": "Teaser"},
                {"site": "YouTube", "type": "Trailer", "key": "trailer-key", "name": "Official Trailer"},
                {"site": "YouTube", "type": "Trailer", "key": "later-key", "name": "Trailer 2"},
            ],
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/movie/604/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 604,
            "results": [],
        })))
        .mount(&server)
        .await;

    let recommender = recommender_for(&server);

    let trailer = recommender.movie_trailer(603).await.unwrap().unwrap();
    assert_eq!(trailer.key, "trailer-key");

    assert!(recommender.movie_trailer(604).await.unwrap().is_none());
}

#[tokio::test]
async fn detail_fetcher_maps_unknown_id_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = recommender_for(&server).movie_details(1).await;
    match result {
        Err(TmdbError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}
