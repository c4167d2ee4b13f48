use reelpick_core::{MediaKind, RecommendationParams, Recommender};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("TMDB_ACCESS_TOKEN")
        .expect("set TMDB_ACCESS_TOKEN to a TMDB v4 read access token");
    let recommender = Recommender::new(token)?;

    let params = RecommendationParams {
        industry: Some("korean".to_string()),
        year: Some(2021),
        genre: Some(18), // drama
        content_rating: None,
    };

    println!("🎬 Korean drama from 2021...\n");

    let results = recommender.recommend_pair(&params).await;

    println!("Movies ({}):", results.movies.len());
    for (i, movie) in results.movies.iter().enumerate() {
        println!(
            "  {}. {} ({}) - {:.1}",
            i + 1,
            movie.title,
            movie.release_date,
            movie.vote_average
        );
    }

    println!("\nTV shows ({}):", results.tv_shows.len());
    for (i, show) in results.tv_shows.iter().enumerate() {
        println!(
            "  {}. {} ({}) - {:.1}",
            i + 1,
            show.title,
            show.release_date,
            show.vote_average
        );
    }

    // A refresh is a brand-new invocation with the same parameters; the
    // randomized page selection should surface different titles.
    println!("\n🔄 Refreshing movie picks...\n");
    let refreshed = recommender.recommend(&params, MediaKind::Movie, 3).await;
    for movie in &refreshed {
        println!("  • {}", movie.title);
    }

    Ok(())
}
