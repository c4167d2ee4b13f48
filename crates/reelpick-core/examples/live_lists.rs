use reelpick_core::{MediaKind, Recommender};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("TMDB_ACCESS_TOKEN")
        .expect("set TMDB_ACCESS_TOKEN to a TMDB v4 read access token");
    let recommender = Recommender::new(token)?;

    let trending = recommender.trending_movies().await?;
    println!("🔥 Trending this week:");
    for movie in trending.iter().take(5) {
        println!("  • {} ({:.1})", movie.title, movie.vote_average);
    }

    let top_shows = recommender.top_rated(MediaKind::Tv).await?;
    println!("\n⭐ Top-rated TV:");
    for show in top_shows.iter().take(5) {
        println!("  • {} ({:.1})", show.title, show.vote_average);
    }

    Ok(())
}
