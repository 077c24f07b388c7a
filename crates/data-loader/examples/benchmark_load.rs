use data_loader::{Corpus, RankingMode};
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("datasets/movies.csv");

    println!("Loading movie dataset...\n");

    let start = Instant::now();
    let corpus = Corpus::load(path, RankingMode::Popularity)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let genres = corpus.options("genres").expect("genres are always supported");
    let years = corpus.options("year").expect("year is always supported");

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", corpus.len());
    println!("Distinct genres: {}", genres.len());
    println!("Distinct years: {}", years.len());
    println!("\nPerformance: {:.0} movies/second",
             corpus.len() as f64 / elapsed.as_secs_f64());
}
