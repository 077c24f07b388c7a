use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{field_tokens, OptionValues, Year};
use pipeline::FilterCriteria;
use server::{DatasetArgs, ListenArgs, RecommendError, RecommendationOrchestrator};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// ReelRecs - Movie Recommendation Engine
#[derive(Parser)]
#[command(name = "reel-recs")]
#[command(about = "Movie recommendations by popularity or synopsis similarity", long_about = None)]
struct Cli {
    #[command(flatten)]
    dataset: DatasetArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the distinct values of a filterable field
    Options {
        /// One of: genres, year, director
        #[arg(long)]
        category: String,
    },

    /// Get movie recommendations for a genre and release year
    Recommend {
        #[arg(long)]
        genre: String,

        #[arg(long)]
        year: Year,

        /// Required in content mode, ignored in popularity mode
        #[arg(long)]
        director: Option<String>,
    },

    /// Run the HTTP API
    Serve(ListenArgs),

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the dataset (and fit the vector space in content mode)
    println!(
        "Loading dataset from {} ({} mode)...",
        cli.dataset.dataset.display(),
        cli.dataset.mode
    );
    let start = Instant::now();
    let orchestrator = server::load_orchestrator(&cli.dataset.dataset, cli.dataset.mode)?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        orchestrator.corpus().len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Options { category } => handle_options(&orchestrator, &category)?,
        Commands::Recommend {
            genre,
            year,
            director,
        } => handle_recommend(&orchestrator, genre, year, director)?,
        Commands::Serve(listen) => server::serve(orchestrator, &listen).await?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(orchestrator, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'options' command
fn handle_options(orchestrator: &RecommendationOrchestrator, category: &str) -> Result<()> {
    let values = orchestrator.options(category)?;

    println!(
        "{}",
        format!("{} ({} values):", category, values.len()).bold().blue()
    );
    match values {
        OptionValues::Text(values) => values.iter().for_each(|v| println!("  {}", v)),
        OptionValues::Years(values) => values.iter().for_each(|v| println!("  {}", v)),
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    orchestrator: &RecommendationOrchestrator,
    genre: String,
    year: Year,
    director: Option<String>,
) -> Result<()> {
    let mut criteria = FilterCriteria::new().with_genre(genre).with_year(year);
    criteria.director = director;

    match orchestrator.recommend(&criteria) {
        Ok(titles) => {
            print_recommendations(&titles);
            Ok(())
        }
        Err(RecommendError::NoMatch(message)) => {
            println!("{} {}", "✗".yellow(), message);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    orchestrator: RecommendationOrchestrator,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("--requests must be at least 1"));
    }

    // Criteria drawn from random movies, so every request has a match
    let workload = sample_criteria(&orchestrator, requests)?;
    let limiter = Arc::new(Semaphore::new(concurrent.max(1)));

    println!(
        "Running {} requests ({} concurrent)...",
        requests,
        concurrent.max(1)
    );
    let wall_clock = Instant::now();

    let mut handles = Vec::with_capacity(workload.len());
    for criteria in workload {
        let orchestrator = orchestrator.clone();
        let limiter = limiter.clone();
        let handle = tokio::spawn(async move {
            let _permit = limiter.acquire_owned().await?;
            let start = Instant::now();
            tokio::task::spawn_blocking(move || orchestrator.recommend(&criteria)).await??;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = Vec::with_capacity(handles.len());
    let mut failures = 0usize;
    for handle in handles {
        match handle.await? {
            Ok(elapsed) => timings.push(elapsed),
            Err(_) => failures += 1,
        }
    }
    let total_time = wall_clock.elapsed();

    if timings.is_empty() {
        return Err(anyhow!("All {} requests failed", failures));
    }

    timings.sort();
    let latency_sum: Duration = timings.iter().sum();
    let avg_latency = latency_sum / timings.len() as u32;
    let throughput = timings.len() as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Succeeded: {} / {}", timings.len(), requests);
    if failures > 0 {
        println!("{}", format!("Failed: {}", failures).red());
    }
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Build `count` criteria from randomly chosen movies with a known year
fn sample_criteria(
    orchestrator: &RecommendationOrchestrator,
    count: usize,
) -> Result<Vec<FilterCriteria>> {
    let corpus = orchestrator.corpus();
    let needs_director = orchestrator.mode().requires_director();

    let eligible: Vec<_> = corpus
        .movies()
        .iter()
        .filter(|m| m.has_year() && !m.genres.is_empty())
        .filter(|m| !needs_director || !m.director.is_empty())
        .collect();
    if eligible.is_empty() {
        return Err(anyhow!("Dataset has no movies usable as benchmark queries"));
    }

    let criteria = (0..count)
        .map(|_| {
            let movie = eligible[rand::random_range(0..eligible.len())];
            let genres: Vec<&str> = field_tokens(&movie.genres).collect();
            let genre = genres[rand::random_range(0..genres.len())];

            let criteria = FilterCriteria::new().with_genre(genre).with_year(movie.year);
            if needs_director {
                criteria.with_director(movie.director.as_str())
            } else {
                criteria
            }
        })
        .collect();
    Ok(criteria)
}

/// Latency at quantile `q` of sorted, non-empty `timings`
fn percentile(timings: &[Duration], q: f64) -> Duration {
    let index = ((timings.len() as f64 * q) as usize).min(timings.len() - 1);
    timings[index]
}

/// Print a ranked list of titles
fn print_recommendations(titles: &[String]) {
    println!("{}", "Movie Recommendations:".bold().blue());
    if titles.is_empty() {
        println!("  (no other movies to recommend)");
        return;
    }
    for (rank, title) in titles.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_recommend_arguments() {
        let cli = Cli::try_parse_from([
            "reel-recs",
            "--mode",
            "content",
            "recommend",
            "--genre",
            "drama",
            "--year",
            "1994",
            "--director",
            "frank darabont",
        ])
        .unwrap();

        match cli.command {
            Commands::Recommend {
                genre,
                year,
                director,
            } => {
                assert_eq!(genre, "drama");
                assert_eq!(year, 1994);
                assert_eq!(director.as_deref(), Some("frank darabont"));
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_percentile() {
        let timings: Vec<Duration> = (1..=100).map(Duration::from_millis).collect();

        assert_eq!(percentile(&timings, 0.50), Duration::from_millis(51));
        assert_eq!(percentile(&timings, 0.99), Duration::from_millis(100));
        assert_eq!(percentile(&timings[..1], 0.95), Duration::from_millis(1));
    }
}
