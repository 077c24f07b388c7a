//! Command-line and environment configuration.
//!
//! The argument groups are shared with the `reel-recs` CLI, which flattens
//! them into its own commands.

use std::path::PathBuf;

use clap::{Args, Parser};
use data_loader::RankingMode;

/// Which dataset to load and how to rank it
#[derive(Debug, Clone, Args)]
pub struct DatasetArgs {
    /// Path to the movie dataset (CSV with a header row)
    #[arg(long, env = "REEL_RECS_DATASET", default_value = "datasets/movies.csv")]
    pub dataset: PathBuf,

    /// Ranking mode: popularity or content
    #[arg(long, env = "REEL_RECS_MODE", default_value = "popularity")]
    pub mode: RankingMode,
}

/// Where the HTTP API listens
#[derive(Debug, Clone, Args)]
pub struct ListenArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value_t = 5001)]
    pub port: u16,

    /// Comma-separated list of allowed origins; all origins when unset
    #[arg(long, env = "CORS_ALLOW_ORIGIN")]
    pub cors_allow_origin: Option<String>,
}

impl ListenArgs {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// ReelRecs HTTP server
#[derive(Debug, Clone, Parser)]
#[command(name = "server", about = "Serve movie recommendations over HTTP", long_about = None)]
pub struct ServerConfig {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub listen: ListenArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["server"]).unwrap();

        assert_eq!(config.listen.addr(), "127.0.0.1:5001");
        assert!(config.listen.cors_allow_origin.is_none());
    }

    #[test]
    fn test_mode_parsing() {
        let config = ServerConfig::try_parse_from([
            "server",
            "--mode",
            "content",
            "--dataset",
            "movies.csv",
            "--port",
            "8080",
        ])
        .unwrap();

        assert_eq!(config.dataset.mode, RankingMode::Content);
        assert_eq!(config.dataset.dataset, PathBuf::from("movies.csv"));
        assert_eq!(config.listen.port, 8080);

        assert!(ServerConfig::try_parse_from(["server", "--mode", "ratings"]).is_err());
    }
}
