//! The seam between the filter engine and the ranking strategies.

use data_loader::MovieIndex;

/// Orders a filtered candidate set into a recommendation list.
///
/// Implementations are read-only over shared state, so one ranker can serve
/// any number of concurrent requests.
pub trait Ranker: Send + Sync {
    /// Returns the name of this ranker (for logging/debugging)
    fn name(&self) -> &str;

    /// Rank `candidates` (in corpus order) and return at most the ranker's
    /// limit of corpus positions, best first.
    fn rank(&self, candidates: &[MovieIndex]) -> Vec<MovieIndex>;
}
