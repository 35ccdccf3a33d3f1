use std::path::Path;

use tracing::info;

use crate::config::BenchmarkConfig;
use crate::error::Result;
use crate::sequence_file;
use crate::text::Text;

/// Repeats the queries cyclically until there are exactly `target_count` of them.
///
/// If there are already enough queries, the first `target_count` are kept. An empty list stays
/// empty regardless of the target.
pub fn expand_cyclic<T: Clone>(queries: &[T], target_count: usize) -> Vec<T> {
    queries.iter().cycle().take(target_count).cloned().collect()
}

/// Reference text and expanded queries of one benchmark run.
#[derive(Debug, Clone)]
pub struct Workload {
    pub reference: Text,
    pub queries: Vec<Vec<u8>>,
}

impl Workload {
    /// Loads the concatenated reference and the query records, then expands the queries to the
    /// configured count.
    pub fn load(
        reference_path: impl AsRef<Path>,
        query_path: impl AsRef<Path>,
        config: &BenchmarkConfig,
    ) -> Result<Self> {
        config.validate()?;

        let reference = sequence_file::read_concatenated(reference_path, &config.alphabet)?;
        let queries = sequence_file::read_records(query_path, &config.alphabet)?;

        info!(
            reference_len = reference.len(),
            num_distinct_queries = queries.len(),
            "loaded reference and queries"
        );

        Ok(Self::new(reference, &queries, config.query_count))
    }

    pub fn new(reference: Text, queries: &[Vec<u8>], query_count: usize) -> Self {
        let queries = expand_cyclic(queries, query_count);

        Self { reference, queries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_repeats_cyclically() {
        let queries = ["a", "b", "c"];

        assert_eq!(
            expand_cyclic(&queries, 8),
            ["a", "b", "c", "a", "b", "c", "a", "b"]
        );
    }

    #[test]
    fn expand_truncates() {
        let queries = ["a", "b", "c"];

        assert_eq!(expand_cyclic(&queries, 3), ["a", "b", "c"]);
        assert_eq!(expand_cyclic(&queries, 2), ["a", "b"]);
        assert!(expand_cyclic(&queries, 0).is_empty());
    }

    #[test]
    fn expand_empty() {
        let queries: [&str; 0] = [];

        assert!(expand_cyclic(&queries, 100).is_empty());
    }
}
