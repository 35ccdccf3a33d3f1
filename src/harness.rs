use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::BenchmarkConfig;
use crate::construction::SuffixArrayBuilder;
use crate::error::Result;
use crate::search::{NaiveScanner, OccurrenceCounter, SuffixArraySearcher};
use crate::suffix_array::{IndexStorage, SuffixArray};
use crate::workload::Workload;

/// Metrics of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub total_hits: u64,
    /// Only present for strategies that build an index.
    pub build_time: Option<Duration>,
    pub search_time: Duration,
}

impl fmt::Display for Report {
    // tab separated key value lines, durations truncated to whole milliseconds
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total_hits\t{}", self.total_hits)?;

        if let Some(build_time) = self.build_time {
            writeln!(f, "build_ms\t{}", build_time.as_millis())?;
        }

        writeln!(f, "search_ms\t{}", self.search_time.as_millis())
    }
}

/// Counts every query in sequence and sums up the hits. Only the loop itself is timed.
pub fn timed_search<C: OccurrenceCounter>(counter: &C, queries: &[Vec<u8>]) -> (u64, Duration) {
    let start = Instant::now();

    let mut total_hits = 0u64;
    for query in queries {
        total_hits += counter.count(black_box(query)) as u64;
    }
    let total_hits = black_box(total_hits);

    let search_time = start.elapsed();

    debug!(
        num_queries = queries.len(),
        total_hits,
        search_ms = search_time.as_millis() as u64,
        "search phase finished"
    );

    (total_hits, search_time)
}

pub fn benchmark_naive(workload: &Workload) -> Report {
    info!(num_queries = workload.queries.len(), "running naive scan");

    let scanner = NaiveScanner::new(&workload.reference);
    let (total_hits, search_time) = timed_search(&scanner, &workload.queries);

    Report {
        total_hits,
        build_time: None,
        search_time,
    }
}

/// Builds the suffix array (timed separately from the searches) and answers all queries with it.
///
/// The suffix array is returned as well, so that it can be stored or inspected afterwards.
pub fn benchmark_suffix_array<I: IndexStorage, B: SuffixArrayBuilder<I>>(
    workload: &Workload,
    builder: &B,
    config: &BenchmarkConfig,
) -> Result<(Report, SuffixArray<I>)> {
    info!(
        reference_len = workload.reference.len(),
        index_bits = size_of::<I>() * 8,
        "building suffix array"
    );

    let build_start = Instant::now();
    let suffix_array = builder.build(&workload.reference)?;
    let build_time = build_start.elapsed();

    debug!(
        build_ms = build_time.as_millis() as u64,
        "build phase finished"
    );

    if config.verify_suffix_array {
        suffix_array.verify(&workload.reference)?;
        info!("suffix array is sorted");
    }

    info!(
        num_queries = workload.queries.len(),
        "running suffix array search"
    );

    let searcher = SuffixArraySearcher::new(&workload.reference, &suffix_array);
    let (total_hits, search_time) = timed_search(&searcher, &workload.queries);

    let report = Report {
        total_hits,
        build_time: Some(build_time),
        search_time,
    };

    Ok((report, suffix_array))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::{LibsaisBuilder, SortingBuilder};
    use crate::text::Text;

    fn workload() -> Workload {
        let queries = [b"ACGT".to_vec(), b"GTA".to_vec(), b"".to_vec()];
        Workload::new(Text::from(b"ACGTACGTACGT".as_slice()), &queries, 5)
    }

    #[test]
    fn naive_and_suffix_array_agree() {
        let workload = workload();
        // ACGT, GTA, "", ACGT, GTA
        let expected_hits = 3 + 2 + 0 + 3 + 2;

        let naive = benchmark_naive(&workload);
        assert_eq!(naive.total_hits, expected_hits);
        assert_eq!(naive.build_time, None);

        let mut config = BenchmarkConfig::new();
        config.verify_suffix_array(true);

        let (libsais, suffix_array) =
            benchmark_suffix_array::<i32, _>(&workload, &LibsaisBuilder, &config).unwrap();
        assert_eq!(libsais.total_hits, expected_hits);
        assert!(libsais.build_time.is_some());
        assert_eq!(suffix_array.len(), 12);

        let (sorting, _) =
            benchmark_suffix_array::<i64, _>(&workload, &SortingBuilder, &config).unwrap();
        assert_eq!(sorting.total_hits, expected_hits);
    }

    #[test]
    fn report_format() {
        let naive = Report {
            total_hits: 3,
            build_time: None,
            search_time: Duration::from_micros(12_900),
        };
        assert_eq!(naive.to_string(), "total_hits\t3\nsearch_ms\t12\n");

        let suffix_array = Report {
            total_hits: 7,
            build_time: Some(Duration::from_millis(1500)),
            search_time: Duration::from_millis(2),
        };
        assert_eq!(
            suffix_array.to_string(),
            "total_hits\t7\nbuild_ms\t1500\nsearch_ms\t2\n"
        );
    }
}
