/*! Exact occurrence counting of patterns in a reference text, using either a naive scan or
binary searches on a suffix array, together with the benchmark harness that compares both.

```
use sufbench::{
    LibsaisBuilder, NaiveScanner, OccurrenceCounter, SuffixArray, SuffixArrayBuilder,
    SuffixArraySearcher, Text,
};

let text = Text::from(b"ACGTACGTACGT".as_slice());
let suffix_array: SuffixArray<i32> = LibsaisBuilder.build(&text).unwrap();

let naive = NaiveScanner::new(&text);
let searcher = SuffixArraySearcher::new(&text, &suffix_array);

assert_eq!(naive.count(b"ACGT"), 3);
assert_eq!(searcher.count(b"ACGT"), 3);
```
*/

/// Contains functions to create the supported alphabets.
pub mod alphabet;
/// Command line arguments shared by the benchmark binaries.
pub mod cli;
pub mod config;
pub mod error;
/// Timed build and search phases and the metrics they report.
pub mod harness;
/// Setup of the `tracing` subscriber used by the binaries.
pub mod logging;
pub mod search;
pub mod sequence_file;
/// Loading and expanding the reference and queries of a run.
pub mod workload;

mod construction;
mod suffix_array;
mod text;

#[doc(inline)]
pub use alphabet::Alphabet;
#[doc(inline)]
pub use config::BenchmarkConfig;
#[doc(inline)]
pub use construction::{LibsaisBuilder, SortingBuilder, SuffixArrayBuilder};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use harness::Report;
#[doc(inline)]
pub use search::{NaiveScanner, OccurrenceCounter, SuffixArraySearcher};
#[doc(inline)]
pub use suffix_array::{IndexStorage, SuffixArray};
#[doc(inline)]
pub use text::Text;
#[doc(inline)]
pub use workload::Workload;

/// Half open range `[start, end)` of suffix array ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfOpenInterval {
    pub start: usize,
    pub end: usize,
}

impl HalfOpenInterval {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

mod maybe_savefile {
    #[cfg(feature = "savefile")]
    pub trait MaybeSavefile: savefile::Savefile {}

    #[cfg(not(feature = "savefile"))]
    pub trait MaybeSavefile {}

    impl MaybeSavefile for i32 {}
    impl MaybeSavefile for i64 {}
}

mod sealed {
    pub trait Sealed {}
}
