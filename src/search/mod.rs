mod bound;
mod naive;
mod range;

#[doc(inline)]
pub use bound::{Bound, bound, lower_bound, upper_bound};

#[doc(inline)]
pub use naive::NaiveScanner;

#[doc(inline)]
pub use range::SuffixArraySearcher;

/// A search strategy that counts exact, possibly overlapping occurrences of patterns in a
/// fixed text.
///
/// Empty patterns have zero occurrences for every strategy.
pub trait OccurrenceCounter {
    fn count(&self, pattern: &[u8]) -> usize;
}
