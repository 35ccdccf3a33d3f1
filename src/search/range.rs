use crate::HalfOpenInterval;
use crate::search::{OccurrenceCounter, lower_bound, upper_bound};
use crate::suffix_array::{IndexStorage, SuffixArray};
use crate::text::Text;

/// Counts occurrences by locating the range of sorted suffixes that start with the pattern.
///
/// Both the text and its suffix array are only borrowed, so one suffix array can serve any
/// number of searches.
#[derive(Debug)]
pub struct SuffixArraySearcher<'a, I> {
    text: &'a Text,
    suffix_array: &'a SuffixArray<I>,
}

// manual impls, because derive would require I: Clone/Copy
impl<I> Clone for SuffixArraySearcher<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for SuffixArraySearcher<'_, I> {}

impl<'a, I: IndexStorage> SuffixArraySearcher<'a, I> {
    /// The suffix array has to be sorted for the given text.
    pub fn new(text: &'a Text, suffix_array: &'a SuffixArray<I>) -> Self {
        Self { text, suffix_array }
    }

    /// Returns the half open interval `[start, end)` of suffix array ranks whose suffixes start
    /// with the pattern. The interval is empty for the empty pattern.
    ///
    /// The running time is in O(m log n).
    pub fn interval(&self, pattern: &[u8]) -> HalfOpenInterval {
        if pattern.is_empty() {
            return HalfOpenInterval { start: 0, end: 0 };
        }

        let start = lower_bound(self.text, self.suffix_array, pattern);
        let end = upper_bound(self.text, self.suffix_array, pattern);

        HalfOpenInterval { start, end }
    }

    /// Returns the text offsets of all occurrences, in the order of the suffix array.
    pub fn locate(&self, pattern: &[u8]) -> impl Iterator<Item = usize> + use<'a, I> {
        let interval = self.interval(pattern);
        let suffix_array = self.suffix_array;

        (interval.start..interval.end).map(move |rank| suffix_array.offset_at(rank))
    }
}

impl<I: IndexStorage> OccurrenceCounter for SuffixArraySearcher<'_, I> {
    fn count(&self, pattern: &[u8]) -> usize {
        self.interval(pattern).len()
    }
}
