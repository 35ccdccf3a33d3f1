use crate::search::OccurrenceCounter;
use crate::text::Text;

/// Counts occurrences by comparing the pattern against the text at every offset.
///
/// No index is built. Counting runs in O((n - m + 1) * m) for a text of length n and a pattern
/// of length m.
#[derive(Debug, Clone, Copy)]
pub struct NaiveScanner<'a> {
    text: &'a Text,
}

impl<'a> NaiveScanner<'a> {
    pub fn new(text: &'a Text) -> Self {
        Self { text }
    }

    /// Returns all offsets at which the pattern occurs, in increasing order.
    pub fn positions<'p>(&self, pattern: &'p [u8]) -> impl Iterator<Item = usize> + use<'a, 'p> {
        let windows = if pattern.is_empty() || self.text.len() < pattern.len() {
            None
        } else {
            Some(self.text.as_slice().windows(pattern.len()))
        };

        windows
            .into_iter()
            .flatten()
            .enumerate()
            .filter_map(move |(offset, window)| (window == pattern).then_some(offset))
    }
}

impl OccurrenceCounter for NaiveScanner<'_> {
    fn count(&self, pattern: &[u8]) -> usize {
        let text = self.text.as_slice();
        let m = pattern.len();

        if m == 0 || text.len() < m {
            return 0;
        }

        // every offset is tried, so overlapping occurrences are all counted
        let mut hits = 0;
        for offset in 0..=text.len() - m {
            if &text[offset..offset + m] == pattern {
                hits += 1;
            }
        }

        hits
    }
}
