use std::cmp::Ordering;

use crate::suffix_array::{IndexStorage, SuffixArray, to_offset};
use crate::text::Text;

/// Selects which end of the range of suffixes starting with a pattern is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// First rank whose suffix prefix is not smaller than the pattern.
    Lower,
    /// First rank whose suffix prefix is greater than the pattern.
    Upper,
}

impl Bound {
    // whether the binary search has to continue to the right of a candidate
    fn moves_past(self, candidate_vs_pattern: Ordering) -> bool {
        match self {
            Bound::Lower => candidate_vs_pattern == Ordering::Less,
            Bound::Upper => candidate_vs_pattern != Ordering::Greater,
        }
    }
}

/// Binary search over the suffix array for one end of the range of suffixes that start with
/// `pattern`.
///
/// Every step compares the suffix, truncated to the pattern length, with the pattern. A suffix
/// shorter than the pattern sorts before it even when all of its symbols agree, so it never
/// ends up inside the range. The running time is in O(m log n).
///
/// The suffix array must be sorted for `text`, otherwise the result is unspecified.
pub fn bound<I: IndexStorage>(
    text: &Text,
    suffix_array: &SuffixArray<I>,
    pattern: &[u8],
    side: Bound,
) -> usize {
    let entries = suffix_array.as_slice();

    let mut lo = 0;
    let mut hi = entries.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let candidate = text.truncated_suffix(to_offset(entries[mid]), pattern.len());

        if side.moves_past(candidate.cmp(pattern)) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Rank of the first suffix that does not sort before `pattern`.
pub fn lower_bound<I: IndexStorage>(
    text: &Text,
    suffix_array: &SuffixArray<I>,
    pattern: &[u8],
) -> usize {
    bound(text, suffix_array, pattern, Bound::Lower)
}

/// Rank of the first suffix that sorts after every suffix starting with `pattern`.
pub fn upper_bound<I: IndexStorage>(
    text: &Text,
    suffix_array: &SuffixArray<I>,
    pattern: &[u8],
) -> usize {
    bound(text, suffix_array, pattern, Bound::Upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    // a, ana, anana, banana, na, nana
    fn banana() -> (Text, SuffixArray<i32>) {
        (
            Text::from(b"banana".as_slice()),
            SuffixArray::from_entries(vec![5, 3, 1, 0, 4, 2]),
        )
    }

    #[test]
    fn bounds_of_existing_patterns() {
        let (text, suffix_array) = banana();

        assert_eq!(lower_bound(&text, &suffix_array, b"ana"), 1);
        assert_eq!(upper_bound(&text, &suffix_array, b"ana"), 3);

        assert_eq!(lower_bound(&text, &suffix_array, b"a"), 0);
        assert_eq!(upper_bound(&text, &suffix_array, b"a"), 3);

        assert_eq!(lower_bound(&text, &suffix_array, b"banana"), 3);
        assert_eq!(upper_bound(&text, &suffix_array, b"banana"), 4);
    }

    #[test]
    fn bounds_of_missing_patterns() {
        let (text, suffix_array) = banana();

        // between "anana" and "banana"
        assert_eq!(lower_bound(&text, &suffix_array, b"b"), 3);
        assert_eq!(lower_bound(&text, &suffix_array, b"anb"), 3);
        assert_eq!(upper_bound(&text, &suffix_array, b"anb"), 3);

        // larger than every suffix
        assert_eq!(lower_bound(&text, &suffix_array, b"z"), 6);
        assert_eq!(upper_bound(&text, &suffix_array, b"z"), 6);

        // smaller than every suffix
        assert_eq!(lower_bound(&text, &suffix_array, b"A"), 0);
        assert_eq!(upper_bound(&text, &suffix_array, b"A"), 0);
    }

    #[test]
    fn short_suffix_sorts_before_longer_pattern() {
        let (text, suffix_array) = banana();

        // the suffix "na" at offset 4 agrees with the first two symbols, but is too short
        assert_eq!(lower_bound(&text, &suffix_array, b"nan"), 5);
        assert_eq!(upper_bound(&text, &suffix_array, b"nan"), 6);

        // "a" at offset 5 is too short for "an"
        assert_eq!(lower_bound(&text, &suffix_array, b"an"), 1);
    }

    #[test]
    fn empty_pattern_spans_everything() {
        let (text, suffix_array) = banana();

        assert_eq!(lower_bound(&text, &suffix_array, b""), 0);
        assert_eq!(upper_bound(&text, &suffix_array, b""), 6);
    }
}
