use libsais::ThreadCount;
use num_traits::{NumCast, Zero};
use tracing::debug;

use crate::error::{Error, Result};
use crate::suffix_array::{IndexStorage, SuffixArray, ensure_text_fits};
use crate::text::Text;

/// Anything that can produce a sorted suffix array for a text.
///
/// The searches only rely on the sorted suffix invariant, so any correct construction
/// algorithm can be plugged in.
pub trait SuffixArrayBuilder<I: IndexStorage> {
    fn build(&self, text: &Text) -> Result<SuffixArray<I>>;
}

/// Linear time SA-IS construction via `libsais`.
///
/// The number of threads for building is controlled by rayon.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibsaisBuilder;

impl<I: IndexStorage> SuffixArrayBuilder<I> for LibsaisBuilder {
    fn build(&self, text: &Text) -> Result<SuffixArray<I>> {
        ensure_text_fits::<I>(text.len())?;

        if text.is_empty() {
            return Ok(SuffixArray::from_entries(Vec::new()));
        }

        let thread_count: u16 = rayon::current_num_threads().try_into().map_err(|_| {
            Error::configuration("number of threads for suffix array construction must fit into u16")
        })?;

        let mut entries = vec![<I as Zero>::zero(); text.len()];

        libsais::SuffixArrayConstruction::for_text(text.as_slice())
            .in_borrowed_buffer(entries.as_mut_slice())
            .multi_threaded(ThreadCount::fixed(thread_count))
            .run()
            .map_err(|err| Error::SuffixArrayConstruction(format!("{err:?}")))?;

        debug!(
            text_len = text.len(),
            thread_count, "constructed suffix array using libsais"
        );

        Ok(SuffixArray::from_entries(entries))
    }
}

/// Sorts all suffixes by direct comparison. Quadratic in the worst case, only meant for small
/// texts and for cross-checking other builders.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortingBuilder;

impl<I: IndexStorage> SuffixArrayBuilder<I> for SortingBuilder {
    fn build(&self, text: &Text) -> Result<SuffixArray<I>> {
        ensure_text_fits::<I>(text.len())?;

        let mut offsets: Vec<usize> = (0..text.len()).collect();
        offsets.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));

        let entries = offsets
            .into_iter()
            .map(<I as NumCast>::from)
            .collect::<Option<Vec<I>>>()
            .ok_or(Error::TextTooLarge {
                len: text.len(),
                max: I::max_text_len(),
            })?;

        debug!(text_len = text.len(), "constructed suffix array by sorting");

        Ok(SuffixArray::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_both<I: IndexStorage>(text: &[u8]) -> (SuffixArray<I>, SuffixArray<I>) {
        let text = Text::from(text);

        (
            LibsaisBuilder.build(&text).unwrap(),
            SortingBuilder.build(&text).unwrap(),
        )
    }

    #[test]
    fn banana() {
        let (libsais, sorting) = build_both::<i32>(b"banana");

        assert_eq!(libsais.as_slice(), [5, 3, 1, 0, 4, 2]);
        assert_eq!(sorting.as_slice(), [5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn repetitive_dna() {
        let text = b"ACGTACGTACGTNNACGTAAAAAAC";
        let (libsais, sorting) = build_both::<i64>(text);

        assert_eq!(libsais, sorting);
        assert!(libsais.verify(&Text::from(text.as_slice())).is_ok());
    }

    #[test]
    fn empty_and_single() {
        let (libsais, sorting) = build_both::<i32>(b"");
        assert!(libsais.is_empty());
        assert!(sorting.is_empty());

        let (libsais, sorting) = build_both::<i32>(b"A");
        assert_eq!(libsais.as_slice(), [0]);
        assert_eq!(sorting.as_slice(), [0]);
    }
}
