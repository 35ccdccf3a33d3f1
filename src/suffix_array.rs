use libsais::OutputElement;
use num_traits::{Bounded, NumCast, PrimInt};
use rayon::prelude::*;

use crate::error::Error;
use crate::text::Text;
use crate::{maybe_savefile, sealed};

/// Integer types that can store the entries of a [`SuffixArray`].
///
/// The maximum value of the type is an upper bound for the length of the text. `i32` halves the
/// memory usage compared to `i64`, but only supports texts of up to `i32::MAX` symbols.
pub trait IndexStorage:
    PrimInt + OutputElement + maybe_savefile::MaybeSavefile + sealed::Sealed + Send + Sync + 'static
{
    #[doc(hidden)]
    fn max_text_len() -> usize {
        <usize as NumCast>::from(<Self as Bounded>::max_value()).unwrap_or(usize::MAX)
    }
}

impl sealed::Sealed for i32 {}

impl IndexStorage for i32 {}

impl sealed::Sealed for i64 {}

impl IndexStorage for i64 {}

pub(crate) fn ensure_text_fits<I: IndexStorage>(text_len: usize) -> crate::Result<()> {
    let max = I::max_text_len();

    if text_len > max {
        return Err(Error::TextTooLarge { len: text_len, max });
    }

    Ok(())
}

/// The starting offsets of all suffixes of a text, in lexicographic order of the suffixes.
///
/// A suffix array is built once for a [`Text`] using a
/// [`SuffixArrayBuilder`](crate::SuffixArrayBuilder) and only read afterwards.
#[cfg_attr(feature = "savefile", derive(savefile::savefile_derive::Savefile))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray<I> {
    entries: Vec<I>,
}

impl<I: IndexStorage> SuffixArray<I> {
    /// Wraps entries produced elsewhere. They are assumed to form a valid suffix array of the
    /// text that is later searched; see [`verify`](Self::verify) for an explicit check.
    pub fn from_entries(entries: Vec<I>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[I] {
        &self.entries
    }

    /// Text offset of the suffix with the given rank.
    pub fn offset_at(&self, rank: usize) -> usize {
        to_offset(self.entries[rank])
    }

    pub fn offsets(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.entries.iter().map(|&entry| to_offset(entry))
    }

    /// Checks that this is a permutation of the text offsets and that the suffixes are sorted.
    ///
    /// The sortedness check runs in parallel using rayon's configured number of threads.
    pub fn verify(&self, text: &Text) -> crate::Result<()> {
        if self.len() != text.len() {
            return Err(Error::InvariantViolation(format!(
                "suffix array has {} entries, but the text has length {}",
                self.len(),
                text.len()
            )));
        }

        let mut seen = vec![false; text.len()];

        for (rank, entry) in self.entries.iter().enumerate() {
            let offset = <usize as NumCast>::from(*entry)
                .filter(|&offset| offset < text.len())
                .ok_or_else(|| {
                    Error::InvariantViolation(format!("entry at rank {rank} is out of bounds"))
                })?;

            if seen[offset] {
                return Err(Error::InvariantViolation(format!(
                    "offset {offset} appears twice"
                )));
            }

            seen[offset] = true;
        }

        let unsorted_rank = self.entries.par_windows(2).position_first(|window| {
            text[to_offset(window[0])..] > text[to_offset(window[1])..]
        });

        match unsorted_rank {
            Some(rank) => Err(Error::InvariantViolation(format!(
                "suffixes at ranks {rank} and {} are not in sorted order",
                rank + 1
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(feature = "savefile")]
impl<I: IndexStorage> SuffixArray<I> {
    const VERSION_FOR_SAVEFILE: u32 = 0;

    pub fn load_from_reader(
        reader: &mut impl std::io::Read,
    ) -> std::result::Result<Self, savefile::SavefileError> {
        savefile::load(reader, Self::VERSION_FOR_SAVEFILE)
    }

    pub fn load_from_file(
        filepath: impl AsRef<std::path::Path>,
    ) -> std::result::Result<Self, savefile::SavefileError> {
        savefile::load_file(filepath, Self::VERSION_FOR_SAVEFILE)
    }

    pub fn save_to_writer(
        &self,
        writer: &mut impl std::io::Write,
    ) -> std::result::Result<(), savefile::SavefileError> {
        savefile::save(writer, Self::VERSION_FOR_SAVEFILE, self)
    }

    pub fn save_to_file(
        &self,
        filepath: impl AsRef<std::path::Path>,
    ) -> std::result::Result<(), savefile::SavefileError> {
        savefile::save_file(filepath, Self::VERSION_FOR_SAVEFILE, self)
    }
}

// negative entries cannot come from a builder. mapping them past the end of every text makes
// them compare like empty suffixes instead of panicking in the middle of a search
#[inline]
pub(crate) fn to_offset<I: IndexStorage>(entry: I) -> usize {
    <usize as NumCast>::from(entry).unwrap_or(usize::MAX)
}
