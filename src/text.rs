use std::ops::Deref;

/// The reference text that all searches run on.
///
/// A text can only be created, never modified. Searches borrow it for the whole benchmark run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    data: Box<[u8]>,
}

impl Text {
    pub fn new(data: impl Into<Box<[u8]>>) -> Self {
        Self { data: data.into() }
    }

    /// Concatenates the records in the given order, without separators.
    pub fn from_records<T: AsRef<[u8]>>(records: impl IntoIterator<Item = T>) -> Self {
        // this generic records owned vec is needed for the as_ref interface
        let generic_records: Vec<_> = records.into_iter().collect();
        let needed_capacity = generic_records.iter().map(|r| r.as_ref().len()).sum();

        let mut data = Vec::with_capacity(needed_capacity);
        for record in generic_records.iter() {
            data.extend_from_slice(record.as_ref());
        }

        Self::new(data)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The suffix starting at `offset`, truncated to at most `max_len` symbols.
    /// Offsets past the end yield an empty slice.
    pub(crate) fn truncated_suffix(&self, offset: usize, max_len: usize) -> &[u8] {
        let start = std::cmp::min(offset, self.data.len());
        let end = std::cmp::min(start.saturating_add(max_len), self.data.len());
        &self.data[start..end]
    }
}

impl Deref for Text {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<&[u8]> for Text {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for Text {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}
