use crate::alphabet::{self, Alphabet};
use crate::error::{Error, Result};

/// Settings of a benchmark run that are shared by both search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub(crate) query_count: usize,
    pub(crate) alphabet: Alphabet,
    pub(crate) verify_suffix_array: bool,
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queries after cyclic expansion of the queries from the query file.
    pub fn query_count(&mut self, query_count: usize) -> &mut Self {
        self.query_count = query_count;
        self
    }

    /// Alphabet applied to reference and query records.
    pub fn alphabet(&mut self, alphabet: Alphabet) -> &mut Self {
        self.alphabet = alphabet;
        self
    }

    /// Check the suffix array after construction. Not part of the timed build phase.
    pub fn verify_suffix_array(&mut self, verify_suffix_array: bool) -> &mut Self {
        self.verify_suffix_array = verify_suffix_array;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.query_count == 0 {
            return Err(Error::configuration("query_ct must be positive"));
        }

        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            query_count: 100,
            alphabet: alphabet::dna5(),
            verify_suffix_array: false,
        }
    }
}
