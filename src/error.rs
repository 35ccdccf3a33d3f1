use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("could not decode sequence file {}: {source}", path.display())]
    InputFormat {
        path: PathBuf,
        #[source]
        source: needletail::errors::ParseError,
    },

    #[error(
        "record {record} of {} contains symbol {symbol:?} at position {position}, which is not part of the alphabet",
        path.display()
    )]
    InvalidSymbol {
        path: PathBuf,
        record: usize,
        position: usize,
        symbol: char,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("text of length {len} does not fit into the index type (maximum {max})")]
    TextTooLarge { len: usize, max: usize },

    #[error("suffix array construction failed: {0}")]
    SuffixArrayConstruction(String),

    #[error("suffix array invariant violated: {0}")]
    InvariantViolation(String),
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Error::configuration("query_ct must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: query_ct must be positive"
        );

        let err = Error::TextTooLarge { len: 10, max: 5 };
        assert_eq!(
            err.to_string(),
            "text of length 10 does not fit into the index type (maximum 5)"
        );

        let err = Error::InvariantViolation("offset 3 appears twice".into());
        assert_eq!(
            err.to_string(),
            "suffix array invariant violated: offset 3 appears twice"
        );
    }

    #[test]
    fn from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();

        assert!(matches!(err, Error::Io(_)));
    }
}
