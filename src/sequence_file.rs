use std::fs::File;
use std::path::Path;

use needletail::errors::ParseErrorKind;
use needletail::parse_fastx_reader;
use tracing::{debug, warn};

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::text::Text;

/// Reads all records of a FASTA or FASTQ file (optionally compressed) in file order.
///
/// Each record is translated by the alphabet. A file without any content (also after
/// decompression) contains no records.
pub fn read_records(path: impl AsRef<Path>, alphabet: &Alphabet) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut reader = match parse_fastx_reader(file) {
        Ok(reader) => reader,
        Err(err) if err.kind == ParseErrorKind::EmptyFile => {
            warn!(path = %path.display(), "sequence file is empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(Error::InputFormat {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut records = Vec::new();

    while let Some(record) = reader.next() {
        let record = record.map_err(|source| Error::InputFormat {
            path: path.to_path_buf(),
            source,
        })?;

        let mut sequence = record.seq().into_owned();

        alphabet
            .translate_in_place(&mut sequence)
            .map_err(|position| Error::InvalidSymbol {
                path: path.to_path_buf(),
                record: records.len(),
                position,
                symbol: sequence[position] as char,
            })?;

        records.push(sequence);
    }

    debug!(
        path = %path.display(),
        num_records = records.len(),
        alphabet = alphabet.name(),
        "decoded sequence file"
    );

    Ok(records)
}

/// Reads all records of the file and concatenates them into one text.
pub fn read_concatenated(path: impl AsRef<Path>, alphabet: &Alphabet) -> Result<Text> {
    let records = read_records(path, alphabet)?;
    Ok(Text::from_records(records))
}
