const INVALID: u8 = 255;

const ASCII_DNA_TRANSLATION_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];

    table[b'A' as usize] = b'A';
    table[b'a' as usize] = b'A';

    table[b'C' as usize] = b'C';
    table[b'c' as usize] = b'C';

    table[b'G' as usize] = b'G';
    table[b'g' as usize] = b'G';

    table[b'T' as usize] = b'T';
    table[b't' as usize] = b'T';

    table
};

// every byte that is not a base becomes N, like converting characters into a five letter
// nucleotide alphabet does in most sequence libraries
const DNA5_TRANSLATION_TABLE: [u8; 256] = {
    let mut table = [b'N'; 256];

    let mut i = 0;
    while i < 256 {
        if ASCII_DNA_TRANSLATION_TABLE[i] != INVALID {
            table[i] = ASCII_DNA_TRANSLATION_TABLE[i];
        }
        i += 1;
    }

    table
};

/// Determines how the bytes of decoded sequence records are stored in the text and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    name: &'static str,
    translation_table: Option<&'static [u8; 256]>,
}

/// Keeps every byte as it appears in the sequence file.
pub fn raw() -> Alphabet {
    Alphabet {
        name: "raw",
        translation_table: None,
    }
}

/// Accepts only `ACGT` in upper or lower case and stores them upper case.
pub fn ascii_dna() -> Alphabet {
    Alphabet {
        name: "dna",
        translation_table: Some(&ASCII_DNA_TRANSLATION_TABLE),
    }
}

/// Stores `ACGT` upper case and replaces any other byte by `N`.
pub fn dna5() -> Alphabet {
    Alphabet {
        name: "dna5",
        translation_table: Some(&DNA5_TRANSLATION_TABLE),
    }
}

impl Alphabet {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Translates the sequence in place. On a symbol outside of the alphabet, the index of
    /// that symbol is returned and the sequence is left partially translated.
    pub fn translate_in_place(&self, sequence: &mut [u8]) -> Result<(), usize> {
        let Some(table) = self.translation_table else {
            return Ok(());
        };

        for (i, c) in sequence.iter_mut().enumerate() {
            let translated = table[*c as usize];

            if translated == INVALID {
                return Err(i);
            }

            *c = translated;
        }

        Ok(())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        dna5()
    }
}
