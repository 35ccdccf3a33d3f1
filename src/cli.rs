use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};

use crate::alphabet::{self, Alphabet};
use crate::config::BenchmarkConfig;
use crate::error::{Error, Result};

/// Arguments shared by both benchmark programs.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// path to the reference file
    #[arg(long)]
    pub reference: PathBuf,

    /// path to the query file
    #[arg(long)]
    pub query: PathBuf,

    /// number of queries, if not enough queries, these will be duplicated
    #[arg(long = "query_ct", default_value_t = 100, allow_negative_numbers = true)]
    pub query_ct: i64,

    /// alphabet that reference and queries are translated into
    #[arg(long, value_enum, default_value_t = AlphabetArg::Dna5)]
    pub alphabet: AlphabetArg,

    /// number of threads for suffix array construction and verification
    #[arg(long)]
    pub threads: Option<usize>,

    /// more log output on stderr, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommonArgs {
    pub fn benchmark_config(&self) -> Result<BenchmarkConfig> {
        let query_count = usize::try_from(self.query_ct)
            .ok()
            .filter(|&query_count| query_count > 0)
            .ok_or_else(|| {
                Error::configuration(format!(
                    "query_ct must be positive, but is {}",
                    self.query_ct
                ))
            })?;

        let mut config = BenchmarkConfig::new();
        config
            .query_count(query_count)
            .alphabet(self.alphabet.into());

        Ok(config)
    }

    /// Configures the global rayon thread pool if a thread count was given.
    pub fn install_thread_pool(&self) -> Result<()> {
        let Some(threads) = self.threads else {
            return Ok(());
        };

        if threads == 0 {
            return Err(Error::configuration("threads must be positive"));
        }

        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|err| Error::configuration(format!("could not set up threads: {err}")))
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetArg {
    /// keep all bytes
    Raw,
    /// only ACGT, anything else is an error
    Dna,
    /// ACGT, anything else becomes N
    Dna5,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Raw => alphabet::raw(),
            AlphabetArg::Dna => alphabet::ascii_dna(),
            AlphabetArg::Dna5 => alphabet::dna5(),
        }
    }
}

/// Counts all occurrences of the queries in the reference by scanning it.
#[derive(Parser, Debug)]
#[command(name = "naive_search", version, about)]
pub struct NaiveSearchArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Counts all occurrences of the queries in the reference using a suffix array.
#[derive(Parser, Debug)]
#[command(name = "suffixarray_search", version, about)]
pub struct SuffixArraySearchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// suffix array construction algorithm
    #[arg(long, value_enum, default_value_t = BuilderArg::Libsais)]
    pub builder: BuilderArg,

    /// integer width of suffix array entries
    #[arg(long, value_enum, default_value_t = IndexWidth::Auto)]
    pub index_width: IndexWidth,

    /// check that the suffix array is sorted before searching (not timed)
    #[arg(long)]
    pub verify_suffix_array: bool,

    /// store the constructed suffix array at this path (requires the savefile feature)
    #[arg(long)]
    pub save_suffix_array: Option<PathBuf>,
}

impl SuffixArraySearchArgs {
    pub fn benchmark_config(&self) -> Result<BenchmarkConfig> {
        let mut config = self.common.benchmark_config()?;
        config.verify_suffix_array(self.verify_suffix_array);

        Ok(config)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderArg {
    /// SA-IS from libsais
    Libsais,
    /// comparison sort of all suffixes, slow
    Sort,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexWidth {
    /// 32 bit if the reference is small enough, otherwise 64 bit
    Auto,
    #[value(name = "32")]
    Bits32,
    #[value(name = "64")]
    Bits64,
}

impl IndexWidth {
    pub fn use_32_bits(self, text_len: usize) -> bool {
        match self {
            IndexWidth::Auto => text_len <= i32::MAX as usize,
            IndexWidth::Bits32 => true,
            IndexWidth::Bits64 => false,
        }
    }
}
