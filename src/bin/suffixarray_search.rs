use anyhow::{Context, Result, anyhow};
use clap::Parser;
use sufbench::cli::{BuilderArg, SuffixArraySearchArgs};
use sufbench::{
    BenchmarkConfig, IndexStorage, LibsaisBuilder, SortingBuilder, SuffixArray, Workload,
    harness, logging,
};
use tracing::info;

fn main() -> Result<()> {
    let args = SuffixArraySearchArgs::parse();
    logging::init(args.common.verbose, args.common.quiet).map_err(|err| anyhow!(err))?;

    let config = args.benchmark_config()?;
    args.common.install_thread_pool()?;

    let workload = Workload::load(&args.common.reference, &args.common.query, &config)
        .context("failed to load benchmark input")?;

    if args.index_width.use_32_bits(workload.reference.len()) {
        run::<i32>(&args, &workload, &config)
    } else {
        run::<i64>(&args, &workload, &config)
    }
}

fn run<I: IndexStorage>(
    args: &SuffixArraySearchArgs,
    workload: &Workload,
    config: &BenchmarkConfig,
) -> Result<()> {
    let (report, suffix_array) = match args.builder {
        BuilderArg::Libsais => {
            harness::benchmark_suffix_array::<I, _>(workload, &LibsaisBuilder, config)
        }
        BuilderArg::Sort => {
            harness::benchmark_suffix_array::<I, _>(workload, &SortingBuilder, config)
        }
    }
    .context("suffix array benchmark failed")?;

    print!("{report}");

    if let Some(path) = &args.save_suffix_array {
        save(&suffix_array, path)?;
        info!(path = %path.display(), "stored suffix array");
    }

    Ok(())
}

#[cfg(feature = "savefile")]
fn save<I: IndexStorage>(suffix_array: &SuffixArray<I>, path: &std::path::Path) -> Result<()> {
    suffix_array
        .save_to_file(path)
        .map_err(|err| anyhow!("could not store suffix array at {}: {err:?}", path.display()))
}

#[cfg(not(feature = "savefile"))]
fn save<I: IndexStorage>(_suffix_array: &SuffixArray<I>, _path: &std::path::Path) -> Result<()> {
    Err(anyhow!(
        "storing suffix arrays requires the savefile feature"
    ))
}
