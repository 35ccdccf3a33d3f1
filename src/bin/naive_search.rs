use anyhow::{Context, Result, anyhow};
use clap::Parser;
use sufbench::{Workload, cli::NaiveSearchArgs, harness, logging};

fn main() -> Result<()> {
    let args = NaiveSearchArgs::parse();
    logging::init(args.common.verbose, args.common.quiet).map_err(|err| anyhow!(err))?;

    let config = args.common.benchmark_config()?;
    args.common.install_thread_pool()?;

    let workload = Workload::load(&args.common.reference, &args.common.query, &config)
        .context("failed to load benchmark input")?;

    let report = harness::benchmark_naive(&workload);
    print!("{report}");

    Ok(())
}
