use tracing_subscriber::EnvFilter;

type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }

    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber writing to stderr, so that stdout only contains metrics.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init(verbosity: u8, quiet: bool) -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
