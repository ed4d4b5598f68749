use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber
///
/// `verbosity` is the number of `-v` flags; `RUST_LOG` takes precedence when set.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "slack_dump=info",
        1 => "slack_dump=debug",
        _ => "slack_dump=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error when a subscriber is already installed (tests run in one process)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
