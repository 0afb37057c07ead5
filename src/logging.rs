use tracing_subscriber::EnvFilter;

/// Sends `fuzzydate` events to stderr, at a level picked by the number of `-v` flags: none shows
/// warnings, `-v` info, `-vv` debug, and more than that trace. A set `RUST_LOG` wins over the flags.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fuzzydate={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
