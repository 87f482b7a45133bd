//! gowords CLI entry point

use tracing_subscriber::EnvFilter;

fn main() {
    // Structured logging on stderr; RUST_LOG wins, otherwise `--debug` selects debug over warn
    let default_level = if std::env::args().any(|a| a == "--debug") {
        "debug"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .try_init();

    gowords::cli::run();
}
