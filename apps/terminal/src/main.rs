//! Cedar POS terminal entry point.

use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG controls verbosity; default to info for the terminal.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = cedar_terminal::run() {
        eprintln!("terminal error: {err}");
        std::process::exit(1);
    }
}
