//! Tracing subscriber setup for the binary.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install a stderr subscriber at DEBUG when `verbose`; otherwise stay silent.
pub fn init(verbose: bool) {
    if !verbose {
        return;
    }
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(()) => tracing::debug!("verbose mode enabled"),
        Err(e) => eprintln!("Warning: could not enable verbose logging: {e}"),
    }
}
