use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Warnings always show (token-skip warnings
/// are part of the tool's contract); anything quieter is opt-in via the
/// standard `RUST_LOG` filter syntax. Output goes to stdout alongside the
/// report, without timestamps so runs stay byte-for-byte reproducible.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
