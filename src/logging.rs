use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `FITPICK_LOG` overrides the default
/// `info` level, e.g. `FITPICK_LOG=fitpick=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_env("FITPICK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
