use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const DEBUG_FILTER: &str = "rgallery=debug,warn";

/// Install the fmt subscriber and route `log` records into it.
/// `--debug` wins over `RUST_LOG`; repeated calls are ignored.
pub fn init_tracing(debug: bool) {
    let _ = tracing_log::LogTracer::init();

    let env_filter = if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .ok();
}
