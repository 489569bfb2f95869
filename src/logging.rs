use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `venture_ai=debug`.
pub const LOG_ENV_VAR: &str = "VENTURE_AI_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install a stderr subscriber. `VENTURE_AI_LOG` wins over `verbose` when set.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
