use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "artifact_browser=info,az_devops=info";
const VERBOSE_FILTER: &str = "artifact_browser=debug,az_devops=debug";

/// Logs go to stderr. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
