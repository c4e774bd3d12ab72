use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn fallback_directives(verbose: bool) -> &'static str {
    if verbose {
        "persona=debug,info"
    } else {
        "persona=info"
    }
}

/// `env_value` wins when it parses; otherwise the crate default applies.
fn filter_from(env_value: Option<&str>, verbose: bool) -> EnvFilter {
    env_value
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback_directives(verbose)))
}

fn default_filter(verbose: bool) -> EnvFilter {
    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env_value.as_deref(), verbose)
}

/// Installs a compact human-readable subscriber. Returns `false` if a global
/// subscriber was already set.
pub fn init_logger(verbose: bool) -> bool {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .is_ok()
}

pub fn init_json_logger() -> bool {
    tracing_subscriber::registry()
        .with(default_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init()
        .is_ok()
}
