use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match (verbose, level) {
        (true, _) => EnvFilter::new("prompt_enhancer=debug,info"),
        (false, Some(level)) => EnvFilter::try_new(format!("prompt_enhancer={}", level))
            .unwrap_or_else(|_| EnvFilter::new("prompt_enhancer=info")),
        (false, None) => EnvFilter::new("prompt_enhancer=info"),
    }
}

/// Compact human-readable logs on stderr. `RUST_LOG` wins over both
/// arguments.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
