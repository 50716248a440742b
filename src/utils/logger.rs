use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "http_smoke=debug,info"
    } else {
        "http_smoke=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

// Logs go to stderr; stdout is reserved for the probe report.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
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

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        std::env::remove_var("RUST_LOG");

        let quiet = default_filter(false).to_string();
        assert!(quiet.contains("http_smoke=info"), "filter: {}", quiet);

        let verbose = default_filter(true).to_string();
        assert!(verbose.contains("http_smoke=debug"), "filter: {}", verbose);
        assert!(verbose.split(',').any(|d| d == "info"), "filter: {}", verbose);
    }
}
