pub mod build_info;
pub mod paths;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,budgety=info";

static TRACING_INIT: Once = Once::new();

/// Filter from a `RUST_LOG`-style spec, or `warn,budgety=info` when there is none.
pub(crate) fn log_filter(spec: Option<&str>) -> EnvFilter {
    spec.filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global tracing subscriber. `RUST_LOG` replaces the default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let spec = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        tracing_subscriber::fmt()
            .with_env_filter(log_filter(spec.as_deref()))
            .with_writer(std::io::stderr)
            .init();
    });
}
