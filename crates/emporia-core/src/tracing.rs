use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when `RUST_LOG` is unset: service logs at info,
/// sqlx statement logging quieted to warn.
const DEFAULT_DIRECTIVES: &str = "info,sqlx=warn";

/// Initialize JSON stdout tracing with env-filter. Call once at service
/// startup; repeat calls are silently ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
