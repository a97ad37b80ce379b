//! Logging bootstrap for the CLI
//!
//! Logs go to stderr so report output on stdout stays pipeable. The
//! `RUST_LOG` environment variable overrides the `--log-level` default.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(level: &str) {
    let default_filter = format!("nestegg={level},nestegg_core={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}
