use std::sync::OnceLock;

use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt as _, EnvFilter};

static TELEMETRY_INIT: OnceLock<()> = OnceLock::new();

/// `RUST_LOG` when set, the configured level otherwise.
pub fn get_subscriber(log_level: &str) -> impl Subscriber + Send + Sync {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    tracing_subscriber::Registry::default()
        .with(filter)
        .with(fmt_layer)
}

/// Installs the subscriber once; later calls are ignored.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    if TELEMETRY_INIT.set(()).is_err() {
        return;
    }
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {e}");
    }
}
