use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `app.log_level`.
/// Returns `false` when a subscriber was already installed.
pub fn init_tracing(app: &AppConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("gstledger={}", app.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    if installed.is_ok() {
        tracing::info!(env = app.env.as_str(), "Tracing initialized");
    }

    installed.is_ok()
}
