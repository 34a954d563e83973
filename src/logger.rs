use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Default filter when `RUST_LOG` is unset.
pub fn default_directives(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("{}={level},tower_http={level}", env!("CARGO_CRATE_NAME"))
}

/// Initialise Logging using the Tracing crate. `RUST_LOG` takes precedence over `debug`.
pub fn init(debug: bool) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directives(debug))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
