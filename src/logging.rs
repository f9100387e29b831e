//! Logging utilities.

/// Mask an API key for safe logging, keeping only its first characters.
pub fn mask_secret(secret: &str) -> String {
    const VISIBLE: usize = 4;
    let prefix: String = secret.chars().take(VISIBLE).collect();
    if secret.chars().count() <= VISIBLE {
        "***".to_string()
    } else {
        format!("{prefix}***")
    }
}

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
