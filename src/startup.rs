use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG`, defaulting to `info`. Serenity's own spans are
/// noisy at `info`, so narrow them with e.g. `RUST_LOG=info,serenity=warn`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
