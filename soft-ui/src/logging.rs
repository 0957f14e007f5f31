//! Tracing bootstrap shared by soft-ui binaries.

/// Installs a formatted `tracing` subscriber.
///
/// The filter is read from `RUST_LOG`; when it is unset or invalid,
/// `default_directive` is used, and if that fails to parse too only errors
/// are shown. Installing twice is harmless, the second call is ignored.
pub fn init_tracing(default_directive: &str) {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(default_directive) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
