use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::{SubscriberInitExt, TryInitError}, EnvFilter, Registry,
};

/// Installs a global subscriber that prints this crate's request spans and
/// events. Other crates are filtered at WARN.
///
/// Fails if a global subscriber is already set.
pub fn init_default_tracing() -> Result<(), TryInitError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy("ollama_api_wrapper=debug");

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_span_events(fmt::format::FmtSpan::CLOSE);

    Registry::default().with(filter).with(fmt_layer).try_init()
}
