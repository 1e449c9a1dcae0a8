/*!
 * Structured Tracing
 * Subscriber setup for the simulator binary using the tracing crate
 */

use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Log line format selected from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    Compact,
    Json,
}

impl TraceFormat {
    /// `SCHED_TRACE_JSON=1|true` selects JSON, anything else compact text
    pub fn from_env() -> Self {
        Self::from_flag(std::env::var("SCHED_TRACE_JSON").ok().as_deref())
    }

    fn from_flag(flag: Option<&str>) -> Self {
        match flag.map(str::trim) {
            Some("1") | Some("true") => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_TRACE_JSON: Enable JSON output (default: false)
///
/// Output goes to stderr so reports on stdout stay clean. Calling this twice
/// keeps the first subscriber.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let format = TraceFormat::from_env();
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match format {
        TraceFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        TraceFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init(),
    };

    if installed.is_ok() {
        info!(?format, "Structured tracing initialized");
    }
}
