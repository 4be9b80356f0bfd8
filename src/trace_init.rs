//! JSON trace file for host apps, enabled by the `trace` feature.

/// File written under the host-supplied log directory.
#[cfg_attr(not(feature = "trace"), allow(dead_code))]
const TRACE_FILE: &str = "preeti-trace.jsonl";

/// Filter used when `RUST_LOG` is unset.
#[cfg_attr(not(feature = "trace"), allow(dead_code))]
const DEFAULT_FILTER: &str = "preeti_engine=debug,preeti_core=debug,preeti_session=debug";

#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &std::path::Path) {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // Flushing stops when the guard drops; keep it for the whole process
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();

        tracing::info!(dir = %log_dir.display(), file = TRACE_FILE, "tracing enabled");
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
