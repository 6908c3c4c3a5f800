use std::path::Path;

/// Keeps the trace writer alive; buffered lines are flushed when dropped.
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Send `utsu_core` / `utsu_session` spans to `<log_dir>/utsu-trace.jsonl`.
/// `RUST_LOG` overrides the default filter. Without the `trace` feature the
/// spans are compiled out and this does nothing.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let appender = tracing_appender::rolling::never(log_dir, "utsu-trace.jsonl");
    let (writer, worker) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("utsu_core=debug,utsu_session=debug"));

    let installed = tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    TraceGuard {
        _worker: installed.then_some(worker),
    }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> TraceGuard {
    TraceGuard {}
}
