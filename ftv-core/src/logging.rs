//! src/logging.rs
//! ============================================================================
//! # Tracing Setup
//!
//! File plus stderr logging for hosts embedding the tree view. Every event
//! carries a sequence number so interleaved widget instances can be ordered
//! when reading the log after the fact.

use std::{
    path::Path,
    sync::OnceLock,
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing::Metadata;
use tracing_appender::rolling::{RollingFileAppender, daily};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    prelude::*,
};

static SEQ: OnceLock<AtomicUsize> = OnceLock::new();

pub struct Logger;

impl Logger {
    /// Call **once** near the start of the host program. Logs roll daily
    /// into `<log_dir>/ftv-YYYY-MM-DD.log`; an ANSI stderr layer mirrors
    /// them for live debugging. Level defaults to `info`, overridable via
    /// `RUST_LOG`.
    pub fn init_tracing(log_dir: impl AsRef<Path>) {
        let log_dir: &Path = log_dir.as_ref();
        std::fs::create_dir_all(log_dir).expect("cannot create log dir");

        SEQ.get_or_init(|| AtomicUsize::new(1));

        let file: RollingFileAppender = daily(log_dir, "ftv");

        let file_layer = fmt::layer()
            .event_format(SeqLineFormat)
            .with_writer(file)
            .with_ansi(false)
            .with_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()));

        let stderr_layer = fmt::layer()
            .event_format(SeqLineFormat)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()));

        tracing_subscriber::registry()
            .with(file_layer)
            .with(stderr_layer)
            .init();
    }
}

/// Compact line format: `SEQ LEVEL [file:line] fields`
struct SeqLineFormat;

impl<S, N> FormatEvent<S, N> for SeqLineFormat
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let seq: usize = SEQ
            .get()
            .expect("SEQ not initialised")
            .fetch_add(1, Ordering::Relaxed);

        let meta: &'static Metadata<'static> = ev.metadata();
        write!(
            w,
            "{seq:06} {:5} [{}:{}] ",
            meta.level(),
            meta.file().unwrap_or("??"),
            meta.line().unwrap_or(0),
        )?;

        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}
