//! Process-wide logging facade for a host application's native bridge layer.
//!
//! The host installs a [`LogSink`] once with [`init`]; afterwards any thread
//! may call [`log`] or [`log_native_event`] to route a text line to that sink,
//! gated by the [`enabled`] capability flag. All logging calls are total:
//! they never fail, never panic, and never block the caller. Before
//! initialization every call is a silent no-op and `enabled()` is false.
//!
//! Lines are stamped and tagged with their entry point, then drained to the
//! sink by a background thread; delivery is in send order, best effort.

mod dispatcher;
mod error;
mod sink;
mod types;

pub use error::LoggerError;
pub use sink::{ConsoleSink, LogSink, NullSink};
pub use types::{LogRecord, Origin};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

const QUEUE_CAPACITY: usize = 1024;

struct Logger {
    enabled: AtomicBool,
    dispatcher: dispatcher::DispatcherHandle,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install the sink with the flag defaulting to debug builds only,
/// matching the host's usual debug-mode gating.
pub fn init(sink: Box<dyn LogSink>) -> Result<(), LoggerError> {
    init_with(cfg!(debug_assertions), sink)
}

/// Install the sink with an explicit initial flag value.
///
/// The logger can be installed once per process; a second call returns
/// [`LoggerError::AlreadyInitialized`] and leaves the first sink in place.
pub fn init_with(enabled: bool, sink: Box<dyn LogSink>) -> Result<(), LoggerError> {
    let logger = Logger {
        enabled: AtomicBool::new(enabled),
        dispatcher: dispatcher::spawn(sink, QUEUE_CAPACITY),
    };
    // On the losing side of a race the fresh dispatcher handle is dropped
    // here and its thread exits with the closed channel.
    LOGGER.set(logger).map_err(|_| LoggerError::AlreadyInitialized)
}

/// Whether logging calls currently have any effect.
///
/// False until [`init`] ran; stable across unrelated calls unless the host
/// toggles it with [`set_enabled`].
pub fn enabled() -> bool {
    LOGGER
        .get()
        .map(|logger| logger.enabled.load(Ordering::Relaxed))
        .unwrap_or(false)
}

/// Toggle the capability flag at runtime. No-op before [`init`].
pub fn set_enabled(enabled: bool) {
    if let Some(logger) = LOGGER.get() {
        logger.enabled.store(enabled, Ordering::Relaxed);
    }
}

/// Route a generic message line to the sink.
pub fn log(line: &str) {
    dispatch(Origin::Bridge, line);
}

/// Route a natively-originated event line to the sink.
pub fn log_native_event(line: &str) {
    dispatch(Origin::Native, line);
}

/// Wait until every line queued so far reached the sink. Best effort; there
/// is no teardown beyond this.
pub fn flush() {
    if let Some(logger) = LOGGER.get() {
        logger.dispatcher.flush();
    }
}

/// Number of lines dropped because the queue was full. Zero before [`init`].
pub fn dropped_records() -> u64 {
    LOGGER
        .get()
        .map(|logger| logger.dispatcher.dropped_records())
        .unwrap_or(0)
}

fn dispatch(origin: Origin, line: &str) {
    if let Some(logger) = LOGGER.get() {
        if logger.enabled.load(Ordering::Relaxed) {
            logger.dispatcher.dispatch(LogRecord::new(origin, line));
        }
    }
}
