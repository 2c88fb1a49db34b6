use crate::types::LogRecord;
use log::debug;

/// Destination for log lines routed through the facade.
///
/// The sink is an external collaborator: the facade does not care whether
/// lines end up on a platform console, a host logger, or nowhere. Writes are
/// best effort and must not panic; there is no error channel back to the
/// caller.
pub trait LogSink: Send + Sync {
    fn write(&self, record: &LogRecord);
}

/// Forwards lines to the `log` crate at debug level.
///
/// This is the default destination: whatever logger backend the host process
/// installed picks the lines up, tagged with their origin.
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, record: &LogRecord) {
        debug!(target: "native_logger", "[{}] {}", record.origin.tag(), record.line);
    }
}

/// Discards every line.
pub struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _record: &LogRecord) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Origin;

    #[test]
    fn console_and_null_sinks_accept_any_line() {
        let record = LogRecord::new(Origin::Native, "evt \x00\x1b[0m");
        ConsoleSink.write(&record);
        NullSink.write(&record);
    }
}
