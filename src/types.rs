use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Which entry point a log line came through.
///
/// The two entry points carry the same contract; the origin tag is the only
/// distinction between them, and sinks may use it to label output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// A generic message handed over the bridge (`log`).
    Bridge,
    /// An event raised by native code (`log_native_event`).
    Native,
}

impl Origin {
    /// Short label for rendering, e.g. `[bridge] ...`.
    pub fn tag(&self) -> &'static str {
        match self {
            Origin::Bridge => "bridge",
            Origin::Native => "native",
        }
    }
}

/// A single log line accepted by the facade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// ISO 8601 UTC timestamp, stamped when the line entered the facade
    pub timestamp: String,
    /// Entry point the line came through
    pub origin: Origin,
    /// The line exactly as the caller passed it
    pub line: String,
}

impl LogRecord {
    pub fn new(origin: Origin, line: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            origin,
            line: line.into(),
        }
    }
}
