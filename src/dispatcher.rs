use crate::sink::LogSink;
use crate::types::LogRecord;
use log::trace;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc as std_mpsc, Arc};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

const FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

/// Messages drained by the dispatcher thread.
enum Message {
    Record(LogRecord),
    /// Acknowledged once every record queued before it was written.
    Flush(std_mpsc::SyncSender<()>),
}

/// Handle for sending records to the dispatcher thread.
#[derive(Clone)]
pub struct DispatcherHandle {
    tx: mpsc::Sender<Message>,
    dropped: Arc<AtomicU64>,
}

/// Spawn a dispatcher thread draining records into `sink`.
///
/// Records are delivered in send order. The channel is bounded so callers
/// never block: when the queue is full the record is counted as dropped and
/// the call still succeeds. The thread exits once every handle is gone.
pub fn spawn(sink: Box<dyn LogSink>, capacity: usize) -> DispatcherHandle {
    let (tx, mut rx) = mpsc::channel::<Message>(capacity);
    let dropped = Arc::new(AtomicU64::new(0));

    let builder = thread::Builder::new().name("native-logger".to_string());
    let _ = builder.spawn(move || {
        while let Some(msg) = rx.blocking_recv() {
            match msg {
                Message::Record(record) => sink.write(&record),
                Message::Flush(ack) => {
                    trace!("Dispatcher queue flushed");
                    let _ = ack.send(());
                }
            }
        }
    });

    DispatcherHandle { tx, dropped }
}

impl DispatcherHandle {
    /// Queue a record, never blocking the caller.
    pub fn dispatch(&self, record: LogRecord) {
        if self.tx.try_send(Message::Record(record)).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Wait until every record queued so far reached the sink.
    ///
    /// Best effort: gives up after a timeout, or immediately when the queue
    /// has no room for the flush marker.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = std_mpsc::sync_channel(1);
        if self.tx.try_send(Message::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv_timeout(FLUSH_TIMEOUT);
        }
    }

    /// Number of records dropped because the queue was full.
    pub fn dropped_records(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
