use native_logger::{LogRecord, LogSink, Origin};
use std::sync::{Arc, Mutex};
use std::thread;

struct CaptureSink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl LogSink for CaptureSink {
    fn write(&self, record: &LogRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

const THREADS: usize = 4;
const LINES_PER_THREAD: usize = 50;

/// The facade is callable from any thread; lines sent from one thread reach
/// the sink in that thread's send order. Own test binary because the logger
/// installs once per process.
#[test]
fn concurrent_callers_stay_ordered_per_thread() {
    let records = Arc::new(Mutex::new(Vec::new()));
    native_logger::init_with(
        true,
        Box::new(CaptureSink {
            records: Arc::clone(&records),
        }),
    )
    .unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    if i % 2 == 0 {
                        native_logger::log(&format!("{t}:{i}"));
                    } else {
                        native_logger::log_native_event(&format!("{t}:{i}"));
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    native_logger::flush();
    assert_eq!(native_logger::dropped_records(), 0);

    let seen = records.lock().unwrap();
    assert_eq!(seen.len(), THREADS * LINES_PER_THREAD);

    // Per thread, sequence numbers must come out strictly ascending, with
    // the origin alternating the way that thread sent them.
    for t in 0..THREADS {
        let prefix = format!("{t}:");
        let mine: Vec<(usize, Origin)> = seen
            .iter()
            .filter(|r| r.line.starts_with(&prefix))
            .map(|r| (r.line[prefix.len()..].parse().unwrap(), r.origin))
            .collect();
        assert_eq!(mine.len(), LINES_PER_THREAD);
        for (i, (seq, origin)) in mine.iter().enumerate() {
            assert_eq!(*seq, i);
            let expected = if i % 2 == 0 {
                Origin::Bridge
            } else {
                Origin::Native
            };
            assert_eq!(*origin, expected);
        }
    }
}
