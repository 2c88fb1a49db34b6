/// Own test binary: the logger is never installed in this process, so every
/// facade call must be a safe no-op.
#[test]
fn calls_without_init_are_noops() {
    assert!(!native_logger::enabled());
    native_logger::log("nobody listening");
    native_logger::log_native_event("nobody listening");
    native_logger::set_enabled(true);
    assert!(!native_logger::enabled());
    native_logger::flush();
    assert_eq!(native_logger::dropped_records(), 0);
    assert!(!native_logger::enabled());
}
