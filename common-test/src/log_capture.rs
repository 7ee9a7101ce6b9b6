use std::cell::RefCell;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct CapturingLogger;

static LOGGER: CapturingLogger = CapturingLogger;

thread_local! {
    static CAPTURED: RefCell<Option<Vec<(Level, String)>>> = const { RefCell::new(None) };
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|captured| {
            if let Some(records) = captured.borrow_mut().as_mut() {
                records.push((record.level(), record.args().to_string()));
            }
        });
    }

    fn flush(&self) {}
}

/// Runs `action` and returns the log records it emitted on the current thread.
///
/// Installs a process-wide logger on first use, so a test binary calling this
/// must not install another one.
pub fn capture_logs<F: FnOnce()>(action: F) -> Vec<(Level, String)> {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
    CAPTURED.with(|captured| *captured.borrow_mut() = Some(vec![]));
    action();
    CAPTURED.with(|captured| captured.borrow_mut().take().unwrap_or_default())
}
