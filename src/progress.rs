// src/progress.rs

/// Lightweight progress + notification sink used by the batch runner.
/// Frontends (GUI/CLI) implement this to surface status to users; the core
/// never talks to the UI directly.
pub trait Progress {
    /// Called at the start with the total number of input lines.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A user-visible error: empty input line, fetch failure, zero anchors.
    /// Never aborts the batch.
    fn error(&mut self, _msg: &str) {}

    /// Called when one URL produced a result row.
    fn item_done(&mut self, _url: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
