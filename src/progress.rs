// src/progress.rs
/// Lightweight progress reporting for a load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of documents.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One document finished, whatever its outcome.
    fn item_done(&mut self, _source: &str) {}

    /// One document produced a warning.
    fn item_failed(&mut self, _source: &str, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
