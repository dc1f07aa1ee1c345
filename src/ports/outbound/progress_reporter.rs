/// ProgressReporter port for reporting progress during analysis
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback during long-running operations.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress as `done` of `total` nodes analyzed
    ///
    /// The tree analyzer calls this with `(0, total)` before the first
    /// node and `(k, total)` after each node, ending at `(total, total)`.
    fn report_progress(&self, done: usize, total: usize);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
