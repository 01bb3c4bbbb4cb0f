/// ProgressReporter port for reporting progress and diagnostics
///
/// This port abstracts user feedback during an analysis (e.g., to stderr).
/// It is also the verbose hook through which recovered per-record failures
/// become visible without changing the default output.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through a batch of work
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recovered problem (skipped record, duplicate, ...)
    fn report_diagnostic(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
