/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod formatter;
pub mod output_presenter;
pub mod package_store_reader;
pub mod progress_reporter;

pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use package_store_reader::{PackageStoreReader, SkippedRecord, StoreScanResult};
pub use progress_reporter::ProgressReporter;
