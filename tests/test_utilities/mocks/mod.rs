/// Mock implementations for testing
mod mock_package_store_reader;
mod mock_progress_reporter;

pub use mock_package_store_reader::MockPackageStoreReader;
pub use mock_progress_reporter::MockProgressReporter;
