use crate::install_analysis::domain::PackageRecord;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// A record the store could not turn into a `PackageRecord`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Location of the metadata source that failed
    pub source: PathBuf,
    /// Why it was skipped
    pub reason: String,
}

impl SkippedRecord {
    pub fn new(source: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            source,
            reason: reason.into(),
        }
    }
}

/// Type alias for the outcome of a store scan: parsed records plus the
/// sources that were skipped
pub type StoreScanResult = (Vec<PackageRecord>, Vec<SkippedRecord>);

/// PackageStoreReader port for reading every installed package record
///
/// This port abstracts the on-disk package database so that index
/// construction depends only on the abstract record shape.
pub trait PackageStoreReader {
    /// Reads all package records from the store at `db_path`
    ///
    /// Each metadata source is read at most once. A source that cannot be
    /// read or parsed is reported in the skipped list instead of failing
    /// the whole scan.
    ///
    /// # Arguments
    /// * `db_path` - Location of the package database
    /// * `on_progress` - Called with (processed, total) after each source
    ///
    /// # Errors
    /// Returns `WhyError::StoreUnavailable` if the store itself cannot be
    /// opened or listed
    fn read_store(
        &self,
        db_path: &Path,
        on_progress: &dyn Fn(usize, usize),
    ) -> Result<StoreScanResult>;
}
