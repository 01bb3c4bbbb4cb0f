use std::path::{Path, PathBuf};
use pacwhy::prelude::*;

/// Mock PackageStoreReader serving records from memory
pub struct MockPackageStoreReader {
    pub records: Vec<PackageRecord>,
    pub skipped: Vec<SkippedRecord>,
    pub should_fail: bool,
}

impl MockPackageStoreReader {
    pub fn new(records: Vec<PackageRecord>) -> Self {
        Self {
            records,
            skipped: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_skipped(mut self, sources: &[&str]) -> Self {
        self.skipped = sources
            .iter()
            .map(|source| SkippedRecord::new(PathBuf::from(source), "mock parse failure"))
            .collect();
        self
    }

    pub fn with_failure() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            should_fail: true,
        }
    }
}

impl PackageStoreReader for MockPackageStoreReader {
    fn read_store(
        &self,
        db_path: &Path,
        on_progress: &dyn Fn(usize, usize),
    ) -> Result<StoreScanResult> {
        if self.should_fail {
            return Err(WhyError::StoreUnavailable {
                path: db_path.to_path_buf(),
                details: "Mock store failure".to_string(),
            }
            .into());
        }
        let total = self.records.len() + self.skipped.len();
        for current in 1..=total {
            on_progress(current, total);
        }
        Ok((self.records.clone(), self.skipped.clone()))
    }
}
