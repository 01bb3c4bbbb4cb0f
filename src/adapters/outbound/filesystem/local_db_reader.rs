use super::desc_parser::parse_desc;
use crate::install_analysis::domain::PackageRecord;
use crate::ports::outbound::{PackageStoreReader, SkippedRecord, StoreScanResult};
use crate::shared::error::WhyError;
use crate::shared::security::{read_regular_file, MAX_RECORD_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the metadata file inside each package directory
const DESC_FILE_NAME: &str = "desc";

/// LocalDatabaseReader adapter for the pacman local database
///
/// The database is a directory holding one `<name>-<version>-<rel>`
/// sub-directory per installed package, each with a `desc` metadata file.
/// Plain files at the top level (such as `ALPM_DB_VERSION`) are ignored.
pub struct LocalDatabaseReader;

impl LocalDatabaseReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalDatabaseReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalDatabaseReader {
    /// Lists package directories in sorted order
    fn list_package_dirs(&self, db_path: &Path) -> Result<Vec<PathBuf>> {
        let store_unavailable = |details: String| WhyError::StoreUnavailable {
            path: db_path.to_path_buf(),
            details,
        };

        let metadata = fs::metadata(db_path).map_err(|e| store_unavailable(e.to_string()))?;
        if !metadata.is_dir() {
            return Err(store_unavailable("Not a directory".to_string()).into());
        }

        let entries = fs::read_dir(db_path).map_err(|e| store_unavailable(e.to_string()))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| store_unavailable(e.to_string()))?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                dirs.push(entry.path());
            }
        }

        dirs.sort();
        Ok(dirs)
    }

    /// Reads and parses one package directory's `desc` file
    fn read_record(&self, package_dir: &Path) -> Result<PackageRecord> {
        let desc_path = package_dir.join(DESC_FILE_NAME);
        let record_failure = |details: String| WhyError::RecordParseFailure {
            path: desc_path.clone(),
            details,
        };

        let content = read_regular_file(&desc_path, DESC_FILE_NAME, MAX_RECORD_FILE_SIZE)
            .map_err(|e| record_failure(e.to_string()))?;

        parse_desc(&content).map_err(|e| record_failure(e.to_string()).into())
    }
}

impl PackageStoreReader for LocalDatabaseReader {
    fn read_store(
        &self,
        db_path: &Path,
        on_progress: &dyn Fn(usize, usize),
    ) -> Result<StoreScanResult> {
        let package_dirs = self.list_package_dirs(db_path)?;
        let total = package_dirs.len();

        let mut records = Vec::with_capacity(total);
        let mut skipped = Vec::new();

        for (idx, package_dir) in package_dirs.iter().enumerate() {
            match self.read_record(package_dir) {
                Ok(record) => records.push(record),
                Err(e) => skipped.push(SkippedRecord::new(package_dir.clone(), e.to_string())),
            }
            on_progress(idx + 1, total);
        }

        Ok((records, skipped))
    }
}
