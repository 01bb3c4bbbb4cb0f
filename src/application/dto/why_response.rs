use crate::install_analysis::domain::{InstallChain, PackageRecord};

/// WhyResponse - Internal response DTO from the installation explanation use case
///
/// Carries the full, uncapped result. Display limits are applied later by
/// the read model builder.
#[derive(Debug, Clone)]
pub struct WhyResponse {
    /// Record of the queried package
    pub package: PackageRecord,
    /// Installed packages that require the queried package, sorted
    pub required_by: Vec<String>,
    /// Every discovered installation chain, root first, sorted
    /// Empty for explicitly installed packages and orphans
    pub chains: Vec<InstallChain>,
    /// Whether the chain search stopped before exploring every path
    pub search_truncated: bool,
    /// Number of packages in the index
    pub indexed_packages: usize,
    /// Number of store records that could not be indexed
    pub skipped_records: usize,
}

impl WhyResponse {
    pub fn new(
        package: PackageRecord,
        required_by: Vec<String>,
        chains: Vec<InstallChain>,
        search_truncated: bool,
        indexed_packages: usize,
        skipped_records: usize,
    ) -> Self {
        Self {
            package,
            required_by,
            chains,
            search_truncated,
            indexed_packages,
            skipped_records,
        }
    }

    /// A dependency install that nothing requires any more
    pub fn is_orphan(&self) -> bool {
        !self.package.is_explicit() && self.required_by.is_empty()
    }
}
