use crate::application::dto::{WhyRequest, WhyResponse};
use crate::install_analysis::domain::{PackageIndex, PackageRecord, ReverseDependencyMap};
use crate::install_analysis::services::{ChainFinder, ChainSearch};
use crate::ports::outbound::{PackageStoreReader, ProgressReporter, SkippedRecord};
use crate::shared::Result;

/// ExplainInstallationUseCase - Core use case answering "why is this installed?"
///
/// Builds the package index and reverse dependency map once, then explains
/// a single package: its record, who requires it and every chain leading
/// to it from an explicitly installed package.
///
/// # Type Parameters
/// * `SR` - PackageStoreReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ExplainInstallationUseCase<SR, PR> {
    store_reader: SR,
    progress_reporter: PR,
}

impl<SR, PR> ExplainInstallationUseCase<SR, PR>
where
    SR: PackageStoreReader,
    PR: ProgressReporter,
{
    /// Creates a new ExplainInstallationUseCase with injected dependencies
    pub fn new(store_reader: SR, progress_reporter: PR) -> Self {
        Self {
            store_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package database is unavailable (`WhyError::StoreUnavailable`)
    /// - The package is not installed (`WhyError::PackageNotFound`)
    pub fn execute(&self, request: WhyRequest) -> Result<WhyResponse> {
        // Step 1: Read every record from the store
        let (records, skipped) = self.read_store(&request)?;

        // Step 2: Build the package index
        let (index, skipped_count) = self.build_index(records, &skipped);

        // Step 3: Derive the reverse dependency map
        let reverse_deps = ReverseDependencyMap::build(&index);

        // Step 4: Look up the queried package
        let package = index.require(&request.package_name)?;

        // Step 5: Explain it
        let required_by: Vec<String> = reverse_deps.required_by(package).into_iter().collect();
        let search = self.find_chains(&request, package, &index, &reverse_deps);

        Ok(WhyResponse::new(
            package.clone(),
            required_by,
            search.chains,
            search.truncated,
            index.len(),
            skipped_count,
        ))
    }

    /// Reads the store, forwarding progress to the reporter
    fn read_store(&self, request: &WhyRequest) -> Result<(Vec<PackageRecord>, Vec<SkippedRecord>)> {
        self.progress_reporter.report(&format!(
            "📖 Loading package database from: {}",
            request.db_path.display()
        ));

        let on_progress = |current: usize, total: usize| {
            self.progress_reporter
                .report_progress(current, total, Some("Reading package records..."));
        };
        let (records, skipped) = self.store_reader.read_store(&request.db_path, &on_progress)?;

        for entry in &skipped {
            self.progress_reporter.report_diagnostic(&format!(
                "⚠️  Skipped {}: {}",
                entry.source.display(),
                entry.reason
            ));
        }

        Ok((records, skipped))
    }

    /// Builds the index and reports what was left out
    ///
    /// # Returns
    /// The index and the total number of records excluded from it
    fn build_index(
        &self,
        records: Vec<PackageRecord>,
        skipped: &[SkippedRecord],
    ) -> (PackageIndex, usize) {
        let (index, duplicates) = PackageIndex::build(records);

        for duplicate in &duplicates {
            self.progress_reporter.report_diagnostic(&format!(
                "⚠️  Duplicate record for '{}' ({}) ignored",
                duplicate.name(),
                duplicate.version()
            ));
        }

        let excluded = skipped.len() + duplicates.len();
        self.progress_reporter
            .report(&format!("✅ Indexed {} package(s)", index.len()));
        if excluded > 0 {
            self.progress_reporter.report(&format!(
                "   - {} record(s) could not be indexed (run with --verbose for details)",
                excluded
            ));
        }

        (index, excluded)
    }

    /// Runs the chain search for dependency installs only
    fn find_chains(
        &self,
        request: &WhyRequest,
        package: &PackageRecord,
        index: &PackageIndex,
        reverse_deps: &ReverseDependencyMap,
    ) -> ChainSearch {
        if package.is_explicit() {
            return ChainSearch::default();
        }

        self.progress_reporter.report(&format!(
            "🔍 Tracing installation chains for {}...",
            package.name()
        ));

        let search = ChainFinder::new(index, reverse_deps)
            .with_chain_limit(request.chain_limit)
            .find_chains(package.name());

        if search.truncated {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Chain search for '{}' stopped early; more chains may exist.",
                package.name()
            ));
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Found {} installation chain(s)",
            search.chains.len()
        ));

        search
    }
}
