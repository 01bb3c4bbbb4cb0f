//! Builder for constructing PackageReport from the use case response

use super::package_report::{ChainSection, PackageReport};
use crate::application::dto::WhyResponse;

/// Number of chains shown when no cap is configured
pub const DEFAULT_MAX_CHAINS: usize = 6;

const INSTALL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Builder for constructing PackageReport from domain objects
pub struct PackageReportBuilder;

impl PackageReportBuilder {
    /// Builds a PackageReport from a use case response
    ///
    /// # Arguments
    /// * `response` - Full, uncapped explanation
    /// * `max_chains` - Number of chains to show; the rest are counted as omitted
    pub fn build(response: &WhyResponse, max_chains: usize) -> PackageReport {
        let package = &response.package;

        PackageReport {
            name: package.name().to_string(),
            version: package.version().to_string(),
            description: package.description().map(str::to_string),
            install_reason: package.reason().to_string(),
            reason_statement: package.reason().statement().to_string(),
            install_date: package
                .install_date()
                .map(|date| date.format(INSTALL_DATE_FORMAT).to_string()),
            is_explicit: package.is_explicit(),
            chains: (!package.is_explicit()).then(|| Self::build_chains(response, max_chains)),
            provides: package.provides().to_vec(),
            dependencies: package.dependencies().to_vec(),
            required_by: response.required_by.clone(),
            is_orphan: response.is_orphan(),
        }
    }

    fn build_chains(response: &WhyResponse, max_chains: usize) -> ChainSection {
        let total = response.chains.len();
        let shown: Vec<Vec<String>> = response
            .chains
            .iter()
            .take(max_chains)
            .map(|chain| chain.packages().to_vec())
            .collect();

        ChainSection {
            omitted: total - shown.len(),
            shown,
            total,
            omitted_is_lower_bound: response.search_truncated,
        }
    }
}
