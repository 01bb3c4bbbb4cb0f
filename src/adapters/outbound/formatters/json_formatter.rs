use crate::application::read_models::{ChainSection, PackageReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    name: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(rename = "installReason")]
    install_reason: &'a str,
    #[serde(rename = "reasonStatement")]
    reason_statement: &'a str,
    #[serde(rename = "installDate", skip_serializing_if = "Option::is_none")]
    install_date: Option<&'a str>,
    #[serde(rename = "isOrphan")]
    is_orphan: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    chains: Option<Chains<'a>>,
    provides: &'a [String],
    dependencies: &'a [String],
    #[serde(rename = "requiredBy")]
    required_by: &'a [String],
}

#[derive(Debug, Serialize)]
struct Chains<'a> {
    total: usize,
    shown: &'a [Vec<String>],
    omitted: usize,
    #[serde(rename = "omittedIsLowerBound")]
    omitted_is_lower_bound: bool,
}

impl<'a> From<&'a ChainSection> for Chains<'a> {
    fn from(section: &'a ChainSection) -> Self {
        Self {
            total: section.total,
            shown: &section.shown,
            omitted: section.omitted,
            omitted_is_lower_bound: section.omitted_is_lower_bound,
        }
    }
}

/// JsonFormatter adapter for machine-readable reports
///
/// Emits the same content as the text report. Chains are arrays of
/// package names, root first.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &PackageReport) -> Result<String> {
        let document = Report {
            name: &report.name,
            version: &report.version,
            description: report.description.as_deref(),
            install_reason: &report.install_reason,
            reason_statement: &report.reason_statement,
            install_date: report.install_date.as_deref(),
            is_orphan: report.is_orphan,
            chains: report.chains.as_ref().map(Chains::from),
            provides: &report.provides,
            dependencies: &report.dependencies,
            required_by: &report.required_by,
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
