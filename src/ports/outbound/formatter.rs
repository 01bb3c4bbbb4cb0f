use crate::application::read_models::PackageReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a package report
///
/// This port abstracts the rendering of the final report
/// (human-readable text, JSON, etc.).
pub trait ReportFormatter {
    /// Formats the report read model
    ///
    /// # Arguments
    /// * `report` - Display-ready view of the package, its chains and
    ///   its dependency relationships
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, report: &PackageReport) -> Result<String>;
}
