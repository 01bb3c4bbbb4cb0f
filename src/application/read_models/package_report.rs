//! Package report read model
//!
//! Flattened view of a `WhyResponse` with the display cap already applied.

/// Main read model for a single explained package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    /// Package name
    pub name: String,
    /// Installed version (may be empty when the record carries none)
    pub version: String,
    /// One-line package description
    pub description: Option<String>,
    /// Short reason label (`explicit` / `dependency`)
    pub install_reason: String,
    /// Human-readable reason statement
    pub reason_statement: String,
    /// Install date formatted for display
    pub install_date: Option<String>,
    /// Whether the package was explicitly installed
    pub is_explicit: bool,
    /// Chain section, only present for dependency installs
    pub chains: Option<ChainSection>,
    /// Virtual names this package provides
    pub provides: Vec<String>,
    /// Full dependency list as declared in the record
    pub dependencies: Vec<String>,
    /// Full list of installed packages requiring this one
    pub required_by: Vec<String>,
    /// Dependency install that nothing requires any more
    pub is_orphan: bool,
}

/// Installation chains selected for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSection {
    /// Chains shown, each root first
    pub shown: Vec<Vec<String>>,
    /// Number of chains found in total
    pub total: usize,
    /// Number of found chains left out by the display cap
    pub omitted: usize,
    /// The search stopped early, so `omitted` undercounts
    pub omitted_is_lower_bound: bool,
}

impl ChainSection {
    pub fn has_omitted(&self) -> bool {
        self.omitted > 0 || self.omitted_is_lower_bound
    }
}
