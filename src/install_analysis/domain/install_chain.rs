use std::fmt;

/// Separator used when rendering a chain on one line
pub const CHAIN_SEPARATOR: &str = " -> ";

/// Ordered path of package names from an explicitly installed root down to
/// the queried package (root first, target last)
///
/// Each consecutive pair is a direct dependency relationship: the earlier
/// package requires the later one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstallChain {
    packages: Vec<String>,
}

impl InstallChain {
    pub fn new(packages: Vec<String>) -> Self {
        Self { packages }
    }

    /// Builds a chain from a traversal path recorded target-first
    pub fn from_target_path(path: &[String]) -> Self {
        Self {
            packages: path.iter().rev().cloned().collect(),
        }
    }

    /// The explicitly installed package the chain starts from
    pub fn root(&self) -> Option<&str> {
        self.packages.first().map(String::as_str)
    }

    /// The queried package
    pub fn target(&self) -> Option<&str> {
        self.packages.last().map(String::as_str)
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl fmt::Display for InstallChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.packages.join(CHAIN_SEPARATOR))
    }
}
