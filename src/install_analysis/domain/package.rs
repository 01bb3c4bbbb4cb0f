use crate::shared::Result;
use chrono::{DateTime, Utc};
use std::fmt;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // pacman package names: alphanumerics plus @ . _ + -
        if !name.chars().all(|c| {
            c.is_ascii_alphanumeric() || c == '@' || c == '.' || c == '_' || c == '+' || c == '-'
        }) {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only alphanumeric, '@', '.', '_', '+' and '-' are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why the package manager installed a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallReason {
    /// The user asked for this package directly
    Explicit,
    /// Pulled in to satisfy another package's requirement
    Dependency,
}

impl InstallReason {
    /// Value of the database reason flag that marks a dependency install
    pub const DEPENDENCY_FLAG: &'static str = "1";

    /// Interprets the raw reason flag; absent or any other value means explicit
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag.map(str::trim) {
            Some(Self::DEPENDENCY_FLAG) => InstallReason::Dependency,
            _ => InstallReason::Explicit,
        }
    }

    pub fn is_explicit(self) -> bool {
        self == InstallReason::Explicit
    }

    /// Human-readable statement used in reports
    pub fn statement(self) -> &'static str {
        match self {
            InstallReason::Explicit => "Explicitly installed",
            InstallReason::Dependency => "Installed as a dependency",
        }
    }
}

impl fmt::Display for InstallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallReason::Explicit => write!(f, "explicit"),
            InstallReason::Dependency => write!(f, "dependency"),
        }
    }
}

/// Structured view of one installed package
///
/// `dependencies` and `provides` keep the raw specifiers from the database,
/// version constraints included. Required-by is not stored here: it is
/// derived from the whole index.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    name: PackageName,
    version: String,
    reason: InstallReason,
    dependencies: Vec<String>,
    provides: Vec<String>,
    description: Option<String>,
    install_date: Option<DateTime<Utc>>,
}

impl PackageRecord {
    pub fn new(name: PackageName, version: String, reason: InstallReason) -> Self {
        Self {
            name,
            version,
            reason,
            dependencies: Vec::new(),
            provides: Vec::new(),
            description: None,
            install_date: None,
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_provides(mut self, provides: Vec<String>) -> Self {
        self.provides = provides;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_install_date(mut self, install_date: Option<DateTime<Utc>>) -> Self {
        self.install_date = install_date;
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn package_name(&self) -> &PackageName {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn reason(&self) -> InstallReason {
        self.reason
    }

    pub fn is_explicit(&self) -> bool {
        self.reason.is_explicit()
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn provides(&self) -> &[String] {
        &self.provides
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn install_date(&self) -> Option<DateTime<Utc>> {
        self.install_date
    }
}
