use crate::shared::error::WhyError;
use crate::shared::Result;
use std::path::PathBuf;

/// Default location of the pacman local database
pub const DEFAULT_DB_PATH: &str = "/var/lib/pacman/local";

/// Default number of chains collected before a search is cut short
pub const DEFAULT_CHAIN_SEARCH_LIMIT: usize = 10_000;

/// WhyRequest - Internal request DTO for the installation explanation use case
///
/// The database location travels with the request rather than living in a
/// process-wide constant, so the use case can run against fixture stores.
#[derive(Debug, Clone)]
pub struct WhyRequest {
    /// Name of the package to explain
    pub package_name: String,
    /// Location of the package database
    pub db_path: PathBuf,
    /// Stop the chain search after this many chains (None = unlimited)
    pub chain_limit: Option<usize>,
}

impl WhyRequest {
    pub fn new(package_name: String, db_path: PathBuf, chain_limit: Option<usize>) -> Self {
        Self {
            package_name,
            db_path,
            chain_limit,
        }
    }

    pub fn builder() -> WhyRequestBuilder {
        WhyRequestBuilder::default()
    }
}

/// Builder for `WhyRequest`
#[derive(Debug, Default)]
pub struct WhyRequestBuilder {
    package_name: Option<String>,
    db_path: Option<PathBuf>,
    chain_limit: Option<Option<usize>>,
}

impl WhyRequestBuilder {
    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = Some(path.into());
        self
    }

    pub fn chain_limit(mut self, limit: Option<usize>) -> Self {
        self.chain_limit = Some(limit);
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns `WhyError::Validation` if the package name is missing or blank
    pub fn build(self) -> Result<WhyRequest> {
        let package_name = self
            .package_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| WhyError::Validation {
                message: "package name is required".to_string(),
            })?;

        Ok(WhyRequest::new(
            package_name,
            self.db_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            self.chain_limit.unwrap_or(Some(DEFAULT_CHAIN_SEARCH_LIMIT)),
        ))
    }
}
