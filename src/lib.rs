//! pacwhy - explain why a package is installed
//!
//! This library reads the pacman local database, builds an index of the
//! installed packages and their reverse dependencies, and reconstructs every
//! chain of dependencies leading from an explicitly installed package down to
//! a queried one. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`install_analysis`): Package index, reverse dependency map, chain finder
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pacwhy::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let store_reader = LocalDatabaseReader::new();
//! let progress_reporter = StderrProgressReporter::new(false);
//!
//! // Create use case
//! let use_case = ExplainInstallationUseCase::new(store_reader, progress_reporter);
//!
//! // Execute
//! let request = WhyRequest::builder().package_name("zlib").build()?;
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let report = PackageReportBuilder::build(&response, DEFAULT_MAX_CHAINS);
//! let output = TextFormatter::new(false).format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod install_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        parse_desc, FileSystemWriter, LocalDatabaseReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{OutputFormat, WhyRequest, WhyResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{
        ChainSection, PackageReport, PackageReportBuilder, DEFAULT_MAX_CHAINS,
    };
    pub use crate::application::use_cases::ExplainInstallationUseCase;
    pub use crate::install_analysis::domain::{
        dependency_name, find_required_by, InstallChain, InstallReason, PackageIndex,
        PackageName, PackageRecord, ReverseDependencyMap,
    };
    pub use crate::install_analysis::services::{ChainFinder, ChainSearch};
    pub use crate::ports::outbound::{
        OutputPresenter, PackageStoreReader, ProgressReporter, ReportFormatter, SkippedRecord,
        StoreScanResult,
    };
    pub use crate::shared::error::{ExitCode, WhyError};
    pub use crate::shared::Result;
}
