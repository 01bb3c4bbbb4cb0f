//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of an installation explanation
//! for the formatters.

mod package_report;
mod package_report_builder;

pub use package_report::{ChainSection, PackageReport};
pub use package_report_builder::{PackageReportBuilder, DEFAULT_MAX_CHAINS};
