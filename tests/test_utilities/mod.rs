#![allow(dead_code)]
/// Shared helpers for integration tests
pub mod mocks;

use pacwhy::prelude::*;

/// Builds an explicitly installed record
pub fn explicit(name: &str, deps: &[&str]) -> PackageRecord {
    record(name, InstallReason::Explicit, deps)
}

/// Builds a record installed as a dependency
pub fn dependency(name: &str, deps: &[&str]) -> PackageRecord {
    record(name, InstallReason::Dependency, deps)
}

fn record(name: &str, reason: InstallReason, deps: &[&str]) -> PackageRecord {
    PackageRecord::new(
        PackageName::new(name.to_string()).unwrap(),
        "1.0-1".to_string(),
        reason,
    )
    .with_dependencies(deps.iter().map(|d| d.to_string()).collect())
}
