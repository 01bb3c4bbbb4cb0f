/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use test_utilities::{dependency, explicit};
use pacwhy::prelude::*;

fn request(name: &str) -> WhyRequest {
    WhyRequest::builder()
        .package_name(name)
        .db_path(PathBuf::from("/mock/local"))
        .build()
        .unwrap()
}

fn chains(response: &WhyResponse) -> Vec<String> {
    response.chains.iter().map(|c| c.to_string()).collect()
}

/// a (explicit) -> b -> c, d orphan, x/y -> z, m <-> n cycle
fn scenario_store() -> MockPackageStoreReader {
    MockPackageStoreReader::new(vec![
        explicit("a", &["b"]),
        dependency("b", &["c>=1.0"]),
        dependency("c", &[]),
        dependency("d", &[]),
        explicit("x", &["z"]),
        explicit("y", &["z"]),
        dependency("z", &[]),
        dependency("m", &["n"]),
        dependency("n", &["m"]),
    ])
}

fn explain(name: &str) -> WhyResponse {
    let use_case = ExplainInstallationUseCase::new(scenario_store(), MockProgressReporter::new());
    use_case.execute(request(name)).unwrap()
}

#[test]
fn test_linear_chain() {
    let response = explain("c");

    assert_eq!(chains(&response), vec!["a -> b -> c"]);
    assert_eq!(response.required_by, vec!["b"]);
    assert_eq!(response.indexed_packages, 9);
}

#[test]
fn test_orphan_dependency() {
    let response = explain("d");

    assert!(response.chains.is_empty());
    assert!(response.required_by.is_empty());
    assert!(response.is_orphan());
}

#[test]
fn test_diamond_has_one_chain_per_root() {
    let response = explain("z");

    assert_eq!(chains(&response), vec!["x -> z", "y -> z"]);
    assert_eq!(response.required_by, vec!["x", "y"]);
}

#[test]
fn test_cycle_without_root_terminates_with_no_chain() {
    let response = explain("m");

    assert!(response.chains.is_empty());
    assert_eq!(response.required_by, vec!["n"]);
    assert!(!response.is_orphan());
}

#[test]
fn test_explicit_target_has_no_chains() {
    let response = explain("a");

    assert!(response.package.is_explicit());
    assert!(response.chains.is_empty());
    assert_eq!(response.package.dependencies(), ["b".to_string()]);
}

#[test]
fn test_package_not_found_suggests_similar_names() {
    let use_case = ExplainInstallationUseCase::new(
        MockPackageStoreReader::new(vec![explicit("python", &[]), explicit("python-pip", &[])]),
        MockProgressReporter::new(),
    );

    let error = use_case.execute(request("pyth")).unwrap_err();

    assert_eq!(ExitCode::from_error(&error), ExitCode::PackageNotFound);
    let message = error.to_string();
    assert!(message.contains("Package not found: pyth"));
    assert!(message.contains("python"));
}

#[test]
fn test_store_unavailable_is_application_error() {
    let use_case =
        ExplainInstallationUseCase::new(MockPackageStoreReader::with_failure(), MockProgressReporter::new());

    let error = use_case.execute(request("c")).unwrap_err();

    assert_eq!(ExitCode::from_error(&error), ExitCode::ApplicationError);
    assert!(error.to_string().contains("Package database is unavailable"));
}

#[test]
fn test_skipped_records_reach_diagnostic_channel() {
    let reporter = MockProgressReporter::new();
    let store = MockPackageStoreReader::new(vec![explicit("a", &["b"]), dependency("b", &[])])
        .with_skipped(&["/mock/local/broken-1.0-1/desc"]);
    let use_case = ExplainInstallationUseCase::new(store, reporter.clone());

    let response = use_case.execute(request("b")).unwrap();

    assert_eq!(response.skipped_records, 1);
    let diagnostics = reporter.messages_with_prefix("Diagnostic:");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].contains("broken-1.0-1"));
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Progress: 3/3")));
}

#[test]
fn test_provides_links_virtual_dependencies() {
    let store = MockPackageStoreReader::new(vec![
        explicit("base", &["sh"]),
        dependency("bash", &[]).with_provides(vec!["sh=5.2".to_string()]),
    ]);
    let use_case = ExplainInstallationUseCase::new(store, MockProgressReporter::new());

    let response = use_case.execute(request("bash")).unwrap();

    assert_eq!(chains(&response), vec!["base -> bash"]);
    assert_eq!(response.required_by, vec!["base"]);
}

#[test]
fn test_text_report_applies_display_cap() {
    let mut records: Vec<PackageRecord> = (0..9)
        .map(|i| explicit(&format!("root{}", i), &["shared"]))
        .collect();
    records.push(dependency("shared", &[]));
    let use_case =
        ExplainInstallationUseCase::new(MockPackageStoreReader::new(records), MockProgressReporter::new());

    let response = use_case.execute(request("shared")).unwrap();
    assert_eq!(response.chains.len(), 9);

    let report = PackageReportBuilder::build(&response, DEFAULT_MAX_CHAINS);
    let output = FormatterFactory::create(OutputFormat::Text, false)
        .format(&report)
        .unwrap();

    assert!(output.contains("Installation chains (9)"));
    assert!(output.contains("  6. root5 -> shared"));
    assert!(!output.contains("  7. "));
    assert!(output.contains("... and 3 more chain(s) not shown"));
    assert!(output.contains("Required by (9)"));
}

#[test]
fn test_json_report_round_trips_through_serde() {
    let response = explain("c");
    let report = PackageReportBuilder::build(&response, DEFAULT_MAX_CHAINS);
    let output = FormatterFactory::create(OutputFormat::Json, false)
        .format(&report)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["name"], "c");
    assert_eq!(value["chains"]["shown"][0], serde_json::json!(["a", "b", "c"]));
    assert_eq!(value["requiredBy"], serde_json::json!(["b"]));
}
