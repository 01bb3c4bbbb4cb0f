mod cli;
mod config;

use cli::Args;
use config::{load_config_from_path, Settings};
use pacwhy::adapters::outbound::console::StderrProgressReporter;
use pacwhy::adapters::outbound::filesystem::LocalDatabaseReader;
use pacwhy::application::dto::WhyRequest;
use pacwhy::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pacwhy::application::read_models::PackageReportBuilder;
use pacwhy::application::use_cases::ExplainInstallationUseCase;
use pacwhy::shared::error::ExitCode;
use pacwhy::shared::Result;
use std::io::IsTerminal;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on usage errors)
    let args = Args::parse_args();

    // Merge config file and CLI options
    let config = args
        .config
        .as_deref()
        .map(load_config_from_path)
        .transpose()?;
    let color_capable = args.output.is_none() && std::io::stdout().is_terminal();
    let settings = Settings::resolve(&args, config, color_capable)?;

    // Create adapters (Dependency Injection)
    let store_reader = LocalDatabaseReader::new();
    let progress_reporter = StderrProgressReporter::new(args.verbose);

    // Create use case with injected dependencies
    let use_case = ExplainInstallationUseCase::new(store_reader, progress_reporter);

    // Create request
    let request = WhyRequest::builder()
        .package_name(&args.package)
        .db_path(settings.db_path.clone())
        .chain_limit(settings.search_limit)
        .build()?;

    // Execute use case
    let response = use_case.execute(request)?;

    // Apply the display cap and render
    let report = PackageReportBuilder::build(&response, settings.max_chains);
    let formatter = FormatterFactory::create(settings.format, settings.color);
    let formatted_output = formatter.format(&report)?;

    // Present output
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}
