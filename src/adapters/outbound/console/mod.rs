/// Console adapters writing to the terminal
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
