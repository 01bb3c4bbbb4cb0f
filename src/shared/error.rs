use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a missing package from
/// a broken database or a usage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the report was produced
    Success = 0,
    /// The queried package is not installed
    PackageNotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable database, config error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error returned from the application to its exit code
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<WhyError>() {
            Some(WhyError::PackageNotFound { .. }) => ExitCode::PackageNotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PackageNotFound => write!(f, "Package Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for installation analysis.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum WhyError {
    #[error("Package database is unavailable: {path}\nDetails: {details}\n\n💡 Hint: Check that the path points to a pacman local database (e.g. /var/lib/pacman/local) or pass --db-path")]
    StoreUnavailable { path: PathBuf, details: String },

    #[error("Package not found: {name}\n\n💡 Hint: {suggestion}")]
    PackageNotFound { name: String, suggestion: String },

    #[error("Failed to parse package record: {path}\nDetails: {details}")]
    RecordParseFailure { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::PackageNotFound.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::PackageNotFound),
            "Package Not Found (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_from_package_not_found() {
        let error: anyhow::Error = WhyError::PackageNotFound {
            name: "ghost".to_string(),
            suggestion: "none".to_string(),
        }
        .into();
        assert_eq!(ExitCode::from_error(&error), ExitCode::PackageNotFound);
    }

    #[test]
    fn test_exit_code_from_store_unavailable() {
        let error: anyhow::Error = WhyError::StoreUnavailable {
            path: PathBuf::from("/missing"),
            details: "No such file or directory".to_string(),
        }
        .into();
        assert_eq!(ExitCode::from_error(&error), ExitCode::ApplicationError);
    }

    #[test]
    fn test_exit_code_from_plain_error() {
        let error = anyhow::anyhow!("something else");
        assert_eq!(ExitCode::from_error(&error), ExitCode::ApplicationError);
    }

    #[test]
    fn test_store_unavailable_display() {
        let error = WhyError::StoreUnavailable {
            path: PathBuf::from("/var/lib/pacman/local"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Package database is unavailable"));
        assert!(display.contains("/var/lib/pacman/local"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_package_not_found_display() {
        let error = WhyError::PackageNotFound {
            name: "ghost".to_string(),
            suggestion: "Did you mean: ghostscript?".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Package not found: ghost"));
        assert!(display.contains("Did you mean: ghostscript?"));
    }

    #[test]
    fn test_record_parse_failure_display() {
        let error = WhyError::RecordParseFailure {
            path: PathBuf::from("/db/broken-1.0-1/desc"),
            details: "missing %NAME% section".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse package record"));
        assert!(display.contains("broken-1.0-1"));
        assert!(display.contains("missing %NAME% section"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = WhyError::InvalidConfig {
            message: "max_chains must be at least 1".to_string(),
            hint: "Use a positive number".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid configuration"));
        assert!(display.contains("max_chains"));
        assert!(display.contains("Use a positive number"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = WhyError::FileWriteError {
            path: PathBuf::from("/test/report.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.json"));
        assert!(display.contains("💡 Hint:"));
    }
}
