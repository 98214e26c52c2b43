//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Terminal { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::Domain(DomainError::InvalidDestination { .. })
                    | ApplicationError::Domain(DomainError::UnsupportedBreakpoint(_)) => {
                        crate::exitcode::CONFIG
                    }
                    ApplicationError::OperationFailed { .. } => crate::exitcode::CANTCREAT,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_config_error_when_mapping_exit_code_then_is_config() {
        let err: CliError = ApplicationError::Config {
            message: "bad".into(),
        }
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_unsupported_breakpoint_when_mapping_exit_code_then_is_config() {
        let err: CliError = ApplicationError::from(DomainError::UnsupportedBreakpoint(800)).into();
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(err.to_string(), "unsupported breakpoint: 800px");
    }

    #[test]
    fn given_usage_error_when_mapping_exit_code_then_is_usage() {
        assert_eq!(
            CliError::Usage("no command".into()).exit_code(),
            crate::exitcode::USAGE
        );
    }

    #[test]
    fn given_terminal_error_when_mapping_exit_code_then_is_ioerr() {
        let err: CliError = InfraError::terminal(
            "print help",
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
        )
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
        assert_eq!(err.to_string(), "cannot print help");
    }
}
