//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Writing to the terminal failed, e.g. a closed pipe.
    #[error("cannot {action}")]
    Terminal {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    pub fn terminal(action: &'static str, source: std::io::Error) -> Self {
        Self::Terminal { action, source }
    }
}
