//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent values that cannot become part of a page.
/// They only arise while turning configuration into domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid destination '{value}': {reason}")]
    InvalidDestination { value: String, reason: String },

    #[error("unsupported breakpoint: {0}px")]
    UnsupportedBreakpoint(u32),
}
