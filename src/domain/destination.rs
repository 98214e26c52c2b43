//! External navigation destinations

use std::fmt;

use crate::domain::DomainError;

/// A fixed URI a link navigates to.
///
/// Accepted forms:
/// - site-absolute path: `/feedback`
/// - absolute web URL with a host: `https://github.com/owner/repo`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Destination(String);

impl Destination {
    /// Validate and wrap a destination.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidDestination {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if value.is_empty() {
            return Err(invalid("empty"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }

        if let Some(rest) = value.strip_prefix('/') {
            if rest.starts_with('/') {
                return Err(invalid("protocol-relative URLs are not supported"));
            }
            return Ok(Self(value.to_string()));
        }

        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"))
            .ok_or_else(|| invalid("expected '/path' or an http(s) URL"))?;
        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        // host sits between optional `user@` and optional `:port`
        let host = authority
            .rsplit('@')
            .next()
            .and_then(|h| h.split(':').next())
            .unwrap_or_default();
        if host.is_empty() {
            return Err(invalid("missing host"));
        }

        Ok(Self(value.to_string()))
    }

    /// Compile-time known path, e.g. [`crate::domain::FEEDBACK_PATH`].
    pub(crate) fn fixed(path: &'static str) -> Self {
        debug_assert!(path.starts_with('/'));
        Self(path.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
