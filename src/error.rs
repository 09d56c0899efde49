//! Error types for nixai

use thiserror::Error;

use crate::provider::ProviderError;

/// Result type alias for nixai operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or dispatching a prompt
#[derive(Error, Debug)]
pub enum Error {
    #[error("agent role not set")]
    RoleNotSet,

    #[error("unsupported role: {0}")]
    UnsupportedRole(String),

    #[error("no prompt template for role: {0}")]
    MissingTemplate(String),

    #[error("provider not configured")]
    ProviderNotConfigured,

    #[error("invalid context type for {agent} agent: expected {expected}, got {found}")]
    InvalidContext {
        agent: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Capability(String),

    /// Whatever the backend returned, surfaced unchanged.
    #[error(transparent)]
    Provider(ProviderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Role, template, provider-handle and context-type failures.
    ///
    /// These are never retried and carry no upstream cause.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::RoleNotSet
                | Error::UnsupportedRole(_)
                | Error::MissingTemplate(_)
                | Error::ProviderNotConfigured
                | Error::InvalidContext { .. }
                | Error::Config(_)
        )
    }

    /// The provider handle lacks the dispatch method the call needed.
    pub fn is_capability(&self) -> bool {
        matches!(self, Error::Capability(_))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_is_transparent() {
        let err = Error::Provider("boom".into());
        assert_eq!(err.to_string(), "boom");
        assert!(!err.is_configuration());
        assert!(!err.is_capability());
    }

    #[test]
    fn test_from_anyhow() {
        let err: Error = anyhow::anyhow!("template table corrupt").into();
        assert!(matches!(err, Error::Other(_)));
        assert_eq!(err.to_string(), "template table corrupt");
    }

    #[test]
    fn test_configuration_classification() {
        assert!(Error::RoleNotSet.is_configuration());
        assert!(Error::UnsupportedRole("x".into()).is_configuration());
        assert!(Error::ProviderNotConfigured.is_configuration());
        assert!(Error::Capability("nope".into()).is_capability());
        assert_eq!(
            Error::UnsupportedRole("wizard".into()).to_string(),
            "unsupported role: wizard"
        );
    }
}
