//! Provider capability layer.
//!
//! This module provides:
//! - Capability traits a backend may implement: [`Querier`], [`ContextQuerier`],
//!   [`Generator`], [`Streamer`]
//! - The [`Provider`] handle trait used to discover those capabilities per call
//! - [`facade`] functions that pick a capability in preference order
//! - [`ProviderRegistry`] for looking handles up by name
//!
//! # Adding a New Provider
//!
//! 1. Implement whichever capability traits the backend supports
//! 2. Implement [`Provider`], returning `Some(self)` from the matching `as_*` accessors
//! 3. Register the handle in a [`ProviderRegistry`]
//!
//! A backend that only answers plain prompts can be wrapped in
//! [`LegacyAdapter`] to also serve `generate_response`.

pub mod facade;
mod legacy;
mod registry;
pub mod stream;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub use legacy::LegacyAdapter;
pub use registry::ProviderRegistry;
pub use stream::{collect_stream, ChunkStream, StreamChunk};

/// Opaque error returned by a backend.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for backend calls.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Plain synchronous query: prompt in, completion out.
#[async_trait]
pub trait Querier: Send + Sync {
    async fn query(&self, prompt: &str) -> ProviderResult<String>;
}

/// Cancellation-aware query.
///
/// The token is the caller's; implementations should abort when it fires.
#[async_trait]
pub trait ContextQuerier: Send + Sync {
    async fn query_with_context(
        &self,
        cancel: &CancellationToken,
        prompt: &str,
    ) -> ProviderResult<String>;
}

/// Direct response generation. Has no fallback.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate_response(
        &self,
        cancel: &CancellationToken,
        prompt: &str,
    ) -> ProviderResult<String>;
}

/// Streaming generation.
#[async_trait]
pub trait Streamer: Send + Sync {
    /// Returns a finite, non-restartable sequence of chunks ending with `done = true`.
    async fn stream_response(
        &self,
        cancel: &CancellationToken,
        prompt: &str,
    ) -> ProviderResult<ChunkStream>;
}

/// Backend handle with runtime capability discovery.
///
/// Handles are shared (`Arc<dyn Provider>`) across agents; the accessors are
/// read-only and are consulted again on every dispatch.
pub trait Provider: Send + Sync {
    /// Provider name for logs and registry lookups.
    fn name(&self) -> &str;

    fn as_querier(&self) -> Option<&dyn Querier> {
        None
    }

    fn as_context_querier(&self) -> Option<&dyn ContextQuerier> {
        None
    }

    fn as_generator(&self) -> Option<&dyn Generator> {
        None
    }

    fn as_streamer(&self) -> Option<&dyn Streamer> {
        None
    }

    /// Snapshot of the capabilities this handle offers right now.
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            query: self.as_querier().is_some(),
            query_with_context: self.as_context_querier().is_some(),
            generate: self.as_generator().is_some(),
            stream: self.as_streamer().is_some(),
        }
    }
}

/// Capability set of a provider handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub query: bool,
    pub query_with_context: bool,
    pub generate: bool,
    pub stream: bool,
}

impl Capabilities {
    /// Whether `Agent::query` can be served at all.
    pub fn can_query(&self) -> bool {
        self.query || self.query_with_context
    }

    pub fn is_empty(&self) -> bool {
        !(self.query || self.query_with_context || self.generate || self.stream)
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.query_with_context, "query_with_context"),
            (self.query, "query"),
            (self.generate, "generate_response"),
            (self.stream, "stream_response"),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, name)| *name)
        .collect();

        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StubProvider;
    use super::*;

    #[test]
    fn test_capabilities_probe() {
        let plain = StubProvider::plain("ok");
        let caps = plain.capabilities();
        assert!(caps.query);
        assert!(!caps.query_with_context);
        assert!(caps.can_query());
        assert_eq!(caps.to_string(), "query");

        let bare = StubProvider::with(Capabilities::default(), Ok("ok"));
        assert!(bare.capabilities().is_empty());
        assert_eq!(bare.capabilities().to_string(), "none");
    }

    #[test]
    fn test_capabilities_display_order() {
        let caps = Capabilities {
            query: true,
            query_with_context: true,
            generate: true,
            stream: false,
        };
        assert_eq!(
            caps.to_string(),
            "query_with_context, query, generate_response"
        );
    }
}
