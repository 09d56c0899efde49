//! Capability-negotiated dispatch.
//!
//! Each call probes the handle afresh; nothing about a provider is cached.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::Error;
use crate::Result;

use super::{ChunkStream, ContextQuerier, Provider, Querier};

pub const NO_QUERY: &str = "provider does not implement query_with_context or query";
pub const NO_GENERATE: &str = "provider does not implement generate_response";
pub const NO_STREAM: &str = "provider does not implement stream_response";

/// The capability a query will be routed through.
#[derive(Clone, Copy)]
pub enum QueryRoute<'a> {
    WithContext(&'a dyn ContextQuerier),
    Plain(&'a dyn Querier),
}

/// Pick the query route in preference order: context-aware first, then plain.
pub fn query_route(provider: &dyn Provider) -> Option<QueryRoute<'_>> {
    if let Some(p) = provider.as_context_querier() {
        Some(QueryRoute::WithContext(p))
    } else {
        provider.as_querier().map(QueryRoute::Plain)
    }
}

/// Dispatch a prompt through the best available query capability.
///
/// Upstream errors are returned as [`Error::Provider`] without modification.
pub async fn query(
    provider: &dyn Provider,
    cancel: &CancellationToken,
    prompt: &str,
) -> Result<String> {
    match query_route(provider) {
        Some(QueryRoute::WithContext(p)) => {
            debug!(provider = provider.name(), "dispatching via query_with_context");
            p.query_with_context(cancel, prompt)
                .await
                .map_err(Error::Provider)
        }
        Some(QueryRoute::Plain(p)) => {
            debug!(provider = provider.name(), "dispatching via query");
            p.query(prompt).await.map_err(Error::Provider)
        }
        None => Err(Error::Capability(NO_QUERY.to_string())),
    }
}

/// Dispatch through `generate_response` only.
pub async fn generate(
    provider: &dyn Provider,
    cancel: &CancellationToken,
    prompt: &str,
) -> Result<String> {
    let generator = provider
        .as_generator()
        .ok_or_else(|| Error::Capability(NO_GENERATE.to_string()))?;

    debug!(provider = provider.name(), "dispatching via generate_response");
    generator
        .generate_response(cancel, prompt)
        .await
        .map_err(Error::Provider)
}

/// Open a chunk stream through `stream_response` only.
pub async fn stream(
    provider: &dyn Provider,
    cancel: &CancellationToken,
    prompt: &str,
) -> Result<ChunkStream> {
    let streamer = provider
        .as_streamer()
        .ok_or_else(|| Error::Capability(NO_STREAM.to_string()))?;

    debug!(provider = provider.name(), "dispatching via stream_response");
    streamer
        .stream_response(cancel, prompt)
        .await
        .map_err(Error::Provider)
}
