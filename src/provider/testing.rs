//! Stub providers for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::stream::{from_chunks, StreamChunk};
use super::{
    Capabilities, ChunkStream, ContextQuerier, Generator, Provider, ProviderResult, Querier,
    Streamer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Query,
    QueryWithContext,
    Generate,
    Stream,
}

/// A recorded dispatch.
#[derive(Debug, Clone)]
pub struct Call {
    pub kind: CallKind,
    pub prompt: String,
}

/// Provider stub with a fixed capability set and a scripted reply.
pub struct StubProvider {
    caps: Capabilities,
    reply: Result<String, String>,
    calls: Mutex<Vec<Call>>,
}

impl StubProvider {
    pub fn with(caps: Capabilities, reply: Result<&str, &str>) -> Self {
        Self {
            caps,
            reply: reply.map(str::to_string).map_err(str::to_string),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Only the plain query method.
    pub fn plain(reply: &str) -> Self {
        Self::with(
            Capabilities {
                query: true,
                ..Default::default()
            },
            Ok(reply),
        )
    }

    /// Only the context-aware query method.
    pub fn contextual(reply: &str) -> Self {
        Self::with(
            Capabilities {
                query_with_context: true,
                ..Default::default()
            },
            Ok(reply),
        )
    }

    /// Every capability.
    pub fn full(reply: &str) -> Self {
        Self::with(
            Capabilities {
                query: true,
                query_with_context: true,
                generate: true,
                stream: true,
            },
            Ok(reply),
        )
    }

    /// Every call in `caps` fails with `message`.
    pub fn failing(caps: Capabilities, message: &str) -> Self {
        Self::with(caps, Err(message))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<CallKind> {
        self.calls().into_iter().map(|c| c.kind).collect()
    }

    pub fn count(&self, kind: CallKind) -> usize {
        self.calls().iter().filter(|c| c.kind == kind).count()
    }

    /// Prompt of the most recent call.
    pub fn last_prompt(&self) -> Option<String> {
        self.calls().last().map(|c| c.prompt.clone())
    }

    fn record(&self, kind: CallKind, prompt: &str) -> ProviderResult<String> {
        self.calls.lock().unwrap().push(Call {
            kind,
            prompt: prompt.to_string(),
        });
        self.reply.clone().map_err(Into::into)
    }
}

#[async_trait]
impl Querier for StubProvider {
    async fn query(&self, prompt: &str) -> ProviderResult<String> {
        self.record(CallKind::Query, prompt)
    }
}

#[async_trait]
impl ContextQuerier for StubProvider {
    async fn query_with_context(
        &self,
        cancel: &CancellationToken,
        prompt: &str,
    ) -> ProviderResult<String> {
        if cancel.is_cancelled() {
            return Err("cancelled".into());
        }
        self.record(CallKind::QueryWithContext, prompt)
    }
}

#[async_trait]
impl Generator for StubProvider {
    async fn generate_response(
        &self,
        cancel: &CancellationToken,
        prompt: &str,
    ) -> ProviderResult<String> {
        if cancel.is_cancelled() {
            return Err("cancelled".into());
        }
        self.record(CallKind::Generate, prompt)
    }
}

#[async_trait]
impl Streamer for StubProvider {
    async fn stream_response(
        &self,
        _cancel: &CancellationToken,
        prompt: &str,
    ) -> ProviderResult<ChunkStream> {
        let text = self.record(CallKind::Stream, prompt)?;
        let mut chunks: Vec<StreamChunk> = text
            .split_inclusive(' ')
            .map(StreamChunk::partial)
            .collect();
        match chunks.last_mut() {
            Some(last) => last.done = true,
            None => chunks.push(StreamChunk::last("")),
        }
        Ok(from_chunks(chunks))
    }
}

impl Provider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn as_querier(&self) -> Option<&dyn Querier> {
        self.caps.query.then_some(self as &dyn Querier)
    }

    fn as_context_querier(&self) -> Option<&dyn ContextQuerier> {
        self.caps.query_with_context.then_some(self as &dyn ContextQuerier)
    }

    fn as_generator(&self) -> Option<&dyn Generator> {
        self.caps.generate.then_some(self as &dyn Generator)
    }

    fn as_streamer(&self) -> Option<&dyn Streamer> {
        self.caps.stream.then_some(self as &dyn Streamer)
    }
}
