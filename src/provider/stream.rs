//! Streaming response types.

use futures_util::stream::{self, BoxStream};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};

use super::ProviderResult;

/// One piece of a streamed completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamChunk {
    pub content: String,
    /// Set on the final chunk.
    pub done: bool,
}

impl StreamChunk {
    pub fn partial(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: false,
        }
    }

    pub fn last(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: true,
        }
    }
}

/// A finite, non-restartable chunk sequence.
pub type ChunkStream = BoxStream<'static, ProviderResult<StreamChunk>>;

/// Build a stream from already-available chunks.
pub fn from_chunks(chunks: Vec<StreamChunk>) -> ChunkStream {
    stream::iter(chunks.into_iter().map(Ok)).boxed()
}

/// Drain a stream into one string.
///
/// Stops at the first `done` chunk; anything after it is ignored. A chunk
/// error aborts with that error and no partial text.
pub async fn collect_stream(mut chunks: ChunkStream) -> ProviderResult<String> {
    let mut text = String::new();

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        text.push_str(&chunk.content);
        if chunk.done {
            break;
        }
    }

    Ok(text)
}
