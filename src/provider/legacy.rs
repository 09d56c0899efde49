//! Adapter for prompt-only backends.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{Generator, Provider, ProviderResult, Querier};

/// Wraps a plain [`Querier`] so it can also serve `generate_response`.
///
/// Generation forwards to `query`; the cancellation token is not seen by the
/// wrapped backend because it has no way to accept one.
pub struct LegacyAdapter<Q> {
    name: String,
    inner: Q,
}

impl<Q: Querier> LegacyAdapter<Q> {
    pub fn new(name: impl Into<String>, inner: Q) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    pub fn into_inner(self) -> Q {
        self.inner
    }
}

#[async_trait]
impl<Q: Querier> Generator for LegacyAdapter<Q> {
    async fn generate_response(
        &self,
        _cancel: &CancellationToken,
        prompt: &str,
    ) -> ProviderResult<String> {
        self.inner.query(prompt).await
    }
}

impl<Q: Querier> Provider for LegacyAdapter<Q> {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_querier(&self) -> Option<&dyn Querier> {
        Some(&self.inner)
    }

    fn as_generator(&self) -> Option<&dyn Generator> {
        Some(self)
    }
}
