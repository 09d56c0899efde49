//! Documentation search collaborator.

use async_trait::async_trait;

use crate::provider::ProviderResult;

/// Looks up reference documentation for a topic.
///
/// Lookups are best effort: agents drop the section when one fails.
#[async_trait]
pub trait DocumentationSearch: Send + Sync {
    async fn query_documentation(&self, query: &str) -> ProviderResult<String>;
}
