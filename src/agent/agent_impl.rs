//! The generic agent - role, context and provider composed per domain

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::context::{self, render, PromptSection, SectionsBuilder, StructuredContext};
use crate::error::Error;
use crate::provider::{facade, ChunkStream, Provider};
use crate::roles::RoleRegistry;
use crate::Result;

use super::docs::DocumentationSearch;
use super::domain::{ContextPolicy, Domain};
use super::history::SessionHistory;

/// A domain agent.
///
/// Starts unconfigured (no role). Mutable state is not synchronised; wrap a
/// shared instance in a mutex (see [`SharedAgent`](super::SharedAgent)).
pub struct Agent {
    domain: &'static Domain,
    roles: &'static RoleRegistry,
    role: String,
    context: Option<StructuredContext>,
    provider: Option<Arc<dyn Provider>>,
    docs: Option<Arc<dyn DocumentationSearch>>,
    history: SessionHistory,
    session_id: String,
}

impl Agent {
    /// Create an unconfigured agent for `domain`.
    pub fn new(domain: &'static Domain) -> Self {
        Self {
            domain,
            roles: RoleRegistry::builtin(),
            role: String::new(),
            context: None,
            provider: None,
            docs: None,
            history: SessionHistory::new(),
            session_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn Provider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_documentation(mut self, docs: Arc<dyn DocumentationSearch>) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Use a caller-supplied session id in place of the generated one.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Validate roles against `roles` instead of the built-in table.
    pub fn with_roles(mut self, roles: &'static RoleRegistry) -> Self {
        self.roles = roles;
        self
    }

    pub fn domain(&self) -> &'static Domain {
        self.domain
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Whether the current role passes validation.
    pub fn is_configured(&self) -> bool {
        self.roles.validate(&self.role)
    }

    /// Switch role. An invalid role leaves the current one in place.
    pub fn set_role(&mut self, role: &str) -> Result<()> {
        if role.is_empty() {
            return Err(Error::RoleNotSet);
        }
        if !self.roles.validate(role) {
            return Err(Error::UnsupportedRole(role.to_string()));
        }

        info!(domain = %self.domain.id, role, "role set");
        self.role = role.to_string();
        Ok(())
    }

    pub fn context(&self) -> Option<&StructuredContext> {
        self.context.as_ref()
    }

    /// Replace the stored context.
    ///
    /// Strict domains reject a record of the wrong kind and keep the old one.
    pub fn set_context(&mut self, context: impl Into<StructuredContext>) -> Result<()> {
        let context = context.into();
        self.check_context(&context)?;
        self.context = Some(context);
        Ok(())
    }

    pub fn clear_context(&mut self) {
        self.context = None;
    }

    pub fn provider(&self) -> Option<&Arc<dyn Provider>> {
        self.provider.as_ref()
    }

    pub fn set_provider(&mut self, provider: Arc<dyn Provider>) {
        self.provider = Some(provider);
    }

    pub fn set_documentation(&mut self, docs: Arc<dyn DocumentationSearch>) {
        self.docs = Some(docs);
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Answer `input` using the stored context.
    ///
    /// Routes through the best query capability and appends the domain footer.
    pub async fn query(&mut self, cancel: &CancellationToken, input: &str) -> Result<String> {
        let (provider, prompt) = self.prepare(input, self.context.as_ref()).await?;
        let response = facade::query(provider.as_ref(), cancel, &prompt).await?;
        self.record(input, &response);
        Ok(self.augment(response))
    }

    /// Answer `input` through `generate_response` only. No footer is added.
    pub async fn generate_response(
        &mut self,
        cancel: &CancellationToken,
        input: &str,
    ) -> Result<String> {
        let (provider, prompt) = self.prepare(input, self.context.as_ref()).await?;
        let response = facade::generate(provider.as_ref(), cancel, &prompt).await?;
        self.record(input, &response);
        Ok(response)
    }

    /// Like [`query`](Self::query) with `context` in place of the stored one.
    ///
    /// Leaves the agent untouched, history included.
    pub async fn query_with_context(
        &self,
        cancel: &CancellationToken,
        input: &str,
        context: &StructuredContext,
    ) -> Result<String> {
        self.validate_role()?;
        self.check_context(context)?;
        let (provider, prompt) = self.prepare(input, Some(context)).await?;
        let response = facade::query(provider.as_ref(), cancel, &prompt).await?;
        Ok(self.augment(response))
    }

    /// Open a chunk stream for `input` through `stream_response` only.
    pub async fn stream_response(
        &self,
        cancel: &CancellationToken,
        input: &str,
    ) -> Result<ChunkStream> {
        let (provider, prompt) = self.prepare(input, self.context.as_ref()).await?;
        facade::stream(provider.as_ref(), cancel, &prompt).await
    }

    /// The prompt `query` would send, without dispatching it.
    pub async fn prompt_for(&self, input: &str) -> Result<String> {
        self.validate_role()?;
        self.assemble(input, self.context.as_ref()).await
    }

    fn validate_role(&self) -> Result<()> {
        if self.role.is_empty() {
            return Err(Error::RoleNotSet);
        }
        if !self.roles.validate(&self.role) {
            return Err(Error::UnsupportedRole(self.role.clone()));
        }
        Ok(())
    }

    fn check_context(&self, context: &StructuredContext) -> Result<()> {
        let found = context.kind();
        let Some(expected) = self.domain.context_kind.filter(|kind| *kind != found) else {
            if self.domain.context_kind.is_none() {
                warn!(domain = %self.domain.id, %found, "domain takes no context, ignoring");
            }
            return Ok(());
        };

        match self.domain.policy {
            ContextPolicy::Strict => Err(Error::InvalidContext {
                agent: self.domain.id.as_str(),
                expected: expected.as_str(),
                found: found.as_str(),
            }),
            ContextPolicy::Soft => {
                warn!(domain = %self.domain.id, %expected, %found, "context type mismatch, ignoring");
                Ok(())
            }
        }
    }

    async fn prepare(
        &self,
        input: &str,
        context: Option<&StructuredContext>,
    ) -> Result<(Arc<dyn Provider>, String)> {
        self.validate_role()?;
        let provider = self.provider.clone().ok_or(Error::ProviderNotConfigured)?;
        let prompt = self.assemble(input, context).await?;
        Ok((provider, prompt))
    }

    /// template, context, documentation, history, input, instructions
    async fn assemble(&self, input: &str, context: Option<&StructuredContext>) -> Result<String> {
        let template = self
            .roles
            .template_for(&self.role)
            .ok_or_else(|| Error::MissingTemplate(self.role.clone()))?;

        let context = context.filter(|ctx| Some(ctx.kind()) == self.domain.context_kind);
        let derived;
        let context = match (context, self.domain.derive_context) {
            (Some(ctx), _) => Some(ctx),
            (None, Some(derive)) => {
                derived = derive(input);
                Some(&derived)
            }
            (None, None) => None,
        };

        let mut sections = match self.domain.context_kind {
            Some(kind) => context::format(context, kind),
            None => Vec::new(),
        };
        let context_sections = sections.len();

        sections.extend(self.documentation_section(input, context).await);
        sections.extend(self.history_section());
        sections.extend(
            SectionsBuilder::new()
                .text(self.domain.input_heading, Some(input))
                .text("Instructions", self.domain.instructions)
                .build(),
        );

        debug!(
            domain = %self.domain.id,
            role = %self.role,
            context_sections,
            sections = sections.len(),
            "assembled prompt"
        );

        let body = render(&sections);
        if body.is_empty() {
            return Ok(template.trim_end().to_string());
        }
        Ok(format!("{}\n\n{}", template.trim_end(), body))
    }

    async fn documentation_section(
        &self,
        input: &str,
        context: Option<&StructuredContext>,
    ) -> Option<PromptSection> {
        if !self.domain.uses_documentation {
            return None;
        }
        let docs = self.docs.as_ref()?;

        // an option question without a recognisable path has nothing to look up
        let query = match context {
            Some(ctx @ StructuredContext::NixOption(_)) => ctx.documentation_query()?,
            Some(ctx) => ctx
                .documentation_query()
                .unwrap_or_else(|| input.trim().to_string()),
            None => input.trim().to_string(),
        };
        if query.is_empty() {
            return None;
        }

        match docs.query_documentation(&query).await {
            Ok(text) => SectionsBuilder::new()
                .text("Documentation", Some(text.as_str()))
                .build()
                .pop(),
            Err(e) => {
                debug!(domain = %self.domain.id, %query, error = %e, "documentation lookup failed");
                None
            }
        }
    }

    fn history_section(&self) -> Option<PromptSection> {
        if !self.domain.keeps_history || self.history.is_empty() {
            return None;
        }

        let children = SectionsBuilder::new()
            .facts(
                "Session",
                [
                    ("Session ID", Some(self.session_id.clone())),
                    ("Previous Exchanges", Some(self.history.exchanges().to_string())),
                ],
            )
            .bullets("Last Entries", &self.history.recent())
            .build();

        SectionsBuilder::new()
            .nested("Recent History", children)
            .build()
            .pop()
    }

    fn record(&mut self, input: &str, response: &str) {
        if self.domain.keeps_history {
            self.history.record_exchange(input, response);
        }
    }

    fn augment(&self, response: String) -> String {
        match self.domain.footer {
            Some(footer) => format!("{response}\n\n---\n{footer}"),
            None => response,
        }
    }
}
