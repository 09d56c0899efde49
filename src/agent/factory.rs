//! Agent factory - builds a configured agent per domain.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::Error;
use crate::provider::Provider;
use crate::roles::RoleRegistry;
use crate::Result;

use super::agent_impl::Agent;
use super::docs::DocumentationSearch;
use super::domain::DomainId;

/// An agent shared between tasks behind an async mutex.
pub type SharedAgent = Arc<Mutex<Agent>>;

/// Wires a provider, the role table and optional collaborators into agents.
///
/// # Example
///
/// ```ignore
/// let factory = AgentFactory::new(provider)
///     .with_documentation(docs)
///     .with_config(&config)?;
/// let mut agent = factory.create(DomainId::Diagnose)?;
/// ```
pub struct AgentFactory {
    provider: Arc<dyn Provider>,
    docs: Option<Arc<dyn DocumentationSearch>>,
    documentation: bool,
    roles: &'static RoleRegistry,
    role_overrides: BTreeMap<DomainId, String>,
}

impl AgentFactory {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            docs: None,
            documentation: true,
            roles: RoleRegistry::builtin(),
            role_overrides: BTreeMap::new(),
        }
    }

    /// Inject `docs` into domains that use documentation.
    pub fn with_documentation(mut self, docs: Arc<dyn DocumentationSearch>) -> Self {
        self.docs = Some(docs);
        self
    }

    pub fn with_roles(mut self, roles: &'static RoleRegistry) -> Self {
        self.roles = roles;
        self
    }

    /// Apply role overrides and the documentation switch from `config`.
    ///
    /// Unknown domains and unregistered roles are configuration errors.
    pub fn with_config(mut self, config: &Config) -> Result<Self> {
        for (domain, role) in &config.role_overrides {
            let id: DomainId = domain.parse()?;
            if !self.roles.validate(role) {
                return Err(Error::Config(format!(
                    "Role override for {id} is not a registered role: {role}"
                )));
            }
            self.role_overrides.insert(id, role.clone());
        }
        self.documentation = config.documentation;
        Ok(self)
    }

    /// Role an agent for `domain` will start with.
    pub fn role_for(&self, domain: DomainId) -> &str {
        self.role_overrides
            .get(&domain)
            .map(String::as_str)
            .unwrap_or(domain.domain().default_role)
    }

    pub fn create(&self, domain: DomainId) -> Result<Agent> {
        let descriptor = domain.domain();
        let mut agent = Agent::new(descriptor)
            .with_roles(self.roles)
            .with_provider(Arc::clone(&self.provider));

        if descriptor.uses_documentation && self.documentation {
            if let Some(docs) = &self.docs {
                agent.set_documentation(Arc::clone(docs));
            }
        }

        agent.set_role(self.role_for(domain))?;
        Ok(agent)
    }

    pub fn create_shared(&self, domain: DomainId) -> Result<SharedAgent> {
        Ok(Arc::new(Mutex::new(self.create(domain)?)))
    }

    /// One agent per known domain.
    pub fn create_all(&self) -> Result<BTreeMap<DomainId, Agent>> {
        DomainId::ALL
            .into_iter()
            .map(|id| Ok((id, self.create(id)?)))
            .collect()
    }
}
