//! Provider registry - named, shared provider handles.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Error;
use crate::Result;

use super::Provider;

/// Provider registry — maps names to shared handles.
///
/// # Example
///
/// ```ignore
/// let mut registry = ProviderRegistry::new();
/// registry.register("ollama", Arc::new(OllamaProvider::default()));
/// let provider = registry.from_config(&config)?;
/// ```
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn Provider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Get a handle by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers.get(name).cloned()
    }

    pub fn has(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Resolve the provider named in the configuration.
    pub fn from_config(&self, config: &Config) -> Result<Arc<dyn Provider>> {
        self.get(&config.provider).ok_or_else(|| {
            Error::Config(format!(
                "Unknown provider: {} (registered: {})",
                config.provider,
                self.names().join(", ")
            ))
        })
    }
}
