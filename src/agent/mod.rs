//! Agent module — per-domain prompt orchestration.
//!
//! This module contains:
//! - [`Domain`] descriptors, one per topic ([`DomainId`])
//! - The generic [`Agent`]: role validation, prompt assembly, dispatch and
//!   response augmentation
//! - [`SessionHistory`], the bounded log some domains feed back into prompts
//! - [`AgentFactory`] for wiring agents to a provider
//!
//! # Adding a New Domain
//!
//! 1. Add a variant to [`DomainId`] and a static [`Domain`] in `domain.rs`
//! 2. Register a role template for its default role
//! 3. If it renders a new context record, add the schema under `context/`

mod agent_impl;
mod docs;
mod domain;
mod factory;
mod history;

pub use agent_impl::Agent;
pub use docs::DocumentationSearch;
pub use domain::{ContextDeriver, ContextPolicy, Domain, DomainId};
pub use factory::{AgentFactory, SharedAgent};
pub use history::{HistoryEntry, SessionHistory, Speaker, HISTORY_CAPACITY};
