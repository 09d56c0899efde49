//! nixai - role-scoped prompt orchestration for NixOS assistance
//!
//! This library provides per-domain agents that validate a role, render
//! structured context into a prompt, and dispatch it to whichever capability
//! a language-model provider offers.

pub mod agent;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod provider;
pub mod roles;

pub use error::{Error, Result};
