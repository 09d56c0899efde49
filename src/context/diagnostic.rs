//! Diagnostic context: failures, logs and the system they happened on.

use serde::{Deserialize, Serialize};

use super::section::{flag, PromptSection, SectionsBuilder};

/// Finding types that are never shown to the model.
const HIDDEN_FINDINGS: &[&str] = &["info", "ai_analysis"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticContext {
    pub log_data: Option<String>,
    pub config_snippet: Option<String>,
    pub error_message: Option<String>,
    pub system_info: Option<SystemInfo>,
    pub existing_diagnostics: Vec<Diagnostic>,
    pub command_output: Option<String>,
    pub user_description: Option<String>,
}

/// Host facts gathered before the question is asked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfo {
    pub nixos_version: Option<String>,
    pub nix_version: Option<String>,
    pub channel: Option<String>,
    pub generation: Option<String>,
    pub architecture: Option<String>,
    pub is_flake_system: bool,
}

/// A finding produced by an automated checker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnostic {
    pub issue: String,
    pub error_type: String,
    pub severity: String,
    pub details: Option<String>,
}

impl DiagnosticContext {
    pub fn sections(&self) -> Vec<PromptSection> {
        let mut builder = SectionsBuilder::new();

        if let Some(info) = &self.system_info {
            builder = builder.facts("System Information", info.facts());
        }

        builder
            .code("Error Message", None, self.error_message.as_deref())
            .code("Log Output", None, self.log_data.as_deref())
            .code("Configuration Snippet", Some("nix"), self.config_snippet.as_deref())
            .code("Command Output", None, self.command_output.as_deref())
            .text("User Description", self.user_description.as_deref())
            .nested("Automated Analysis Results", self.findings())
            .build()
    }

    fn findings(&self) -> Vec<PromptSection> {
        self.existing_diagnostics
            .iter()
            .filter(|d| !HIDDEN_FINDINGS.contains(&d.error_type.as_str()))
            .filter(|d| !d.issue.trim().is_empty())
            .enumerate()
            .flat_map(|(i, d)| {
                let heading = match d.severity.trim() {
                    "" => format!("{}. {}", i + 1, d.issue),
                    severity => format!("{}. {} (severity: {})", i + 1, d.issue, severity),
                };
                let kind = (!d.error_type.is_empty()).then(|| d.error_type.clone());
                let facts = SectionsBuilder::new()
                    .facts(&heading, [("Type", kind), ("Details", d.details.clone())])
                    .build();
                if facts.is_empty() {
                    SectionsBuilder::new().text(&heading, Some(d.issue.as_str())).build()
                } else {
                    facts
                }
            })
            .collect()
    }
}

impl SystemInfo {
    fn facts(&self) -> [(&'static str, Option<String>); 6] {
        [
            ("NixOS Version", self.nixos_version.clone()),
            ("Nix Version", self.nix_version.clone()),
            ("Channel", self.channel.clone()),
            ("Generation", self.generation.clone()),
            ("Architecture", self.architecture.clone()),
            ("Flake System", flag(self.is_flake_system)),
        ]
    }
}
