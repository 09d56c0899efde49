//! Interactive session context.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::section::{count, PromptSection, SectionsBuilder};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractiveContext {
    pub session_id: Option<String>,
    /// beginner, intermediate or advanced
    pub user_level: Option<String>,
    pub current_task: Option<String>,
    pub step_number: u32,
    pub system_state: Option<String>,
    pub error_context: Option<String>,
    pub previous_commands: Vec<String>,
    pub preferences: BTreeMap<String, String>,
    pub metadata: BTreeMap<String, String>,
}

const ADVANCED_HINTS: &[&str] = &["flake", "overlay", "derivation", "mkderivation", "nixpkgs.lib"];
const INTERMEDIATE_HINTS: &[&str] = &["configuration.nix", "home-manager", "nixos-rebuild", "module"];

const ERROR_HINTS: &[&str] = &["error", "failed", "failing", "broken", "doesn't work", "not working"];

impl InteractiveContext {
    /// Infer level and task from a single message.
    ///
    /// Called when the caller has not supplied a context of its own.
    pub fn from_input(input: &str) -> Self {
        let lower = input.to_lowercase();
        let mentions = |hints: &[&str]| hints.iter().any(|h| lower.contains(h));

        let user_level = if mentions(ADVANCED_HINTS) {
            "advanced"
        } else if mentions(INTERMEDIATE_HINTS) {
            "intermediate"
        } else {
            "beginner"
        };

        let task = input.trim();
        Self {
            user_level: Some(user_level.to_string()),
            current_task: (!task.is_empty()).then(|| task.to_string()),
            error_context: mentions(ERROR_HINTS).then(|| task.to_string()),
            ..Default::default()
        }
    }

    pub fn sections(&self) -> Vec<PromptSection> {
        SectionsBuilder::new()
            .facts(
                "Session",
                [
                    ("Session ID", self.session_id.clone()),
                    ("User Level", self.user_level.clone()),
                    ("Current Task", self.current_task.clone()),
                    ("Step", count(self.step_number)),
                ],
            )
            .text("System State", self.system_state.as_deref())
            .text("Current Issue", self.error_context.as_deref())
            .bullets("Previous Commands", &self.previous_commands)
            .map("Preferences", &self.preferences)
            .map("Metadata", &self.metadata)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::section::render;

    #[test]
    fn test_level_inference() {
        assert_eq!(
            InteractiveContext::from_input("write an overlay for ffmpeg").user_level.as_deref(),
            Some("advanced")
        );
        assert_eq!(
            InteractiveContext::from_input("edit configuration.nix").user_level.as_deref(),
            Some("intermediate")
        );
        assert_eq!(
            InteractiveContext::from_input("what is nix?").user_level.as_deref(),
            Some("beginner")
        );
    }

    #[test]
    fn test_error_detection() {
        let ctx = InteractiveContext::from_input("nixos-rebuild failed with a hash mismatch");
        assert_eq!(
            ctx.error_context.as_deref(),
            Some("nixos-rebuild failed with a hash mismatch")
        );
        assert_eq!(InteractiveContext::from_input("install vim").error_context, None);
    }

    #[test]
    fn test_sections() {
        let mut ctx = InteractiveContext {
            step_number: 2,
            previous_commands: vec!["nix-channel --update".to_string()],
            ..Default::default()
        };
        ctx.preferences.insert("verbosity".to_string(), "brief".to_string());

        assert_eq!(
            render(&ctx.sections()),
            "## Session\n- Step: 2\n\n\
             ## Previous Commands\n- nix-channel --update\n\n\
             ## Preferences\n- verbosity: brief"
        );
    }
}
