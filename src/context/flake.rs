//! Flake context.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::section::{PromptSection, SectionsBuilder};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlakeContext {
    pub flake_path: Option<String>,
    /// nixos, home-manager, dev-shell, ...
    pub project_type: Option<String>,
    pub flake_system: Option<String>,
    pub flake_inputs: BTreeMap<String, String>,
    pub flake_outputs: Vec<String>,
    pub dependencies: Vec<String>,
    pub flake_nix: Option<String>,
    pub flake_lock: Option<String>,
    pub flake_metadata: Option<String>,
    pub flake_errors: Vec<String>,
    pub flake_commands: Vec<String>,
    pub build_outputs: Option<String>,
}

impl FlakeContext {
    pub fn sections(&self) -> Vec<PromptSection> {
        SectionsBuilder::new()
            .facts(
                "Flake",
                [
                    ("Path", self.flake_path.clone()),
                    ("Project Type", self.project_type.clone()),
                    ("System", self.flake_system.clone()),
                ],
            )
            .map("Inputs", &self.flake_inputs)
            .inline("Outputs", &self.flake_outputs)
            .inline("Dependencies", &self.dependencies)
            .code("flake.nix", Some("nix"), self.flake_nix.as_deref())
            .code("flake.lock", Some("json"), self.flake_lock.as_deref())
            .code("Metadata", None, self.flake_metadata.as_deref())
            .bullets("Errors", &self.flake_errors)
            .bullets("Commands", &self.flake_commands)
            .code("Build Outputs", None, self.build_outputs.as_deref())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::section::render;

    #[test]
    fn test_inputs_and_errors() {
        let mut ctx = FlakeContext {
            flake_errors: vec!["error: attribute 'nixosConfigurations' missing".to_string()],
            ..Default::default()
        };
        ctx.flake_inputs
            .insert("nixpkgs".to_string(), "github:NixOS/nixpkgs/nixos-24.05".to_string());
        ctx.flake_inputs
            .insert("home-manager".to_string(), "github:nix-community/home-manager".to_string());

        let rendered = render(&ctx.sections());
        assert!(rendered.starts_with(
            "## Inputs\n- home-manager: github:nix-community/home-manager\n- nixpkgs: "
        ));
        assert!(rendered.contains("## Errors\n- error: attribute 'nixosConfigurations' missing"));
    }

    #[test]
    fn test_flake_nix_fenced() {
        let ctx = FlakeContext {
            flake_nix: Some("{ outputs = { self }: { }; }".to_string()),
            ..Default::default()
        };
        assert_eq!(
            render(&ctx.sections()),
            "## flake.nix\n```nix\n{ outputs = { self }: { }; }\n```"
        );
    }
}
