//! Role prompt templates.
//!
//! Templates are embedded at compile time from the `templates/roles/` directory
//! so the table is always available and versioned with the codebase.

/// Built-in role identifiers.
pub mod ids {
    pub const DIAGNOSER: &str = "diagnoser";
    pub const EXPLAINER: &str = "explainer";
    pub const DIAGNOSE: &str = "diagnose";
    pub const ASK: &str = "ask";
    pub const EXPLAIN_OPTION: &str = "explain-option";
    pub const EXPLAIN_HOME_OPTION: &str = "explain-home-option";
    pub const SEARCH: &str = "search";
    pub const BUILD: &str = "build";
    pub const DOCTOR: &str = "doctor";
    pub const FLAKE: &str = "flake";
    pub const GC: &str = "gc";
    pub const HARDWARE: &str = "hardware";
    pub const HELP: &str = "help";
    pub const INTERACTIVE: &str = "interactive";
    pub const LEARN: &str = "learn";
    pub const LOGS: &str = "logs";
    pub const MACHINES: &str = "machines";
    pub const MCP_SERVER: &str = "mcp-server";
    pub const MIGRATE: &str = "migrate";
    pub const NEOVIM_SETUP: &str = "neovim-setup";
    pub const PACKAGE_REPO: &str = "package-repo";
    pub const SNIPPETS: &str = "snippets";
    pub const STORE: &str = "store";
    pub const TEMPLATES: &str = "templates";
    pub const COMMUNITY: &str = "community";
    pub const COMPLETION: &str = "completion";
    pub const CONFIG: &str = "config";
    pub const CONFIGURE: &str = "configure";
    pub const DEVENV: &str = "devenv";
}

/// Identifier → template text, in registration order.
pub const TEMPLATES: &[(&str, &str)] = &[
    (ids::DIAGNOSER, include_str!("../../templates/roles/diagnoser.md")),
    (ids::EXPLAINER, include_str!("../../templates/roles/explainer.md")),
    (ids::DIAGNOSE, include_str!("../../templates/roles/diagnose.md")),
    (ids::ASK, include_str!("../../templates/roles/ask.md")),
    (ids::EXPLAIN_OPTION, include_str!("../../templates/roles/explain-option.md")),
    (ids::EXPLAIN_HOME_OPTION, include_str!("../../templates/roles/explain-home-option.md")),
    (ids::SEARCH, include_str!("../../templates/roles/search.md")),
    (ids::BUILD, include_str!("../../templates/roles/build.md")),
    (ids::DOCTOR, include_str!("../../templates/roles/doctor.md")),
    (ids::FLAKE, include_str!("../../templates/roles/flake.md")),
    (ids::GC, include_str!("../../templates/roles/gc.md")),
    (ids::HARDWARE, include_str!("../../templates/roles/hardware.md")),
    (ids::HELP, include_str!("../../templates/roles/help.md")),
    (ids::INTERACTIVE, include_str!("../../templates/roles/interactive.md")),
    (ids::LEARN, include_str!("../../templates/roles/learn.md")),
    (ids::LOGS, include_str!("../../templates/roles/logs.md")),
    (ids::MACHINES, include_str!("../../templates/roles/machines.md")),
    (ids::MCP_SERVER, include_str!("../../templates/roles/mcp-server.md")),
    (ids::MIGRATE, include_str!("../../templates/roles/migrate.md")),
    (ids::NEOVIM_SETUP, include_str!("../../templates/roles/neovim-setup.md")),
    (ids::PACKAGE_REPO, include_str!("../../templates/roles/package-repo.md")),
    (ids::SNIPPETS, include_str!("../../templates/roles/snippets.md")),
    (ids::STORE, include_str!("../../templates/roles/store.md")),
    (ids::TEMPLATES, include_str!("../../templates/roles/templates.md")),
    (ids::COMMUNITY, include_str!("../../templates/roles/community.md")),
    (ids::COMPLETION, include_str!("../../templates/roles/completion.md")),
    (ids::CONFIG, include_str!("../../templates/roles/config.md")),
    (ids::CONFIGURE, include_str!("../../templates/roles/configure.md")),
    (ids::DEVENV, include_str!("../../templates/roles/devenv.md")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_not_empty() {
        for (id, text) in TEMPLATES {
            assert!(!text.trim().is_empty(), "empty template for {id}");
        }
    }

    #[test]
    fn test_template_ids_unique() {
        let mut seen: Vec<&str> = TEMPLATES.iter().map(|(id, _)| *id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), TEMPLATES.len());
    }
}
