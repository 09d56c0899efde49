//! Configuration option context, for NixOS and Home Manager options.
//!
//! Besides the schema itself this module can derive a context from a free-text
//! question: it pulls the first option path out of the text and fills in the
//! category, owning package or program, use case and neighbouring options.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::section::{PromptSection, SectionsBuilder};

/// Which option tree a path belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionScope {
    #[default]
    Nixos,
    HomeManager,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionContext {
    pub scope: OptionScope,
    pub option_path: Option<String>,
    pub option_type: Option<String>,
    pub default_value: Option<String>,
    pub description: Option<String>,
    pub examples: Vec<String>,
    pub related_options: Vec<String>,
    pub package_name: Option<String>,
    pub service_name: Option<String>,
    pub program_name: Option<String>,
    pub config_files: Vec<String>,
    pub dotfile_location: Option<String>,
    pub system_integration: Option<String>,
    pub use_case: Option<String>,
    pub category: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

const NIXOS_ROOTS: &[&str] = &[
    "services",
    "programs",
    "system",
    "environment",
    "networking",
    "hardware",
    "boot",
    "security",
    "virtualisation",
];

const HOME_ROOTS: &[&str] = &[
    "programs", "services", "xsession", "wayland", "gtk", "qt", "fonts", "home", "accounts",
    "systemd",
];

fn compile(roots: &[&str]) -> Vec<Regex> {
    roots
        .iter()
        .filter_map(|root| Regex::new(&format!(r"\b{}\.[\w.]+", regex::escape(root))).ok())
        .collect()
}

fn patterns(scope: OptionScope) -> &'static [Regex] {
    static NIXOS: OnceLock<Vec<Regex>> = OnceLock::new();
    static HOME: OnceLock<Vec<Regex>> = OnceLock::new();
    match scope {
        OptionScope::Nixos => NIXOS.get_or_init(|| compile(NIXOS_ROOTS)),
        OptionScope::HomeManager => HOME.get_or_init(|| compile(HOME_ROOTS)),
    }
}

/// First option path mentioned in `question`, trying roots in priority order.
pub fn extract_option_path(question: &str, scope: OptionScope) -> Option<String> {
    patterns(scope).iter().find_map(|re| {
        re.find(question)
            .map(|m| m.as_str().trim_end_matches('.').to_string())
            .filter(|path| path.contains('.'))
    })
}

fn root(path: &str) -> &str {
    path.split('.').next().unwrap_or_default()
}

/// `services.nginx.virtualHosts` -> `services.nginx`
fn base_path(path: &str) -> Option<String> {
    let mut parts = path.split('.');
    match (parts.next(), parts.next()) {
        (Some(root), Some(name)) if !name.is_empty() => Some(format!("{root}.{name}")),
        _ => None,
    }
}

/// Second path segment under `services.` or `programs.`.
fn owner_name(path: &str) -> Option<String> {
    let mut parts = path.split('.');
    match (parts.next(), parts.next()) {
        (Some("services" | "programs"), Some(name)) if !name.is_empty() => Some(name.to_string()),
        _ => None,
    }
}

impl OptionScope {
    fn category(self, path: &str) -> &'static str {
        match (self, root(path)) {
            (Self::Nixos, "services") => "System Services",
            (Self::Nixos, "programs") => "System Programs",
            (Self::Nixos, "environment") => "Environment Configuration",
            (Self::Nixos, "networking") => "Network Configuration",
            (Self::Nixos, "hardware") => "Hardware Configuration",
            (Self::Nixos, "boot") => "Boot Configuration",
            (Self::Nixos, "security") => "Security Configuration",
            (Self::Nixos, "system") => "System Configuration",
            (Self::Nixos, "virtualisation") => "Virtualisation",
            (Self::Nixos, _) => "General Configuration",
            (Self::HomeManager, "programs") => "User Programs",
            (Self::HomeManager, "services") => "User Services",
            (Self::HomeManager, "xsession") => "X11 Session",
            (Self::HomeManager, "wayland") => "Wayland Session",
            (Self::HomeManager, "gtk") => "GTK Configuration",
            (Self::HomeManager, "qt") => "Qt Configuration",
            (Self::HomeManager, "fonts") => "Font Configuration",
            (Self::HomeManager, "home") => "Home Environment",
            (Self::HomeManager, "accounts") => "Account Management",
            (Self::HomeManager, "systemd") => "User Services (systemd)",
            (Self::HomeManager, _) => "General User Configuration",
        }
    }

    fn use_case(category: &str) -> &'static str {
        match category {
            "System Services" => {
                "Configure and manage system services like web servers, databases, or network services"
            }
            "System Programs" => "Install and configure system-wide programs and utilities",
            "Environment Configuration" => {
                "Set up system environment variables, packages, and global settings"
            }
            "Network Configuration" => "Configure network interfaces, firewalls, and network services",
            "Hardware Configuration" => {
                "Configure hardware-specific settings, drivers, and device support"
            }
            "Boot Configuration" => "Configure bootloader, kernel parameters, and boot process",
            "Security Configuration" => {
                "Configure security policies, user permissions, and system hardening"
            }
            "Virtualisation" => "Set up containers, VMs, or virtualisation platforms",
            "User Programs" => "Configure user-specific applications and development tools",
            "User Services" => "Manage user-level systemd services and background processes",
            "X11 Session" => "Configure X11 window manager and desktop environment",
            "Wayland Session" => "Configure Wayland compositor and desktop environment",
            "GTK Configuration" => "Customize GTK application themes and appearance",
            "Qt Configuration" => "Customize Qt application themes and behavior",
            "Font Configuration" => "Manage user-level font installation and configuration",
            "Home Environment" => "Set up home directory, environment variables, and user files",
            "Account Management" => "Configure email, calendar, and other account integrations",
            "User Services (systemd)" => "Manage user-specific systemd services and timers",
            "General User Configuration" => "General user-level configuration and personalization",
            _ => "General system configuration and customization",
        }
    }

    fn related(self, path: &str) -> Vec<String> {
        let suffixes: &[&str] = match (self, root(path), owner_name(path).as_deref()) {
            (Self::Nixos, "services", _) => &["enable", "package", "user", "group", "configFile"],
            (Self::Nixos, "programs", _) => &["enable", "package", "settings", "extraConfig", "aliases"],
            (Self::HomeManager, "programs", Some("git")) => &["userName", "userEmail", "aliases"],
            (Self::HomeManager, "programs", Some("firefox")) => &["profiles", "extensions"],
            (Self::HomeManager, "programs", _) => &["enable", "package", "extraConfig", "settings"],
            _ => &[],
        };

        let Some(base) = base_path(path) else {
            return Vec::new();
        };
        suffixes
            .iter()
            .map(|suffix| format!("{base}.{suffix}"))
            .filter(|option| option != path)
            .collect()
    }

    fn system_integration(path: &str) -> &'static str {
        match root(path) {
            "programs" => "Complements system-wide program configuration with user-specific settings",
            "services" => "Runs as user services alongside system services",
            "xsession" | "wayland" => {
                "Integrates with display manager and system graphics configuration"
            }
            "fonts" => "Supplements system font configuration with user-specific fonts",
            _ => "Works alongside system configuration for user-specific customization",
        }
    }

    /// Query sent to the documentation collaborator for `path`.
    pub fn documentation_query(self, path: &str) -> String {
        match self {
            Self::Nixos => format!("NixOS option {path}"),
            Self::HomeManager => format!("Home Manager option {path}"),
        }
    }
}

fn dotfile_location(program: &str) -> String {
    match program {
        "git" => "$HOME/.config/git/".to_string(),
        "vim" => "~/.vimrc".to_string(),
        "neovim" => "~/.config/nvim/".to_string(),
        "tmux" => "~/.tmux.conf".to_string(),
        "zsh" => "$HOME/.zshrc and $HOME/.config/zsh/".to_string(),
        "bash" => "~/.bashrc".to_string(),
        "fish" => "~/.config/fish/".to_string(),
        "alacritty" => "~/.config/alacritty/alacritty.yml".to_string(),
        "kitty" => "~/.config/kitty/kitty.conf".to_string(),
        "firefox" => "~/.mozilla/firefox/".to_string(),
        "vscode" => "~/.config/Code/User/settings.json".to_string(),
        "emacs" => "~/.emacs.d/".to_string(),
        other => format!("~/.config/{other}/"),
    }
}

fn config_files(program: &str) -> Vec<String> {
    let files: &[&str] = match program {
        "git" => &[".gitconfig", ".gitignore_global"],
        "vim" => &[".vimrc"],
        "neovim" => &["init.vim", "init.lua"],
        "tmux" => &[".tmux.conf"],
        "zsh" => &[".zshrc", ".zshenv", ".zprofile"],
        "bash" => &[".bashrc", ".bash_profile"],
        "fish" => &["config.fish", "functions/"],
        "alacritty" => &["alacritty.yml"],
        "kitty" => &["kitty.conf"],
        "vscode" => &["settings.json", "keybindings.json"],
        other => return vec![format!("{other} configuration files")],
    };
    files.iter().map(|f| f.to_string()).collect()
}

impl OptionContext {
    /// Build a context from whatever option path `question` mentions.
    pub fn from_question(question: &str, scope: OptionScope) -> Self {
        let path = extract_option_path(question, scope);
        let category = path
            .as_deref()
            .map(|p| scope.category(p))
            .unwrap_or(match scope {
                OptionScope::Nixos => "General Configuration",
                OptionScope::HomeManager => "General User Configuration",
            });

        let mut ctx = Self {
            scope,
            use_case: Some(OptionScope::use_case(category).to_string()),
            ..Default::default()
        };

        let Some(path) = path else {
            return ctx;
        };

        ctx.category = Some(category.to_string());
        ctx.related_options = scope.related(&path);

        let owner = owner_name(&path);
        match scope {
            OptionScope::Nixos => {
                ctx.package_name = owner.clone();
                ctx.service_name = owner.filter(|_| root(&path) == "services");
            }
            OptionScope::HomeManager => {
                if let Some(program) = &owner {
                    if root(&path) == "programs" {
                        ctx.dotfile_location = Some(dotfile_location(program));
                    }
                    ctx.config_files = config_files(program);
                }
                ctx.program_name = owner;
                ctx.system_integration = Some(OptionScope::system_integration(&path).to_string());
            }
        }
        ctx.option_path = Some(path);
        ctx
    }

    /// Documentation query for the option, if a path is known.
    pub fn documentation_query(&self) -> Option<String> {
        self.option_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| self.scope.documentation_query(p))
    }

    pub fn sections(&self) -> Vec<PromptSection> {
        SectionsBuilder::new()
            .facts(
                "Option",
                [
                    ("Path", self.option_path.clone()),
                    ("Type", self.option_type.clone()),
                    ("Default", self.default_value.clone()),
                    ("Category", self.category.clone()),
                    ("Associated Package", self.package_name.clone()),
                    ("Associated Service", self.service_name.clone()),
                    ("Program", self.program_name.clone()),
                    ("Primary Use Case", self.use_case.clone()),
                    ("System Integration", self.system_integration.clone()),
                    ("Dotfile Location", self.dotfile_location.clone()),
                ],
            )
            .text("Description", self.description.as_deref())
            .bullets("Examples", &self.examples)
            .inline("Related Options", &self.related_options)
            .inline("Generated Files", &self.config_files)
            .map("Metadata", &self.metadata)
            .build()
    }
}
