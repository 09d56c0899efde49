//! Domain descriptors.
//!
//! One static [`Domain`] per topic parameterises the generic [`Agent`](super::Agent):
//! which role it starts with, which context it accepts, how the prompt ends and
//! what is appended to successful answers.

use std::fmt;
use std::str::FromStr;

use crate::context::{ContextKind, InteractiveContext, OptionContext, OptionScope, StructuredContext};
use crate::error::Error;
use crate::roles::ids;

/// How `set_context` treats a record of the wrong kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextPolicy {
    /// Store it anyway; it renders as no context.
    Soft,
    /// Reject it with [`Error::InvalidContext`].
    Strict,
}

/// Derives a context from the user's input when none is stored.
pub type ContextDeriver = fn(&str) -> StructuredContext;

/// Static description of one agent topic.
pub struct Domain {
    pub id: DomainId,
    pub default_role: &'static str,
    /// Context variant this domain renders; `None` renders no context at all.
    pub context_kind: Option<ContextKind>,
    pub policy: ContextPolicy,
    pub input_heading: &'static str,
    pub instructions: Option<&'static str>,
    /// Appended after a `---` rule to every successful query answer.
    pub footer: Option<&'static str>,
    pub keeps_history: bool,
    pub uses_documentation: bool,
    pub derive_context: Option<ContextDeriver>,
}

/// Agent topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DomainId {
    Ask,
    Diagnose,
    Hardware,
    Flake,
    Store,
    Search,
    ExplainOption,
    ExplainHomeOption,
    Interactive,
    Community,
}

impl DomainId {
    pub const ALL: [DomainId; 10] = [
        DomainId::Ask,
        DomainId::Diagnose,
        DomainId::Hardware,
        DomainId::Flake,
        DomainId::Store,
        DomainId::Search,
        DomainId::ExplainOption,
        DomainId::ExplainHomeOption,
        DomainId::Interactive,
        DomainId::Community,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainId::Ask => "ask",
            DomainId::Diagnose => "diagnose",
            DomainId::Hardware => "hardware",
            DomainId::Flake => "flake",
            DomainId::Store => "store",
            DomainId::Search => "search",
            DomainId::ExplainOption => "explain-option",
            DomainId::ExplainHomeOption => "explain-home-option",
            DomainId::Interactive => "interactive",
            DomainId::Community => "community",
        }
    }

    /// The static descriptor for this topic.
    pub fn domain(&self) -> &'static Domain {
        match self {
            DomainId::Ask => &ASK,
            DomainId::Diagnose => &DIAGNOSE,
            DomainId::Hardware => &HARDWARE,
            DomainId::Flake => &FLAKE,
            DomainId::Store => &STORE,
            DomainId::Search => &SEARCH,
            DomainId::ExplainOption => &EXPLAIN_OPTION,
            DomainId::ExplainHomeOption => &EXPLAIN_HOME_OPTION,
            DomainId::Interactive => &INTERACTIVE,
            DomainId::Community => &COMMUNITY,
        }
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::Config(format!("Unknown agent domain: {s}")))
    }
}

fn nixos_option(input: &str) -> StructuredContext {
    OptionContext::from_question(input, OptionScope::Nixos).into()
}

fn home_option(input: &str) -> StructuredContext {
    OptionContext::from_question(input, OptionScope::HomeManager).into()
}

fn interactive_session(input: &str) -> StructuredContext {
    InteractiveContext::from_input(input).into()
}

const ASK_TIPS: &str = "**Additional Tips:**
- Use `nixai doctor` to diagnose system issues
- Use `nixai search <term>` to find packages or options
- Use `nixai explain-option <option>` for detailed option information
- Check the NixOS manual: https://nixos.org/manual/";

const HARDWARE_TIPS: &str = "**Hardware Configuration Tips:**
- Test hardware changes in a safe environment first
- Keep backups of working configurations
- Check hardware compatibility before major changes
- Monitor system stability after hardware configuration changes
- Use `nixos-generate-config` to detect new hardware automatically";

const STORE_REMINDERS: &str = "**Store Operation Safety Reminders:**
- Always backup important data before major store operations
- Test operations with --dry-run when available
- Verify store integrity after significant changes
- Monitor disk space during large operations
- Keep track of active roots and generations";

const INTERACTIVE_TIPS: &str = "**Interactive Tips:**
- Type 'help' for available commands
- Use 'exit' or 'quit' to leave interactive mode
- Ask follow-up questions for clarification
- Request step-by-step guidance for complex tasks";

static ASK: Domain = Domain {
    id: DomainId::Ask,
    default_role: ids::ASK,
    context_kind: None,
    policy: ContextPolicy::Soft,
    input_heading: "Question",
    instructions: None,
    footer: Some(ASK_TIPS),
    keeps_history: false,
    uses_documentation: true,
    derive_context: None,
};

static DIAGNOSE: Domain = Domain {
    id: DomainId::Diagnose,
    default_role: ids::DIAGNOSE,
    context_kind: Some(ContextKind::Diagnostic),
    policy: ContextPolicy::Soft,
    input_heading: "User Question",
    instructions: Some(
        "Identify the root cause, propose a fix as NixOS configuration where possible, \
         and list the commands needed to verify it.",
    ),
    footer: None,
    keeps_history: false,
    uses_documentation: false,
    derive_context: None,
};

static HARDWARE: Domain = Domain {
    id: DomainId::Hardware,
    default_role: ids::HARDWARE,
    context_kind: Some(ContextKind::Hardware),
    policy: ContextPolicy::Soft,
    input_heading: "Hardware Question",
    instructions: None,
    footer: Some(HARDWARE_TIPS),
    keeps_history: false,
    uses_documentation: false,
    derive_context: None,
};

static FLAKE: Domain = Domain {
    id: DomainId::Flake,
    default_role: ids::FLAKE,
    context_kind: Some(ContextKind::Flake),
    policy: ContextPolicy::Soft,
    input_heading: "Flake Question",
    instructions: Some("Prefer flake-native commands and show complete flake.nix fragments."),
    footer: None,
    keeps_history: false,
    uses_documentation: false,
    derive_context: None,
};

static STORE: Domain = Domain {
    id: DomainId::Store,
    default_role: ids::STORE,
    context_kind: Some(ContextKind::Store),
    policy: ContextPolicy::Soft,
    input_heading: "Store Operation",
    instructions: None,
    footer: Some(STORE_REMINDERS),
    keeps_history: false,
    uses_documentation: false,
    derive_context: None,
};

static SEARCH: Domain = Domain {
    id: DomainId::Search,
    default_role: ids::SEARCH,
    context_kind: Some(ContextKind::Search),
    policy: ContextPolicy::Soft,
    input_heading: "Search Query",
    instructions: Some(
        "Recommend the best matching packages or options, with installation \
         snippets for configuration.nix and nix profile.",
    ),
    footer: None,
    keeps_history: false,
    uses_documentation: true,
    derive_context: None,
};

static EXPLAIN_OPTION: Domain = Domain {
    id: DomainId::ExplainOption,
    default_role: ids::EXPLAIN_OPTION,
    context_kind: Some(ContextKind::Option),
    policy: ContextPolicy::Soft,
    input_heading: "User Question",
    instructions: Some(
        "Please provide a comprehensive explanation focusing on:
1. What this option does and why it's useful
2. Practical configuration examples (basic and advanced)
3. Best practices and common pitfalls
4. Integration with other NixOS components
5. Real-world use cases and scenarios",
    ),
    footer: None,
    keeps_history: false,
    uses_documentation: true,
    derive_context: Some(nixos_option),
};

static EXPLAIN_HOME_OPTION: Domain = Domain {
    id: DomainId::ExplainHomeOption,
    default_role: ids::EXPLAIN_HOME_OPTION,
    context_kind: Some(ContextKind::Option),
    policy: ContextPolicy::Soft,
    input_heading: "User Question",
    instructions: Some(
        "Please provide a comprehensive explanation focusing on:
1. What this Home Manager option configures and its purpose
2. Practical configuration examples with real-world scenarios
3. Integration with other Home Manager programs and system config
4. Generated dotfiles and their locations
5. Best practices for user-level configuration management
6. Workflow integration and productivity benefits",
    ),
    footer: None,
    keeps_history: false,
    uses_documentation: true,
    derive_context: Some(home_option),
};

static INTERACTIVE: Domain = Domain {
    id: DomainId::Interactive,
    default_role: ids::INTERACTIVE,
    context_kind: Some(ContextKind::Interactive),
    policy: ContextPolicy::Soft,
    input_heading: "User Input",
    instructions: None,
    footer: Some(INTERACTIVE_TIPS),
    keeps_history: true,
    uses_documentation: false,
    derive_context: Some(interactive_session),
};

static COMMUNITY: Domain = Domain {
    id: DomainId::Community,
    default_role: ids::COMMUNITY,
    context_kind: Some(ContextKind::Community),
    policy: ContextPolicy::Strict,
    input_heading: "Community Question",
    instructions: None,
    footer: None,
    keeps_history: false,
    uses_documentation: false,
    derive_context: None,
};
