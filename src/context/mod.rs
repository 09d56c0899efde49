//! Structured context records and their prompt rendering.
//!
//! Every domain has its own record type. [`StructuredContext`] is the tagged
//! union an agent stores, and [`format`] turns it into ordered prompt sections.
//! Formatting never fails: a missing or foreign variant yields no sections.

mod community;
mod diagnostic;
mod flake;
mod hardware;
mod interactive;
mod option;
mod search;
pub mod section;
mod store;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use community::CommunityContext;
pub use diagnostic::{Diagnostic, DiagnosticContext, SystemInfo};
pub use flake::FlakeContext;
pub use hardware::HardwareContext;
pub use interactive::InteractiveContext;
pub use option::{extract_option_path, OptionContext, OptionScope};
pub use search::SearchContext;
pub use section::{render, PromptSection, SectionBody, SectionsBuilder};
pub use store::StoreContext;

/// Context supplied to an agent, tagged by domain.
///
/// Serialised with a `kind` field so callers can pass it as JSON:
///
/// ```json
/// { "kind": "diagnostic", "error_message": "bind: address already in use" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuredContext {
    Diagnostic(DiagnosticContext),
    Hardware(HardwareContext),
    Flake(FlakeContext),
    Store(StoreContext),
    Search(SearchContext),
    #[serde(rename = "option")]
    NixOption(OptionContext),
    Interactive(InteractiveContext),
    Community(CommunityContext),
}

/// Discriminant of [`StructuredContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    Diagnostic,
    Hardware,
    Flake,
    Store,
    Search,
    Option,
    Interactive,
    Community,
}

impl ContextKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKind::Diagnostic => "DiagnosticContext",
            ContextKind::Hardware => "HardwareContext",
            ContextKind::Flake => "FlakeContext",
            ContextKind::Store => "StoreContext",
            ContextKind::Search => "SearchContext",
            ContextKind::Option => "OptionContext",
            ContextKind::Interactive => "InteractiveContext",
            ContextKind::Community => "CommunityContext",
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StructuredContext {
    pub fn kind(&self) -> ContextKind {
        match self {
            StructuredContext::Diagnostic(_) => ContextKind::Diagnostic,
            StructuredContext::Hardware(_) => ContextKind::Hardware,
            StructuredContext::Flake(_) => ContextKind::Flake,
            StructuredContext::Store(_) => ContextKind::Store,
            StructuredContext::Search(_) => ContextKind::Search,
            StructuredContext::NixOption(_) => ContextKind::Option,
            StructuredContext::Interactive(_) => ContextKind::Interactive,
            StructuredContext::Community(_) => ContextKind::Community,
        }
    }

    /// Sections for this record, in declaration order.
    pub fn sections(&self) -> Vec<PromptSection> {
        match self {
            StructuredContext::Diagnostic(ctx) => ctx.sections(),
            StructuredContext::Hardware(ctx) => ctx.sections(),
            StructuredContext::Flake(ctx) => ctx.sections(),
            StructuredContext::Store(ctx) => ctx.sections(),
            StructuredContext::Search(ctx) => ctx.sections(),
            StructuredContext::NixOption(ctx) => ctx.sections(),
            StructuredContext::Interactive(ctx) => ctx.sections(),
            StructuredContext::Community(ctx) => ctx.sections(),
        }
    }

    /// Topic for the documentation collaborator, when the record names one.
    pub fn documentation_query(&self) -> Option<String> {
        match self {
            StructuredContext::NixOption(ctx) => ctx.documentation_query(),
            StructuredContext::Search(ctx) => ctx.search_query.clone().filter(|q| !q.is_empty()),
            _ => None,
        }
    }
}

macro_rules! impl_from_context {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for StructuredContext {
                fn from(ctx: $ty) -> Self {
                    StructuredContext::$variant(ctx)
                }
            }
        )*
    };
}

impl_from_context! {
    Diagnostic => DiagnosticContext,
    Hardware => HardwareContext,
    Flake => FlakeContext,
    Store => StoreContext,
    Search => SearchContext,
    NixOption => OptionContext,
    Interactive => InteractiveContext,
    Community => CommunityContext,
}

/// Sections for `context` if it is of the `expected` kind, otherwise none.
pub fn format(context: Option<&StructuredContext>, expected: ContextKind) -> Vec<PromptSection> {
    match context {
        Some(ctx) if ctx.kind() == expected => ctx.sections(),
        _ => Vec::new(),
    }
}
