//! Package and documentation search context.

use serde::{Deserialize, Serialize};

use super::section::{count, flag, PromptSection, SectionsBuilder};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchContext {
    pub search_query: Option<String>,
    /// packages, options, docs, ...
    pub search_type: Option<String>,
    pub search_sources: Vec<String>,
    pub channel_version: Option<String>,
    pub system_arch: Option<String>,
    pub package_filters: Vec<String>,
    pub search_limit: u32,
    pub sort_by: Option<String>,
    pub include_unfree: bool,
    pub search_results: Vec<String>,
    pub related_queries: Vec<String>,
    pub doc_results: Option<String>,
    pub doc_sections: Vec<String>,
    pub search_history: Vec<String>,
}

impl SearchContext {
    pub fn sections(&self) -> Vec<PromptSection> {
        SectionsBuilder::new()
            .facts(
                "Search",
                [
                    ("Query", self.search_query.clone()),
                    ("Type", self.search_type.clone()),
                    ("Channel", self.channel_version.clone()),
                    ("Architecture", self.system_arch.clone()),
                    ("Limit", count(self.search_limit)),
                    ("Sort By", self.sort_by.clone()),
                    ("Include Unfree", flag(self.include_unfree)),
                ],
            )
            .inline("Sources", &self.search_sources)
            .inline("Filters", &self.package_filters)
            .bullets("Current Results", &self.search_results)
            .inline("Related Queries", &self.related_queries)
            .text("Documentation Results", self.doc_results.as_deref())
            .inline("Documentation Sections", &self.doc_sections)
            .inline("Search History", &self.search_history)
            .build()
    }
}
