//! Nix store context.

use serde::{Deserialize, Serialize};

use super::section::{count, flag, PromptSection, SectionsBuilder};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreContext {
    pub store_path: Option<String>,
    pub store_size: Option<String>,
    pub free_space: Option<String>,
    pub store_version: Option<String>,

    pub operation_type: Option<String>,
    pub query_type: Option<String>,
    pub target_paths: Vec<String>,

    pub generations: Vec<String>,
    pub roots: Vec<String>,
    pub old_generations: u32,
    pub dry_run: bool,

    pub corrupted_paths: Vec<String>,
    pub orphaned_paths: Vec<String>,
    pub issues: Vec<String>,

    pub cache_hit_rate: Option<String>,
    pub build_performance: Option<String>,
    pub network_stores: Vec<String>,
}

impl StoreContext {
    pub fn sections(&self) -> Vec<PromptSection> {
        SectionsBuilder::new()
            .facts(
                "Store",
                [
                    ("Path", self.store_path.clone()),
                    ("Size", self.store_size.clone()),
                    ("Free Space", self.free_space.clone()),
                    ("Version", self.store_version.clone()),
                ],
            )
            .facts(
                "Operation",
                [
                    ("Type", self.operation_type.clone()),
                    ("Query", self.query_type.clone()),
                ],
            )
            .bullets("Target Paths", &self.target_paths)
            .inline("Generations", &self.generations)
            .bullets("GC Roots", &self.roots)
            .facts(
                "Garbage Collection",
                [
                    ("Old Generations", count(self.old_generations)),
                    ("Dry Run", flag(self.dry_run)),
                ],
            )
            .bullets("Corrupted Paths", &self.corrupted_paths)
            .bullets("Orphaned Paths", &self.orphaned_paths)
            .bullets("Known Issues", &self.issues)
            .facts(
                "Performance",
                [
                    ("Cache Hit Rate", self.cache_hit_rate.clone()),
                    ("Build Performance", self.build_performance.clone()),
                ],
            )
            .inline("Network Stores", &self.network_stores)
            .build()
    }
}
