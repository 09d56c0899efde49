//! Community involvement context.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::section::{PromptSection, SectionsBuilder};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityContext {
    pub user_level: Option<String>,
    /// Experience with open source in general.
    pub experience_level: Option<String>,
    /// code, documentation, testing, ...
    pub contribution_type: Option<String>,
    pub interest_areas: Vec<String>,
    pub current_projects: Vec<String>,
    pub community_goals: Vec<String>,
    pub preferred_channels: Vec<String>,
    pub metadata: BTreeMap<String, String>,
}

impl CommunityContext {
    pub fn sections(&self) -> Vec<PromptSection> {
        SectionsBuilder::new()
            .facts(
                "Community Profile",
                [
                    ("User Level", self.user_level.clone()),
                    ("Open Source Experience", self.experience_level.clone()),
                    ("Contribution Type", self.contribution_type.clone()),
                ],
            )
            .inline("Interest Areas", &self.interest_areas)
            .bullets("Current Projects", &self.current_projects)
            .bullets("Community Goals", &self.community_goals)
            .inline("Preferred Channels", &self.preferred_channels)
            .map("Metadata", &self.metadata)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::section::render;

    #[test]
    fn test_profile() {
        let ctx = CommunityContext {
            user_level: Some("intermediate".to_string()),
            contribution_type: Some("packaging".to_string()),
            preferred_channels: vec!["Discourse".to_string(), "Matrix".to_string()],
            ..Default::default()
        };

        assert_eq!(
            render(&ctx.sections()),
            "## Community Profile\n- User Level: intermediate\n- Contribution Type: packaging\n\n\
             ## Preferred Channels\nDiscourse, Matrix"
        );
    }
}
