//! Synthetic datasets for the visualization pages.
//!
//! Everything here is derived from hardcoded tables. Generators with random
//! jitter take an injected [`rand::Rng`] so callers (and tests) control the
//! source of randomness.

pub mod datasets;
pub mod graphs;
pub mod insights;
pub mod skills;

use chrono::{DateTime, Utc};
use rand::Rng;

pub use datasets::{
    content_impact, developer_journey, developer_progress, devrel_ecosystem, ContentImpact,
    DeveloperJourney, DeveloperProgress, DevrelEcosystem,
};
pub use graphs::{career_path, community_graph, metrics_flow, CareerNode, Graph, HubNode, Link};
pub use insights::{community_insights, CommunityInsights};
pub use skills::{skills_matrix, SkillsMatrix};

/// Every generated dataset, keyed by the slug used in URLs and file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    CareerPath,
    CommunityGraph,
    MetricsFlow,
    SkillsMatrix,
    CommunityInsights,
    DeveloperJourney,
    DevrelEcosystem,
    DeveloperProgress,
    ContentImpact,
}

impl Dataset {
    pub const ALL: [Self; 9] = [
        Self::CareerPath,
        Self::CommunityGraph,
        Self::MetricsFlow,
        Self::SkillsMatrix,
        Self::CommunityInsights,
        Self::DeveloperJourney,
        Self::DevrelEcosystem,
        Self::DeveloperProgress,
        Self::ContentImpact,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CareerPath => "career-path",
            Self::CommunityGraph => "community-graph",
            Self::MetricsFlow => "metrics-flow",
            Self::SkillsMatrix => "skills-matrix",
            Self::CommunityInsights => "community-insights",
            Self::DeveloperJourney => "developer-journey",
            Self::DevrelEcosystem => "devrel-ecosystem",
            Self::DeveloperProgress => "developer-progress",
            Self::ContentImpact => "content-impact",
        }
    }

    /// Generates the dataset as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization fails.
    pub fn generate<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::CareerPath => serde_json::to_value(career_path()),
            Self::CommunityGraph => serde_json::to_value(community_graph()),
            Self::MetricsFlow => serde_json::to_value(metrics_flow()),
            Self::SkillsMatrix => serde_json::to_value(skills_matrix(rng)),
            Self::CommunityInsights => serde_json::to_value(community_insights(rng, now)),
            Self::DeveloperJourney => serde_json::to_value(developer_journey()),
            Self::DevrelEcosystem => serde_json::to_value(devrel_ecosystem()),
            Self::DeveloperProgress => serde_json::to_value(developer_progress()),
            Self::ContentImpact => serde_json::to_value(content_impact()),
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
