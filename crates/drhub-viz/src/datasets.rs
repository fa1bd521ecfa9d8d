//! Fixed datasets served as-is: journey sankey, ecosystem tree, progress
//! flow and content impact table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightedLink {
    pub source: usize,
    pub target: usize,
    pub value: u32,
}

fn weighted(links: &[(usize, usize, u32)]) -> Vec<WeightedLink> {
    links
        .iter()
        .map(|&(source, target, value)| WeightedLink {
            source,
            target,
            value,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Developer journey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyNode {
    pub name: &'static str,
    pub category: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeveloperJourney {
    pub nodes: Vec<JourneyNode>,
    pub links: Vec<WeightedLink>,
}

const JOURNEY_STAGES: &[(&str, [&str; 4])] = &[
    (
        "Discovery",
        [
            "Documentation Overview",
            "API Reference",
            "Getting Started Guide",
            "Quick Start Tutorials",
        ],
    ),
    (
        "Learning",
        [
            "Interactive Tutorials",
            "Code Examples",
            "Video Guides",
            "Developer Workshops",
        ],
    ),
    (
        "Building",
        [
            "Sample Projects",
            "Integration Guides",
            "API Implementation",
            "Testing Tools",
        ],
    ),
    (
        "Contributing",
        [
            "Issue Reporting",
            "Pull Requests",
            "Code Reviews",
            "Documentation Updates",
        ],
    ),
    (
        "Leading",
        [
            "Community Leadership",
            "Technical Talks",
            "Mentoring",
            "Open Source Projects",
        ],
    ),
];

const JOURNEY_LINKS: &[(usize, usize, u32)] = &[
    // stage to stage
    (0, 4, 50),
    (1, 5, 45),
    (2, 6, 40),
    (3, 7, 35),
    (4, 8, 40),
    (5, 9, 35),
    (6, 10, 30),
    (7, 11, 25),
    (8, 12, 30),
    (9, 13, 25),
    (10, 14, 20),
    (11, 15, 15),
    (12, 16, 20),
    (13, 17, 15),
    (14, 18, 10),
    (15, 19, 5),
    // shortcuts
    (1, 10, 20),
    (5, 13, 15),
    (7, 17, 10),
    (14, 18, 5),
    // within a stage
    (0, 1, 40),
    (0, 2, 35),
    (0, 3, 30),
    (4, 5, 25),
    (5, 6, 20),
    (6, 7, 15),
    (8, 9, 20),
    (9, 10, 15),
    (10, 11, 10),
    (12, 13, 15),
    (13, 14, 10),
    (14, 15, 5),
    (16, 17, 10),
    (17, 18, 8),
    (18, 19, 5),
];

/// Twenty touchpoints across five stages. Node values fall by 5 from 100.
#[must_use]
pub fn developer_journey() -> DeveloperJourney {
    let nodes = JOURNEY_STAGES
        .iter()
        .flat_map(|(category, names)| names.iter().map(move |name| (*category, *name)))
        .zip((0..20u32).map(|i| 100 - i * 5))
        .map(|((category, name), value)| JourneyNode {
            name,
            category,
            value,
        })
        .collect();

    DeveloperJourney {
        nodes,
        links: weighted(JOURNEY_LINKS),
    }
}

// ---------------------------------------------------------------------------
// DevRel ecosystem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EcosystemNodeType {
    Category,
    Activity,
    Component,
}

impl EcosystemNodeType {
    const fn size(self) -> u32 {
        match self {
            Self::Category => 40,
            Self::Activity => 30,
            Self::Component => 20,
        }
    }

    const fn order(self) -> u32 {
        match self {
            Self::Category => 0,
            Self::Activity => 1,
            Self::Component => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemNode {
    pub id: usize,
    pub name: &'static str,
    pub full_name: &'static str,
    #[serde(rename = "type")]
    pub node_type: EcosystemNodeType,
    pub size: u32,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevrelEcosystem {
    pub nodes: Vec<EcosystemNode>,
    pub links: Vec<WeightedLink>,
}

const ECOSYSTEM_NODES: &[(&str, &str, EcosystemNodeType)] = &[
    ("Documentation", "Documentation & Content", EcosystemNodeType::Category),
    ("Community", "Community Building", EcosystemNodeType::Category),
    ("Education", "Developer Education", EcosystemNodeType::Category),
    ("API Docs", "API Documentation", EcosystemNodeType::Activity),
    ("Tutorials", "Developer Tutorials", EcosystemNodeType::Activity),
    ("Forums", "Developer Forums", EcosystemNodeType::Activity),
    ("Events", "Developer Events", EcosystemNodeType::Activity),
    ("Training", "Developer Training", EcosystemNodeType::Activity),
    ("Workshops", "Technical Workshops", EcosystemNodeType::Activity),
    ("Reference", "API Reference", EcosystemNodeType::Component),
    ("Guides", "Implementation Guides", EcosystemNodeType::Component),
    ("Support", "Community Support", EcosystemNodeType::Component),
    ("Networking", "Developer Networking", EcosystemNodeType::Component),
    ("Resources", "Learning Resources", EcosystemNodeType::Component),
    ("Projects", "Hands-on Projects", EcosystemNodeType::Component),
];

const ECOSYSTEM_LINKS: &[(usize, usize, u32)] = &[
    (0, 3, 30),
    (0, 4, 25),
    (3, 9, 20),
    (3, 10, 15),
    (4, 10, 15),
    (1, 5, 30),
    (1, 6, 25),
    (5, 11, 20),
    (5, 12, 15),
    (6, 12, 20),
    (2, 7, 30),
    (2, 8, 25),
    (7, 13, 20),
    (7, 14, 15),
    (8, 14, 20),
    (4, 7, 10),
    (6, 8, 10),
    (5, 13, 10),
];

#[must_use]
pub fn devrel_ecosystem() -> DevrelEcosystem {
    let nodes = ECOSYSTEM_NODES
        .iter()
        .enumerate()
        .map(|(id, &(name, full_name, node_type))| EcosystemNode {
            id,
            name,
            full_name,
            node_type,
            size: node_type.size(),
            order: node_type.order(),
        })
        .collect();

    DevrelEcosystem {
        nodes,
        links: weighted(ECOSYSTEM_LINKS),
    }
}

// ---------------------------------------------------------------------------
// Developer progress
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressNode {
    pub name: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressLink {
    pub source: usize,
    pub target: usize,
    pub value: u32,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeveloperProgress {
    pub nodes: Vec<ProgressNode>,
    pub links: Vec<ProgressLink>,
}

const PROGRESS_NODES: &[(&str, &str)] = &[
    ("New Developer", "discovery"),
    ("Resource Explorer", "discovery"),
    ("Documentation Reader", "learning"),
    ("API Practitioner", "learning"),
    ("Community Member", "engagement"),
    ("Forum Participant", "engagement"),
    ("Content Creator", "contribution"),
    ("Code Contributor", "contribution"),
    ("Community Leader", "leadership"),
    ("DevRel Advocate", "leadership"),
];

const PROGRESS_LINKS: &[(usize, usize, u32, &str)] = &[
    (0, 1, 100, "discovery"),
    (1, 2, 85, "learning"),
    (1, 3, 65, "learning"),
    (2, 4, 60, "engagement"),
    (3, 5, 45, "engagement"),
    (4, 6, 40, "contribution"),
    (5, 7, 35, "contribution"),
    (6, 8, 25, "leadership"),
    (7, 8, 20, "leadership"),
    (8, 9, 30, "leadership"),
];

#[must_use]
pub fn developer_progress() -> DeveloperProgress {
    DeveloperProgress {
        nodes: PROGRESS_NODES
            .iter()
            .map(|&(name, category)| ProgressNode { name, category })
            .collect(),
        links: PROGRESS_LINKS
            .iter()
            .map(|&(source, target, value, category)| ProgressLink {
                source,
                target,
                value,
                category,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Content impact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentImpact {
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub views: u32,
    pub reactions: u32,
    pub shares: u32,
    pub conversions: u32,
    pub engagement: u32,
}

const CONTENT_IMPACT: &[(&str, [u32; 5])] = &[
    ("Blog Posts", [24_000, 3_200, 1_800, 920, 7_900]),
    ("Tutorials", [18_500, 4_100, 2_300, 1_520, 6_200]),
    ("Documentation", [35_000, 2_100, 1_200, 2_800, 5_600]),
    ("Videos", [12_000, 3_600, 2_900, 870, 4_700]),
    ("Social Media", [38_000, 7_200, 5_600, 1_300, 9_400]),
    ("Webinars", [8_500, 2_400, 1_700, 940, 3_800]),
    ("Podcasts", [9_600, 1_900, 2_200, 680, 3_100]),
];

#[must_use]
pub fn content_impact() -> Vec<ContentImpact> {
    CONTENT_IMPACT
        .iter()
        .map(
            |&(content_type, [views, reactions, shares, conversions, engagement])| ContentImpact {
                content_type,
                views,
                reactions,
                shares,
                conversions,
                engagement,
            },
        )
        .collect()
}
