//! Node/link graphs built from fixed lookup tables.

use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph<N> {
    pub nodes: Vec<N>,
    pub links: Vec<Link>,
}

// ---------------------------------------------------------------------------
// Career path
// ---------------------------------------------------------------------------

struct CareerLevel {
    name: &'static str,
    roles: &'static [&'static str],
    skills: &'static [&'static str],
    next: &'static [&'static str],
}

const CAREER_LEVELS: &[CareerLevel] = &[
    CareerLevel {
        name: "Entry Level",
        roles: &["Technical Writer", "Developer Support", "Community Moderator"],
        skills: &["Technical Writing", "Basic Programming", "Communication"],
        next: &["Mid Level"],
    },
    CareerLevel {
        name: "Mid Level",
        roles: &[
            "Developer Advocate",
            "Technical Community Manager",
            "Content Developer",
        ],
        skills: &["Public Speaking", "Content Creation", "Technical Demos"],
        next: &["Senior Level"],
    },
    CareerLevel {
        name: "Senior Level",
        roles: &[
            "Senior Developer Advocate",
            "DevRel Program Manager",
            "Developer Marketing Manager",
        ],
        skills: &["Strategy Development", "Team Leadership", "Program Management"],
        next: &["Leadership"],
    },
    CareerLevel {
        name: "Leadership",
        roles: &[
            "Head of Developer Relations",
            "Director of Developer Experience",
            "VP of Developer Ecosystem",
        ],
        skills: &["Executive Communication", "Strategy", "Business Development"],
        next: &[],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerNodeCategory {
    Level,
    Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerNode {
    pub id: usize,
    pub label: &'static str,
    pub category: CareerNodeCategory,
    pub level: usize,
    pub skills: &'static [&'static str],
}

/// Level and role nodes. Each level links to its roles (value 1) and to the
/// level(s) that follow it (value 2).
#[must_use]
pub fn career_path() -> Graph<CareerNode> {
    let mut nodes = Vec::new();
    let mut links = Vec::new();
    let mut level_ids: HashMap<&str, usize> = HashMap::new();

    for (level_index, level) in CAREER_LEVELS.iter().enumerate() {
        let level_id = nodes.len();
        level_ids.insert(level.name, level_id);
        nodes.push(CareerNode {
            id: level_id,
            label: level.name,
            category: CareerNodeCategory::Level,
            level: level_index,
            skills: level.skills,
        });

        for role in level.roles {
            let role_id = nodes.len();
            nodes.push(CareerNode {
                id: role_id,
                label: role,
                category: CareerNodeCategory::Role,
                level: level_index,
                skills: level.skills,
            });
            links.push(Link {
                source: level_id,
                target: role_id,
                value: 1.0,
            });
        }
    }

    // Progression links need every level id, so they are added after all nodes.
    for level in CAREER_LEVELS {
        let source = level_ids[level.name];
        for next in level.next {
            if let Some(&target) = level_ids.get(next) {
                links.push(Link {
                    source,
                    target,
                    value: 2.0,
                });
            }
        }
    }

    Graph { nodes, links }
}

// ---------------------------------------------------------------------------
// Hub graphs: community and metrics flow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HubNode {
    pub id: usize,
    pub name: &'static str,
    pub category: &'static str,
    pub size: u32,
}

const HUB_SIZE: u32 = 30;
const MEMBER_SIZE: u32 = 20;

/// Hub nodes linked to their members (value 1), plus weighted cross links
/// between named nodes. Cross links naming an unknown node are skipped.
fn hub_graph(
    hubs: &[(&'static str, &[&'static str])],
    hub_category: &'static str,
    member_category: &'static str,
    cross: &[(&str, &str, f64)],
) -> Graph<HubNode> {
    let mut nodes = Vec::new();
    let mut links = Vec::new();
    let mut ids: HashMap<&str, usize> = HashMap::new();

    for (hub, members) in hubs {
        let hub_id = nodes.len();
        ids.insert(hub, hub_id);
        nodes.push(HubNode {
            id: hub_id,
            name: hub,
            category: hub_category,
            size: HUB_SIZE,
        });

        for member in *members {
            let member_id = nodes.len();
            ids.insert(member, member_id);
            nodes.push(HubNode {
                id: member_id,
                name: member,
                category: member_category,
                size: MEMBER_SIZE,
            });
            links.push(Link {
                source: hub_id,
                target: member_id,
                value: 1.0,
            });
        }
    }

    for (source, target, weight) in cross {
        if let (Some(&source), Some(&target)) = (ids.get(source), ids.get(target)) {
            links.push(Link {
                source,
                target,
                value: *weight,
            });
        }
    }

    Graph { nodes, links }
}

const COMMUNITIES: &[(&str, &[&str])] = &[
    (
        "DevRel Team",
        &["Developer Advocates", "Community Managers", "Technical Writers"],
    ),
    (
        "Developer Community",
        &[
            "Open Source Contributors",
            "Enterprise Developers",
            "Startup Developers",
        ],
    ),
    (
        "Content",
        &["Documentation", "Tutorials", "Blog Posts", "Video Content"],
    ),
    (
        "Events",
        &["Conferences", "Meetups", "Workshops", "Hackathons"],
    ),
    (
        "Platforms",
        &["GitHub", "Stack Overflow", "Discord", "Twitter"],
    ),
];

const COMMUNITY_CROSS_LINKS: &[(&str, &str, f64)] = &[
    ("GitHub", "Documentation", 0.5),
    ("Stack Overflow", "Documentation", 0.5),
    ("Twitter", "Blog Posts", 0.5),
    ("Discord", "Tutorials", 0.5),
    ("Conferences", "Developer Advocates", 0.5),
    ("Meetups", "Community Managers", 0.5),
    ("Workshops", "Technical Writers", 0.5),
    ("Hackathons", "Open Source Contributors", 0.5),
];

#[must_use]
pub fn community_graph() -> Graph<HubNode> {
    hub_graph(COMMUNITIES, "hub", "member", COMMUNITY_CROSS_LINKS)
}

const METRIC_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Reach",
        &["Blog Views", "Social Media Reach", "Event Attendance"],
    ),
    (
        "Engagement",
        &["GitHub Stars", "Forum Posts", "Workshop Participation"],
    ),
    (
        "Impact",
        &[
            "Developer Satisfaction",
            "Product Adoption",
            "Community Growth",
        ],
    ),
    (
        "Growth",
        &["New Contributors", "Documentation Updates", "API Usage"],
    ),
];

const METRIC_CROSS_LINKS: &[(&str, &str, f64)] = &[
    ("Blog Views", "GitHub Stars", 0.5),
    ("Social Media Reach", "Forum Posts", 0.5),
    ("Event Attendance", "Workshop Participation", 0.7),
    ("GitHub Stars", "Developer Satisfaction", 0.6),
    ("Forum Posts", "Community Growth", 0.5),
    ("Workshop Participation", "Product Adoption", 0.7),
    ("Developer Satisfaction", "New Contributors", 0.6),
    ("Community Growth", "Documentation Updates", 0.5),
    ("Product Adoption", "API Usage", 0.7),
];

#[must_use]
pub fn metrics_flow() -> Graph<HubNode> {
    hub_graph(METRIC_CATEGORIES, "category", "metric", METRIC_CROSS_LINKS)
}
