//! Role × skill proficiency matrix with random jitter.

use rand::Rng;
use serde::Serialize;

pub const MIN_VALUE: i32 = 0;
pub const MAX_VALUE: i32 = 100;
const JITTER: i32 = 10;

const ROLES: &[(&str, i32)] = &[
    ("Junior Developer Advocate", 40),
    ("Senior Developer Advocate", 70),
    ("Technical Community Manager", 60),
    ("DevRel Program Manager", 75),
    ("Head of Developer Relations", 85),
];

const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Technical",
        &[
            "Programming",
            "API Design",
            "Documentation",
            "Technical Writing",
            "System Architecture",
        ],
    ),
    (
        "Communication",
        &[
            "Public Speaking",
            "Technical Presentations",
            "Blog Writing",
            "Social Media",
            "Workshop Facilitation",
        ],
    ),
    (
        "Community",
        &[
            "Community Building",
            "Event Management",
            "Developer Support",
            "Program Development",
            "Metrics & Analytics",
        ],
    ),
    (
        "Leadership",
        &[
            "Strategy Development",
            "Team Management",
            "Budget Planning",
            "Stakeholder Management",
            "Cross-team Collaboration",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCell {
    pub role: &'static str,
    pub category: &'static str,
    pub skill: &'static str,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsMatrix {
    pub data: Vec<SkillCell>,
    pub roles: Vec<&'static str>,
    pub categories: Vec<&'static str>,
    pub skills: Vec<&'static str>,
    pub max_value: i32,
    pub min_value: i32,
}

/// One cell per role, category and skill. Each value is the role's base level
/// plus a uniform integer in `[-10, 10]`, clamped to `[0, 100]`.
pub fn skills_matrix<R: Rng + ?Sized>(rng: &mut R) -> SkillsMatrix {
    let mut data = Vec::with_capacity(ROLES.len() * 20);
    for &(role, base) in ROLES {
        for &(category, skills) in SKILL_CATEGORIES {
            for skill in skills {
                let value = (base + rng.random_range(-JITTER..=JITTER)).clamp(MIN_VALUE, MAX_VALUE);
                data.push(SkillCell {
                    role,
                    category,
                    skill,
                    value,
                });
            }
        }
    }

    SkillsMatrix {
        data,
        roles: ROLES.iter().map(|(role, _)| *role).collect(),
        categories: SKILL_CATEGORIES.iter().map(|(category, _)| *category).collect(),
        skills: SKILL_CATEGORIES
            .iter()
            .flat_map(|(_, skills)| skills.iter().copied())
            .collect(),
        max_value: MAX_VALUE,
        min_value: MIN_VALUE,
    }
}
