//! Random community engagement scatter points with a summary block.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

const CATEGORIES: &[&str] = &["Documentation", "Tutorials", "Blog Posts", "Videos", "Workshops"];
const ENGAGEMENT_TYPES: &[&str] = &["Views", "Comments", "Shares", "Likes"];
const POINT_COUNT: usize = 20;
const LOOKBACK_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub category: &'static str,
    pub engagement_type: &'static str,
    pub effectiveness_score: f64,
    pub reach: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsSummary {
    pub total_resources: usize,
    pub avg_effectiveness: f64,
    pub total_reach: u64,
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityInsights {
    pub scatter_data: Vec<ScatterPoint>,
    pub categories: &'static [&'static str],
    pub engagement_types: &'static [&'static str],
    pub summary: InsightsSummary,
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items[rng.random_range(0..items.len())]
}

pub fn community_insights<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> CommunityInsights {
    let scatter_data: Vec<ScatterPoint> = (0..POINT_COUNT)
        .map(|_| ScatterPoint {
            category: pick(rng, CATEGORIES),
            engagement_type: pick(rng, ENGAGEMENT_TYPES),
            effectiveness_score: rng.random_range(25.0..70.0),
            reach: rng.random_range(100..1000),
            timestamp: now - Duration::days(rng.random_range(0..LOOKBACK_DAYS)),
        })
        .collect();

    let summary = summarize(&scatter_data);
    CommunityInsights {
        scatter_data,
        categories: CATEGORIES,
        engagement_types: ENGAGEMENT_TYPES,
        summary,
    }
}

fn summarize(points: &[ScatterPoint]) -> InsightsSummary {
    let total_effectiveness: f64 = points.iter().map(|p| p.effectiveness_score).sum();
    #[allow(clippy::cast_precision_loss)]
    let avg_effectiveness = if points.is_empty() {
        0.0
    } else {
        total_effectiveness / points.len() as f64
    };

    InsightsSummary {
        total_resources: points.len(),
        avg_effectiveness,
        total_reach: points.iter().map(|p| u64::from(p.reach)).sum(),
        time_range: TimeRange {
            start: points.iter().map(|p| p.timestamp).min(),
            end: points.iter().map(|p| p.timestamp).max(),
        },
    }
}
