//! Aggregated resource listing, scraper output ingestion, local refresh and
//! the data quality report.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use chrono::Utc;
use drhub_core::Resource;
use drhub_resources::{load_resources, quality_report, QualityReport};
use drhub_store::{files, ResourcesDocument};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_json_rejection, map_store_error, ApiError, AppState};

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(in crate::api) struct ResourceListing {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(in crate::api) struct ResourceCounts {
    pub blog_posts: usize,
    pub github_programs: usize,
    pub job_listings: usize,
}

impl ResourceCounts {
    fn of(doc: &ResourcesDocument) -> Self {
        Self {
            blog_posts: doc.blog_posts.len(),
            github_programs: doc.github_programs.len(),
            job_listings: doc.job_listings.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct CountsResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub counts: ResourceCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct AnalysisResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: AnalysisData,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct AnalysisData {
    pub last_updated: Option<String>,
    pub quality_report: QualityReport,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/resources: de-duplicated resources from every scraper file.
pub(in crate::api) async fn list_resources(State(state): State<AppState>) -> Json<ResourceListing> {
    Json(ResourceListing {
        resources: load_resources(&state.store).await,
    })
}

/// POST /api/resources: append scraped collections onto
/// `devrel_resources.json`.
pub(in crate::api) async fn append_resources(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<ResourcesDocument>, JsonRejection>,
) -> Result<Json<CountsResponse>, ApiError> {
    let Json(body) = body.map_err(|e| map_json_rejection(req_id.0.clone(), &e))?;
    let incoming = ResourceCounts::of(&body);
    let merged = state
        .store
        .merge(body, Utc::now())
        .await
        .map_err(|e| map_store_error(req_id.0, &e))?;

    tracing::info!(
        blog_posts = incoming.blog_posts,
        github_programs = incoming.github_programs,
        job_listings = incoming.job_listings,
        "appended scraped resources"
    );

    Ok(Json(CountsResponse {
        status: "success",
        message: "Resources appended",
        counts: ResourceCounts::of(&merged),
        last_updated: merged.last_updated,
    }))
}

/// POST /api/update-resources: run the local scraper, then report what
/// `devrel_resources.json` holds.
pub(in crate::api) async fn update_resources(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<CountsResponse>, ApiError> {
    if let Err(e) = state.refresh.run().await {
        tracing::error!(error = %e, "resource refresh failed");
        return Err(
            ApiError::new(req_id.0, "internal_error", "Resource refresh failed").with_detail(e),
        );
    }

    let doc: ResourcesDocument = state.store.read_or_default(files::RESOURCES).await;
    Ok(Json(CountsResponse {
        status: "success",
        message: "Resources refreshed",
        counts: ResourceCounts::of(&doc),
        last_updated: doc.last_updated,
    }))
}

/// POST /api/analyze-data: completeness counts over the current scraper
/// output.
pub(in crate::api) async fn analyze_data(State(state): State<AppState>) -> Json<AnalysisResponse> {
    let doc: ResourcesDocument = state.store.read_or_default(files::RESOURCES).await;
    let report = quality_report(&doc);

    Json(AnalysisResponse {
        status: "success",
        message: "Data analysis completed successfully",
        data: AnalysisData {
            last_updated: doc.last_updated,
            quality_report: report,
        },
    })
}
