//! Visualization routes: stored documents with typed merges, plus the
//! synthetic datasets.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Extension, Json,
};
use chrono::Utc;
use drhub_resources::{group_by_kind, load_resources, ResourceGroups};
use drhub_store::MergeDocument;
use drhub_viz::{
    CommunityInsights, ContentImpact, DeveloperJourney, DeveloperProgress, DevrelEcosystem, Graph,
    HubNode,
};

use crate::middleware::RequestId;

use super::{map_json_rejection, map_store_error, ApiError, AppState};

/// Browser-facing CORS headers on stored-document responses.
const DOCUMENT_CORS_HEADERS: [(&str, &str); 4] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type, Authorization"),
    ("access-control-allow-credentials", "true"),
];

// ---------------------------------------------------------------------------
// Stored documents
// ---------------------------------------------------------------------------

/// GET: the stored document, or an empty one if nothing is stored yet.
pub(in crate::api) async fn read_document<D>(State(state): State<AppState>) -> impl IntoResponse
where
    D: MergeDocument + 'static,
{
    let doc: D = state.store.read_or_default(D::FILE_NAME).await;
    (DOCUMENT_CORS_HEADERS, Json(doc))
}

/// POST: fold the body into the stored document and return the result.
pub(in crate::api) async fn merge_document<D>(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<D>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    D: MergeDocument + 'static,
{
    let Json(body) = body.map_err(|e| map_json_rejection(req_id.0.clone(), &e))?;
    let merged = state
        .store
        .merge(body, Utc::now())
        .await
        .map_err(|e| map_store_error(req_id.0, &e))?;

    tracing::info!(document = D::FILE_NAME, "visualization document updated");
    Ok((DOCUMENT_CORS_HEADERS, Json(merged)))
}

/// OPTIONS: `{}` advertising the allowed methods.
pub(in crate::api) async fn document_options() -> impl IntoResponse {
    (DOCUMENT_CORS_HEADERS, Json(serde_json::json!({})))
}

// ---------------------------------------------------------------------------
// Derived and synthetic datasets
// ---------------------------------------------------------------------------

/// GET /api/visualizations: aggregated resources split by kind.
pub(in crate::api) async fn grouped_resources(
    State(state): State<AppState>,
) -> Json<ResourceGroups> {
    Json(group_by_kind(load_resources(&state.store).await))
}

pub(in crate::api) async fn community_insights() -> Json<CommunityInsights> {
    Json(drhub_viz::community_insights(&mut rand::rng(), Utc::now()))
}

pub(in crate::api) async fn developer_journey() -> Json<DeveloperJourney> {
    Json(drhub_viz::developer_journey())
}

pub(in crate::api) async fn devrel_ecosystem() -> Json<DevrelEcosystem> {
    Json(drhub_viz::devrel_ecosystem())
}

pub(in crate::api) async fn metrics_flow() -> Json<Graph<HubNode>> {
    Json(drhub_viz::metrics_flow())
}

pub(in crate::api) async fn content_impact() -> Json<Vec<ContentImpact>> {
    Json(drhub_viz::content_impact())
}

pub(in crate::api) async fn developer_progress() -> Json<DeveloperProgress> {
    Json(drhub_viz::developer_progress())
}
