//! Routes backed by outbound integrations: the upstream jobs API and README
//! link verification.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Extension, Json,
};
use drhub_store::files;
use drhub_upstream::LinkReport;
use serde::Serialize;
use serde_json::Value;

use crate::middleware::RequestId;

use super::{map_upstream_error, ApiError, AppState};

#[derive(Debug, Serialize)]
pub(in crate::api) struct VerifyLinksResponse {
    pub status: &'static str,
    pub message: String,
    pub data: LinkReport,
}

/// GET /api/jobs: upstream listing when configured, otherwise the local
/// `job_results.json`.
pub(in crate::api) async fn list_jobs(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Response {
    let Some(upstream) = state.upstream.as_deref() else {
        let jobs: Value = state.store.read_or_default(files::JOB_RESULTS).await;
        let jobs = if jobs.is_null() {
            Value::Array(Vec::new())
        } else {
            jobs
        };
        return Json(jobs).into_response();
    };

    match upstream.fetch_jobs().await {
        Ok(jobs) => Json(jobs).into_response(),
        Err(e) => map_upstream_error(req_id.0, e, "Failed to fetch jobs"),
    }
}

/// POST /api/resources/update: ask the upstream service to refresh and relay
/// its answer.
pub(in crate::api) async fn refresh_from_upstream(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Response {
    let Some(upstream) = state.upstream.as_deref() else {
        return ApiError::new(
            req_id.0,
            "not_implemented",
            "no upstream service configured",
        )
        .into_response();
    };

    match upstream.trigger_update().await {
        Ok(body) => {
            tracing::info!("upstream resource update triggered");
            Json(body).into_response()
        }
        Err(e) => map_upstream_error(req_id.0, e, "Failed to update resources"),
    }
}

/// POST /api/verify-links: check every link in the first readable README.
pub(in crate::api) async fn verify_links(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<VerifyLinksResponse>, ApiError> {
    let report = state
        .link_checker
        .verify_readme(&state.config.readme_paths)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "link verification failed");
            ApiError::new(req_id.0, "internal_error", "Link verification failed").with_detail(e)
        })?;

    tracing::info!(
        total = report.total_links,
        broken = report.broken_links,
        "link verification finished"
    );

    Ok(Json(VerifyLinksResponse {
        status: "success",
        message: report.summary(),
        data: report,
    }))
}
