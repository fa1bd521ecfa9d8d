use axum::{extract::State, Extension, Json};
use drhub_resources::write_whitepaper;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(in crate::api) struct GenerateResponse {
    pub success: bool,
    pub format: &'static str,
}

/// POST /api/generate-pdf: render the whitepaper into `generated_dir`.
pub(in crate::api) async fn generate_pdf(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<GenerateResponse>, ApiError> {
    write_whitepaper(&state.config.whitepaper_path, &state.config.generated_dir)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "whitepaper rendering failed");
            ApiError::new(req_id.0, "internal_error", "Failed to generate document").with_detail(e)
        })?;

    Ok(Json(GenerateResponse {
        success: true,
        format: "html",
    }))
}
