mod integrations;
mod leads;
mod resources;
mod visualizations;
mod whitepaper;

use std::{sync::Arc, time::Duration};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, options, post, MethodRouter},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use drhub_core::AppConfig;
use drhub_store::{
    CareerPathDocument, CommunityGraphDocument, JsonStore, MergeDocument, MetricsDocument,
    SkillsMatrixDocument, StoreError,
};
use drhub_upstream::{LinkChecker, RefreshRunner, UpstreamClient, UpstreamError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::middleware::{
    enforce_rate_limit, request_id, require_bearer_auth, AuthState, RateLimitState, RequestId,
    REQUEST_ID_HEADER,
};

#[derive(Clone)]
pub struct AppState {
    pub store: JsonStore,
    pub config: Arc<AppConfig>,
    pub upstream: Option<Arc<UpstreamClient>>,
    pub link_checker: LinkChecker,
    pub refresh: RefreshRunner,
}

impl AppState {
    /// Wires the store and outbound clients from configuration.
    pub fn from_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let upstream = config
            .upstream
            .as_ref()
            .map(UpstreamClient::new)
            .transpose()?
            .map(Arc::new);
        if upstream.is_none() {
            tracing::info!("no upstream configured; /api/jobs serves local job results");
        }

        let link_checker = LinkChecker::new(
            Duration::from_secs(config.link_check_timeout_secs),
            Duration::from_millis(config.link_check_delay_ms),
        )?;

        Ok(Self {
            store: JsonStore::filesystem(&config.data_dir),
            refresh: RefreshRunner::new(config.refresh_command.clone()),
            upstream,
            link_checker,
            config,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    data_dir: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
                detail: None,
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    /// Attaches the underlying error text.
    #[must_use]
    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.error.detail = Some(detail.to_string());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error.code.as_str() {
            "validation_error" | "bad_request" => StatusCode::BAD_REQUEST,
            "not_found" => StatusCode::NOT_FOUND,
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            "not_implemented" => StatusCode::NOT_IMPLEMENTED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Unreadable or mistyped request bodies.
pub(super) fn map_json_rejection(request_id: String, rejection: &JsonRejection) -> ApiError {
    ApiError::new(request_id, "validation_error", "Invalid JSON request body")
        .with_detail(rejection.body_text())
}

pub(super) fn map_store_error(request_id: String, error: &StoreError) -> ApiError {
    tracing::error!(error = %error, "document store operation failed");
    ApiError::new(request_id, "internal_error", "failed to persist data").with_detail(error)
}

/// Relays a non-2xx upstream response as-is; anything else becomes a 500
/// envelope carrying `message`.
pub(super) fn map_upstream_error(
    request_id: String,
    error: UpstreamError,
    message: &str,
) -> Response {
    match error {
        UpstreamError::Status { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            let content_type = if serde_json::from_str::<serde::de::IgnoredAny>(&body).is_ok() {
                "application/json"
            } else {
                "text/plain; charset=utf-8"
            };
            (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
        }
        other => {
            tracing::error!(error = %other, "upstream request failed");
            ApiError::new(request_id, "internal_error", message)
                .with_detail(other)
                .into_response()
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

const STORED_DOCUMENT_PATHS: [&str; 4] = [
    "/api/visualizations/metrics",
    "/api/visualizations/career-path",
    "/api/visualizations/community-graph",
    "/api/visualizations/skills-matrix",
];

/// GET for a stored visualization document, never cached.
fn stored_document_routes<D>() -> MethodRouter<AppState>
where
    D: MergeDocument + 'static,
{
    get(visualizations::read_document::<D>).layer(SetResponseHeaderLayer::overriding(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, must-revalidate"),
    ))
}

/// OPTIONS for the stored documents. Merged outside the CORS layer, which
/// answers every OPTIONS request itself.
fn document_options_router() -> Router<AppState> {
    STORED_DOCUMENT_PATHS
        .into_iter()
        .fold(Router::new(), |router, path| {
            router.route(path, options(visualizations::document_options))
        })
}

fn public_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/resources", get(resources::list_resources))
        .route("/api/visualizations", get(visualizations::grouped_resources))
        .route(
            "/api/visualizations/metrics",
            stored_document_routes::<MetricsDocument>(),
        )
        .route(
            "/api/visualizations/career-path",
            stored_document_routes::<CareerPathDocument>(),
        )
        .route(
            "/api/visualizations/community-graph",
            stored_document_routes::<CommunityGraphDocument>(),
        )
        .route(
            "/api/visualizations/skills-matrix",
            stored_document_routes::<SkillsMatrixDocument>(),
        )
        .route(
            "/api/visualizations/community-insights",
            get(visualizations::community_insights),
        )
        .route(
            "/api/visualizations/developer-journey",
            get(visualizations::developer_journey),
        )
        .route(
            "/api/visualizations/devrel-ecosystem",
            get(visualizations::devrel_ecosystem),
        )
        .route(
            "/api/visualizations/metrics-flow",
            get(visualizations::metrics_flow),
        )
        .route(
            "/api/visualizations/content-impact",
            get(visualizations::content_impact),
        )
        .route(
            "/api/visualizations/developer-progress",
            get(visualizations::developer_progress),
        )
        .route("/api/jobs", get(integrations::list_jobs))
        .route("/api/store-email", post(leads::store_email))
}

fn protected_router(auth: AuthState, rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/resources", post(resources::append_resources))
        .route(
            "/api/visualizations/metrics",
            post(visualizations::merge_document::<MetricsDocument>),
        )
        .route(
            "/api/visualizations/career-path",
            post(visualizations::merge_document::<CareerPathDocument>),
        )
        .route(
            "/api/visualizations/community-graph",
            post(visualizations::merge_document::<CommunityGraphDocument>),
        )
        .route(
            "/api/visualizations/skills-matrix",
            post(visualizations::merge_document::<SkillsMatrixDocument>),
        )
        .route("/api/update-resources", post(resources::update_resources))
        .route(
            "/api/resources/update",
            post(integrations::refresh_from_upstream),
        )
        .route("/api/verify-links", post(integrations::verify_links))
        .route("/api/analyze-data", post(resources::analyze_data))
        .route("/api/generate-pdf", post(whitepaper::generate_pdf))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    rate_limit,
                    enforce_rate_limit,
                ))
                .layer(axum::middleware::from_fn_with_state(
                    auth,
                    require_bearer_auth,
                )),
        )
}

pub fn build_app(state: AppState, auth: AuthState, rate_limit: RateLimitState) -> Router {
    Router::new()
        .merge(public_router())
        .merge(protected_router(auth, rate_limit))
        .layer(build_cors())
        .merge(document_options_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    match tokio::fs::metadata(&state.config.data_dir).await {
        Ok(metadata) if metadata.is_dir() => (
            StatusCode::OK,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    data_dir: "ok",
                },
                meta,
            }),
        ),
        result => {
            let reason = result.map_or_else(|e| e.to_string(), |_| "not a directory".to_owned());
            tracing::warn!(
                data_dir = %state.config.data_dir.display(),
                reason = %reason,
                "health check: data directory unavailable"
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    data: HealthData {
                        status: "degraded",
                        data_dir: "unavailable",
                    },
                    meta,
                }),
            )
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
