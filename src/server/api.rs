//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::core::config::ServiceConfig;
use crate::core::errors::TranslationError;
use crate::core::models::{
    BatchRequest, BatchResult, HealthStatus, ModelInfo, ServiceInfo, TranslationRequest,
    TranslationResult,
};
use crate::core::provider::RemoteProvider;
use crate::core::service::TranslationService;
use crate::server::docs;

/// Application state
#[derive(Clone)]
pub struct AppState {
    service: Arc<TranslationService>,
}

impl AppState {
    pub fn new(service: Arc<TranslationService>) -> Self {
        Self { service }
    }
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl IntoResponse for TranslationError {
    fn into_response(self) -> Response {
        let (status, detail) = if self.is_client_error() {
            (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    message: self.to_string(),
                    code: Some("invalid_request".to_string()),
                    kind: Some("invalid_request_error".to_string()),
                },
            )
        } else {
            error!("Translation failed: {}", self);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    message: "Translation failed".to_string(),
                    code: Some("translation_error".to_string()),
                    kind: Some("api_error".to_string()),
                },
            )
        };

        (status, axum::Json(ErrorResponse { error: detail })).into_response()
    }
}

/// Service descriptor handler
#[utoipa::path(get, path = "/", responses((status = 200, body = ServiceInfo)))]
pub async fn root() -> axum::Json<ServiceInfo> {
    axum::Json(ServiceInfo {
        message: "Japanese to English Translator API".to_string(),
        docs: "/docs".to_string(),
    })
}

/// Health check handler
#[utoipa::path(get, path = "/health", responses((status = 200, body = HealthStatus)))]
pub async fn health_check() -> axum::Json<HealthStatus> {
    axum::Json(HealthStatus {
        status: "ok".to_string(),
    })
}

/// Loaded model handler
#[utoipa::path(get, path = "/model", responses((status = 200, body = ModelInfo)))]
pub async fn get_model(State(state): State<Arc<AppState>>) -> axum::Json<ModelInfo> {
    axum::Json(state.service.model_info())
}

/// Single text translation handler
#[utoipa::path(
    post,
    path = "/translate",
    request_body = TranslationRequest,
    responses(
        (status = 200, body = TranslationResult),
        (status = 400, description = "Text is empty", body = ErrorResponse),
        (status = 500, description = "Inference failed", body = ErrorResponse)
    )
)]
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslationRequest>,
) -> Result<axum::Json<TranslationResult>, TranslationError> {
    match state.service.translate(payload).await {
        Ok(result) => Ok(axum::Json(result)),
        Err(e) => {
            if e.is_client_error() {
                warn!("Rejected translation request: {}", e);
            }
            Err(e)
        }
    }
}

/// Batch translation handler
#[utoipa::path(
    post,
    path = "/translate/batch",
    request_body = BatchRequest,
    responses(
        (status = 200, body = BatchResult),
        (status = 400, description = "Batch is empty or too large", body = ErrorResponse),
        (status = 500, description = "Inference failed", body = ErrorResponse)
    )
)]
pub async fn translate_batch(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BatchRequest>,
) -> Result<axum::Json<BatchResult>, TranslationError> {
    match state.service.translate_batch(payload).await {
        Ok(result) => Ok(axum::Json(result)),
        Err(e) => {
            if e.is_client_error() {
                warn!("Rejected batch request: {}", e);
            }
            Err(e)
        }
    }
}

/// Create the router with docs mounted
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/model", get(get_model))
        .route("/translate", post(translate))
        .route("/translate/batch", post(translate_batch))
        .merge(docs::swagger_ui())
        .with_state(Arc::new(state))
}

/// Load the model, then run the HTTP server until Ctrl-C
pub async fn run_server(config: ServiceConfig) -> anyhow::Result<()> {
    // Fatal on failure: no listener is bound without a model
    let provider = Arc::new(RemoteProvider::load(&config).await?);

    let service = Arc::new(TranslationService::from_config(provider, &config));
    let app = build_router(AppState::new(service));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
