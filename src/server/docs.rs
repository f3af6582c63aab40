//! OpenAPI document and Swagger UI

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::models::{
    BatchRequest, BatchResult, HealthStatus, ModelInfo, ServiceInfo, TranslationRequest,
    TranslationResult,
};
use crate::server::api::{self, ErrorDetail, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Japanese to English Translator API",
        version = "1.0.0",
        description = "Translates Japanese text to English using Helsinki-NLP/opus-mt-ja-en"
    ),
    paths(
        api::root,
        api::health_check,
        api::get_model,
        api::translate,
        api::translate_batch
    ),
    components(schemas(
        TranslationRequest,
        TranslationResult,
        BatchRequest,
        BatchResult,
        ServiceInfo,
        HealthStatus,
        ModelInfo,
        ErrorResponse,
        ErrorDetail
    ))
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, backed by `/openapi.json`
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_info() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Japanese to English Translator API");
        assert_eq!(doc.info.version, "1.0.0");
        assert!(doc.paths.paths.contains_key("/translate/batch"));
    }
}
