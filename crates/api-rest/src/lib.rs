//! # API REST
//!
//! REST surface of the Empress RAG gateway.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS)
//!
//! Every POST endpoint validates its body, makes exactly one call into the
//! RAG pipeline collaborator, and reshapes the outcome into a response. Any
//! pipeline fault is caught at the endpoint boundary and mapped to a 500 with
//! an operation-specific detail message; faults never reach the transport
//! layer unguarded.

#![warn(rust_2018_idioms)]

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AffirmationReq, AffirmationRes, ApiInfoRes, DoctorMatchingReq, DoctorMatchingRes, ErrorDetail,
    HealthRes, HealthService, ProductRecommendationReq, ProductRecommendationRes, QaReq, QaRes,
};
use empress_core::{PipelineError, RagPipeline};

/// Application state shared across REST API handlers
///
/// Holds the RAG pipeline collaborator behind its trait object so tests can
/// substitute a stub without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<dyn RagPipeline>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Empress RAG API",
        description = "A RAG-based API for peri+menopausal healthcare Q&A, doctor matching, affirmations, and product recommendations",
        version = "1.0.0"
    ),
    paths(
        root,
        health,
        qa,
        doctor_matching,
        affirmations,
        product_recommendations
    ),
    components(schemas(
        ApiInfoRes,
        HealthRes,
        ErrorDetail,
        QaReq,
        QaRes,
        DoctorMatchingReq,
        DoctorMatchingRes,
        AffirmationReq,
        AffirmationRes,
        ProductRecommendationReq,
        ProductRecommendationRes,
    ))
)]
struct ApiDoc;

/// Builds the gateway router with all routes, CORS and Swagger UI attached.
///
/// The router is built once at startup and handed to the transport layer.
/// CORS mirrors any origin and allows all methods, headers and credentials;
/// an open posture suited to a public demo API.
pub fn router(pipeline: Arc<dyn RagPipeline>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/qa", post(qa))
        .route("/doctor-matching", post(doctor_matching))
        .route("/affirmations", post(affirmations))
        .route("/product-recommendations", post(product_recommendations))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::very_permissive())
        .with_state(AppState { pipeline })
}

/// Maps a pipeline fault to the uniform 500 error body.
fn pipeline_fault(prefix: &str, err: &PipelineError) -> (StatusCode, Json<ErrorDetail>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDetail {
            detail: format!("{prefix}{err}"),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API description", body = ApiInfoRes)
    )
)]
/// Root endpoint with API information
///
/// Returns a static description of the gateway: a welcome message and the
/// four domain endpoints with their one-line purposes.
#[axum::debug_handler]
async fn root(State(_state): State<AppState>) -> Json<ApiInfoRes> {
    let mut endpoints = BTreeMap::new();
    endpoints.insert(
        "/qa".to_string(),
        "Q&A Chatbot - answers questions based on the knowledge base".to_string(),
    );
    endpoints.insert(
        "/doctor-matching".to_string(),
        "Doctor Symptoms Matching - matches symptoms to doctors".to_string(),
    );
    endpoints.insert(
        "/affirmations".to_string(),
        "Affirmation Recommendation - suggests affirmations based on categories".to_string(),
    );
    endpoints.insert(
        "/product-recommendations".to_string(),
        "Product Recommendation - recommends products based on user input".to_string(),
    );

    Json(ApiInfoRes {
        message: "Welcome to the Empress RAG API".to_string(),
        endpoints,
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the gateway
///
/// Returns the current liveness status of the gateway process. Used for
/// monitoring and load balancer health checks; succeeds regardless of
/// pipeline state.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/qa",
    request_body = QaReq,
    responses(
        (status = 200, description = "Grounded answer", body = QaRes),
        (status = 500, description = "Pipeline fault", body = ErrorDetail)
    )
)]
/// Q&A chatbot endpoint
///
/// Answers the user's question from the knowledge base by delegating to the
/// pipeline's Q&A operation.
///
/// # Returns
/// * `Ok(Json<QaRes>)` - Answer plus the number of documents retrieved
/// * `Err((StatusCode, Json<ErrorDetail>))` - 500 on any pipeline fault
///
/// # Errors
/// Returns `500 Internal Server Error` if the pipeline call fails.
#[axum::debug_handler]
async fn qa(
    State(state): State<AppState>,
    Json(req): Json<QaReq>,
) -> Result<Json<QaRes>, (StatusCode, Json<ErrorDetail>)> {
    match state.pipeline.answer_query(&req.query) {
        Ok(outcome) => Ok(Json(QaRes {
            response: outcome.response,
            retrieved_documents_count: outcome.retrieved_documents.len(),
        })),
        Err(e) => {
            tracing::error!("Q&A pipeline error: {:?}", e);
            Err(pipeline_fault("Error processing Q&A request: ", &e))
        }
    }
}

#[utoipa::path(
    post,
    path = "/doctor-matching",
    request_body = DoctorMatchingReq,
    responses(
        (status = 200, description = "Doctor suggestions", body = DoctorMatchingRes),
        (status = 500, description = "Pipeline fault", body = ErrorDetail)
    )
)]
/// Doctor symptoms matching endpoint
///
/// Maps the patient's symptom description to suitable doctors by delegating
/// to the pipeline's doctor-matching operation.
///
/// # Errors
/// Returns `500 Internal Server Error` if the pipeline call fails.
#[axum::debug_handler]
async fn doctor_matching(
    State(state): State<AppState>,
    Json(req): Json<DoctorMatchingReq>,
) -> Result<Json<DoctorMatchingRes>, (StatusCode, Json<ErrorDetail>)> {
    match state.pipeline.match_doctor(&req.symptoms) {
        Ok(outcome) => Ok(Json(DoctorMatchingRes {
            response: outcome.response,
            retrieved_documents_count: outcome.retrieved_documents.len(),
        })),
        Err(e) => {
            tracing::error!("Doctor matching pipeline error: {:?}", e);
            Err(pipeline_fault(
                "Error processing doctor matching request: ",
                &e,
            ))
        }
    }
}

#[utoipa::path(
    post,
    path = "/affirmations",
    request_body = AffirmationReq,
    responses(
        (status = 200, description = "Affirmation suggestions", body = AffirmationRes),
        (status = 500, description = "Pipeline fault", body = ErrorDetail)
    )
)]
/// Affirmation recommendation endpoint
///
/// Suggests affirmations drawn from the chosen categories. The affirmation
/// list defaults to empty when the pipeline outcome carries none; how many
/// the pipeline returns is its own concern.
///
/// # Errors
/// Returns `500 Internal Server Error` if the pipeline call fails.
#[axum::debug_handler]
async fn affirmations(
    State(state): State<AppState>,
    Json(req): Json<AffirmationReq>,
) -> Result<Json<AffirmationRes>, (StatusCode, Json<ErrorDetail>)> {
    match state.pipeline.recommend_affirmations(&req.categories) {
        Ok(outcome) => Ok(Json(AffirmationRes {
            response: outcome.response,
            affirmations: outcome.affirmations.unwrap_or_default(),
            retrieved_documents_count: outcome.retrieved_documents.len(),
        })),
        Err(e) => {
            tracing::error!("Affirmation pipeline error: {:?}", e);
            Err(pipeline_fault("Error processing affirmation request: ", &e))
        }
    }
}

#[utoipa::path(
    post,
    path = "/product-recommendations",
    request_body = ProductRecommendationReq,
    responses(
        (status = 200, description = "Product suggestions", body = ProductRecommendationRes),
        (status = 500, description = "Pipeline fault", body = ErrorDetail)
    )
)]
/// Product recommendation endpoint
///
/// Recommends products relevant to the user's stated interests by querying
/// the knowledge base through the pipeline. The product list defaults to
/// empty when the pipeline outcome carries none.
///
/// # Errors
/// Returns `500 Internal Server Error` if the pipeline call fails.
#[axum::debug_handler]
async fn product_recommendations(
    State(state): State<AppState>,
    Json(req): Json<ProductRecommendationReq>,
) -> Result<Json<ProductRecommendationRes>, (StatusCode, Json<ErrorDetail>)> {
    match state.pipeline.recommend_products(&req.user_input) {
        Ok(outcome) => Ok(Json(ProductRecommendationRes {
            response: outcome.response,
            products: outcome.products.unwrap_or_default(),
            retrieved_documents_count: outcome.retrieved_documents.len(),
        })),
        Err(e) => {
            tracing::error!("Product recommendation pipeline error: {:?}", e);
            Err(pipeline_fault(
                "Error processing product recommendation request: ",
                &e,
            ))
        }
    }
}
