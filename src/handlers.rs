use crate::config::Config;
use crate::course::{course_info, CourseInfo};
use crate::db_storage::LeadStore;
use crate::errors::{AppError, ResultExt};
use crate::models::*;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lead and analytics storage. Opened at startup, closed on shutdown.
    pub store: Arc<dyn LeadStore>,
    /// Reject capture requests whose email is not `local@domain.tld`.
    pub strict_email_validation: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn LeadStore>, config: &Config) -> Self {
        Self {
            store,
            strict_email_validation: config.strict_email_validation,
        }
    }
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /api/
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: API_ONLINE_MESSAGE.to_string(),
    })
}

/// GET /api/course/info
///
/// Returns the static landing-page document. No storage access.
pub async fn get_course_info() -> Json<&'static CourseInfo> {
    Json(course_info())
}

/// POST /api/leads/capture (also POST /api/leads)
///
/// Validates the form, assigns a fresh identity and stores the lead with
/// status `new`. Identical submissions create distinct leads.
///
/// # Returns
///
/// * `Result<Json<CaptureLeadResponse>, AppError>` - The new lead id, or an
///   `IngestionFailure` carrying the storage error.
pub async fn capture_lead(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadCreate>, JsonRejection>,
) -> Result<Json<CaptureLeadResponse>, AppError> {
    let Json(input) = payload?;
    input.validate(state.strict_email_validation)?;

    let lead = Lead::from_capture(input, Utc::now());
    state
        .store
        .insert_lead(&lead)
        .await
        .ingestion_failure("Erro ao capturar lead")?;

    tracing::info!("Lead captured: id={}, source={}", lead.id, lead.source);

    Ok(Json(CaptureLeadResponse {
        success: true,
        lead_id: lead.id,
        message: LEAD_CAPTURED_MESSAGE.to_string(),
    }))
}

/// GET /api/leads
///
/// Returns up to 100 leads in storage order.
pub async fn list_leads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StoredLead>>, AppError> {
    let leads = state
        .store
        .list_leads(LEAD_LIST_LIMIT)
        .await
        .retrieval_failure("Erro ao buscar leads")?;

    tracing::debug!("Listing {} lead(s)", leads.len());
    Ok(Json(leads))
}

/// POST /api/checkout/create
///
/// Placeholder until a payment provider is wired in: always succeeds with a
/// mock checkout URL and a fresh payment id. The body is accepted but unused.
pub async fn create_checkout(
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let Json(body) = payload?;
    let response = CheckoutResponse::mock();

    tracing::info!(
        "Mock checkout created: payment_id={}, {} field(s) ignored",
        response.payment_id,
        body.len()
    );

    Ok(Json(response))
}

/// POST /api/analytics/event
///
/// Stores any JSON object after stamping the receipt time under `timestamp`.
pub async fn track_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Json(fields) = payload?;
    let event = AnalyticsEvent::new(fields, Utc::now());

    state
        .store
        .insert_event(&event)
        .await
        .ingestion_failure("Erro ao rastrear evento")?;

    tracing::debug!("Analytics event stored at {}", event.received_at());
    Ok(Json(SuccessResponse { success: true }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
