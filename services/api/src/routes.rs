use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use rehab_ai::envelope::ServiceResponse;
use rehab_ai::error::{AppError, INVALID_PAYLOAD_CODE};
use rehab_ai::workflows::eligibility::{
    self, screen_eligibility_payload, EligibilityScreeningResult,
};
use rehab_ai::workflows::matching::{self, find_matching_jobs_payload, Job, JobMatches};
use rehab_ai::workflows::pathway::{
    pathway_recommendations, PathwayProfile, PathwayRecommendations, Resource,
};
use rehab_ai::workflows::reporting::{
    export, export_report, generate_rsa911_report, ExportedReport, RSA911Report, ReportCase,
    ReportPeriod,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const REPORT_REQUEST_PREFIX: &str = "rsa911-report";
const PATHWAY_REQUEST_PREFIX: &str = "pathway";

type JsonBody = Result<Json<Value>, JsonRejection>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MatchJobsRequest {
    #[serde(default)]
    pub(crate) request: Value,
    #[serde(default)]
    pub(crate) jobs: Vec<Job>,
    #[serde(default)]
    pub(crate) min_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportRequest {
    #[serde(default)]
    pub(crate) cases: Vec<ReportCase>,
    pub(crate) period: ReportPeriod,
    pub(crate) agency_name: String,
    #[serde(default)]
    pub(crate) agency_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExportRequest {
    pub(crate) report: RSA911Report,
    pub(crate) format: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PathwayRequest {
    pub(crate) profile: PathwayProfile,
    #[serde(default)]
    pub(crate) resources: Vec<Resource>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/eligibility/screen", post(screen_endpoint))
        .route("/api/v1/jobs/match", post(match_endpoint))
        .route("/api/v1/reports/rsa911", post(report_endpoint))
        .route("/api/v1/reports/rsa911/export", post(export_endpoint))
        .route("/api/v1/pathway/recommendations", post(pathway_endpoint))
        .layer(Extension(state))
}

fn envelope<T: Serialize>(response: ServiceResponse<T>) -> (StatusCode, Json<ServiceResponse<T>>) {
    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(response))
}

/// Unwrap a JSON body, reporting unreadable or mistyped input under the
/// route's own error code.
fn read_body<T: DeserializeOwned>(
    body: JsonBody,
    prefix: &'static str,
    code: &'static str,
) -> Result<T, AppError> {
    let Json(value) =
        body.map_err(|rejection| AppError::rejected(prefix, code, rejection.body_text()))?;
    serde_json::from_value(value).map_err(|err| AppError::rejected(prefix, code, err.to_string()))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn screen_endpoint(
    body: JsonBody,
) -> Result<(StatusCode, Json<ServiceResponse<EligibilityScreeningResult>>), AppError> {
    let payload: Value = read_body(body, eligibility::REQUEST_PREFIX, eligibility::ERROR_CODE)?;
    Ok(envelope(screen_eligibility_payload(payload)))
}

pub(crate) async fn match_endpoint(
    Extension(state): Extension<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<ServiceResponse<JobMatches>>), AppError> {
    let body: MatchJobsRequest = read_body(body, matching::REQUEST_PREFIX, matching::ERROR_CODE)?;
    let min_score = body.min_score.unwrap_or(f64::from(state.min_score));
    Ok(envelope(find_matching_jobs_payload(
        body.request,
        &body.jobs,
        min_score,
    )))
}

pub(crate) async fn report_endpoint(
    Extension(state): Extension<AppState>,
    body: JsonBody,
) -> Result<Json<RSA911Report>, AppError> {
    let body: ReportRequest = read_body(body, REPORT_REQUEST_PREFIX, INVALID_PAYLOAD_CODE)?;
    let agency_code = body.agency_code.as_deref().unwrap_or(&state.agency_code);
    Ok(Json(generate_rsa911_report(
        &body.cases,
        body.period,
        &body.agency_name,
        Some(agency_code),
    )))
}

pub(crate) async fn export_endpoint(
    body: JsonBody,
) -> Result<(StatusCode, Json<ServiceResponse<ExportedReport>>), AppError> {
    let body: ExportRequest = read_body(body, export::REQUEST_PREFIX, export::ERROR_CODE)?;
    Ok(envelope(export_report(&body.report, &body.format)))
}

pub(crate) async fn pathway_endpoint(
    body: JsonBody,
) -> Result<Json<PathwayRecommendations>, AppError> {
    let body: PathwayRequest = read_body(body, PATHWAY_REQUEST_PREFIX, INVALID_PAYLOAD_CODE)?;
    Ok(Json(pathway_recommendations(&body.profile, &body.resources)))
}
