//! LLM-backed generation endpoints.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use pjdemo_core::prompts::{self, ReportModel};
use pjdemo_core::report;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{EducationInfoRequest, PostHistoryRequest, ReportRequest, ReportResponse};

/// `POST /generate_education_description` — plain-text introduction.
pub async fn education_description_handler(
    State(state): State<AppState>,
    payload: Result<Json<EducationInfoRequest>, JsonRejection>,
) -> AppResult<String> {
    let Json(body) = payload?;
    let request = prompts::education_description(&body.college, &body.major);
    Ok(state.generator.generate(&request).await?)
}

/// `POST /summarize_recent_life_status` — plain-text summary.
pub async fn life_status_handler(
    State(state): State<AppState>,
    payload: Result<Json<PostHistoryRequest>, JsonRejection>,
) -> AppResult<String> {
    let Json(body) = payload?;
    let request = prompts::life_status_summary(&body.post_history);
    Ok(state.generator.generate(&request).await?)
}

/// `POST /pj1_report` — `{"result": <report>}`; the mock report when no
/// message is given.
pub async fn pj1_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> AppResult<Json<ReportResponse>> {
    let Json(body) = payload?;
    let result = report::generate_pj1_report(
        state.generator.as_ref(),
        ReportModel::Gpt4,
        body.message.as_deref(),
    )
    .await?;
    Ok(Json(ReportResponse { result }))
}
