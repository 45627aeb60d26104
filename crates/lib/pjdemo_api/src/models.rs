//! Request and response bodies.
//!
//! Required fields are plain `String`s, so a missing or `null` value is
//! rejected before the handler runs.

use serde::{Deserialize, Serialize};

/// Body of `POST /get_user_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserNicknameRequest {
    pub nickname: String,
}

/// Body of `POST /get_user_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserIdRequest {
    pub user_id: String,
}

/// Body of `POST /generate_education_description`.
#[derive(Debug, Clone, Deserialize)]
pub struct EducationInfoRequest {
    pub college: String,
    pub major: String,
}

/// Body of `POST /summarize_recent_life_status`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostHistoryRequest {
    pub post_history: String,
}

/// Body of `POST /send_email`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailContentRequest {
    pub email: String,
    pub education_description: String,
    pub recent_life_status: String,
}

/// Body of `POST /get_weather`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherRequest {
    pub location: String,
    /// Defaults to `"now"` when absent or null.
    #[serde(default)]
    pub time: Option<String>,
}

/// Body of `POST /calculate`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationRequest {
    pub formula: String,
}

/// Body of `POST /pj1_report`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportRequest {
    /// Inference output of the PJ1 model. Absent or empty selects the mock report.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /calculate`.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    pub result: i64,
}

/// Response of `POST /pj1_report`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub result: String,
}

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
