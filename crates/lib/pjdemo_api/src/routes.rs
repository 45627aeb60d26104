//! Route path constants.

/// Namespace under which every endpoint is also mounted.
pub const API_PREFIX: &str = "/api";

/// POST /get_user_id — user id for a nickname.
pub const POST_GET_USER_ID: &str = "/get_user_id";

/// POST /get_user_info — profile for a user id.
pub const POST_GET_USER_INFO: &str = "/get_user_info";

/// POST /generate_education_description — LLM introduction of a college and major.
pub const POST_GENERATE_EDUCATION_DESCRIPTION: &str = "/generate_education_description";

/// POST /summarize_recent_life_status — LLM summary of a post history.
pub const POST_SUMMARIZE_RECENT_LIFE_STATUS: &str = "/summarize_recent_life_status";

/// POST /send_email — stub, logs and acknowledges.
pub const POST_SEND_EMAIL: &str = "/send_email";

/// POST /get_weather — stub, fixed temperature.
pub const POST_GET_WEATHER: &str = "/get_weather";

/// POST /calculate — stub, fixed result.
pub const POST_CALCULATE: &str = "/calculate";

/// POST /pj1_report — PJ1 model report, mock when no message.
pub const POST_PJ1_REPORT: &str = "/pj1_report";

/// POST /exit_script — stub, acknowledges.
pub const POST_EXIT_SCRIPT: &str = "/exit_script";

/// GET /openapi.json — OpenAPI document.
pub const GET_OPENAPI_JSON: &str = "/openapi.json";
