//! Stub endpoints — log and return fixed values.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use pjdemo_core::stubs::{self, DEFAULT_WEATHER_TIME, WeatherReport};

use crate::error::AppResult;
use crate::models::{CalculationRequest, CalculationResponse, EmailContentRequest, WeatherRequest};

/// `POST /send_email` — returns `Sent!`.
pub async fn send_email_handler(
    payload: Result<Json<EmailContentRequest>, JsonRejection>,
) -> AppResult<&'static str> {
    let Json(body) = payload?;
    Ok(stubs::send_email(
        &body.email,
        &body.education_description,
        &body.recent_life_status,
    ))
}

/// `POST /get_weather` — echoes the input with temperature `"25"`.
pub async fn get_weather_handler(
    payload: Result<Json<WeatherRequest>, JsonRejection>,
) -> AppResult<Json<WeatherReport>> {
    let Json(body) = payload?;
    let time = body.time.as_deref().unwrap_or(DEFAULT_WEATHER_TIME);
    Ok(Json(stubs::weather(&body.location, time)))
}

/// `POST /calculate` — always `{"result": 1}`.
pub async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> AppResult<Json<CalculationResponse>> {
    let Json(body) = payload?;
    Ok(Json(CalculationResponse {
        result: stubs::calculate(&body.formula),
    }))
}

/// `POST /exit_script` — returns `Exited`; takes no body.
pub async fn exit_script_handler() -> &'static str {
    stubs::exit_script()
}
