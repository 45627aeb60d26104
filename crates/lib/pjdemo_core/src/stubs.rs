//! Inert stand-in capabilities.
//!
//! Nothing here sends mail, evaluates formulas, looks up weather or stops a
//! process. Each function logs its inputs and returns a fixed value.

use serde::Serialize;
use tracing::info;

pub const EMAIL_ACK: &str = "Sent!";
pub const EXIT_ACK: &str = "Exited";
pub const MOCK_TEMPERATURE: &str = "25";
pub const MOCK_CALCULATION_RESULT: i64 = 1;
pub const DEFAULT_WEATHER_TIME: &str = "now";

/// Mock weather observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature: String,
    pub time: String,
}

/// Pretend to send an email. Logs the content and acknowledges.
pub fn send_email(email: &str, education_description: &str, recent_life_status: &str) -> &'static str {
    info!(%email, "sending email");
    info!(%education_description, "education description");
    info!(%recent_life_status, "recent life status");
    EMAIL_ACK
}

/// Echo the location and time with a fixed temperature.
pub fn weather(location: &str, time: &str) -> WeatherReport {
    WeatherReport {
        location: location.to_string(),
        temperature: MOCK_TEMPERATURE.to_string(),
        time: time.to_string(),
    }
}

/// Pretend to evaluate `formula`. Always yields [`MOCK_CALCULATION_RESULT`].
pub fn calculate(formula: &str) -> i64 {
    info!(%formula, result = MOCK_CALCULATION_RESULT, "calculating");
    MOCK_CALCULATION_RESULT
}

/// Pretend to end the interactive script. The process keeps running.
pub fn exit_script() -> &'static str {
    info!("exiting script");
    EXIT_ACK
}
