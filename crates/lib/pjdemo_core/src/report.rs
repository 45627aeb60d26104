//! PJ1 report generation with the mock fallback.

use tracing::info;

use crate::completion::{CompletionError, TextGenerator};
use crate::fixtures::MOCK_PJ1_REPORT;
use crate::prompts::{self, ReportModel};

/// Generate the PJ1 model effectiveness report.
///
/// With no message (absent or empty) the fixed mock report is returned and
/// `generator` is never called. Otherwise exactly one completion is
/// requested from `generator` using the template for `model`.
pub async fn generate_pj1_report(
    generator: &dyn TextGenerator,
    model: ReportModel,
    message: Option<&str>,
) -> Result<String, CompletionError> {
    let Some(message) = message.filter(|m| !m.is_empty()) else {
        info!("no inference output supplied, returning mock report");
        return Ok(MOCK_PJ1_REPORT.to_string());
    };

    let request = prompts::pj1_report(message, model);
    info!(model = %request.model, input_chars = message.chars().count(), "generating PJ1 report");
    generator.generate(&request).await
}
