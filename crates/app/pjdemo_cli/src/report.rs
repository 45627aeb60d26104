use pjdemo_core::completion::{OpenAiCompatibleClient, ProviderConfig};
use pjdemo_core::fixtures::{MOCK_PJ1_REPORT, SAMPLE_INFERENCE_MESSAGE};
use pjdemo_core::report::generate_pj1_report;

use crate::Result;
use crate::cli::ReportArgs;

/// Inference output selected on the command line, if any.
fn resolve_message(args: &ReportArgs) -> Result<Option<String>> {
    if args.sample {
        return Ok(Some(SAMPLE_INFERENCE_MESSAGE.to_string()));
    }
    if let Some(path) = &args.file {
        log::debug!("reading inference output from {}", path.display());
        return Ok(Some(std::fs::read_to_string(path)?));
    }
    Ok(args.message.clone())
}

pub fn run(args: &ReportArgs) -> Result<String> {
    let Some(message) = resolve_message(args)?.filter(|m| !m.is_empty()) else {
        log::info!("no inference output given, printing mock report");
        return Ok(MOCK_PJ1_REPORT.to_string());
    };

    let config = ProviderConfig::from_env(args.backend.backend())?;
    log::info!(
        "generating report with {:?} via {}",
        args.backend,
        config.backend
    );
    let client = OpenAiCompatibleClient::new(config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(generate_pj1_report(
        &client,
        args.backend.model(),
        Some(&message),
    ))?;
    Ok(report)
}
