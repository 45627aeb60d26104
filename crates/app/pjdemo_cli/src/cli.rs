use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pjdemo_core::completion::Backend;
use pjdemo_core::prompts::ReportModel;

#[derive(Parser, Debug)]
#[command(name = "pjdemo", about = "Generate PJ1 model effectiveness reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version.
    Version,
    /// Write a report from PJ1 inference output. Prints the mock report when no input is given.
    Report(ReportArgs),
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Backend that writes the report.
    #[arg(long, value_enum, default_value_t = ReportBackend::Deepseek)]
    pub backend: ReportBackend,

    /// Inference output, inline.
    #[arg(long, short, conflicts_with_all = ["file", "sample"])]
    pub message: Option<String>,

    /// Read the inference output from a file.
    #[arg(long, short, conflicts_with = "sample")]
    pub file: Option<PathBuf>,

    /// Use the built-in sample inference output.
    #[arg(long)]
    pub sample: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportBackend {
    /// gpt-4 via OpenAI.
    Gpt4,
    /// DeepSeek-R1 via SiliconFlow.
    Deepseek,
}

impl ReportBackend {
    pub fn backend(self) -> Backend {
        match self {
            ReportBackend::Gpt4 => Backend::OpenAi,
            ReportBackend::Deepseek => Backend::SiliconFlow,
        }
    }

    pub fn model(self) -> ReportModel {
        match self {
            ReportBackend::Gpt4 => ReportModel::Gpt4,
            ReportBackend::Deepseek => ReportModel::DeepSeekR1,
        }
    }
}
