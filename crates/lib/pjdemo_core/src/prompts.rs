//! Prompt templates.
//!
//! Each task has a fixed system message, model and length limit. Output is
//! always Chinese, a single block of text, with no greeting, signature or
//! explanation.

use crate::completion::{ChatMessage, CompletionRequest, SamplingParams};

/// Sampling temperature shared by every task.
pub const TEMPERATURE: f32 = 0.7;

/// Model for the short descriptive tasks.
pub const SHORT_TASK_MODEL: &str = "gpt-3.5-turbo";
pub const SHORT_TASK_MAX_TOKENS: u32 = 512;

pub const REPORT_GPT4_MODEL: &str = "gpt-4";
pub const REPORT_GPT4_MAX_TOKENS: u32 = 5120;

pub const REPORT_DEEPSEEK_MODEL: &str = "deepseek-ai/DeepSeek-R1";
pub const REPORT_DEEPSEEK_MAX_TOKENS: u32 = 6400;

const EDUCATION_SYSTEM: &str = "你是一个专业的院校与专业介绍分析师。\
请撰写一段邮件内容，介绍给定的院校与专业。你的回答只需要包含一段话，\
不要包含称谓、落款、日期等任何信息，不要进行任何解释。你必须用中文进行交互";

const LIFE_STATUS_SYSTEM: &str = "你是一个专业的用户分析师，擅长根据用户发帖记录总结用户近期生活状态，\
并撰写一段邮件内容。你的回答只需要包含一段话，\
不要包含称谓、落款、日期等任何信息，不要进行任何解释。用“你”作为开头。你必须用中文进行交互";

const REPORT_SYSTEM: &str = "你是一个专业的报告生成器。\
请撰写报告，总结给定模型的推理结果。你的回答应尽可能详尽，且确保专业\
不要包含称谓、落款、日期等任何信息，不要进行任何解释。你必须用中文进行交互";

const REPORT_PREAMBLE: &str = "你是一个专业的报告生成器，下面是跨境贸易支付监测课题一算法模型（基于图神经网络）在数据集上的推理结果，\
请根据给定的输入生成专业的模型效果报告。你的报告应尽可能详细，不要包含任何称谓、落款、日期等任何信息，\
不要进行任何解释。你必须用中文进行交互：";

/// Which backend/model writes the PJ1 report. Chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportModel {
    /// `gpt-4` on OpenAI, system + user messages.
    Gpt4,
    /// `DeepSeek-R1` on SiliconFlow, a single user message.
    DeepSeekR1,
}

/// Introduction of a college and major.
pub fn education_description(college: &str, major: &str) -> CompletionRequest {
    let prompt = format!("根据给定的学校名称与专业名称生成对该院校与专业的介绍：\n{college} {major}\n");
    short_task(EDUCATION_SYSTEM, prompt)
}

/// Summary of a user's recent life from their post history.
pub fn life_status_summary(post_history: &str) -> CompletionRequest {
    let prompt = format!("根据以下用户帖子历史，总结用户的近期生活状态：\n{post_history}\n");
    short_task(LIFE_STATUS_SYSTEM, prompt)
}

/// Effectiveness report for the PJ1 graph model; `message` is its inference
/// output and is embedded verbatim.
pub fn pj1_report(message: &str, model: ReportModel) -> CompletionRequest {
    let prompt = format!("{REPORT_PREAMBLE}\n{message}\n");
    match model {
        ReportModel::Gpt4 => CompletionRequest {
            model: REPORT_GPT4_MODEL.to_string(),
            messages: vec![ChatMessage::system(REPORT_SYSTEM), ChatMessage::user(prompt)],
            params: SamplingParams::new(REPORT_GPT4_MAX_TOKENS, TEMPERATURE),
        },
        // R1 is a reasoning model; the instructions travel in the user turn.
        ReportModel::DeepSeekR1 => CompletionRequest {
            model: REPORT_DEEPSEEK_MODEL.to_string(),
            messages: vec![ChatMessage::user(format!("{prompt}\n"))],
            params: SamplingParams {
                top_p: Some(0.7),
                top_k: Some(50),
                frequency_penalty: Some(0.5),
                stop: Some(vec!["null".to_string()]),
                text_response_format: true,
                ..SamplingParams::new(REPORT_DEEPSEEK_MAX_TOKENS, TEMPERATURE)
            },
        },
    }
}

fn short_task(system: &str, prompt: String) -> CompletionRequest {
    CompletionRequest {
        model: SHORT_TASK_MODEL.to_string(),
        messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
        params: SamplingParams::new(SHORT_TASK_MAX_TOKENS, TEMPERATURE),
    }
}
