//! # pjdemo_core
//!
//! Core domain logic for pjdemo: mock fixtures, prompt templates, the
//! chat-completion adapter and the inert stub capabilities.

pub mod completion;
pub mod fixtures;
pub mod prompts;
pub mod report;
pub mod stubs;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
