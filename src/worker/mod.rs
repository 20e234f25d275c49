//! Summarization run: orchestration of model calls and the end-to-end pipeline

pub mod pipeline;
pub mod summarize;

pub use pipeline::{RunRequest, run};
pub use summarize::{join_summaries, summarize_chunks, summarize_messages};
