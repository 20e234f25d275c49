use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use super::summarize::summarize_messages;
use crate::ai::Completion;
use crate::chunker::chunk_messages;
use crate::core::config::AppConfig;
use crate::errors::SummarizerError;
use crate::transcript::parse_transcript;
use crate::utils::filters::{filter_messages_by_dates, parse_day_arg};

/// Inputs for one summarization run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub chat_export_file: PathBuf,
    pub summary_file: PathBuf,
    pub start_day: NaiveDate,
    pub end_day: NaiveDate,
    pub model: String,
}

impl RunRequest {
    /// Build a request from `DD/MM/YYYY` day arguments.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if either day is malformed.
    pub fn new(
        chat_export_file: impl Into<PathBuf>,
        summary_file: impl Into<PathBuf>,
        start_day: &str,
        end_day: &str,
        model: impl Into<String>,
    ) -> Result<Self, SummarizerError> {
        Ok(Self {
            chat_export_file: chat_export_file.into(),
            summary_file: summary_file.into(),
            start_day: parse_day_arg(start_day)?,
            end_day: parse_day_arg(end_day)?,
            model: model.into(),
        })
    }
}

/// Read the transcript, summarize the requested days and write the result to
/// `request.summary_file`. The output file is only touched once every chunk
/// has been summarized.
///
/// # Errors
///
/// Fails on unreadable input, a malformed timestamp, any model error, or an
/// unwritable output file.
pub async fn run(
    config: &AppConfig,
    llm: &dyn Completion,
    request: &RunRequest,
) -> Result<String, SummarizerError> {
    info!("Will run using model: {}", request.model);

    let tz = config.timezone()?;
    let content = tokio::fs::read_to_string(&request.chat_export_file)
        .await
        .map_err(|e| {
            SummarizerError::IoError(format!(
                "{}: {e}",
                request.chat_export_file.display()
            ))
        })?;

    let parsed = parse_transcript(&content, tz, config.summarizer.sender_fallback)?;
    let filtered = filter_messages_by_dates(&parsed, request.start_day, request.end_day);
    let chunks = chunk_messages(&filtered, config.summarizer.max_word_count);

    info!(
        "Parsed {} messages, {} between {} and {}, split into {} chunks",
        parsed.len(),
        filtered.len(),
        request.start_day,
        request.end_day,
        chunks.len()
    );

    let summary = summarize_messages(llm, &config.openai.prompt, &chunks, &request.model).await?;

    info!("\n{}\nSummary:\n{}", "*".repeat(10), "*".repeat(10));
    info!("{}", summary);

    tokio::fs::write(&request.summary_file, &summary)
        .await
        .map_err(|e| {
            SummarizerError::IoError(format!("{}: {e}", request.summary_file.display()))
        })?;
    info!("Summary written to {}", request.summary_file.display());

    Ok(summary)
}
