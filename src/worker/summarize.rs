use tracing::debug;

use crate::ai::{Completion, build_chunk_prompt};
use crate::errors::SummarizerError;

/// Separator written after every chunk summary.
pub const SUMMARY_SEPARATOR: &str = "\n\n";

/// Summarize each chunk with one model call, strictly in order.
///
/// The first failing call aborts the whole run; summaries gathered so far are
/// dropped.
///
/// # Errors
///
/// Propagates any error returned by `llm`.
pub async fn summarize_chunks(
    llm: &dyn Completion,
    instruction: &str,
    chunks: &[String],
    model: &str,
) -> Result<Vec<String>, SummarizerError> {
    let mut summaries = Vec::with_capacity(chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        debug!(
            "Sending prompt {} out of {} to {}! Chunk size: {} chars",
            i + 1,
            chunks.len(),
            model,
            chunk.chars().count()
        );

        let prompt = build_chunk_prompt(instruction, chunk);
        let response = llm.complete(model, &prompt).await?;

        debug!("Response:\n{}\n", response);
        summaries.push(response);
    }

    Ok(summaries)
}

/// Join chunk summaries in order, each followed by a blank line.
#[must_use]
pub fn join_summaries(summaries: &[String]) -> String {
    summaries
        .iter()
        .map(|s| format!("{s}{SUMMARY_SEPARATOR}"))
        .collect()
}

/// Summarize all chunks and join the results into the final summary.
///
/// # Errors
///
/// Propagates any error returned by `llm`.
pub async fn summarize_messages(
    llm: &dyn Completion,
    instruction: &str,
    chunks: &[String],
    model: &str,
) -> Result<String, SummarizerError> {
    let summaries = summarize_chunks(llm, instruction, chunks, model).await?;
    Ok(join_summaries(&summaries))
}
