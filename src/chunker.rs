//! Groups consecutive messages into word-count-bounded chunks, each of which is
//! summarized with a single model call.

use crate::core::models::Message;

/// Number of whitespace-separated words in `text`.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Greedily pack message bodies into chunks of at most `max_word_count` words.
///
/// The cap is soft: a message that would overflow the current chunk starts the
/// next one, and a message that is longer than the cap on its own becomes a
/// chunk by itself rather than being split. Bodies are concatenated as-is and
/// every chunk is trimmed.
#[must_use]
pub fn chunk_messages(messages: &[Message], max_word_count: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current_chunk = String::new();
    let mut current_word_count = 0usize;

    for message in messages {
        let message_word_count = word_count(&message.body);

        if current_word_count + message_word_count > max_word_count && !current_chunk.is_empty() {
            chunks.push(current_chunk.trim().to_string());
            current_chunk.clear();
            current_word_count = 0;
        }

        current_chunk.push_str(&message.body);
        current_word_count += message_word_count;
    }

    if !current_chunk.is_empty() {
        chunks.push(current_chunk.trim().to_string());
    }

    chunks
}
